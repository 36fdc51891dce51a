/// CLI configuration
use crate::error::{CliError, Result};
use highspot_core::{ChangeOptions, RemovePolicy};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HighspotConfig {
    #[serde(default = "default_changes")]
    pub changes: ChangeSettings,

    #[serde(default = "default_output")]
    pub output: OutputSettings,

    #[serde(default = "default_logging")]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChangeSettings {
    #[serde(default)]
    pub remove_policy: RemovePolicy,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub empty_changes: EmptyChangesPolicy,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingSettings {
    #[serde(default = "default_filter")]
    pub filter: String,
}

/// What to write when the changes file is zero bytes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyChangesPolicy {
    /// Copy the source file to the output path unchanged
    #[default]
    CopyThrough,
    /// Leave the output path alone
    SkipWrite,
}

impl HighspotConfig {
    /// Load configuration from file and environment
    ///
    /// `path` must exist when given; otherwise `highspot.toml` in the working
    /// directory is used if present. `HIGHSPOT_` variables override both,
    /// e.g. `HIGHSPOT_OUTPUT__EMPTY_CHANGES=skip_write`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from("highspot.toml");
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("HIGHSPOT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.logging.filter.trim().is_empty() {
            return Err(CliError::Config(
                "logging filter must not be empty (set HIGHSPOT_LOGGING__FILTER)".to_string(),
            ));
        }

        Ok(())
    }

    /// Pipeline options derived from the `[changes]` table
    pub fn change_options(&self) -> ChangeOptions {
        ChangeOptions {
            remove_policy: self.changes.remove_policy,
        }
    }
}

// Default values
fn default_changes() -> ChangeSettings {
    ChangeSettings {
        remove_policy: RemovePolicy::default(),
    }
}

fn default_output() -> OutputSettings {
    OutputSettings {
        empty_changes: EmptyChangesPolicy::default(),
    }
}

fn default_logging() -> LoggingSettings {
    LoggingSettings {
        filter: default_filter(),
    }
}

fn default_filter() -> String {
    "highspot=info,highspot_core=info".to_string()
}

impl Default for HighspotConfig {
    fn default() -> Self {
        Self {
            changes: default_changes(),
            output: default_output(),
            logging: default_logging(),
        }
    }
}
