//! One-shot read, transform, write
//!
//! Handles the file boundary around the core pipeline: zero-byte inputs,
//! validation failures and the final write.

use crate::config::{EmptyChangesPolicy, HighspotConfig};
use crate::error::Result;
use highspot_core::{
    apply_changes, load_document, save_document, ChangeSet, DocumentKind, HighspotError,
    LibraryDocument,
};
use std::fs;
use std::path::Path;
use std::process::ExitCode;

/// How a run ended, short of an I/O, parse or config failure
#[derive(Debug)]
pub enum Outcome {
    /// Updated library written to the output path
    Written,
    /// Changes file was empty; handled per [`EmptyChangesPolicy`]
    EmptyChanges,
    /// Source file was empty; copied through to the output path
    EmptySource,
    /// Validation failed; output path not written
    Rejected(HighspotError),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Written | Outcome::EmptyChanges)
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Apply the changes at `changes` to the library at `input`, writing `output`
pub fn run(input: &Path, changes: &Path, output: &Path, config: &HighspotConfig) -> Result<Outcome> {
    let document: LibraryDocument = match load_document(input, DocumentKind::Source) {
        Ok(document) => document,
        Err(HighspotError::EmptySource(path)) => {
            tracing::error!(path = %path.display(), "Source file is empty, copying it to output");
            fs::copy(input, output)?;
            return Ok(Outcome::EmptySource);
        }
        Err(err) => return Err(err.into()),
    };

    let change_set: ChangeSet = match load_document(changes, DocumentKind::Changes) {
        Ok(change_set) => change_set,
        Err(HighspotError::EmptyChanges(path)) => {
            match config.output.empty_changes {
                EmptyChangesPolicy::CopyThrough => {
                    tracing::warn!(path = %path.display(), "Changes file is empty, copying source to output");
                    fs::copy(input, output)?;
                }
                EmptyChangesPolicy::SkipWrite => {
                    tracing::warn!(path = %path.display(), "Changes file is empty, nothing written");
                }
            }
            return Ok(Outcome::EmptyChanges);
        }
        Err(err) => return Err(err.into()),
    };

    match apply_changes(&document, &change_set, &config.change_options()) {
        Ok(updated) => {
            save_document(output, &updated)?;
            tracing::info!(
                output = %output.display(),
                playlists = updated.playlists().len(),
                "Wrote updated library"
            );
            Ok(Outcome::Written)
        }
        Err(err) if err.is_validation() => {
            tracing::error!("Change set rejected: {}", err);
            Ok(Outcome::Rejected(err))
        }
        Err(err) => Err(err.into()),
    }
}
