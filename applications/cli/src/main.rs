/// Highspot - apply a batch of playlist changes to a music library
use clap::Parser;
use highspot::{config::HighspotConfig, driver};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "highspot")]
#[command(about = "Apply a change set to a music-library JSON document", long_about = None)]
struct Cli {
    /// Library document to read
    input: PathBuf,

    /// Change set to apply
    changes: PathBuf,

    /// Where to write the updated library
    output: PathBuf,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = HighspotConfig::load(cli.config.as_deref())?;
    config.validate()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!(
        input = %cli.input.display(),
        changes = %cli.changes.display(),
        output = %cli.output.display(),
        "Starting run"
    );

    let outcome = driver::run(&cli.input, &cli.changes, &cli.output, &config)?;
    if let driver::Outcome::Rejected(err) = &outcome {
        eprintln!("highspot: {}", err);
    }

    Ok(outcome.exit_code())
}
