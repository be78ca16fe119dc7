mod enablement;
mod presenter;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use cmdhint_index::{load_catalog, load_or_default};
use cmdhint_match::{DistanceError, resolve};
use enablement::FsEnablementProbe;
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// Wrong arguments; nothing was computed.
const EXIT_USAGE: u8 = 1;
/// Distance-table exhaustion propagated from the matching core.
const EXIT_RESOURCE: u8 = 2;
/// Index or configuration load failure.
const EXIT_LOAD: u8 = 3;
/// Normal completion after printing a message (shell convention).
const EXIT_NOT_FOUND: u8 = 127;

#[derive(Debug, Parser)]
#[command(
    name = "command-not-found",
    version,
    about = "Suggest installable packages for an unrecognized shell command."
)]
struct Cli {
    /// The command that was not found.
    command: String,

    /// Path to a cmdhint.toml configuration file.
    #[arg(long)]
    config: Option<Utf8PathBuf>,

    /// Directory containing the per-channel index files (overrides config).
    #[arg(long)]
    index_dir: Option<Utf8PathBuf>,

    /// Directory probed for <tag>.list repository markers (overrides config).
    #[arg(long)]
    sources_dir: Option<Utf8PathBuf>,

    /// Output format (text, json). Text goes to stderr, json to stdout.
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    ExitCode::SUCCESS
                }
                // clap's own exit code is 2; the documented usage-error code is 1.
                _ => ExitCode::from(EXIT_USAGE),
            };
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::from(EXIT_NOT_FOUND),
        Err(e) => {
            error!("{:?}", e);
            if e.downcast_ref::<DistanceError>().is_some() {
                ExitCode::from(EXIT_RESOURCE)
            } else {
                ExitCode::from(EXIT_LOAD)
            }
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_or_default(cli.config.as_deref()).context("load cmdhint configuration")?;
    let index_dir = cli.index_dir.unwrap_or(config.paths.index_dir);
    let sources_dir = cli.sources_dir.unwrap_or(config.paths.sources_dir);

    let indexes = load_catalog(&index_dir, &config.channels)
        .with_context(|| format!("load command indexes from {index_dir}"))?;

    let resolution = resolve(&cli.command, &indexes)?;
    debug!(
        best = ?resolution.best_distance,
        candidates = resolution.candidates.len(),
        "resolved query"
    );

    let probe = FsEnablementProbe::new(sources_dir);
    match cli.format {
        OutputFormat::Text => {
            eprint!("{}", presenter::render_text(&cli.command, &resolution, &probe));
        }
        OutputFormat::Json => {
            println!("{}", presenter::render_json(&cli.command, &resolution, &probe)?);
        }
    }
    Ok(())
}
