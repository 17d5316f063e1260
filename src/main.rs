use anyhow::{Context, Result};
use artisan::SpecParser;
use clap::Parser;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Render a component tree description as indented template text
#[derive(Parser, Debug)]
#[command(name = "artisan", version, about)]
struct Cli {
    /// JSON tree description; reads stdin when absent or "-"
    input: Option<PathBuf>,

    /// Write the rendering to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // RUST_LOG takes precedence over the -d flags
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.debug);
    debug!(?cli, "parsed arguments");

    let parser = SpecParser;
    let spec = match cli.input.as_deref() {
        Some(path) if path.as_os_str() != "-" => parser.from_path(path)?,
        _ => parser
            .from_reader(io::stdin().lock())
            .context("Failed to read tree description from stdin")?,
    };

    let root = parser.build(&spec);
    let output = root.render();

    match &cli.output {
        Some(path) => {
            fs::write(path, format!("{}\n", output))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), "rendering written");
        }
        None => println!("{}", output),
    }

    Ok(())
}
