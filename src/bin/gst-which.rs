use anyhow::{Context, Result};
use gst_which::cli::{self, Command};
use gst_which::config::Config;
use gst_which::render::Terminal;
use gst_which::{PluginSource, RegistrySnapshot};
use std::io::{self, IsTerminal};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = match cli::parse_args(std::env::args().skip(1)) {
        Command::Query(options) => options,
        Command::Help => {
            print!("{}", cli::usage());
            return Ok(());
        }
    };

    let stdout = io::stdout();
    let config = Config::from_env(stdout.is_terminal());
    init_tracing(&config.log_filter);

    let source = open_source(&config)?;
    let mut terminal = Terminal::new(stdout.lock(), options.verbose, config.color);
    cli::execute(source.as_ref(), &options, &mut terminal).context("failed to write output")
}

fn open_source(config: &Config) -> Result<Box<dyn PluginSource>> {
    if let Some(path) = &config.snapshot {
        tracing::debug!(path = %path.display(), "using registry snapshot");
        let snapshot = RegistrySnapshot::load(path)?;
        return Ok(Box::new(snapshot.into_source()));
    }
    live_registry()
}

#[cfg(feature = "gstreamer")]
fn live_registry() -> Result<Box<dyn PluginSource>> {
    let source = gst_which::GstRegistrySource::init()?;
    Ok(Box::new(source))
}

#[cfg(not(feature = "gstreamer"))]
fn live_registry() -> Result<Box<dyn PluginSource>> {
    Err(gst_which::Error::NoSource.into())
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
