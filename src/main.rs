use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tiledit::config::{Config, ConfigError};
use tiledit::logging;
use tiledit::shutdown::ShutdownHandle;
use tiledit::ui::runtime;

#[derive(Parser, Debug)]
#[command(name = "tiledit", version, about = "Pixel-art tile editor with a live hex dump")]
struct Cli {
    /// Config file (default: <config dir>/tiledit/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Starting brush color, 0-15
    #[arg(long, value_name = "N")]
    brush: Option<u8>,

    /// Color every canvas pixel starts with, 0-15
    #[arg(long, value_name = "N")]
    fill: Option<u8>,

    /// Redraw loop frequency in frames per second
    #[arg(long, value_name = "N")]
    fps: Option<u32>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    log: Option<PathBuf>,

    /// Validate the configuration, print it as TOML and exit
    #[arg(long)]
    check_config: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    if cli.check_config {
        print!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    let log_path = logging::log_path(cli.log.as_deref(), &config.logging);
    logging::init_tracing(log_path.as_deref(), &config.logging);

    let shutdown = ShutdownHandle::new();
    shutdown
        .install_signal_handlers()
        .context("failed to install signal handlers")?;

    runtime::run(&config, shutdown).context("terminal session failed")?;
    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(brush) = cli.brush {
        config.editor.brush_color = brush;
    }
    if let Some(fill) = cli.fill {
        config.editor.fill_color = fill;
    }
    if let Some(fps) = cli.fps {
        config.display.frame_rate = fps;
    }

    config.validate()?;
    Ok(config)
}
