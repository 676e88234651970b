/// pointcube - rotating point-cloud cube in the terminal
///
/// Controls:
///   - Left mouse drag: pitch (vertical) and yaw (horizontal)
///   - Q/ESC/Ctrl-C: Quit
use anyhow::Context;
use clap::Parser;
use pointcube_terminal::{Cli, TerminalApp};
use std::fs::File;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let config = cli
        .renderer_config()
        .context("invalid renderer configuration")?;
    tracing::info!(?config, "starting");

    let mut app = TerminalApp::new(config, !cli.no_hud).context("failed to query terminal size")?;
    app.run().context("terminal renderer failed")?;

    Ok(())
}

/// Logs go to a file when one is given; the alternate screen owns the terminal.
fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    let default = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(())
}
