use clap::Parser;
use itemview::app::App;
use itemview::config::AppConfig;
use itemview::{logging, Result};
use std::path::PathBuf;

/// Multi-column list browser for the terminal
#[derive(Debug, Parser)]
#[command(name = "itemview", version, about)]
struct Cli {
    /// Read settings from this file instead of the standard location
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Reopen the list windows saved on the previous exit
    #[arg(long)]
    restore: bool,

    /// Save open list windows on exit
    #[arg(long)]
    save: bool,

    /// Tracing filter, e.g. "itemview=debug"
    #[arg(long)]
    log_filter: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    if cli.restore {
        config = config.with_restore_layout(true);
    }
    if cli.save {
        config = config.with_save_layout(true);
    }
    if let Some(filter) = cli.log_filter {
        config = config.with_log_filter(filter);
    }
    config.validate()?;

    let _logging = logging::init(&config.log_filter);

    let mut app = App::new(config)?;
    app.init()?;
    let result = app.run();
    let shutdown = app.shutdown();
    if let Err(e) = &result {
        tracing::error!(error = %e, "application loop failed");
    }
    result.and(shutdown)
}
