//! Terminal UI for the folio portfolio: one screen with a hero banner,
//! About / Projects / Contact sections, and the filterable project
//! gallery.

mod app;
mod app_event;
mod app_event_sender;
pub mod cli;
mod colors;
mod footer;
mod key_hint;
mod project_card;
mod projects_panel;
mod sections;
mod tui;

use anyhow::Context;
use anyhow::Result;
use anyhow::anyhow;
use folio_core::Catalog;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub use cli::Cli;

pub fn run_main(cli: Cli) -> Result<()> {
    color_eyre::install().map_err(|err| anyhow!("failed to install error hooks: {err}"))?;
    let _log_guard = init_file_logging(cli.debug)?;

    let catalog = match &cli.catalog {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("failed to load catalog from {}", path.display()))?,
        None => Catalog::builtin(),
    };

    let mut terminal = tui::init()?;
    let app_result = app::App::new(catalog).run(&mut terminal);
    tui::restore()?;
    app_result
}

/// The TUI owns the terminal, so diagnostics go to a file under the
/// user's data directory instead of stdout/stderr.
fn init_file_logging(debug: bool) -> Result<WorkerGuard> {
    let default_level = if debug {
        "folio_core=debug,folio_tui=debug"
    } else {
        "error"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let log_dir = dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("folio");
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let appender = tracing_appender::rolling::never(&log_dir, "folio-tui.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!("failed to initialize logging: {err}"))?;
    Ok(guard)
}
