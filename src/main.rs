// hscroll - two-page horizontal pager for the terminal
//
// Two tab affordances drive a horizontally paging content viewport with an
// animated underline indicator, kept in sync in both directions: activating
// a tab scrolls to its page, and scrolling manually moves the indicator.
//
// Architecture:
// - Pager core: pure two-state synchronization controller
// - TUI (ratatui): renders tabs, underline, and the paging viewport, and
//   owns the actual mutable scroll offset
// - Logging: tracing events captured into an in-memory buffer and shown
//   on the right content page

mod cli;
mod config;
mod logging;
mod pager;
mod tui;

use anyhow::Result;
use config::{Config, LogRotation};
use logging::{LogBuffer, TuiLogLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI commands first (config --show, --reset, --path)
    // If a command was handled, exit early
    if cli::handle_cli() {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env();

    // All tracing output goes to the in-memory buffer so it can't garble
    // the alternate screen; optionally also to rotating log files.
    let log_buffer = LogBuffer::new();
    let _file_guard = init_tracing(&config, log_buffer.clone())?;

    tracing::info!(version = config::VERSION, "hscroll starting");
    tracing::debug!(
        theme = %config.theme,
        animation_step = config.pager.animation_step,
        tick_rate_ms = config.pager.tick_rate_ms,
        "configuration loaded"
    );

    tui::run_tui(config, log_buffer).await
}

/// Initialize the tracing subscriber
///
/// Precedence for the filter: RUST_LOG env var > config file > "info".
/// The returned guard must be kept alive for the duration of the program
/// so file logs flush.
fn init_tracing(
    config: &Config,
    log_buffer: LogBuffer,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let default_filter = format!("hscroll={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    if !config.logging.file_enabled {
        tracing_subscriber::registry()
            .with(filter)
            .with(TuiLogLayer::new(log_buffer))
            .init();
        return Ok(None);
    }

    // File logging enabled: add a rotating appender behind a non-blocking
    // writer (writes happen on a background thread)
    std::fs::create_dir_all(&config.logging.file_dir).map_err(|e| {
        anyhow::anyhow!(
            "could not create log directory {:?}: {}",
            config.logging.file_dir,
            e
        )
    })?;

    let file_appender = match config.logging.file_rotation {
        LogRotation::Hourly => tracing_appender::rolling::hourly(
            &config.logging.file_dir,
            &config.logging.file_prefix,
        ),
        LogRotation::Daily => tracing_appender::rolling::daily(
            &config.logging.file_dir,
            &config.logging.file_prefix,
        ),
        LogRotation::Never => tracing_appender::rolling::never(
            &config.logging.file_dir,
            &config.logging.file_prefix,
        ),
    };
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(TuiLogLayer::new(log_buffer))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false),
        )
        .init();

    Ok(Some(guard))
}
