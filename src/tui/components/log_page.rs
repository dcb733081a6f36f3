// Log page component
//
// Renders the captured system log buffer on the right content page,
// showing the tail that fits the viewport with the most recent entry last.

use crate::logging::LogLevel;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the log page into `area`
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    if area.height == 0 {
        return;
    }

    let entries = app.log_buffer.snapshot();
    if entries.is_empty() {
        let placeholder = Paragraph::new("No log entries yet")
            .style(Style::default().fg(app.theme.muted));
        f.render_widget(placeholder, area);
        return;
    }

    // Tail that fits the viewport
    let height = area.height as usize;
    let skip = entries.len().saturating_sub(height);

    let lines: Vec<Line> = entries
        .iter()
        .skip(skip)
        .map(|entry| {
            Line::from(vec![
                Span::styled(
                    entry.timestamp.format("%H:%M:%S ").to_string(),
                    Style::default().fg(app.theme.muted),
                ),
                Span::styled(
                    format!("{:5} ", entry.level.as_str()),
                    Style::default().fg(level_color(app, entry.level)),
                ),
                Span::styled(
                    entry.message.as_str(),
                    Style::default().fg(app.theme.foreground),
                ),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines), area);
}

fn level_color(app: &App, level: LogLevel) -> Color {
    match level {
        LogLevel::Error => app.theme.log_error,
        LogLevel::Warn => app.theme.log_warn,
        LogLevel::Info => app.theme.log_info,
        LogLevel::Debug => app.theme.log_debug,
        LogLevel::Trace => app.theme.log_trace,
    }
}
