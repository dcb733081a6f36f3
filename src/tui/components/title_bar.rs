// Title bar component

use crate::config::VERSION;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the title bar: app name, version, current theme
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let line = Line::from(vec![
        Span::styled(
            " hscroll ",
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("v{} ", VERSION), Style::default().fg(app.theme.muted)),
        Span::styled(
            format!("│ {} ", app.theme_kind.name()),
            Style::default().fg(app.theme.muted),
        ),
    ]);

    f.render_widget(Paragraph::new(line), area);
}
