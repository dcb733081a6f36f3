// Status bar component
//
// Renders session state at the bottom: uptime, active page, scroll
// fraction, and key hints. Adapts to terminal width.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Render the status bar
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);
    let fraction = app.scroll.fraction();

    let status_text = if bp.at_least(Breakpoint::Wide) {
        format!(
            " {} │ page: {} │ offset {:>3.0}% │ ←/→ scroll · Tab switch · 1/2 tabs · t theme · q quit",
            app.uptime(),
            app.active_page().name(),
            fraction * 100.0,
        )
    } else if bp.at_least(Breakpoint::Normal) {
        format!(
            " {} │ {} │ {:>3.0}% │ Tab · t · q",
            app.uptime(),
            app.active_page().name(),
            fraction * 100.0,
        )
    } else {
        format!(" {} │ {:>3.0}%", app.active_page().name(), fraction * 100.0)
    };

    let status = Paragraph::new(status_text).style(Style::default().fg(app.theme.status_bar));
    f.render_widget(status, area);
}
