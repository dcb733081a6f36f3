// Tab bar component
//
// Renders the two tab affordances side by side, each with a label row and
// an underline row. The underline is the indicator: its visibility comes
// straight from the controller-reported opacity pair, so both tabs are
// never lit at once.

use crate::pager::Page;
use crate::tui::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Height the tab bar needs: label row + underline row
pub const HEIGHT: u16 = 2;

/// Render the tab bar into `area`
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_tab(f, halves[0], app, Page::Left);
    render_tab(f, halves[1], app, Page::Right);
}

/// Map a click column within the tab bar to the tab it hit
pub fn hit_test(area: Rect, column: u16) -> Option<Page> {
    if column < area.x || column >= area.x.saturating_add(area.width) {
        return None;
    }
    let mid = area.x + area.width / 2;
    if column < mid {
        Some(Page::Left)
    } else {
        Some(Page::Right)
    }
}

fn render_tab(f: &mut Frame, area: Rect, app: &App, page: Page) {
    if area.height < HEIGHT || area.width == 0 {
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let title = match page {
        Page::Left => &app.config.left_title,
        Page::Right => &app.config.right_title,
    };
    let label = match page {
        Page::Left => format!("◀ {}", title),
        Page::Right => format!("{} ▶", title),
    };

    // Center the label, accounting for wide glyphs in user-provided titles
    let label_width = label.width() as u16;
    let pad = area.width.saturating_sub(label_width) / 2;
    let padded = format!("{}{}", " ".repeat(pad as usize), label);

    let active = app.active_page() == page;
    let label_style = if active {
        Style::default()
            .fg(app.theme.tab_active)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.tab_inactive)
    };
    f.render_widget(Paragraph::new(padded).style(label_style), rows[0]);

    // Underline row driven by the indicator opacity
    let underline = if app.indicators.is_lit(page) {
        Line::styled(
            "▔".repeat(area.width as usize),
            Style::default().fg(app.theme.accent(page)),
        )
    } else {
        Line::raw("")
    };
    f.render_widget(Paragraph::new(underline), rows[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_test_maps_halves_to_pages() {
        let area = Rect::new(0, 0, 80, 2);
        assert_eq!(hit_test(area, 0), Some(Page::Left));
        assert_eq!(hit_test(area, 39), Some(Page::Left));
        assert_eq!(hit_test(area, 40), Some(Page::Right));
        assert_eq!(hit_test(area, 79), Some(Page::Right));
        assert_eq!(hit_test(area, 80), None);
    }

    #[test]
    fn hit_test_respects_area_origin() {
        let area = Rect::new(10, 0, 20, 2);
        assert_eq!(hit_test(area, 5), None);
        assert_eq!(hit_test(area, 12), Some(Page::Left));
        assert_eq!(hit_test(area, 25), Some(Page::Right));
        assert_eq!(hit_test(area, 30), None);
    }
}
