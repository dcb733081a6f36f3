// Pager viewport component
//
// The terminal analog of a paging scroll view: the two pages sit side by
// side in a virtual strip two page-widths wide, and the scroll offset
// decides which slice of that strip is on screen. At rest exactly one page
// fills the viewport; mid-scroll both pages are partially visible.

use super::log_page;
use crate::pager::Page;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the pager viewport into `area`
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let width = i64::from(area.width);
    let offset = app.scroll.offset().round() as i64;

    for page in [Page::Left, Page::Right] {
        let index = match page {
            Page::Left => 0,
            Page::Right => 1,
        };

        // Page slot in strip coordinates, shifted into view by the offset
        let start = index * width - offset;
        let end = start + width;

        let visible_start = start.max(0);
        let visible_end = end.min(width);
        if visible_end <= visible_start {
            continue;
        }

        let slice = Rect::new(
            area.x + visible_start as u16,
            area.y,
            (visible_end - visible_start) as u16,
            area.height,
        );
        render_page(f, slice, app, page);
    }
}

fn render_page(f: &mut Frame, area: Rect, app: &App, page: Page) {
    let title = match page {
        Page::Left => &app.config.left_title,
        Page::Right => &app.config.right_title,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .border_style(Style::default().fg(app.theme.accent(page)));
    let inner = block.inner(area);
    f.render_widget(block, area);

    match page {
        Page::Left => render_home(f, inner, app),
        Page::Right => log_page::render(f, inner, app),
    }
}

fn render_home(f: &mut Frame, area: Rect, app: &App) {
    let muted = Style::default().fg(app.theme.muted);
    let fg = Style::default().fg(app.theme.foreground);

    let lines = vec![
        Line::raw(""),
        Line::styled("  hscroll - two-page horizontal pager", fg),
        Line::raw(""),
        Line::styled("  Scroll the viewport and watch the tab", muted),
        Line::styled("  underline track the active page.", muted),
        Line::raw(""),
        Line::styled("  ←/→ or h/l   scroll by column", muted),
        Line::styled("  Tab          switch page (animated)", muted),
        Line::styled("  1 / 2        activate a tab directly", muted),
        Line::styled("  Home / End   jump to an edge", muted),
        Line::styled("  t            cycle theme", muted),
        Line::styled("  q            quit", muted),
        Line::raw(""),
        Line::styled("  The right page shows the system logs.", muted),
    ];

    f.render_widget(Paragraph::new(lines), area);
}
