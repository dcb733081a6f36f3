// Frame rendering
//
// Builds the shell layout and dispatches to the components:
// title bar, tab bar, pager viewport, status bar.

use super::app::App;
use super::components::{pager_view, status_bar, tab_bar, title_bar};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    // Apply theme background to the entire frame (respects the
    // use_theme_background toggle)
    if app.config.use_theme_background {
        let bg = Block::default().style(Style::default().bg(app.theme.background));
        f.render_widget(bg, f.area());
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),              // title bar
            Constraint::Length(tab_bar::HEIGHT), // tab bar
            Constraint::Min(3),                 // pager viewport
            Constraint::Length(1),              // status bar
        ])
        .split(f.area());

    // The viewport width is the page width; adopt it before rendering so a
    // resize rescales the offset instead of leaving it out of range
    app.scroll.set_page_width(f64::from(chunks[2].width));

    // Record areas for mouse hit-testing
    app.tab_bar_area = Some(chunks[1]);
    app.content_area = Some(chunks[2]);

    title_bar::render(f, chunks[0], app);
    tab_bar::render(f, chunks[1], app);
    pager_view::render(f, chunks[2], app);
    status_bar::render(f, chunks[3], app);
}
