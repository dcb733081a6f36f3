// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard/mouse input, animation ticks)
// - Rendering the UI

pub mod app;
pub mod components;
pub mod input;
pub mod layout;
pub mod theme;
pub mod ui;

use crate::config::Config;
use crate::logging::LogBuffer;
use crate::pager::Page;
use anyhow::{Context, Result};
use app::App;
use components::tab_bar;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and cleans up when done.
pub async fn run_tui(config: Config, log_buffer: LogBuffer) -> Result<()> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(config, log_buffer);

    // Run the event loop
    let result = run_event_loop(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Two event sources feed the loop:
/// 1. Keyboard/mouse input (navigation and tab activation)
/// 2. Timer ticks (animation stepping and redraws)
///
/// Both are handled to completion before the next event - the controller
/// only ever sees one input at a time, on one thread.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let tick_rate = Duration::from_millis(app.config.pager.tick_rate_ms);
    let mut tick_interval = tokio::time::interval(tick_rate);

    loop {
        // Draw the UI
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard or mouse input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        _ => {}
                    }
                }
            } => {}

            // Periodic tick - advance the page animation
            _ = tick_interval.tick() => {
                app.tick_animation();
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: global keys first, then scroll/navigation keys
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return;
    }
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    let key = key_event.code;

    // Global keys (quit, theme) before navigation
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            if app.handle_key_press(key) {
                app.should_quit = true;
            }
            return;
        }
        KeyCode::Char('t') | KeyCode::Char('T') => {
            if app.handle_key_press(key) {
                app.next_theme();
            }
            return;
        }
        _ => {}
    }

    // Navigation and tab activation - InputHandler decides whether a held
    // key should trigger again this event
    if !app.handle_key_press(key) {
        return;
    }

    let manual_step = app.config.pager.manual_step;
    match key {
        // Tab activation intents
        KeyCode::Char('1') => app.activate(Page::Left),
        KeyCode::Char('2') => app.activate(Page::Right),
        KeyCode::Tab => app.activate_other(),

        // Manual horizontal scroll (the drag analog)
        KeyCode::Left | KeyCode::Char('h') => app.scroll_by(-manual_step),
        KeyCode::Right | KeyCode::Char('l') => app.scroll_by(manual_step),

        // Jump to the resting edges
        KeyCode::Home => app.jump_to_edge(Page::Left),
        KeyCode::End => app.jump_to_edge(Page::Right),

        _ => {}
    }
}

/// Handle mouse input
///
/// Clicks on the tab bar activate tabs; presses and drags in the content
/// area scroll the viewport; the wheel scrolls horizontally.
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    let manual_step = app.config.pager.manual_step;

    match mouse_event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(tab_area) = app.tab_bar_area {
                if tab_area.contains(ratatui::layout::Position {
                    x: mouse_event.column,
                    y: mouse_event.row,
                }) {
                    if let Some(page) = tab_bar::hit_test(tab_area, mouse_event.column) {
                        app.activate(page);
                    }
                    return;
                }
            }
            if let Some(content) = app.content_area {
                if content.contains(ratatui::layout::Position {
                    x: mouse_event.column,
                    y: mouse_event.row,
                }) {
                    app.begin_drag(mouse_event.column);
                }
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            app.drag_to(mouse_event.column);
        }
        MouseEventKind::Up(MouseButton::Left) => {
            app.end_drag();
        }
        // Wheel input maps to horizontal scroll in a one-row strip
        MouseEventKind::ScrollLeft | MouseEventKind::ScrollUp => {
            app.scroll_by(-manual_step);
        }
        MouseEventKind::ScrollRight | MouseEventKind::ScrollDown => {
            app.scroll_by(manual_step);
        }
        _ => {}
    }
}
