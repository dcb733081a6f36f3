// TUI application state
//
// Owns the rendering-layer half of the pager: the mutable scroll offset and
// its animation target. The synchronization core (`PagerTabController`) only
// ever sees explicit positions passed into its pure operations; this module
// executes the scroll commands it emits and feeds manual offset changes back
// into it.

use super::input::InputHandler;
use super::theme::{Theme, ThemeKind};
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::pager::{Page, PagerTabController, ScrollCommand, ScrollPosition, TabIndicatorState};
use std::time::Instant;

/// Result of advancing the scroll animation by one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    /// No animation in flight
    Idle,
    /// Offset moved, target not yet reached
    Moving,
    /// Offset reached the target this tick
    Landed,
}

/// Mutable scroll state for the two-page layout
///
/// The offset ranges over [0, page_width] in columns. A page transition sets
/// an animation target one page width away; manual input moves the offset
/// directly and cancels any in-flight target.
#[derive(Debug)]
pub struct ScrollState {
    offset: f64,
    page_width: f64,
    target: Option<f64>,
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            offset: 0.0,
            page_width: 0.0,
            target: None,
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn page_width(&self) -> f64 {
        self.page_width
    }

    pub fn position(&self) -> ScrollPosition {
        ScrollPosition::new(self.offset, self.page_width)
    }

    pub fn fraction(&self) -> f64 {
        self.position().fraction()
    }

    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    /// Adopt a new viewport width (terminal resize), preserving the current
    /// fraction and any in-flight target
    pub fn set_page_width(&mut self, width: f64) {
        if width <= 0.0 || width == self.page_width {
            return;
        }
        let fraction = self.fraction();
        let target_fraction = self.target.map(|t| {
            if self.page_width > 0.0 {
                (t / self.page_width).clamp(0.0, 1.0)
            } else {
                0.0
            }
        });
        self.page_width = width;
        self.offset = fraction * width;
        self.target = target_fraction.map(|tf| tf * width);
    }

    /// Execute a page-scroll command: animate by exactly one page width
    pub fn execute(&mut self, command: ScrollCommand) {
        let raw = match command {
            ScrollCommand::PageLeft => self.offset - self.page_width,
            ScrollCommand::PageRight => self.offset + self.page_width,
        };
        self.target = Some(raw.clamp(0.0, self.page_width));
    }

    /// Manual scroll input. Cancels any in-flight animation.
    /// Returns whether the offset actually moved.
    pub fn scroll_by(&mut self, delta: f64) -> bool {
        self.target = None;
        let next = (self.offset + delta).clamp(0.0, self.page_width);
        let changed = next != self.offset;
        self.offset = next;
        changed
    }

    /// Jump straight to an offset (Home/End). Cancels any animation.
    pub fn jump_to(&mut self, offset: f64) -> bool {
        self.target = None;
        let next = offset.clamp(0.0, self.page_width);
        let changed = next != self.offset;
        self.offset = next;
        changed
    }

    /// Advance the animation by one tick of `step` columns
    pub fn tick(&mut self, step: f64) -> TickResult {
        let Some(target) = self.target else {
            return TickResult::Idle;
        };

        let delta = target - self.offset;
        if delta.abs() <= step {
            self.offset = target;
            self.target = None;
            TickResult::Landed
        } else {
            self.offset += step * delta.signum();
            TickResult::Moving
        }
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

/// Main application state for the TUI
pub struct App {
    /// The synchronization core
    controller: PagerTabController,

    /// Rendering-owned scroll offset + animation target
    pub scroll: ScrollState,

    /// Last indicator state reported by the controller
    pub indicators: TabIndicatorState,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Current color theme
    pub theme_kind: ThemeKind,
    pub theme: Theme,

    /// Loaded configuration (tab titles, pager tuning)
    pub config: Config,

    /// Captured system logs, rendered on the right page
    pub log_buffer: LogBuffer,

    /// When the app started (for uptime display)
    pub start_time: Instant,

    /// Input handler for flexible key behavior
    input_handler: InputHandler,

    /// Column of the last mouse drag event, if a drag is in progress
    drag_anchor: Option<u16>,

    /// Screen areas recorded during the last draw, for mouse hit-testing
    pub tab_bar_area: Option<ratatui::layout::Rect>,
    pub content_area: Option<ratatui::layout::Rect>,
}

impl App {
    pub fn new(config: Config, log_buffer: LogBuffer) -> Self {
        let controller = PagerTabController::new();
        let indicators = controller.indicators();
        let theme_kind = ThemeKind::from_name(&config.theme);
        let theme = theme_kind.theme();

        Self {
            controller,
            scroll: ScrollState::new(),
            indicators,
            should_quit: false,
            theme_kind,
            theme,
            config,
            log_buffer,
            start_time: Instant::now(),
            input_handler: InputHandler::default(),
            drag_anchor: None,
            tab_bar_area: None,
            content_area: None,
        }
    }

    /// The page the controller currently considers active
    pub fn active_page(&self) -> Page {
        self.controller.active()
    }

    /// Tab tap intent: make `target` the active page
    ///
    /// Routes through the controller's guard; on success the emitted scroll
    /// command starts the page animation.
    pub fn activate(&mut self, target: Page) {
        let position = self.scroll.position();
        match self.controller.request_activate(target, position) {
            Some(activation) => {
                self.indicators = activation.indicators;
                self.scroll.execute(activation.command);
            }
            None => {
                tracing::trace!(page = target.name(), "activation rejected at edge");
            }
        }
    }

    /// Toggle to the other page (Tab key)
    pub fn activate_other(&mut self) {
        self.activate(self.controller.active().other());
    }

    /// Manual horizontal scroll (keys, wheel, drag)
    pub fn scroll_by(&mut self, delta: f64) {
        if self.scroll.scroll_by(delta) {
            self.sync_indicators();
        }
    }

    /// Jump to a page's resting edge without animating
    pub fn jump_to_edge(&mut self, page: Page) {
        let offset = match page {
            Page::Left => 0.0,
            Page::Right => self.scroll.page_width(),
        };
        if self.scroll.jump_to(offset) {
            self.sync_indicators();
        }
    }

    /// Advance the page animation by one tick
    ///
    /// Intermediate animated offsets are the controller's own command being
    /// carried out, so only the landing offset is reported back; manual
    /// scrolling syncs on every change.
    pub fn tick_animation(&mut self) {
        if self.scroll.tick(self.config.pager.animation_step) == TickResult::Landed {
            self.sync_indicators();
        }
    }

    /// Feed the current offset back through the controller
    fn sync_indicators(&mut self) {
        self.indicators = self
            .controller
            .on_scroll_position_changed(self.scroll.fraction());
    }

    /// Cycle to the next theme
    pub fn next_theme(&mut self) {
        self.theme_kind = self.theme_kind.next();
        self.theme = self.theme_kind.theme();
        tracing::info!(theme = self.theme_kind.name(), "theme changed");
    }

    /// Begin a mouse drag at the given column
    pub fn begin_drag(&mut self, column: u16) {
        self.drag_anchor = Some(column);
    }

    /// Continue a mouse drag: content follows the pointer
    pub fn drag_to(&mut self, column: u16) {
        if let Some(anchor) = self.drag_anchor {
            let delta = f64::from(anchor) - f64::from(column);
            if delta != 0.0 {
                self.scroll_by(delta);
                self.drag_anchor = Some(column);
            }
        }
    }

    pub fn end_drag(&mut self) {
        self.drag_anchor = None;
    }

    /// Handle a key press - returns true if the action should be triggered
    pub fn handle_key_press(&mut self, key: crossterm::event::KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    /// Handle a key release
    pub fn handle_key_release(&mut self, key: crossterm::event::KeyCode) {
        self.input_handler.handle_key_release(key);
    }

    /// Get uptime as a formatted string
    pub fn uptime(&self) -> String {
        let elapsed = self.start_time.elapsed();
        let seconds = elapsed.as_secs();
        let hours = seconds / 3600;
        let minutes = (seconds % 3600) / 60;
        let secs = seconds % 60;

        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: f64 = 80.0;

    fn app() -> App {
        let mut app = App::new(Config::default(), LogBuffer::new());
        app.scroll.set_page_width(WIDTH);
        app
    }

    fn run_animation_to_completion(app: &mut App) {
        // Generous bound; the animation is a fixed step per tick
        for _ in 0..10_000 {
            app.tick_animation();
            if !app.scroll.is_animating() {
                return;
            }
        }
        panic!("animation never landed");
    }

    #[test]
    fn activation_flips_indicators_and_animates_one_page() {
        let mut app = app();

        app.activate(Page::Right);
        // Indicator flips immediately on the accepted tap
        assert!(app.indicators.is_lit(Page::Right));
        assert!(app.scroll.is_animating());

        run_animation_to_completion(&mut app);
        assert_eq!(app.scroll.offset(), WIDTH);
        assert_eq!(app.active_page(), Page::Right);
        assert!(app.indicators.is_lit(Page::Right));
    }

    #[test]
    fn activation_at_edge_is_silent_noop() {
        let mut app = app();
        app.activate(Page::Right);
        run_animation_to_completion(&mut app);

        // No room to move further right
        app.activate(Page::Right);
        assert!(!app.scroll.is_animating());
        assert_eq!(app.scroll.offset(), WIDTH);
        assert!(app.indicators.is_lit(Page::Right));
    }

    #[test]
    fn round_trip_returns_to_initial_state() {
        let mut app = app();
        let original = app.indicators;

        app.activate(Page::Right);
        run_animation_to_completion(&mut app);
        app.activate(Page::Left);
        run_animation_to_completion(&mut app);

        assert_eq!(app.scroll.offset(), 0.0);
        assert_eq!(app.active_page(), Page::Left);
        assert_eq!(app.indicators, original);
    }

    #[test]
    fn one_column_nudge_flips_the_indicator() {
        let mut app = app();

        app.scroll_by(1.0);
        assert_eq!(app.active_page(), Page::Right);
        assert!(app.indicators.is_lit(Page::Right));

        app.scroll_by(-1.0);
        assert_eq!(app.active_page(), Page::Left);
        assert!(app.indicators.is_lit(Page::Left));
    }

    #[test]
    fn manual_scroll_cancels_in_flight_animation() {
        let mut app = app();
        app.activate(Page::Right);
        assert!(app.scroll.is_animating());

        app.scroll_by(-1.0);
        assert!(!app.scroll.is_animating());
    }

    #[test]
    fn manual_scroll_clamps_at_edges() {
        let mut app = app();
        app.scroll_by(-50.0);
        assert_eq!(app.scroll.offset(), 0.0);

        app.scroll_by(WIDTH * 3.0);
        assert_eq!(app.scroll.offset(), WIDTH);
    }

    #[test]
    fn resize_preserves_scroll_fraction() {
        let mut app = app();
        app.scroll_by(WIDTH / 2.0);
        assert_eq!(app.scroll.fraction(), 0.5);

        app.scroll.set_page_width(120.0);
        assert_eq!(app.scroll.fraction(), 0.5);
        assert_eq!(app.scroll.offset(), 60.0);
    }

    #[test]
    fn jump_to_edge_syncs_indicators() {
        let mut app = app();
        app.jump_to_edge(Page::Right);
        assert_eq!(app.scroll.offset(), WIDTH);
        assert!(app.indicators.is_lit(Page::Right));

        app.jump_to_edge(Page::Left);
        assert!(app.indicators.is_lit(Page::Left));
    }

    #[test]
    fn drag_moves_content_against_pointer() {
        let mut app = app();
        app.begin_drag(40);
        // Pointer moves left 10 columns: content scrolls right
        app.drag_to(30);
        assert_eq!(app.scroll.offset(), 10.0);
        assert_eq!(app.active_page(), Page::Right);

        app.end_drag();
        // Further motion without an anchor does nothing
        app.drag_to(0);
        assert_eq!(app.scroll.offset(), 10.0);
    }
}
