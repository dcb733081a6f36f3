// Pager synchronization core
//
// Single source of truth for which page is active and what the two tab
// underlines should display. Two input channels mutate the same state:
// explicit tab activation requests and passive scroll notifications. The
// controller is pure over its inputs - the rendering layer owns the actual
// scroll offset and passes it in explicitly.

/// One of the two horizontally paged content panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Left,
    Right,
}

impl Page {
    /// The other page
    pub fn other(self) -> Self {
        match self {
            Page::Left => Page::Right,
            Page::Right => Page::Left,
        }
    }

    /// Display name for the status bar
    pub fn name(&self) -> &'static str {
        match self {
            Page::Left => "Left",
            Page::Right => "Right",
        }
    }
}

/// Underline opacities for the two tabs, each in [0.0, 1.0]
///
/// Invariant: in every stable state exactly one opacity is 1.0 and the
/// other is 0.0. The controller re-establishes this on every input event
/// rather than interpolating between states.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabIndicatorState {
    pub left: f64,
    pub right: f64,
}

impl TabIndicatorState {
    /// Indicator state with the given page's underline fully lit
    pub fn for_page(page: Page) -> Self {
        match page {
            Page::Left => Self {
                left: 1.0,
                right: 0.0,
            },
            Page::Right => Self {
                left: 0.0,
                right: 1.0,
            },
        }
    }

    /// Opacity of the given page's underline
    pub fn opacity(&self, page: Page) -> f64 {
        match page {
            Page::Left => self.left,
            Page::Right => self.right,
        }
    }

    /// Whether the given page's underline should render as visible
    pub fn is_lit(&self, page: Page) -> bool {
        self.opacity(page) >= 0.5
    }
}

/// Horizontal offset into the two-page layout
///
/// `offset` ranges over [0, page_width]: 0 is the left page fully in view,
/// `page_width` the right page. Out-of-range offsets (overscroll) are
/// clamped when deriving the fraction, never rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollPosition {
    pub offset: f64,
    pub page_width: f64,
}

impl ScrollPosition {
    pub fn new(offset: f64, page_width: f64) -> Self {
        Self { offset, page_width }
    }

    /// Normalized scroll offset in [0, 1]
    pub fn fraction(&self) -> f64 {
        if self.page_width <= 0.0 {
            return 0.0;
        }
        (self.offset / self.page_width).clamp(0.0, 1.0)
    }

    /// Edge-of-content guard: is there room to move toward `target`?
    fn has_room_toward(&self, target: Page) -> bool {
        match target {
            Page::Left => self.offset > 0.0,
            Page::Right => self.offset < self.page_width,
        }
    }
}

/// Page-scroll command for the rendering layer: move by exactly one page
/// width in the given direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollCommand {
    PageLeft,
    PageRight,
}

/// Result of a successful activation request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Activation {
    pub indicators: TabIndicatorState,
    pub command: ScrollCommand,
}

/// Two-state tab/page synchronization controller
///
/// Lives for the lifetime of the screen; no terminal state. All operations
/// are total: guarded requests silently no-op, out-of-range scroll input is
/// treated as the nearest valid page.
#[derive(Debug, Default)]
pub struct PagerTabController {
    active: Page,
}

impl PagerTabController {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently active page
    pub fn active(&self) -> Page {
        self.active
    }

    /// Indicator state for the current active page
    pub fn indicators(&self) -> TabIndicatorState {
        TabIndicatorState::for_page(self.active)
    }

    /// Explicit tap intent: make `target` the active page.
    ///
    /// Only takes effect if this is actually a change of page and the
    /// current scroll position has room to move that way. On success the
    /// returned command must be executed by the rendering layer (scroll by
    /// one page width); on guard failure nothing changes and `None` is
    /// returned.
    pub fn request_activate(
        &mut self,
        target: Page,
        position: ScrollPosition,
    ) -> Option<Activation> {
        if target == self.active || !position.has_room_toward(target) {
            return None;
        }

        self.active = target;
        let command = match target {
            Page::Left => ScrollCommand::PageLeft,
            Page::Right => ScrollCommand::PageRight,
        };
        tracing::debug!(page = target.name(), "tab activation accepted");

        Some(Activation {
            indicators: self.indicators(),
            command,
        })
    }

    /// Passive scroll notification, fed continuously during a drag.
    ///
    /// Derives the active page fresh from the fraction alone - any
    /// positive fraction activates Right, zero (or overscroll past the
    /// left edge) activates Left. Idempotent at arbitrary call frequency.
    pub fn on_scroll_position_changed(&mut self, fraction: f64) -> TabIndicatorState {
        // Hard boundary at 0 with no hysteresis, kept from the product
        // behavior: a one-column scroll flips the active tab.
        self.active = if fraction > 0.0 {
            Page::Right
        } else {
            Page::Left
        };
        self.indicators()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: f64 = 80.0;

    fn at(offset: f64) -> ScrollPosition {
        ScrollPosition::new(offset, WIDTH)
    }

    #[test]
    fn initial_state_is_left_active() {
        let controller = PagerTabController::new();
        assert_eq!(controller.active(), Page::Left);
        assert_eq!(controller.indicators(), TabIndicatorState::for_page(Page::Left));
    }

    #[test]
    fn indicators_are_mutually_exclusive_over_any_scroll_sequence() {
        let mut controller = PagerTabController::new();
        let fractions = [0.0, 0.01, 0.5, 1.0, 0.99, 0.0, -0.2, 1.7, 0.3, 0.0];

        for f in fractions {
            let state = controller.on_scroll_position_changed(f);
            let pair = (state.left, state.right);
            assert!(
                pair == (1.0, 0.0) || pair == (0.0, 1.0),
                "fraction {f} produced non-exclusive indicators {pair:?}"
            );
        }
    }

    #[test]
    fn zero_fraction_activates_left_any_positive_activates_right() {
        let mut controller = PagerTabController::new();

        let state = controller.on_scroll_position_changed(0.0);
        assert_eq!(controller.active(), Page::Left);
        assert_eq!(state, TabIndicatorState::for_page(Page::Left));

        // A one-pixel scroll flips the tab - hard boundary, no hysteresis
        let state = controller.on_scroll_position_changed(0.001);
        assert_eq!(controller.active(), Page::Right);
        assert_eq!(state, TabIndicatorState::for_page(Page::Right));

        // Derivation ignores prior state entirely
        let state = controller.on_scroll_position_changed(0.0);
        assert_eq!(controller.active(), Page::Left);
        assert!(state.is_lit(Page::Left));
        assert!(!state.is_lit(Page::Right));
    }

    #[test]
    fn overscroll_is_clamped_to_nearest_page() {
        let mut controller = PagerTabController::new();

        controller.on_scroll_position_changed(at(-15.0).fraction());
        assert_eq!(controller.active(), Page::Left);

        controller.on_scroll_position_changed(at(WIDTH + 15.0).fraction());
        assert_eq!(controller.active(), Page::Right);
    }

    #[test]
    fn activate_right_from_leftmost_edge_succeeds() {
        let mut controller = PagerTabController::new();

        let activation = controller
            .request_activate(Page::Right, at(0.0))
            .expect("room to move right from the left edge");

        assert_eq!(controller.active(), Page::Right);
        assert_eq!(activation.command, ScrollCommand::PageRight);
        assert_eq!(activation.indicators, TabIndicatorState::for_page(Page::Right));
    }

    #[test]
    fn activate_right_at_rightmost_edge_is_a_noop() {
        let mut controller = PagerTabController::new();
        controller.on_scroll_position_changed(1.0);
        let before = controller.indicators();

        assert!(controller.request_activate(Page::Right, at(WIDTH)).is_none());
        assert_eq!(controller.active(), Page::Right);
        assert_eq!(controller.indicators(), before);
    }

    #[test]
    fn activate_left_at_leftmost_edge_is_a_noop() {
        let mut controller = PagerTabController::new();
        assert!(controller.request_activate(Page::Left, at(0.0)).is_none());
        assert_eq!(controller.active(), Page::Left);
    }

    #[test]
    fn activating_the_already_active_page_is_a_noop() {
        let mut controller = PagerTabController::new();
        // Mid-scroll there is room both ways, but Left is already active
        controller.on_scroll_position_changed(0.0);
        assert!(controller.request_activate(Page::Left, at(20.0)).is_none());
    }

    #[test]
    fn activate_left_mid_scroll_restores_left_indicators() {
        let mut controller = PagerTabController::new();

        // Drag partway toward the right page
        controller.on_scroll_position_changed(at(30.0).fraction());
        assert_eq!(controller.active(), Page::Right);

        let activation = controller
            .request_activate(Page::Left, at(30.0))
            .expect("mid-scroll has room to move left");

        assert_eq!(activation.command, ScrollCommand::PageLeft);
        assert_eq!(activation.indicators.left, 1.0);
        assert_eq!(activation.indicators.right, 0.0);
    }

    #[test]
    fn round_trip_restores_original_indicator_state() {
        let mut controller = PagerTabController::new();
        let original = controller.indicators();

        let right = controller
            .request_activate(Page::Right, at(0.0))
            .expect("activate right");
        assert_eq!(right.command, ScrollCommand::PageRight);

        // Rendering layer executed the command: offset is now one page in
        let left = controller
            .request_activate(Page::Left, at(WIDTH))
            .expect("activate left");
        assert_eq!(left.command, ScrollCommand::PageLeft);

        assert_eq!(left.indicators, original);
        assert_eq!(controller.active(), Page::Left);
    }

    #[test]
    fn fraction_clamps_and_handles_degenerate_width() {
        assert_eq!(at(-10.0).fraction(), 0.0);
        assert_eq!(at(WIDTH * 2.0).fraction(), 1.0);
        assert_eq!(at(40.0).fraction(), 0.5);
        assert_eq!(ScrollPosition::new(12.0, 0.0).fraction(), 0.0);
    }
}
