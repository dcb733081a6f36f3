// Input handling system with configurable key behaviors
//
// Supports two behaviors:
// - State-change only keys (trigger once per press)
// - Repeatable keys (trigger on press, then repeat while held)
//
// Repeatable keys drive manual scrolling: holding an arrow key keeps
// feeding offset changes, which is the drag analog in a terminal.

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Defines how a key should behave when pressed/held
#[derive(Debug, Clone, Copy)]
pub enum KeyBehavior {
    /// Trigger only on state change (press then release)
    /// Use for: tab activation, quit, theme cycling
    StateChange,

    /// Trigger on press, then repeat after initial delay
    /// Use for: scroll keys
    Repeatable {
        /// Delay before starting to repeat
        initial_delay: Duration,
        /// Time between repeats
        repeat_interval: Duration,
    },
}

impl KeyBehavior {
    /// Standard scroll key behavior
    pub fn scrolling() -> Self {
        Self::Repeatable {
            initial_delay: Duration::from_millis(250),
            repeat_interval: Duration::from_millis(30),
        }
    }
}

/// Tracks the state of a single key
#[derive(Debug)]
struct KeyState {
    is_pressed: bool,
    press_started: Option<Instant>,
    last_triggered: Option<Instant>,
}

impl KeyState {
    fn new() -> Self {
        Self {
            is_pressed: false,
            press_started: None,
            last_triggered: None,
        }
    }

    fn release(&mut self) {
        self.is_pressed = false;
        self.press_started = None;
        self.last_triggered = None;
    }
}

/// Input handler that manages key behaviors
pub struct InputHandler {
    key_states: HashMap<KeyCode, KeyState>,
    key_behaviors: HashMap<KeyCode, KeyBehavior>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            key_states: HashMap::new(),
            key_behaviors: HashMap::new(),
        }
    }

    /// Configure a key's behavior
    pub fn configure_key(&mut self, key: KeyCode, behavior: KeyBehavior) {
        self.key_behaviors.insert(key, behavior);
    }

    /// Configure multiple keys with the same behavior
    pub fn configure_keys(&mut self, keys: &[KeyCode], behavior: KeyBehavior) {
        for key in keys {
            self.configure_key(*key, behavior);
        }
    }

    /// Handle a key press event
    /// Returns true if the action should be triggered
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        let now = Instant::now();
        let behavior = self
            .key_behaviors
            .get(&key)
            .copied()
            .unwrap_or(KeyBehavior::StateChange);

        let state = self.key_states.entry(key).or_insert_with(KeyState::new);

        if state.is_pressed {
            match behavior {
                KeyBehavior::StateChange => {
                    // Debounce: handles terminals that never send Release
                    if let Some(last) = state.last_triggered {
                        if now.duration_since(last) >= Duration::from_millis(150) {
                            state.last_triggered = Some(now);
                            return true;
                        }
                    }
                    false
                }
                KeyBehavior::Repeatable {
                    initial_delay,
                    repeat_interval,
                } => {
                    if let (Some(press_start), Some(last_trigger)) =
                        (state.press_started, state.last_triggered)
                    {
                        let time_since_press = now.duration_since(press_start);
                        let time_since_last = now.duration_since(last_trigger);

                        // After initial delay, repeat at interval
                        if time_since_press >= initial_delay && time_since_last >= repeat_interval {
                            state.last_triggered = Some(now);
                            return true;
                        }
                    }
                    false
                }
            }
        } else {
            // New key press - always trigger
            state.is_pressed = true;
            state.press_started = Some(now);
            state.last_triggered = Some(now);
            true
        }
    }

    /// Handle a key release event
    pub fn handle_key_release(&mut self, key: KeyCode) {
        if let Some(state) = self.key_states.get_mut(&key) {
            state.release();
        }
    }

    /// Default configuration for the pager keymap
    pub fn with_default_config() -> Self {
        let mut handler = Self::new();

        // Horizontal scroll keys - repeatable (hold to keep scrolling)
        handler.configure_keys(
            &[
                KeyCode::Left,
                KeyCode::Right,
                KeyCode::Char('h'),
                KeyCode::Char('l'),
            ],
            KeyBehavior::scrolling(),
        );

        // Action keys - state change only (trigger once per press)
        handler.configure_keys(
            &[
                // Tab activation
                KeyCode::Char('1'),
                KeyCode::Char('2'),
                KeyCode::Tab,
                // Jump to edges
                KeyCode::Home,
                KeyCode::End,
                // Theme cycling
                KeyCode::Char('t'),
                KeyCode::Char('T'),
                // Quit
                KeyCode::Char('q'),
                KeyCode::Char('Q'),
                KeyCode::Esc,
            ],
            KeyBehavior::StateChange,
        );

        handler
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::with_default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn state_change_does_not_repeat_while_held() {
        let mut handler = InputHandler::new();
        handler.configure_key(KeyCode::Tab, KeyBehavior::StateChange);

        assert!(handler.handle_key_press(KeyCode::Tab));
        assert!(!handler.handle_key_press(KeyCode::Tab));
        assert!(!handler.handle_key_press(KeyCode::Tab));

        handler.handle_key_release(KeyCode::Tab);
        assert!(handler.handle_key_press(KeyCode::Tab));
    }

    #[test]
    fn repeatable_repeats_after_delay() {
        let mut handler = InputHandler::new();
        handler.configure_key(
            KeyCode::Right,
            KeyBehavior::Repeatable {
                initial_delay: Duration::from_millis(100),
                repeat_interval: Duration::from_millis(50),
            },
        );

        // First press triggers immediately
        assert!(handler.handle_key_press(KeyCode::Right));

        // Within the initial delay nothing repeats
        assert!(!handler.handle_key_press(KeyCode::Right));

        thread::sleep(Duration::from_millis(110));
        assert!(handler.handle_key_press(KeyCode::Right));

        thread::sleep(Duration::from_millis(60));
        assert!(handler.handle_key_press(KeyCode::Right));
    }
}
