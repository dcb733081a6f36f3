//! Pager behavior configuration
//!
//! Tuning for the paging animation and the event loop cadence.

use serde::Deserialize;

/// Pager behavior settings
#[derive(Debug, Clone)]
pub struct PagerConfig {
    /// Columns the offset moves per animation tick during a page transition
    pub animation_step: f64,

    /// Event loop tick interval in milliseconds (drives animation + redraw)
    pub tick_rate_ms: u64,

    /// Columns moved per manual scroll input (arrow keys, mouse wheel)
    pub manual_step: f64,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            animation_step: 8.0,
            tick_rate_ms: 33,
            manual_step: 2.0,
        }
    }
}

/// Pager settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FilePager {
    pub animation_step: Option<f64>,
    pub tick_rate_ms: Option<u64>,
    pub manual_step: Option<f64>,
}

impl PagerConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FilePager>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        let mut config = Self {
            animation_step: file.animation_step.unwrap_or(defaults.animation_step),
            tick_rate_ms: file.tick_rate_ms.unwrap_or(defaults.tick_rate_ms),
            manual_step: file.manual_step.unwrap_or(defaults.manual_step),
        };

        // Zero or negative steps would stall the animation forever
        if config.animation_step <= 0.0 {
            config.animation_step = defaults.animation_step;
        }
        if config.manual_step <= 0.0 {
            config.manual_step = defaults.manual_step;
        }
        if config.tick_rate_ms == 0 {
            config.tick_rate_ms = defaults.tick_rate_ms;
        }

        config
    }
}
