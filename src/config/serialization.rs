//! Config serialization to TOML
//!
//! Single source of truth for the config file format.

use super::Config;

impl Config {
    /// Render the config as the TOML template written on first run
    pub fn to_toml(&self) -> String {
        format!(
            r#"# hscroll configuration

# Theme: dark, light, monokai, nord (cycle at runtime with 't')
theme = "{theme}"

# Use theme's background color (true) or terminal's default (false)
use_theme_background = {use_bg}

# Tab labels
left_title = "{left_title}"
right_title = "{right_title}"

# Pager behavior
[pager]
# Columns the offset moves per tick during a page transition
animation_step = {animation_step}
# Event loop tick interval in milliseconds
tick_rate_ms = {tick_rate_ms}
# Columns moved per manual scroll input (arrows, mouse wheel)
manual_step = {manual_step}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# File logging (in addition to the in-TUI log page)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            theme = self.theme,
            use_bg = self.use_theme_background,
            left_title = self.left_title,
            right_title = self.right_title,
            animation_step = self.pager.animation_step,
            tick_rate_ms = self.pager.tick_rate_ms,
            manual_step = self.pager.manual_step,
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = self.logging.file_dir.display(),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = self.logging.file_prefix,
        )
    }
}
