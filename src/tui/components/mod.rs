// Components module - reusable UI building blocks
//
// Shell components rendered on every frame:
// - Title bar: app name and active page
// - Tab bar: the two tab affordances with underline indicators
// - Pager view: the paging content viewport (home page + log page)
// - Status bar: uptime, scroll fraction, key hints
//
// Each component is a focused, single-responsibility module.

pub mod log_page;
pub mod pager_view;
pub mod status_bar;
pub mod tab_bar;
pub mod title_bar;
