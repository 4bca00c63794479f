// TUI widget modules, one per screen zone.

pub mod help_bar;
pub mod lineup;
pub mod picker;
pub mod quit_confirm;
pub mod status_bar;
