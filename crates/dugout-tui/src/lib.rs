// Library root: re-exports the terminal UI so integration tests can drive
// the board through key and mouse events without a real terminal.

pub mod tui;
