pub(crate) mod terminal;
pub(crate) mod text;

// Public API - utilities used by commands
pub use terminal::{confirm, set_terminal_title, set_terminal_title_and_flush};
pub use text::clean_detail;
