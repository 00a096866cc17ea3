//! Interactive single-screen TUI.

mod screen;

pub use screen::run;
