//! Shared terminal utilities.
//!
//! Box drawing, raw mode, entropy display, and ANSI helpers.

mod output;

pub use output::*;
