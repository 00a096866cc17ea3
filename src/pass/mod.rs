//! Password generation.

pub mod charset;
mod generate;

pub use generate::{EmptyAlphabetError, MAX_LENGTH, MIN_LENGTH, Request, generate, generate_batch};
