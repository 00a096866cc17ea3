//! Uniform password generation over a union alphabet.

use std::fmt;

use zeroize::Zeroize;

use super::charset::ClassSet;
use crate::rand;

pub const MIN_LENGTH: usize = 1;
pub const MAX_LENGTH: usize = 50;

/// One generation call: how long, and which classes feed the alphabet.
#[derive(Debug, Clone, Copy)]
pub struct Request {
    pub length: usize,
    pub classes: ClassSet,
}

impl Default for Request {
    fn default() -> Self {
        Request {
            length: 12,
            classes: ClassSet::default(),
        }
    }
}

/// No character classes were selected, so there is nothing to draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyAlphabetError;

impl fmt::Display for EmptyAlphabetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "select at least one character type")
    }
}

impl std::error::Error for EmptyAlphabetError {}

/// Generate a single password.
///
/// Each position is an independent uniform draw over the union alphabet,
/// with replacement. Length bounds are the caller's responsibility.
pub fn generate(request: &Request) -> Result<String, EmptyAlphabetError> {
    let mut alphabet = request.classes.union_alphabet();
    if alphabet.is_empty() {
        return Err(EmptyAlphabetError);
    }

    let mut password = String::with_capacity(request.length);
    for _ in 0..request.length {
        password.push(alphabet[rand::below(alphabet.len())] as char);
    }

    alphabet.zeroize();
    Ok(password)
}

/// Generate `count` passwords joined by newlines (CLI and clipboard path).
pub fn generate_batch(request: &Request, count: usize) -> Result<String, EmptyAlphabetError> {
    let mut passwords = String::with_capacity((request.length + 1) * count);
    for _ in 0..count {
        let mut pass = generate(request)?;
        passwords.push_str(&pass);
        passwords.push('\n');
        pass.zeroize();
    }
    Ok(passwords)
}
