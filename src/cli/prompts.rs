//! Stderr warnings, confirmations, and the quiet flag that gates them.
//!
//! `-q` suppresses warnings and confirmations; errors always print. Prompts
//! are only ever shown on an interactive stdin.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_quiet(on: bool) {
    QUIET.store(on, Ordering::SeqCst);
}

fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

fn stdin_is_tty() -> bool {
    unsafe { libc::isatty(0) == 1 }
}

/// Yellow warning on stderr, dropped under `-q`.
pub fn warn(msg: &str) {
    if !quiet() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Red error on stderr. Never suppressed.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Confirmation after a successful clipboard write, dropped under `-q`.
pub fn clipboard_copied() {
    if !quiet() {
        println!("*** -COPIED TO CLIPBOARD- ***");
    }
}

/// Clipboard failure on stderr. Never suppressed.
pub fn clipboard_error(err: &str) {
    eprintln!("Clipboard error: {err}");
}

/// Ask whether to print instead when no clipboard is available. Returns true
/// to fall back to stdout, false to abort. Quiet or piped stdin skips the
/// question and falls back.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet() || !stdin_is_tty() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }
        eprintln!("\nAborted.");
        return false;
    }
    true // fall back on read error
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_flag_round_trips() {
        set_quiet(true);
        assert!(quiet());
        set_quiet(false);
        assert!(!quiet());
    }
}
