//! Terminal output utilities.
//!
//! Box drawing, entropy estimation, ANSI helpers, raw mode. Box helpers
//! print with `println!` and are meant for cooked-mode output (help screen,
//! summaries); the raw-mode TUI draws its own lines with explicit `\r\n`.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io::{self, Write};

// ============================================================================
// Raw Mode
// ============================================================================

/// Holds the terminal in raw mode for its lifetime. Cooked mode comes back
/// on drop, so an early return or panic cannot strand the terminal.
pub struct RawModeGuard(());

impl RawModeGuard {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(RawModeGuard(()))
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREEN: &str = "\x1b[38;5;10m";
pub const DIM: &str = "\x1b[2m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Reset terminal to sane state (fixes staggered text issues).
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("\x1b[0m\x1b[?25h");
    flush();
}

/// Hide the cursor (restored by `reset_terminal`).
pub fn hide_cursor() {
    print!("\x1b[?25l");
    flush();
}

/// Print error message in red.
pub fn print_error(msg: &str) {
    println!("{RED}{msg}{RESET}");
}

// ============================================================================
// Box Drawing (64 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 64;

/// Print box top with title: ┌─ Title ─────────────────┐
pub fn box_top(title: &str) {
    let title_part = format!("─ {} ", title);
    let remaining = BOX_WIDTH - 2 - title_part.chars().count();
    println!("┌{}{}┐", title_part, "─".repeat(remaining));
}

/// Print box content line: │ content                   │
pub fn box_line(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        let padding = inner_width - display_len;
        println!("│ {}{} │", content, " ".repeat(padding));
    } else {
        println!("│ {} │", content);
    }
}

/// Print centered box content line.
pub fn box_line_center(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        let total_padding = inner_width - display_len;
        let left_pad = total_padding / 2;
        let right_pad = total_padding - left_pad;
        println!(
            "│ {}{}{} │",
            " ".repeat(left_pad),
            content,
            " ".repeat(right_pad)
        );
    } else {
        println!("│ {} │", content);
    }
}

/// Print box bottom.
pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Print a help option with flag and description, wrapping the description.
pub fn box_opt(flag: &str, desc: &str) {
    let inner_width = BOX_WIDTH - 4;
    let flag_col = 25;
    let desc_col = inner_width - flag_col;

    let flag_padded = if flag.len() < flag_col {
        format!("{}{}", flag, " ".repeat(flag_col - flag.len()))
    } else {
        flag[..flag_col].to_string()
    };

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in desc.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= desc_col {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    match lines.first() {
        Some(first) => {
            let padding = desc_col.saturating_sub(first.len());
            println!("│ {}{}{} │", flag_padded, first, " ".repeat(padding));
        }
        None => println!("│ {}{} │", flag_padded, " ".repeat(desc_col)),
    }

    let indent = " ".repeat(flag_col);
    for line in lines.iter().skip(1) {
        let padding = desc_col.saturating_sub(line.len());
        println!("│ {}{}{} │", indent, line, " ".repeat(padding));
    }
}

/// Calculate display width accounting for ANSI escape codes.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Entropy Estimation
// ============================================================================

/// Password entropy in bits: length * log2(charset size).
pub fn calculate_entropy(password_length: usize, charset_size: usize) -> f64 {
    if charset_size == 0 {
        return 0.0;
    }
    password_length as f64 * (charset_size as f64).log2()
}

/// Entropy strength description.
pub fn entropy_strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entropy_of_empty_charset_is_zero() {
        assert_eq!(calculate_entropy(12, 0), 0.0);
    }

    #[test]
    fn entropy_grows_with_length_and_charset() {
        let base = calculate_entropy(12, 62);
        assert!(calculate_entropy(13, 62) > base);
        assert!(calculate_entropy(12, 86) > base);
        // 12 chars over 86 symbols is ~77 bits
        let bits = calculate_entropy(12, 86);
        assert!(bits > 77.0 && bits < 78.0);
    }

    #[test]
    fn strength_bands() {
        assert_eq!(entropy_strength(10.0), "Weak");
        assert_eq!(entropy_strength(40.0), "Fair");
        assert_eq!(entropy_strength(80.0), "Strong");
        assert_eq!(entropy_strength(200.0), "Very Strong");
    }

    #[test]
    fn console_width_skips_ansi() {
        assert_eq!(console_width("plain"), 5);
        assert_eq!(console_width("\x1b[38;5;9mred\x1b[0m"), 3);
    }
}
