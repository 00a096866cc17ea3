//! The password generator screen.
//!
//! One screen, full redraw per key event. The screen owns all form state
//! (length, class toggles, theme) plus the last generated password.

use copypasta::{ClipboardContext, ClipboardProvider};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use zeroize::Zeroize;

use crate::pass::charset::CharClass;
use crate::pass::{self, MAX_LENGTH, MIN_LENGTH, Request};
use crate::rand;
use crate::terminal::{
    BOX_WIDTH, DIM, GREEN, RED, RESET, RawModeGuard, calculate_entropy, clear, console_width,
    entropy_strength, flush, hide_cursor, print_error, reset_terminal,
};

const LIGHT_BORDER: &str = "";
const DARK_BORDER: &str = "\x1b[38;5;245m";

#[derive(Debug, PartialEq, Eq)]
enum Status {
    Idle,
    Generated,
    Copied,
    NoClasses,
    ClipboardError(String),
}

#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    Redraw,
    Quit,
    Ignored,
}

pub struct Screen {
    request: Request,
    dark_mode: bool,
    password: String,
    status: Status,
    clipboard: Option<ClipboardContext>,
}

impl Screen {
    pub fn new() -> Self {
        Screen {
            request: Request::default(),
            dark_mode: false,
            password: String::new(),
            status: Status::Idle,
            clipboard: None,
        }
    }

    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> Action {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Left | KeyCode::Char('-') => self.adjust_length(-1),
            KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => self.adjust_length(1),
            KeyCode::Char('u') | KeyCode::Char('1') => self.toggle(CharClass::Uppercase),
            KeyCode::Char('l') | KeyCode::Char('2') => self.toggle(CharClass::Lowercase),
            KeyCode::Char('d') | KeyCode::Char('3') => self.toggle(CharClass::Digit),
            KeyCode::Char('s') | KeyCode::Char('4') => self.toggle(CharClass::Special),
            KeyCode::Enter | KeyCode::Char('g') => self.generate(),
            KeyCode::Char('c') => self.copy(),
            KeyCode::Char('t') => {
                self.dark_mode = !self.dark_mode;
                Action::Redraw
            }
            _ => Action::Ignored,
        }
    }

    fn adjust_length(&mut self, delta: isize) -> Action {
        let length = self.request.length.saturating_add_signed(delta);
        let clamped = length.clamp(MIN_LENGTH, MAX_LENGTH);
        if clamped == self.request.length {
            return Action::Ignored;
        }
        self.request.length = clamped;
        Action::Redraw
    }

    fn toggle(&mut self, class: CharClass) -> Action {
        self.request.classes.toggle(class);
        if self.status == Status::NoClasses && !self.request.classes.is_empty() {
            self.status = Status::Idle;
        }
        Action::Redraw
    }

    fn generate(&mut self) -> Action {
        match pass::generate(&self.request) {
            Ok(pass) => {
                self.password.zeroize();
                self.password = pass;
                self.status = Status::Generated;
            }
            Err(_) => self.status = Status::NoClasses,
        }
        Action::Redraw
    }

    /// Copy the displayed password. No-op while nothing is displayed.
    fn copy(&mut self) -> Action {
        if self.password.is_empty() {
            return Action::Ignored;
        }

        if self.clipboard.is_none() {
            match ClipboardContext::new() {
                Ok(ctx) => self.clipboard = Some(ctx),
                Err(e) => {
                    self.status = Status::ClipboardError(e.to_string());
                    return Action::Redraw;
                }
            }
        }

        let Some(ctx) = self.clipboard.as_mut() else {
            return Action::Redraw;
        };
        match ctx.set_contents(self.password.clone()) {
            Ok(()) => {
                if let Ok(mut retrieved) = ctx.get_contents() {
                    retrieved.zeroize();
                }
                self.status = Status::Copied;
            }
            Err(e) => self.status = Status::ClipboardError(e.to_string()),
        }
        Action::Redraw
    }

    // ------------------------------------------------------------------
    // Rendering (raw mode, so every line carries an explicit \r\n)
    // ------------------------------------------------------------------

    fn border(&self) -> &'static str {
        if self.dark_mode { DARK_BORDER } else { LIGHT_BORDER }
    }

    fn top(&self, title: &str) {
        let title_part = format!("─ {} ", title);
        let remaining = BOX_WIDTH - 2 - title_part.chars().count();
        print!("{}┌{}{}┐\r\n", self.border(), title_part, "─".repeat(remaining));
    }

    fn line(&self, content: &str) {
        let inner_width = BOX_WIDTH - 4;
        let display_len = console_width(content);
        let padding = inner_width.saturating_sub(display_len);
        print!(
            "{}│ {}{}{} │\r\n",
            self.border(),
            content,
            self.border(),
            " ".repeat(padding)
        );
    }

    fn rule(&self) {
        print!("{}├{}┤\r\n", self.border(), "─".repeat(BOX_WIDTH - 2));
    }

    fn bottom(&self) {
        print!("{}└{}┘\r\n", self.border(), "─".repeat(BOX_WIDTH - 2));
    }

    fn slider(&self) -> String {
        let filled = self.request.length;
        format!(
            "[{}{}] {}",
            "█".repeat(filled),
            "─".repeat(MAX_LENGTH - filled),
            self.request.length
        )
    }

    fn checkbox(&self, key: char, class: CharClass) -> String {
        let mark = if self.request.classes.contains(class) { 'x' } else { ' ' };
        format!("[{}] {}) {}", mark, key, class.label())
    }

    pub fn draw(&self) {
        clear();

        let charset = self.request.classes.size();
        let entropy = calculate_entropy(self.request.length, charset);

        self.top("Password Generator");
        self.line("");
        self.line("Password Length  (←/→ adjust)");
        self.line(&self.slider());
        self.line("");
        self.line(&self.checkbox('u', CharClass::Uppercase));
        self.line(&self.checkbox('l', CharClass::Lowercase));
        self.line(&self.checkbox('d', CharClass::Digit));
        self.line(&self.checkbox('s', CharClass::Special));
        self.line("");
        self.line(&format!(
            "Entropy: {:.1} bits ({}) • {} chars • {}",
            entropy,
            entropy_strength(entropy),
            charset,
            rand::entropy_source()
        ));
        self.rule();
        if self.password.is_empty() {
            self.line(&format!("{DIM}Your password will appear here{RESET}"));
        } else {
            self.line(&self.password);
        }
        self.rule();
        self.line(&format!(
            "[Enter] generate  [c] copy  [t] theme: {}  [q] quit",
            if self.dark_mode { "dark" } else { "light" }
        ));
        self.bottom();
        print!("{RESET}");

        match &self.status {
            Status::NoClasses => print!(" {RED}select at least one character type{RESET}\r\n"),
            Status::Copied => print!(" {GREEN}copied to clipboard{RESET}\r\n"),
            Status::ClipboardError(e) => print!(" {RED}clipboard error: {e}{RESET}\r\n"),
            Status::Idle | Status::Generated => print!("\r\n"),
        }
        flush();
    }
}

impl Default for Screen {
    fn default() -> Self {
        Screen::new()
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        self.password.zeroize();
    }
}

/// Run the interactive screen until the user quits.
pub fn run() {
    let mut screen = Screen::new();

    let _guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(e) => {
            print_error(&format!("Failed to enter raw mode: {e}"));
            return;
        }
    };
    hide_cursor();
    screen.draw();

    loop {
        match event::read() {
            Ok(Event::Key(key)) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match screen.handle_key(key.code, key.modifiers) {
                    Action::Quit => break,
                    Action::Redraw => screen.draw(),
                    Action::Ignored => {}
                }
            }
            Ok(Event::Resize(..)) => screen.draw(),
            Ok(_) => {}
            Err(_) => break,
        }
    }

    drop(_guard);
    reset_terminal();
    clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(c: char) -> (KeyCode, KeyModifiers) {
        (KeyCode::Char(c), KeyModifiers::NONE)
    }

    fn press(screen: &mut Screen, c: char) -> Action {
        let (code, mods) = key(c);
        screen.handle_key(code, mods)
    }

    #[test]
    fn defaults_match_the_widget() {
        let screen = Screen::default();
        assert_eq!(screen.request.length, 12);
        assert!(screen.request.classes.uppercase);
        assert!(screen.request.classes.lowercase);
        assert!(screen.request.classes.digits);
        assert!(!screen.request.classes.special);
        assert!(!screen.dark_mode);
        assert!(screen.password.is_empty());
    }

    #[test]
    fn toggles_flip_classes() {
        let mut screen = Screen::new();
        press(&mut screen, 's');
        assert!(screen.request.classes.special);
        press(&mut screen, 'u');
        assert!(!screen.request.classes.uppercase);
        press(&mut screen, '1');
        assert!(screen.request.classes.uppercase);
    }

    #[test]
    fn length_clamps_at_bounds() {
        let mut screen = Screen::new();
        for _ in 0..100 {
            screen.handle_key(KeyCode::Left, KeyModifiers::NONE);
        }
        assert_eq!(screen.request.length, MIN_LENGTH);
        assert_eq!(
            screen.handle_key(KeyCode::Left, KeyModifiers::NONE),
            Action::Ignored
        );

        for _ in 0..100 {
            screen.handle_key(KeyCode::Right, KeyModifiers::NONE);
        }
        assert_eq!(screen.request.length, MAX_LENGTH);
        assert_eq!(
            screen.handle_key(KeyCode::Right, KeyModifiers::NONE),
            Action::Ignored
        );
    }

    #[test]
    fn generate_fills_the_result_field() {
        let mut screen = Screen::new();
        assert_eq!(press(&mut screen, 'g'), Action::Redraw);
        assert_eq!(screen.password.len(), 12);
        assert_eq!(screen.status, Status::Generated);
    }

    #[test]
    fn generate_without_classes_raises_the_notice() {
        let mut screen = Screen::new();
        for c in ['u', 'l', 'd'] {
            press(&mut screen, c);
        }
        press(&mut screen, 'g');
        assert_eq!(screen.status, Status::NoClasses);
        assert!(screen.password.is_empty());

        // Reselecting a class clears the notice, user can retry
        press(&mut screen, 'd');
        assert_eq!(screen.status, Status::Idle);
        press(&mut screen, 'g');
        assert_eq!(screen.status, Status::Generated);
        assert_eq!(screen.password.len(), 12);
    }

    #[test]
    fn copy_without_password_is_a_noop() {
        let mut screen = Screen::new();
        assert_eq!(press(&mut screen, 'c'), Action::Ignored);
        assert!(screen.clipboard.is_none());
        assert_eq!(screen.status, Status::Idle);
    }

    #[test]
    fn theme_toggles() {
        let mut screen = Screen::new();
        press(&mut screen, 't');
        assert!(screen.dark_mode);
        press(&mut screen, 't');
        assert!(!screen.dark_mode);
    }

    #[test]
    fn quit_keys() {
        let mut screen = Screen::new();
        assert_eq!(press(&mut screen, 'q'), Action::Quit);
        assert_eq!(
            screen.handle_key(KeyCode::Esc, KeyModifiers::NONE),
            Action::Quit
        );
        assert_eq!(
            screen.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Action::Quit
        );
    }
}
