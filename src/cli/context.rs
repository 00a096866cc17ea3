//! CLI context - bundles the generation request, flags, and clipboard state.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use super::{CliFlags, print_help, prompts};
use crate::pass::{self, Request};

/// Early exit - not an error, just done.
pub struct Done;

/// Application context for CLI mode.
pub struct Context {
    pub request: Request,
    pub count: usize,
    pub clipboard: Option<ClipboardContext>,
    pub flags: CliFlags,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    /// Returns Err with the error message if parsing fails.
    pub fn new(args: Vec<String>) -> Result<Self, String> {
        let flags = super::parse(&args).map_err(|e| e.to_string())?;

        let mut request = Request::default();
        if let Some(len) = flags.length {
            request.length = len;
        }
        request.classes.uppercase = !flags.no_upper;
        request.classes.lowercase = !flags.no_lower;
        request.classes.digits = !flags.no_digits;
        request.classes.special = flags.special;

        let count = flags.number.unwrap_or(1).max(1);

        Ok(Self {
            request,
            count,
            clipboard: None,
            flags,
        })
    }

    /// Run CLI. Returns `Err(Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Done> {
        self.handle_info_flags()?;
        prompts::set_quiet(self.flags.quiet);
        self.setup_clipboard();
        self.generate_output();
        Ok(())
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            print_help();
            return Err(Done);
        }
        if self.flags.version {
            println!("passgen {}", env!("CARGO_PKG_VERSION"));
            return Err(Done);
        }
        Ok(())
    }

    fn setup_clipboard(&mut self) {
        if !self.flags.clipboard {
            return;
        }
        match ClipboardContext::new() {
            Ok(ctx) => self.clipboard = Some(ctx),
            Err(_) => {
                if !prompts::clipboard_fallback_prompt() {
                    std::process::exit(0);
                }
                // Clipboard stays None, passwords go to stdout instead
                prompts::warn("Clipboard unavailable, printing to terminal");
            }
        }
    }

    /// Generate passwords and print or copy them.
    fn generate_output(&mut self) {
        let mut batch = match pass::generate_batch(&self.request, self.count) {
            Ok(b) => b,
            Err(e) => {
                prompts::error(&e.to_string());
                std::process::exit(1);
            }
        };

        match self.clipboard.as_mut() {
            Some(ctx) => match ctx.set_contents(batch.clone()) {
                Ok(()) => {
                    if let Ok(mut retrieved) = ctx.get_contents() {
                        retrieved.zeroize();
                    }
                    prompts::clipboard_copied();
                }
                Err(e) => prompts::clipboard_error(&e.to_string()),
            },
            None => print!("{batch}"),
        }

        batch.zeroize();
    }
}
