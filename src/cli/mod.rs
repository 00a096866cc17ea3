mod context;
mod flags;
mod help;
mod parse;
mod prompts;

pub use flags::CliFlags;
pub use help::print_help;
pub use parse::{ParseError, parse};

/// Run one-shot CLI mode.
pub fn run(args: Vec<String>) {
    let mut ctx = match context::Context::new(args) {
        Ok(c) => c,
        Err(e) => {
            prompts::error(&e);
            eprintln!("Try 'passgen --help' for usage.");
            std::process::exit(1);
        }
    };
    let _ = ctx.run();
}
