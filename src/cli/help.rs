use crate::terminal::{box_bottom, box_line, box_line_center, box_opt, box_top};

pub fn print_help() {
    box_top("Passgen");
    box_line_center("Password generator with configurable character classes");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: Run without arguments. Opens a single-screen");
    box_line("     TUI to set length, character classes and theme, generate");
    box_line("     passwords and copy them to the clipboard.");
    box_line("  2) Client: Pass flags directly (e.g., -l 20 -n 5) to generate");
    box_line("     passwords without the screen.");
    box_line("");
    box_line("USAGE:");
    box_line("  passgen [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Password:");
    box_opt("  -l, --length <N>", "Characters per password, 1-50 (default: 12)");
    box_opt("  -n, --number <N>", "How many to generate (default: 1)");
    box_opt("      --no-upper", "Drop uppercase letters from the alphabet");
    box_opt("      --no-lower", "Drop lowercase letters from the alphabet");
    box_opt("      --no-digits", "Drop digits from the alphabet");
    box_opt("      --special", "Add special characters !@#$%^&*()_+[]{}|;:,.<>?");
    box_line("");
    box_line(" Output:");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -q, --quiet", "Suppress all output except passwords");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  passgen                  Interactive screen");
    box_line("  passgen -l 16            One password, 16 characters");
    box_line("  passgen -l 20 -n 3       Three passwords, 20 characters each");
    box_line("  passgen --no-upper --no-lower   Digits only");
    box_line("  passgen -l 24 --special -b      With specials, to clipboard");
    box_line("");
    box_bottom();
    println!();
}
