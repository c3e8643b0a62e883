use crate::terminal::{BOLD, Frame, RESET};

/// Boxed help screen shared by `--help` and the `?` key.
pub fn help_frame() -> Frame {
    let mut f = Frame::new();
    f.box_top("Ringpass");
    f.box_line_center("Password generator built from spinning character rings");
    f.box_line("");
    f.box_line("HOW IT WORKS:");
    f.box_line("  Each ring holds 26 random characters. Pick slots on every ring,");
    f.box_line("  then generate: the rings spin one after another and the password");
    f.box_line("  is read from your slots once each ring stops.");
    f.box_line("");
    f.box_line("USAGE:");
    f.box_line("  ringpass              Interactive ring board");
    f.box_line("  ringpass [OPTIONS]    Generate with randomly picked slots");
    f.box_line("");
    f.box_line("OPTIONS:");
    f.box_line(" Password:");
    f.box_opt("  -l, --length <N>", "Password length, 4 to 32 (default: 12)");
    f.box_opt("  -r, --rings <N>", "Number of rings, 2 to 6 (default: 4)");
    f.box_opt("  -n, --number <N>", "How many passwords to generate (default: 1)");
    f.box_opt("      --no-upper", "Leave out uppercase letters");
    f.box_opt("      --no-lower", "Leave out lowercase letters");
    f.box_opt("      --no-digits", "Leave out digits");
    f.box_opt("      --no-symbols", "Leave out symbols");
    f.box_line("");
    f.box_line(" Output:");
    f.box_opt("  -b, --board", "Copy to clipboard instead of printing");
    f.box_opt("  -q, --quiet", "Suppress everything except passwords");
    f.box_opt("      --check", "Rate each password read from stdin");
    f.box_line("");
    f.box_line(" Other:");
    f.box_opt("  -i, --interactive", "Open the ring board with the given settings");
    f.box_opt("      --fallback", "Use the non-secure cycle-counter source");
    f.box_opt("  -h, --help", "Display this help message");
    f.box_opt("  -v, --version", "Display version");
    f.box_line("");
    f.box_line("KEYS (interactive):");
    f.box_opt("  arrows / h j k l", "Move between slots and rings");
    f.box_opt("  space", "Select or deselect the slot");
    f.box_opt("  g / enter", "Generate once every ring is full");
    f.box_opt("  r", "Pick random slots on every ring");
    f.box_opt("  x", "Clear the selection");
    f.box_opt("  s", "Change length, rings and character classes");
    f.box_opt("  c", "Copy the password to the clipboard");
    f.box_opt("  ? / q", "Help / quit");
    f.box_line("");
    f.box_line("LOGGING:");
    f.box_line("  RINGPASS_LOG=debug ringpass -n 3    Trace generation on stderr");
    f.box_line("");
    f.box_line("EXAMPLES:");
    f.box_line("  ringpass -l 16 -r 4       One 16-character password");
    f.box_line("  ringpass -n 5 --no-symbols   Five alphanumeric passwords");
    f.box_line("  echo 'hunter2' | ringpass --check");
    f.box_line("");
    f.box_bottom();
    f
}

pub fn print_help() {
    let mut f = help_frame();
    f.blank();
    f.print();
}

/// One line of key hints for the bottom of the board.
pub fn key_hints() -> String {
    format!(
        "{BOLD}space{RESET} pick  {BOLD}g{RESET} gen  {BOLD}r{RESET} random  \
         {BOLD}x{RESET} clear  {BOLD}s{RESET} setup  {BOLD}c{RESET} copy  \
         {BOLD}?{RESET} help  {BOLD}q{RESET} quit"
    )
}
