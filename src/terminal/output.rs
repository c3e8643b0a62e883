//! Terminal output utilities.
//!
//! Screens are composed into a [`Frame`] and written in one go, with
//! `\r\n` line endings so they render the same in raw and cooked mode.

use std::io::{self, Write};

use ringpass::Strength;
use zeroize::Zeroize;

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const REVERSE: &str = "\x1b[7m";
pub const RED: &str = "\x1b[38;5;9m";
pub const YELLOW: &str = "\x1b[38;5;11m";
pub const GREEN: &str = "\x1b[38;5;10m";
pub const CYAN: &str = "\x1b[38;5;159m";

pub fn strength_color(strength: Strength) -> &'static str {
    match strength {
        Strength::Weak => RED,
        Strength::Moderate => YELLOW,
        Strength::Strong => GREEN,
    }
}

/// One colour per ring, outermost first.
pub const RING_COLORS: [&str; 6] = [
    "\x1b[38;5;75m",  // blue
    "\x1b[38;5;114m", // green
    "\x1b[38;5;221m", // yellow
    "\x1b[38;5;141m", // purple
    "\x1b[38;5;211m", // pink
    "\x1b[38;5;203m", // red
];

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;

/// A screen's worth of output, built line by line.
#[derive(Default)]
pub struct Frame {
    buf: String,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, content: &str) {
        self.buf.push_str(content);
        self.buf.push_str("\r\n");
    }

    pub fn blank(&mut self) {
        self.buf.push_str("\r\n");
    }

    /// Box top with optional title: ┌─ Title ───────────────────────────┐
    pub fn box_top(&mut self, title: &str) {
        if title.is_empty() {
            self.line(&format!("┌{}┐", "─".repeat(BOX_WIDTH - 2)));
        } else {
            let title_part = format!("─ {} ", title);
            let remaining = (BOX_WIDTH - 2).saturating_sub(console_width(&title_part));
            self.line(&format!("┌{}{}┐", title_part, "─".repeat(remaining)));
        }
    }

    /// Box content line: │ content                                        │
    pub fn box_line(&mut self, content: &str) {
        let inner_width = BOX_WIDTH - 4;
        let padding = inner_width.saturating_sub(console_width(content));
        self.line(&format!("│ {}{} │", content, " ".repeat(padding)));
    }

    /// Centered box content line: │          content          │
    pub fn box_line_center(&mut self, content: &str) {
        let inner_width = BOX_WIDTH - 4;
        let total_padding = inner_width.saturating_sub(console_width(content));
        let left_pad = total_padding / 2;
        let right_pad = total_padding - left_pad;
        self.line(&format!(
            "│ {}{}{} │",
            " ".repeat(left_pad),
            content,
            " ".repeat(right_pad)
        ));
    }

    /// Box bottom: └───────────────────────────────────────────────────────┘
    pub fn box_bottom(&mut self) {
        self.line(&format!("└{}┘", "─".repeat(BOX_WIDTH - 2)));
    }

    /// Help option with flag and description, wrapping the description.
    pub fn box_opt(&mut self, flag: &str, desc: &str) {
        let inner_width = BOX_WIDTH - 4;
        let flag_col = 27;
        let desc_col = inner_width - flag_col;

        let flag_padded = format!("{:<width$}", flag, width = flag_col);

        let mut lines: Vec<String> = Vec::new();
        let mut current_line = String::new();
        for word in desc.split_whitespace() {
            if current_line.is_empty() {
                current_line = word.to_string();
            } else if current_line.len() + 1 + word.len() <= desc_col {
                current_line.push(' ');
                current_line.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current_line));
                current_line = word.to_string();
            }
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }

        let first = lines.first().map(String::as_str).unwrap_or("");
        self.line(&format!("│ {}{:<width$} │", flag_padded, first, width = desc_col));

        let indent = " ".repeat(flag_col);
        for line in lines.iter().skip(1) {
            self.line(&format!("│ {}{:<width$} │", indent, line, width = desc_col));
        }
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Write the frame over the whole screen.
    pub fn present(&self) {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let _ = out.write_all(b"\x1b[H\x1b[2J");
        let _ = out.write_all(self.buf.as_bytes());
        let _ = out.flush();
    }

    /// Write the frame at the cursor, without clearing.
    pub fn print(&self) {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let _ = out.write_all(self.buf.as_bytes());
        let _ = out.flush();
    }
}

// Frames can hold a password.
impl Drop for Frame {
    fn drop(&mut self) {
        self.buf.zeroize();
    }
}

/// Display width accounting for ANSI escape codes.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_width_skips_escapes() {
        assert_eq!(console_width("abc"), 3);
        assert_eq!(console_width(&format!("{RED}abc{RESET}")), 3);
        assert_eq!(console_width("│ é │"), 5);
    }

    #[test]
    fn strength_colours_run_red_to_green() {
        assert_eq!(strength_color(Strength::Weak), RED);
        assert_eq!(strength_color(Strength::Moderate), YELLOW);
        assert_eq!(strength_color(Strength::Strong), GREEN);
    }

    #[test]
    fn box_lines_have_fixed_width() {
        let mut frame = Frame::new();
        frame.box_top("Rings");
        frame.box_line(&format!("{REVERSE}x{RESET} y"));
        frame.box_line_center("centered");
        frame.box_opt(
            "  -l, --length <N>",
            "Password length, between 4 and 32 characters inclusive (default: 12)",
        );
        frame.box_bottom();
        for line in frame.as_str().split("\r\n").filter(|l| !l.is_empty()) {
            assert_eq!(console_width(line), BOX_WIDTH, "{line:?}");
        }
    }
}
