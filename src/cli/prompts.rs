//! Messages the CLI writes to stderr, and the quiet switch that gates them.
//!
//! Passwords go to stdout. Everything else here goes to stderr so that
//! `ringpass -n 5 > list.txt` captures nothing but passwords.

use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use ringpass::Strength;

use crate::terminal::{RED, RESET, YELLOW, strength_color};

static QUIET: AtomicBool = AtomicBool::new(false);

/// Switch quiet mode and return the log directive that matches it.
pub fn set_quiet(quiet: bool) -> &'static str {
    QUIET.store(quiet, Ordering::Relaxed);
    if quiet { "error" } else { "warn" }
}

fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Questions are only asked of a person: never in quiet mode and never
/// when stdin is piped.
fn can_ask() -> bool {
    !quiet() && unsafe { libc::isatty(0) == 1 }
}

pub fn warn(msg: &str) {
    if !quiet() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Errors are shown even when quiet.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

pub fn insecure_source(source: &str) {
    warn(&format!(
        "Warning: no secure random source, using {source}. Passwords may be predictable."
    ));
}

pub fn strength(strength: Strength, score: u8) {
    if !quiet() {
        let color = strength_color(strength);
        eprintln!("Strength: {color}{strength}{RESET} ({score}/5)");
    }
}

pub fn clipboard_copied() {
    if !quiet() {
        eprintln!("Copied to clipboard.");
    }
}

pub fn clipboard_error(err: &str) {
    error(&format!("Clipboard error: {err}"));
}

/// Parse a yes/no answer where an empty line means yes. `None` for
/// anything unrecognised.
fn answer(line: &str) -> Option<bool> {
    match line.trim().to_ascii_lowercase().as_str() {
        "" | "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Ask `question` on stderr and read answers from `input` until one is
/// understood. End of input or a read error counts as yes.
fn ask<R: BufRead>(question: &str, input: &mut R) -> bool {
    let mut line = String::new();
    loop {
        eprint!("{question} [Y/n]: ");
        let _ = io::stderr().flush();

        line.clear();
        match input.read_line(&mut line) {
            Ok(0) | Err(_) => return true,
            Ok(_) => {
                if let Some(yes) = answer(&line) {
                    return yes;
                }
            }
        }
    }
}

/// The clipboard could not be opened. Returns true to print the passwords
/// instead, false to give up. Without a person to ask, printing wins.
pub fn clipboard_fallback() -> bool {
    if !can_ask() {
        return true;
    }
    let print = ask("Clipboard unavailable. Print to terminal instead?", &mut io::stdin().lock());
    if !print {
        eprintln!("Aborted.");
    }
    print
}
