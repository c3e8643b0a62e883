//! CLI context - bundles settings, flags, and clipboard state.

use std::io::{self, BufRead, Write};

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use ringpass::pass::strength;
use ringpass::{RandomSource, Sequencer, Settings, SystemRandom, VirtualClock};

use super::{CliFlags, prompts};
use crate::tui::print_help;

/// Exit status for bad arguments or settings.
pub const EXIT_USAGE: i32 = 2;

/// Why the CLI stopped before finishing normally.
pub enum Exit {
    /// Early exit - not an error, just done.
    Done,
    Failed(i32),
}

impl Exit {
    pub fn code(&self) -> i32 {
        match self {
            Exit::Done => 0,
            Exit::Failed(code) => *code,
        }
    }
}

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
    pub clipboard: Option<ClipboardContext>,
}

impl Context {
    pub fn new(flags: CliFlags) -> Self {
        Self {
            settings: flags.settings(),
            flags,
            clipboard: None,
        }
    }

    /// Run CLI. Returns `Err(Exit::Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Exit> {
        self.handle_info_flags()?;
        self.handle_check()?;
        self.validate()?;
        self.handle_clipboard()?;
        self.generate_output()
    }

    fn handle_info_flags(&self) -> Result<(), Exit> {
        if self.flags.help {
            print_help();
            return Err(Exit::Done);
        }
        if self.flags.version {
            println!("ringpass {}", env!("CARGO_PKG_VERSION"));
            return Err(Exit::Done);
        }
        Ok(())
    }

    /// `--check`: classify each stdin line without echoing it.
    fn handle_check(&self) -> Result<(), Exit> {
        if !self.flags.check {
            return Ok(());
        }

        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let mut line = String::new();
        let mut reader = stdin.lock();

        loop {
            line.zeroize();
            match reader.read_line(&mut line) {
                Ok(0) => break,
                Ok(_) => {
                    let candidate = line.trim_end_matches(['\r', '\n']);
                    let score = strength::score(candidate);
                    let label = strength::classify(candidate);
                    let _ = writeln!(out, "{label}\t{score}/5");
                }
                Err(e) => {
                    line.zeroize();
                    prompts::error(&format!("Failed to read stdin: {e}"));
                    return Err(Exit::Failed(1));
                }
            }
        }

        line.zeroize();
        Err(Exit::Done)
    }

    fn validate(&self) -> Result<(), Exit> {
        self.settings.validate().map_err(|e| {
            prompts::error(&format!("Invalid settings: {e}"));
            Exit::Failed(EXIT_USAGE)
        })
    }

    fn handle_clipboard(&mut self) -> Result<(), Exit> {
        if !self.flags.clipboard {
            return Ok(());
        }
        match ClipboardContext::new() {
            Ok(c) => {
                self.clipboard = Some(c);
                Ok(())
            }
            Err(e) => {
                tracing::debug!(error = %e, "clipboard unavailable");
                if prompts::clipboard_fallback() {
                    Ok(())
                } else {
                    Err(Exit::Done)
                }
            }
        }
    }

    fn random_source(&self) -> SystemRandom {
        let rng = if self.flags.fallback {
            SystemRandom::fallback()
        } else {
            SystemRandom::new()
        };
        if !rng.is_secure() {
            prompts::insecure_source(rng.name());
        }
        rng
    }

    /// Pick random slots, spin the rings on a virtual clock, and emit
    /// each password to stdout or the clipboard.
    pub fn generate_output(&mut self) -> Result<(), Exit> {
        let mut seq = Sequencer::new(self.settings, self.random_source()).map_err(|e| {
            prompts::error(&format!("Invalid settings: {e}"));
            Exit::Failed(EXIT_USAGE)
        })?;

        let count = self.flags.number.unwrap_or(1).max(1);
        let mut clock = VirtualClock::new();
        let mut passwords = String::new();

        let stdout = io::stdout();
        let mut out = stdout.lock();

        for _ in 0..count {
            seq.pick_random_slots();
            if !seq.run(&mut clock, |_| {}) {
                prompts::error("Generation did not start");
                return Err(Exit::Failed(1));
            }

            let password = seq.password().as_str();
            if self.clipboard.is_some() {
                passwords.push_str(password);
                passwords.push('\n');
            } else if writeln!(out, "{password}").is_err() {
                // Closed pipe: nobody is reading any more.
                break;
            }
        }
        let _ = out.flush();
        drop(out);

        if count == 1 {
            let password = seq.password().as_str();
            prompts::strength(seq.strength(), strength::score(password));
        }

        if let Some(ctx) = self.clipboard.as_mut() {
            if count == 1 {
                passwords.truncate(passwords.trim_end().len());
            }
            match ctx.set_contents(passwords.clone()) {
                Ok(_) => {
                    if let Ok(mut retrieved) = ctx.get_contents() {
                        retrieved.zeroize();
                    }
                    prompts::clipboard_copied();
                }
                Err(e) => {
                    prompts::clipboard_error(&e.to_string());
                    passwords.zeroize();
                    return Err(Exit::Failed(1));
                }
            }
            passwords.zeroize();
        }

        tracing::debug!(count, clipboard = self.clipboard.is_some(), "passwords written");
        Ok(())
    }
}
