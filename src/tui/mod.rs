//! Interactive ring board.

mod input;
mod options;
mod text;
mod view;

pub use text::print_help;

use std::io;
use std::time::Duration;

use copypasta::{ClipboardContext, ClipboardProvider};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use zeroize::Zeroize;

use ringpass::{Sequencer, Settings, SystemClock, SystemRandom};

use crate::cli::{EXIT_USAGE, prompts};
use crate::terminal::RawModeGuard;
use input::{Action, Cursor};
use options::{Outcome, SettingsForm};
use view::Status;

/// Run TUI interactive mode. Returns the process exit code.
pub fn run(settings: Settings, fallback: bool) -> i32 {
    if let Err(e) = settings.validate() {
        prompts::error(&format!("Invalid settings: {e}"));
        return EXIT_USAGE;
    }

    let rng = if fallback {
        SystemRandom::fallback()
    } else {
        SystemRandom::new()
    };
    let seq = match Sequencer::new(settings, rng) {
        Ok(seq) => seq,
        Err(e) => {
            prompts::error(&format!("Invalid settings: {e}"));
            return EXIT_USAGE;
        }
    };

    let mut guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(e) => {
            prompts::error(&format!("Cannot take over the terminal: {e}"));
            return 1;
        }
    };

    let result = App::new(seq).main_loop();
    guard.disable();

    match result {
        Ok(()) => 0,
        Err(e) => {
            prompts::error(&format!("Terminal error: {e}"));
            1
        }
    }
}

struct App {
    seq: Sequencer<SystemRandom>,
    cursor: Cursor,
    status: Status,
    clipboard: Option<ClipboardContext>,
}

impl App {
    fn new(seq: Sequencer<SystemRandom>) -> Self {
        Self {
            seq,
            cursor: Cursor::default(),
            status: Status::None,
            clipboard: None,
        }
    }

    fn main_loop(&mut self) -> io::Result<()> {
        loop {
            self.draw();
            let key = read_key()?;
            let Some(action) = input::action(&key) else {
                continue;
            };
            match action {
                Action::Quit => return Ok(()),
                Action::Help => self.help()?,
                Action::Settings => {
                    if self.edit_settings()? {
                        return Ok(());
                    }
                }
                other => self.dispatch(other),
            }
        }
    }

    fn draw(&self) {
        view::board(&self.seq.snapshot(), self.cursor, &self.status).present();
    }

    fn dispatch(&mut self, action: Action) {
        self.status = Status::None;
        if self.cursor.apply(action, self.seq.rings().len()) {
            return;
        }

        match action {
            Action::Toggle => {
                let Cursor { ring, slot } = self.cursor;
                if !self.seq.toggle(ring, slot) {
                    self.status = Status::Error(view::toggle_refused(self.seq.selection(), ring));
                }
            }
            Action::Generate => self.generate(),
            Action::RandomPick => {
                self.seq.pick_random_slots();
            }
            Action::Clear => {
                self.seq.clear_selection();
            }
            Action::Copy => self.copy(),
            _ => {}
        }
    }

    /// Spin the rings in real time, redrawing after every step.
    fn generate(&mut self) {
        if !self.seq.is_ready() {
            let missing = self.seq.settings().length - self.seq.selection().total();
            self.status = Status::Error(format!("Select {missing} more slot(s) first"));
            return;
        }

        let cursor = self.cursor;
        let mut clock = SystemClock::new();
        self.seq.run(&mut clock, |snap| {
            view::board(snap, cursor, &Status::None).present();
        });
        discard_pending_keys();
    }

    fn copy(&mut self) {
        let password = self.seq.password();
        if password.is_empty() {
            self.status = Status::Error("Nothing to copy yet".to_string());
            return;
        }

        if self.clipboard.is_none() {
            match ClipboardContext::new() {
                Ok(ctx) => self.clipboard = Some(ctx),
                Err(e) => tracing::debug!(error = %e, "clipboard unavailable"),
            }
        }
        let Some(ctx) = self.clipboard.as_mut() else {
            self.status = Status::Error("Clipboard unavailable".to_string());
            return;
        };

        self.status = match ctx.set_contents(password.as_str().to_owned()) {
            Ok(()) => {
                if let Ok(mut retrieved) = ctx.get_contents() {
                    retrieved.zeroize();
                }
                Status::Info("Copied to clipboard".to_string())
            }
            Err(e) => Status::Error(format!("Clipboard error: {e}")),
        };
    }

    fn help(&self) -> io::Result<()> {
        let mut f = text::help_frame();
        f.line(" press any key to return");
        f.present();
        read_key().map(|_| ())
    }

    /// Returns true when the user asked to quit from the panel.
    fn edit_settings(&mut self) -> io::Result<bool> {
        let mut form = SettingsForm::new(*self.seq.settings());
        loop {
            form.draw().present();
            match form.handle(&read_key()?) {
                Outcome::Continue => {}
                Outcome::Cancel => return Ok(false),
                Outcome::Quit => return Ok(true),
                Outcome::Apply(settings) => match self.seq.configure(settings) {
                    Ok(_) => {
                        self.cursor.clamp(settings.rings);
                        self.status = Status::Info("Settings applied, rings rebuilt".to_string());
                        return Ok(false);
                    }
                    Err(e) => form.reject(e),
                },
            }
        }
    }
}

/// Block until a key press. Other events and key releases are skipped.
fn read_key() -> io::Result<KeyEvent> {
    loop {
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            return Ok(key);
        }
    }
}

/// Drop anything typed while the rings were spinning.
fn discard_pending_keys() {
    while event::poll(Duration::ZERO).unwrap_or(false) {
        if event::read().is_err() {
            break;
        }
    }
}
