//! Settings panel: length, ring count and character classes.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use ringpass::pass::charset;
use ringpass::settings::{MAX_LENGTH, MAX_RINGS, MIN_LENGTH, MIN_RINGS};
use ringpass::{Settings, SettingsError};

use crate::terminal::{BOLD, Frame, RED, RESET, REVERSE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Length,
    Rings,
    Uppercase,
    Lowercase,
    Digits,
    Symbols,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Length,
        Field::Rings,
        Field::Uppercase,
        Field::Lowercase,
        Field::Digits,
        Field::Symbols,
    ];

    fn label(self) -> &'static str {
        match self {
            Field::Length => "Password length",
            Field::Rings => "Rings",
            Field::Uppercase => "Uppercase  A-Z",
            Field::Lowercase => "Lowercase  a-z",
            Field::Digits => "Digits     0-9",
            Field::Symbols => "Symbols    !@#$...",
        }
    }
}

/// What the caller should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Apply(Settings),
    Cancel,
    Quit,
}

/// Draft settings being edited. Nothing touches the generator until the
/// draft is applied.
#[derive(Debug, Clone)]
pub struct SettingsForm {
    pub draft: Settings,
    field: usize,
    error: Option<SettingsError>,
}

impl SettingsForm {
    pub fn new(current: Settings) -> Self {
        Self {
            draft: current,
            field: 0,
            error: None,
        }
    }

    pub fn field(&self) -> Field {
        Field::ALL[self.field]
    }

    /// Show why the last apply was refused.
    pub fn reject(&mut self, error: SettingsError) {
        self.error = Some(error);
    }

    pub fn error(&self) -> Option<&SettingsError> {
        self.error.as_ref()
    }

    pub fn handle(&mut self, key: &KeyEvent) -> Outcome {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Outcome::Quit;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return Outcome::Cancel,
            KeyCode::Enter => {
                return match self.draft.validate() {
                    Ok(()) => Outcome::Apply(self.draft),
                    Err(e) => {
                        self.error = Some(e);
                        Outcome::Continue
                    }
                };
            }
            KeyCode::Up | KeyCode::Char('k') => self.field = self.field.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                self.field = (self.field + 1).min(Field::ALL.len() - 1)
            }
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => self.adjust(-1),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') => self.adjust(1),
            KeyCode::Char(' ') => self.adjust(0),
            _ => return Outcome::Continue,
        }
        self.error = None;
        Outcome::Continue
    }

    /// Step a number within its range, or flip a class. `0` flips only.
    fn adjust(&mut self, delta: isize) {
        let field = self.field();
        let d = &mut self.draft;
        match field {
            Field::Length if delta != 0 => {
                d.length = step(d.length, delta, MIN_LENGTH, MAX_LENGTH);
            }
            Field::Rings if delta != 0 => {
                d.rings = step(d.rings, delta, MIN_RINGS, MAX_RINGS);
            }
            Field::Length | Field::Rings => {}
            Field::Uppercase => d.uppercase = !d.uppercase,
            Field::Lowercase => d.lowercase = !d.lowercase,
            Field::Digits => d.digits = !d.digits,
            Field::Symbols => d.symbols = !d.symbols,
        }
    }

    pub fn draw(&self) -> Frame {
        let mut f = Frame::new();
        f.box_top("Settings");
        f.box_line("");

        for (i, field) in Field::ALL.iter().enumerate() {
            let value = match field {
                Field::Length => format!("< {:>2} >", self.draft.length),
                Field::Rings => format!("< {:>2} >", self.draft.rings),
                Field::Uppercase => checkbox(self.draft.uppercase),
                Field::Lowercase => checkbox(self.draft.lowercase),
                Field::Digits => checkbox(self.draft.digits),
                Field::Symbols => checkbox(self.draft.symbols),
            };
            let row = format!("{:<22}{value}", field.label());
            if i == self.field {
                f.box_line(&format!("{REVERSE}{BOLD} {row} {RESET}"));
            } else {
                f.box_line(&format!(" {row} "));
            }
        }

        f.box_line("");
        let caps = self.draft.capacities();
        let split: Vec<String> = caps.iter().map(usize::to_string).collect();
        f.box_line(&format!(
            "Characters per ring: {}   Pool: {}",
            split.join(" + "),
            charset::size(&self.draft)
        ));
        match &self.error {
            Some(e) => f.box_line(&format!("{RED}{e}{RESET}")),
            None => f.box_line(""),
        }
        f.box_line("");
        f.box_line("up/down choose  left/right change  space toggle  enter apply  esc back");
        f.box_bottom();
        f
    }
}

fn step(value: usize, delta: isize, min: usize, max: usize) -> usize {
    value.saturating_add_signed(delta).clamp(min, max)
}

fn checkbox(on: bool) -> String {
    if on { "[x]".to_string() } else { "[ ]".to_string() }
}
