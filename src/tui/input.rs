use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use ringpass::pass::RING_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
    Toggle,
    Generate,
    RandomPick,
    Clear,
    Settings,
    Copy,
    Help,
    Quit,
}

/// Map a key press on the main screen to an action.
pub fn action(key: &KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }

    let action = match key.code {
        KeyCode::Up | KeyCode::Char('k') => Action::Up,
        KeyCode::Down | KeyCode::Char('j') => Action::Down,
        KeyCode::Left | KeyCode::Char('h') => Action::Left,
        KeyCode::Right | KeyCode::Char('l') => Action::Right,
        KeyCode::Char(' ') => Action::Toggle,
        KeyCode::Enter | KeyCode::Char('g') => Action::Generate,
        KeyCode::Char('r') => Action::RandomPick,
        KeyCode::Char('x') => Action::Clear,
        KeyCode::Char('s') => Action::Settings,
        KeyCode::Char('c') => Action::Copy,
        KeyCode::Char('?') => Action::Help,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => return None,
    };
    Some(action)
}

/// Highlighted slot on the ring grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub ring: usize,
    pub slot: usize,
}

impl Cursor {
    /// Apply a movement action. Rings stop at the edges, slots wrap around
    /// the ring. Returns false for non-movement actions.
    pub fn apply(&mut self, action: Action, rings: usize) -> bool {
        match action {
            Action::Up => self.ring = self.ring.saturating_sub(1),
            Action::Down => self.ring = (self.ring + 1).min(rings.saturating_sub(1)),
            Action::Left => self.slot = (self.slot + RING_SIZE - 1) % RING_SIZE,
            Action::Right => self.slot = (self.slot + 1) % RING_SIZE,
            _ => return false,
        }
        true
    }

    /// Pull the cursor back onto the grid after the ring count shrinks.
    pub fn clamp(&mut self, rings: usize) {
        self.ring = self.ring.min(rings.saturating_sub(1));
        self.slot = self.slot.min(RING_SIZE - 1);
    }
}
