//! Main board rendering.

use ringpass::pass::strength;
use ringpass::{Phase, SlotSelection, Snapshot};

use super::input::Cursor;
use super::text::key_hints;
use crate::terminal::{
    BOLD, CYAN, DIM, Frame, GREEN, RED, RESET, REVERSE, RING_COLORS, UNDERLINE, strength_color,
};

/// Bottom line of the board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    None,
    Info(String),
    Error(String),
}

/// Why a slot on `ring` could not be selected.
pub fn toggle_refused(selection: &SlotSelection, ring: usize) -> String {
    if selection.capacity(ring) == 0 {
        format!("Ring {} takes no slots at this length", ring + 1)
    } else {
        format!("Ring {} is full, deselect a slot first", ring + 1)
    }
}

/// One ring row: marker, label, fill count, then the 26 characters.
fn ring_row(snap: &Snapshot<'_>, ring: usize, cursor: Cursor) -> String {
    let color = RING_COLORS[ring % RING_COLORS.len()];
    let active = snap.phase.active_ring() == Some(ring);
    let selection = snap.selection;

    let marker = if active { format!("{BOLD}>{RESET}") } else { " ".to_string() };
    let mut row = format!(
        "{marker} {color}R{}{RESET} {:>2}/{:<2} ",
        ring + 1,
        selection.count(ring),
        selection.capacity(ring)
    );

    for (slot, c) in snap.rings[ring].chars().enumerate() {
        let mut style = String::from(color);
        if selection.is_selected(ring, slot) {
            style.push_str(REVERSE);
        }
        if !snap.generating && cursor.ring == ring && cursor.slot == slot {
            style.push_str(BOLD);
            style.push_str(UNDERLINE);
        }
        if snap.generating && !active {
            style.push_str(DIM);
        }
        row.push_str(&format!("{style}{c}{RESET}"));
        if slot + 1 < snap.rings[ring].len() {
            row.push(' ');
        }
    }
    row
}

fn header(snap: &Snapshot<'_>) -> String {
    let bits = strength::entropy_bits(snap.settings.length, snap.pool_size);
    let source = if snap.secure {
        format!("{GREEN}{}{RESET}", snap.source)
    } else {
        format!("{RED}{} (NOT SECURE){RESET}", snap.source)
    };
    format!(
        "{} chars  {} rings  pool {}  ~{bits:.0} bits  {source}",
        snap.settings.length, snap.settings.rings, snap.pool_size
    )
}

fn password_lines(f: &mut Frame, snap: &Snapshot<'_>) {
    match snap.phase {
        Phase::Idle if snap.password.is_empty() => {
            f.box_line(&format!("{DIM}Password: fill every ring, then press g{RESET}"));
            f.box_line("");
        }
        Phase::Idle => {
            let color = strength_color(snap.strength);
            let score = strength::score(snap.password.as_str());
            f.box_line(&format!("Password: {BOLD}{CYAN}{}{RESET}", snap.password.as_str()));
            f.box_line(&format!("Strength: {color}{}{RESET} ({score}/5)", snap.strength));
        }
        Phase::Done => {
            f.box_line("Password: assembling...");
            f.box_line("");
        }
        Phase::Animating { ring, .. } | Phase::Selecting { ring } => {
            f.box_line(&format!(
                "Password: spinning ring {} of {}...",
                ring + 1,
                snap.rings.len()
            ));
            f.box_line("");
        }
    }
}

/// Compose the whole board for one frame.
pub fn board(snap: &Snapshot<'_>, cursor: Cursor, status: &Status) -> Frame {
    let mut f = Frame::new();
    f.box_top("Ringpass");
    f.box_line(&header(snap));
    f.box_line("");

    for ring in 0..snap.rings.len() {
        f.box_line(&ring_row(snap, ring, cursor));
    }

    f.box_line("");
    password_lines(&mut f, snap);
    f.box_line("");

    let status_line = match status {
        Status::None if snap.generating => format!("{DIM}generating, keys are ignored{RESET}"),
        Status::None if snap.ready => format!("{GREEN}ready{RESET}: press g to generate"),
        Status::None => format!(
            "{DIM}{}/{} slots selected{RESET}",
            snap.selection.total(),
            snap.settings.length
        ),
        Status::Info(msg) => format!("{GREEN}{msg}{RESET}"),
        Status::Error(msg) => format!("{RED}{msg}{RESET}"),
    };
    f.box_line(&status_line);
    f.box_line(&key_hints());
    f.box_bottom();
    f
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::{BOX_WIDTH, console_width};
    use ringpass::{Sequencer, Settings, SystemRandom, VirtualClock};

    fn assert_fits(frame: &Frame) {
        for line in frame.as_str().split("\r\n").filter(|l| !l.is_empty()) {
            assert_eq!(console_width(line), BOX_WIDTH, "{line:?}");
        }
    }

    #[test]
    fn board_fits_for_every_ring_count() {
        for rings in 2..=6 {
            let settings = Settings {
                length: 32,
                rings,
                ..Settings::default()
            };
            let mut seq = Sequencer::new(settings, SystemRandom::fallback()).unwrap();
            assert_fits(&board(&seq.snapshot(), Cursor::default(), &Status::None));

            seq.pick_random_slots();
            seq.run(&mut VirtualClock::new(), |snap| {
                assert_fits(&board(snap, Cursor::default(), &Status::None));
            });
            let done = board(&seq.snapshot(), Cursor::default(), &Status::Info("copied".into()));
            assert_fits(&done);
            assert!(done.as_str().contains(seq.password().as_str()));
        }
    }

    #[test]
    fn refusal_names_empty_rings() {
        let settings = Settings {
            length: 4,
            rings: 6,
            ..Settings::default()
        };
        let mut seq = Sequencer::new(settings, SystemRandom::fallback()).unwrap();
        assert!(!seq.toggle(4, 0));
        assert_eq!(
            toggle_refused(seq.selection(), 4),
            "Ring 5 takes no slots at this length"
        );

        assert!(seq.toggle(0, 0));
        assert!(!seq.toggle(0, 1));
        assert_eq!(toggle_refused(seq.selection(), 0), "Ring 1 is full, deselect a slot first");
    }

    #[test]
    fn insecure_source_is_flagged() {
        let seq = Sequencer::new(Settings::default(), SystemRandom::fallback()).unwrap();
        let frame = board(&seq.snapshot(), Cursor::default(), &Status::None);
        assert!(frame.as_str().contains("NOT SECURE"));
    }
}
