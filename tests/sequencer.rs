//! End-to-end behaviour of the ring generation sequence.

mod common;

use std::time::Duration;

use common::{Seeded, settings};
use ringpass::pass::{ANIMATION_TICKS, Phase, RING_SIZE, TICK_INTERVAL, classify};
use ringpass::settings::{MAX_LENGTH, MAX_RINGS, MIN_LENGTH, MIN_RINGS};
use ringpass::{Clock, Sequencer, Settings, SettingsError, SystemRandom, VirtualClock};

fn expected_password(seq: &Sequencer<Seeded>) -> String {
    let mut expected = String::new();
    for (ring, chars) in seq.rings().iter().enumerate() {
        for slot in seq.selection().slots(ring) {
            expected.push(chars.get(slot).unwrap());
        }
    }
    expected
}

#[test]
fn password_reads_selected_slots_of_final_rings() {
    let mut seq = Sequencer::new(settings(12, 4), Seeded::new(7)).unwrap();
    for ring in 0..4 {
        assert!(seq.toggle(ring, ring));
        assert!(seq.toggle(ring, ring + 5));
        assert!(seq.toggle(ring, 25 - ring));
    }
    assert!(seq.is_ready());

    let mut clock = VirtualClock::new();
    assert!(seq.run(&mut clock, |_| {}));

    assert_eq!(seq.password().as_str(), expected_password(&seq));
    assert_eq!(seq.strength(), classify(seq.password().as_str()));
}

#[test]
fn slots_are_read_in_ascending_order() {
    let mut seq = Sequencer::new(settings(12, 4), Seeded::new(11)).unwrap();
    for ring in 0..4 {
        // Toggled high to low; the password must still read low to high.
        seq.toggle(ring, 25);
        seq.toggle(ring, 10);
        seq.toggle(ring, 0);
    }
    seq.run(&mut VirtualClock::new(), |_| {});

    let password: Vec<char> = seq.password().as_str().chars().collect();
    for (ring, chunk) in password.chunks(3).enumerate() {
        let chars = &seq.rings()[ring];
        let expected: Vec<char> = [0, 10, 25].iter().filter_map(|&slot| chars.get(slot)).collect();
        assert_eq!(chunk, expected.as_slice());
    }
}

#[test]
fn twelve_over_four_gives_twelve_characters() {
    let mut seq = Sequencer::new(settings(12, 4), Seeded::new(1)).unwrap();
    for ring in 0..4 {
        assert_eq!(seq.selection().capacity(ring), 3);
    }
    seq.pick_random_slots();
    assert!(seq.run(&mut VirtualClock::new(), |_| {}));
    assert_eq!(seq.password().len(), 12);
}

#[test]
fn uneven_split_still_gives_exact_length() {
    let mut seq = Sequencer::new(settings(10, 3), Seeded::new(2)).unwrap();
    let caps: Vec<usize> = (0..3).map(|r| seq.selection().capacity(r)).collect();
    assert_eq!(caps, vec![4, 3, 3]);

    seq.pick_random_slots();
    seq.run(&mut VirtualClock::new(), |_| {});
    assert_eq!(seq.password().len(), 10);
    assert_eq!(seq.password().as_str(), expected_password(&seq));
}

#[test]
fn every_setting_combination_gives_exact_length() {
    let mut seed = 100;
    for length in MIN_LENGTH..=MAX_LENGTH {
        for rings in MIN_RINGS..=MAX_RINGS {
            seed += 1;
            let mut seq = Sequencer::new(settings(length, rings), Seeded::new(seed)).unwrap();
            seq.pick_random_slots();
            assert!(seq.run(&mut VirtualClock::new(), |_| {}), "{length}/{rings}");
            assert_eq!(seq.password().len(), length, "{length}/{rings}");
        }
    }
}

#[test]
fn timing_follows_tick_interval() {
    let mut seq = Sequencer::new(settings(12, 4), Seeded::new(3)).unwrap();
    seq.pick_random_slots();
    let mut clock = VirtualClock::new();
    seq.run(&mut clock, |_| {});

    let ticks = 4 * ANIMATION_TICKS;
    assert_eq!(clock.sleeps(), ticks as usize);
    assert_eq!(clock.elapsed(), TICK_INTERVAL * ticks);
    assert_eq!(clock.elapsed(), Duration::from_secs(8));
}

#[test]
fn frames_walk_rings_strictly_in_order() {
    let mut seq = Sequencer::new(settings(12, 3), Seeded::new(4)).unwrap();
    seq.pick_random_slots();

    let mut frames = Vec::new();
    seq.run(&mut VirtualClock::new(), |snap| {
        frames.push((snap.phase, snap.generating, snap.password.is_empty()));
    });

    // 3 rings * (20 resamples + commit) + assembly
    assert_eq!(frames.len(), 3 * (ANIMATION_TICKS as usize + 1) + 1);

    let active: Vec<usize> = frames.iter().filter_map(|(p, ..)| p.active_ring()).collect();
    assert!(active.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(active.first(), Some(&0));
    assert_eq!(active.last(), Some(&2));

    let (last_phase, last_generating, last_empty) = *frames.last().unwrap();
    assert_eq!(last_phase, Phase::Idle);
    assert!(!last_generating);
    assert!(!last_empty);

    // The password only appears once the sequence is over.
    assert!(frames[..frames.len() - 1].iter().all(|&(_, generating, empty)| generating && empty));
}

#[test]
fn controls_are_locked_while_generating() {
    let mut seq = Sequencer::new(settings(12, 4), Seeded::new(5)).unwrap();
    seq.pick_random_slots();
    let before = seq.selection().clone();

    assert!(seq.start().is_some());
    for _ in 0..5 {
        seq.step();
    }
    assert!(seq.is_generating());
    assert!(!seq.is_ready());

    assert!(!seq.toggle(0, 0));
    assert!(!seq.toggle(1, 20));
    assert!(!seq.pick_random_slots());
    assert!(!seq.clear_selection());
    assert_eq!(seq.start(), None);
    assert_eq!(seq.configure(settings(20, 5)), Ok(false));
    assert_eq!(seq.settings(), &settings(12, 4));
    assert_eq!(seq.selection(), &before);

    while seq.step().is_some() {}
    assert!(!seq.is_generating());
    assert_eq!(seq.password().len(), 12);
    let slot = seq.selection().slots(0).next().unwrap();
    assert!(seq.toggle(0, slot));
}

#[test]
fn incomplete_selection_cannot_start() {
    let mut seq = Sequencer::new(settings(12, 4), Seeded::new(6)).unwrap();
    seq.toggle(0, 1);
    let mut clock = VirtualClock::new();
    assert!(!seq.run(&mut clock, |_| panic!("no frames expected")));
    assert_eq!(clock.elapsed(), Duration::ZERO);
    assert!(seq.password().is_empty());
}

#[test]
fn configure_rebuilds_rings_and_clears_state() {
    let mut seq = Sequencer::new(settings(12, 4), Seeded::new(8)).unwrap();
    seq.pick_random_slots();
    seq.run(&mut VirtualClock::new(), |_| {});
    assert!(!seq.password().is_empty());

    assert_eq!(seq.configure(settings(20, 5)), Ok(true));
    assert_eq!(seq.rings().len(), 5);
    assert_eq!(seq.selection().ring_count(), 5);
    assert_eq!(seq.selection().total(), 0);
    assert!(seq.password().is_empty());
    assert_eq!(seq.phase(), Phase::Idle);
}

#[test]
fn configure_rejects_invalid_settings_and_keeps_old_ones() {
    let mut seq = Sequencer::new(settings(12, 4), Seeded::new(9)).unwrap();
    seq.toggle(0, 3);

    let none = Settings {
        uppercase: false,
        lowercase: false,
        digits: false,
        symbols: false,
        ..Settings::default()
    };
    assert_eq!(seq.configure(none), Err(SettingsError::NoCharacterClasses));
    assert_eq!(seq.configure(settings(40, 4)), Err(SettingsError::LengthOutOfRange(40)));
    assert_eq!(seq.settings(), &settings(12, 4));
    assert!(seq.selection().is_selected(0, 3));
}

#[test]
fn empty_pool_is_rejected_up_front() {
    let none = Settings {
        uppercase: false,
        lowercase: false,
        digits: false,
        symbols: false,
        ..Settings::default()
    };
    assert_eq!(
        Sequencer::new(none, Seeded::new(0)).err(),
        Some(SettingsError::NoCharacterClasses)
    );
}

#[test]
fn password_only_uses_enabled_classes() {
    let digits_only = Settings {
        uppercase: false,
        lowercase: false,
        symbols: false,
        ..settings(16, 4)
    };
    let mut seq = Sequencer::new(digits_only, Seeded::new(10)).unwrap();
    for ring in seq.rings() {
        assert!(ring.chars().all(|c| c.is_ascii_digit()));
    }
    seq.pick_random_slots();
    seq.run(&mut VirtualClock::new(), |snap| {
        for ring in snap.rings {
            assert!(ring.chars().all(|c| c.is_ascii_digit()));
        }
    });
    assert!(seq.password().as_str().chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn same_seed_same_password() {
    let run = |seed| {
        let mut seq = Sequencer::new(settings(16, 4), Seeded::new(seed)).unwrap();
        seq.pick_random_slots();
        seq.run(&mut VirtualClock::new(), |_| {});
        seq.password().as_str().to_owned()
    };
    assert_eq!(run(42), run(42));
}

#[test]
fn regenerating_reuses_selection() {
    let mut seq = Sequencer::new(settings(12, 4), Seeded::new(12)).unwrap();
    seq.pick_random_slots();
    let selection = seq.selection().clone();
    seq.run(&mut VirtualClock::new(), |_| {});
    seq.run(&mut VirtualClock::new(), |_| {});
    assert_eq!(seq.selection(), &selection);
    assert_eq!(seq.password().len(), 12);
}

#[test]
fn random_pick_fills_each_ring_with_distinct_slots() {
    let mut seq = Sequencer::new(settings(32, 2), Seeded::new(13)).unwrap();
    assert!(seq.pick_random_slots());
    for ring in 0..2 {
        let slots: Vec<usize> = seq.selection().slots(ring).collect();
        assert_eq!(slots.len(), 16);
        assert!(slots.iter().all(|&s| s < RING_SIZE));
    }
    assert!(seq.is_ready());
}

#[test]
fn snapshot_reports_insecure_fallback() {
    let seq = Sequencer::new(Settings::default(), SystemRandom::fallback()).unwrap();
    let snap = seq.snapshot();
    assert!(!snap.secure);
    assert!(!snap.generating);
    assert_eq!(snap.pool_size, 88);
}
