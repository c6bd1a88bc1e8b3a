//! Capture sequencer tests.

use nybble_core::common::Nibble;
use nybble_core::core::sequencer::{CaptureState, LatchedOperands, Sequencer};
use proptest::prelude::*;

fn n(v: u8) -> Nibble {
    Nibble::new(v)
}

/// Advances with no press and no reset.
fn hold(seq: &mut Sequencer) -> nybble_core::core::sequencer::SequencerOutput {
    seq.step(false, Nibble::ZERO, false)
}

// ─── Capture walk ────────────────────────────────────────────────────────────

#[test]
fn idle_holds_await_a() {
    let mut seq = Sequencer::new();
    for _ in 0..10 {
        let out = hold(&mut seq);
        assert_eq!(out.state, CaptureState::AwaitA);
        assert!(!out.execute);
    }
    assert_eq!(seq.latches(), LatchedOperands::default());
}

#[test]
fn three_presses_walk_the_capture_cycle() {
    let mut seq = Sequencer::new();

    let out = seq.step(true, n(5), false);
    assert_eq!(out.state, CaptureState::AwaitB);
    assert_eq!(out.latches.operand_a, n(5));
    assert!(!out.execute);

    let out = seq.step(true, n(3), false);
    assert_eq!(out.state, CaptureState::AwaitOp);
    assert_eq!(out.latches.operand_b, n(3));
    assert!(!out.execute);

    let out = seq.step(true, n(0b0111), false);
    assert_eq!(out.state, CaptureState::Execute);
    assert_eq!(out.latches.opcode, n(0b0111));
    // The pulse fires on the Execute tick itself, not on the latching tick.
    assert!(!out.execute);

    let out = hold(&mut seq);
    assert!(out.execute);
    assert_eq!(out.state, CaptureState::AwaitA);
    // Latched registers survive the pulse.
    assert_eq!(out.latches.operand_a, n(5));
    assert_eq!(out.latches.operand_b, n(3));
    assert_eq!(out.latches.opcode, n(0b0111));
}

#[test]
fn execute_pulse_lasts_exactly_one_tick() {
    let mut seq = Sequencer::new();
    let _ = seq.step(true, n(1), false);
    let _ = seq.step(true, n(2), false);
    let _ = seq.step(true, n(0), false);
    assert!(hold(&mut seq).execute);
    for _ in 0..5 {
        assert!(!hold(&mut seq).execute);
    }
}

#[test]
fn bus_is_sampled_only_on_press_ticks() {
    let mut seq = Sequencer::new();
    // Bus value changes between presses; only press-tick values latch.
    let _ = seq.step(false, n(0xF), false);
    let _ = seq.step(true, n(4), false);
    let _ = seq.step(false, n(0xF), false);
    let _ = seq.step(true, n(2), false);
    let latches = seq.latches();
    assert_eq!(latches.operand_a, n(4));
    assert_eq!(latches.operand_b, n(2));
}

#[test]
fn held_press_level_advances_every_tick() {
    // The sequencer itself has no edge logic: feeding it a level consumes
    // one long press as three captures. The edge detector upstream exists
    // precisely so the composed controller never does this.
    let mut seq = Sequencer::new();
    assert_eq!(seq.step(true, n(1), false).state, CaptureState::AwaitB);
    assert_eq!(seq.step(true, n(2), false).state, CaptureState::AwaitOp);
    assert_eq!(seq.step(true, n(3), false).state, CaptureState::Execute);
}

#[test]
fn next_cycle_overwrites_latches() {
    let mut seq = Sequencer::new();
    let _ = seq.step(true, n(1), false);
    let _ = seq.step(true, n(2), false);
    let _ = seq.step(true, n(3), false);
    let _ = hold(&mut seq); // pulse, back to AwaitA

    let _ = seq.step(true, n(9), false);
    assert_eq!(seq.latches().operand_a, n(9));
    assert_eq!(seq.latches().operand_b, n(2)); // not yet overwritten
}

// ─── Reset ───────────────────────────────────────────────────────────────────

#[test]
fn reset_forces_await_a_and_clears_latches_same_tick() {
    let mut seq = Sequencer::new();
    let _ = seq.step(true, n(5), false);
    let _ = seq.step(true, n(3), false);
    assert_eq!(seq.state(), CaptureState::AwaitOp);

    let out = seq.step(false, Nibble::ZERO, true);
    assert_eq!(out.state, CaptureState::AwaitA);
    assert_eq!(out.latches, LatchedOperands::default());
    assert!(!out.execute);
}

#[test]
fn reset_wins_over_a_simultaneous_press() {
    let mut seq = Sequencer::new();
    let out = seq.step(true, n(7), true);
    assert_eq!(out.state, CaptureState::AwaitA);
    assert_eq!(out.latches, LatchedOperands::default());
}

#[test]
fn reset_on_the_execute_tick_suppresses_the_pulse() {
    let mut seq = Sequencer::new();
    let _ = seq.step(true, n(1), false);
    let _ = seq.step(true, n(2), false);
    let _ = seq.step(true, n(0), false);
    assert_eq!(seq.state(), CaptureState::Execute);

    let out = seq.step(false, Nibble::ZERO, true);
    assert!(!out.execute);
    assert_eq!(out.state, CaptureState::AwaitA);
}

#[test]
fn capture_restarts_cleanly_after_reset() {
    let mut seq = Sequencer::new();
    let _ = seq.step(true, n(5), false);
    let _ = seq.step(false, Nibble::ZERO, true);

    let out = seq.step(true, n(8), false);
    assert_eq!(out.state, CaptureState::AwaitB);
    assert_eq!(out.latches.operand_a, n(8));
    assert_eq!(out.latches.operand_b, Nibble::ZERO);
}

// ─── Properties ──────────────────────────────────────────────────────────────

proptest! {
    /// The execute pulse is never asserted on two consecutive ticks, for any
    /// press/reset waveform.
    #[test]
    fn never_two_consecutive_pulses(
        waveform in proptest::collection::vec((any::<bool>(), any::<bool>(), 0u8..16), 0..256),
    ) {
        let mut seq = Sequencer::new();
        let mut last = false;
        for &(press, reset, bus) in &waveform {
            let out = seq.step(press, Nibble::new(bus), reset);
            prop_assert!(!(out.execute && last));
            last = out.execute;
        }
    }

    /// Exactly one pulse fires per three captured presses (with no reset).
    #[test]
    fn one_pulse_per_three_presses(presses in 0u32..40) {
        let mut seq = Sequencer::new();
        let mut pulses = 0u32;
        for i in 0..presses {
            let out = seq.step(true, Nibble::new(i as u8), false);
            pulses += u32::from(out.execute);
            // Give every Execute state its pulse tick.
            let out = seq.step(false, Nibble::ZERO, false);
            pulses += u32::from(out.execute);
        }
        prop_assert_eq!(pulses, presses / 3);
    }
}
