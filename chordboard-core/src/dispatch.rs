//! Dispatch an action against the application state.
//!
//! Handlers mutate state and collect MIDI side effects into the returned
//! `DispatchResult`; the event loop flushes them to the sink afterwards.
//! On error nothing is mutated and no effects are produced, so a failed
//! event leaves selection and pressed notes exactly as they were.

use chordboard_types::{Action, ChordSlot, DispatchResult, MidiEffect, MusicalKey, StringKey,
                       StringPosition};

use crate::chords;
use crate::error::ChordError;
use crate::state::AppState;
use crate::strings;

/// Velocity for struck strings.
pub const STRIKE_VELOCITY: u8 = 127;
/// Velocity for note-offs issued when a chord change moves a pitch.
pub const MUTE_VELOCITY: u8 = 64;

/// Dispatch an action. Returns the side effects for the event loop, or an
/// error if the event refers to an unmapped chord or string.
pub fn dispatch_action(action: &Action, state: &mut AppState) -> Result<DispatchResult, ChordError> {
    match action {
        Action::Quit => Ok(DispatchResult::with_quit()),
        Action::SelectKey(key) => select_key(*key, state),
        Action::SelectChord(slot) => select_chord(*slot, state),
        Action::Strike(string) => strike(*string, state),
    }
}

fn select_key(key: MusicalKey, state: &mut AppState) -> Result<DispatchResult, ChordError> {
    state.selection.key = key;
    log::debug!("key selected: {}", key.name());
    Ok(DispatchResult::none())
}

fn select_chord(slot: ChordSlot, state: &mut AppState) -> Result<DispatchResult, ChordError> {
    let key = state.selection.key;
    let old = chords::shape(key, state.selection.slot)?;
    let new = chords::shape(key, slot)?;

    let mut result = DispatchResult::none();
    let mut muted: Vec<u8> = Vec::new();
    for position in StringPosition::ALL {
        let old_pitch = old.pitch(position);
        if old_pitch == new.pitch(position) {
            continue; // unchanged positions keep ringing
        }
        // Mute by pitch value, not by position: the changed pitch is
        // silenced if any string is currently registered as sounding it,
        // and each distinct pitch gets at most one note-off.
        if state.pressed.is_sounding(old_pitch) && !muted.contains(&old_pitch) {
            muted.push(old_pitch);
            result.push_midi(MidiEffect::NoteOff { pitch: old_pitch, velocity: MUTE_VELOCITY });
            log::debug!("muted note {old_pitch}");
        }
    }

    state.selection.slot = slot;
    log::debug!("chord selected: {} {}", key.name(), slot.name());
    Ok(result)
}

fn strike(string: StringKey, state: &mut AppState) -> Result<DispatchResult, ChordError> {
    let position = strings::string_position(string)?;
    let shape = chords::shape(state.selection.key, state.selection.slot)?;
    let pitch = shape.pitch(position);

    let mut result = DispatchResult::none();
    result.push_midi(MidiEffect::NoteOn { pitch, velocity: STRIKE_VELOCITY });
    state.pressed.record(string, pitch);
    log::debug!("string {string} -> note {pitch}");
    Ok(result)
}
