//! Action types for the dispatch system.
//!
//! Actions represent player intents decoded from raw key input. Dispatch
//! turns them into state changes plus a list of MIDI side effects; the
//! runtime applies the effects to the output sink after dispatch returns.

use serde::{Deserialize, Serialize};

use crate::{ChordSlot, MusicalKey, StringKey};

/// A decoded player intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Switch the active musical key. Never changes the chord slot and
    /// never mutes anything on its own.
    SelectKey(MusicalKey),
    /// Switch the active chord within the current key, muting exactly the
    /// notes whose pitch changes.
    SelectChord(ChordSlot),
    /// Strum one string of the active chord.
    Strike(StringKey),
    Quit,
}

/// A pending MIDI message. Dispatch never talks to the device directly;
/// it emits these and the event loop flushes them to the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MidiEffect {
    NoteOn { pitch: u8, velocity: u8 },
    NoteOff { pitch: u8, velocity: u8 },
}

/// Result of dispatching an action: side effects for the event loop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchResult {
    pub quit: bool,
    pub midi: Vec<MidiEffect>,
}

impl DispatchResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_quit() -> Self {
        Self { quit: true, ..Self::default() }
    }

    pub fn push_midi(&mut self, effect: MidiEffect) {
        self.midi.push(effect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_has_no_effects() {
        let r = DispatchResult::none();
        assert!(!r.quit);
        assert!(r.midi.is_empty());
    }

    #[test]
    fn with_quit_sets_quit() {
        let r = DispatchResult::with_quit();
        assert!(r.quit);
        assert!(r.midi.is_empty());
    }

    #[test]
    fn push_midi_appends_in_order() {
        let mut r = DispatchResult::none();
        r.push_midi(MidiEffect::NoteOn { pitch: 48, velocity: 127 });
        r.push_midi(MidiEffect::NoteOff { pitch: 48, velocity: 64 });
        assert_eq!(r.midi.len(), 2);
        assert_eq!(r.midi[0], MidiEffect::NoteOn { pitch: 48, velocity: 127 });
    }
}
