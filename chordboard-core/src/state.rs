//! Application state owned by the event loop.
//!
//! Everything the dispatch function mutates lives here, passed in
//! explicitly rather than held in globals, so tests get a fresh state per
//! case and the single-threaded loop is the only writer.

use std::collections::HashMap;

use chordboard_types::{ChordSlot, MusicalKey, StringKey};

/// The currently selected key and chord slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
    pub key: MusicalKey,
    pub slot: ChordSlot,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self { key: MusicalKey::C, slot: ChordSlot::I }
    }
}

/// Tracks the pitch each string input last triggered.
///
/// Entries are overwritten on every strike and never removed on key
/// release; a struck string rings until a chord change moves its pitch or
/// the process exits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PressedNotes {
    notes: HashMap<StringKey, u8>,
}

impl PressedNotes {
    pub fn record(&mut self, string: StringKey, pitch: u8) {
        self.notes.insert(string, pitch);
    }

    /// Whether any string is currently registered as sounding this pitch.
    /// A value scan, not a position check: two strings sharing a pitch
    /// match as soon as either of them was struck.
    pub fn is_sounding(&self, pitch: u8) -> bool {
        self.notes.values().any(|&p| p == pitch)
    }

    pub fn pitch_for(&self, string: StringKey) -> Option<u8> {
        self.notes.get(&string).copied()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

/// Context object threaded through dispatch: the whole mutable state of
/// the program.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub selection: SelectionState,
    pub pressed: PressedNotes,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_selection_is_c_tonic() {
        let state = AppState::new();
        assert_eq!(state.selection.key, MusicalKey::C);
        assert_eq!(state.selection.slot, ChordSlot::I);
        assert!(state.pressed.is_empty());
    }

    #[test]
    fn record_overwrites_prior_entry() {
        let mut pressed = PressedNotes::default();
        let string = StringKey::new('b');
        pressed.record(string, 48);
        pressed.record(string, 50);
        assert_eq!(pressed.len(), 1);
        assert_eq!(pressed.pitch_for(string), Some(50));
        assert!(!pressed.is_sounding(48));
    }

    #[test]
    fn is_sounding_scans_values_across_strings() {
        let mut pressed = PressedNotes::default();
        pressed.record(StringKey::new('b'), 48);
        pressed.record(StringKey::new('n'), 48);
        assert!(pressed.is_sounding(48));
        assert!(!pressed.is_sounding(52));
    }
}
