//! # chordboard-types
//!
//! Shared type definitions for the chordboard keyboard-guitar.
//! This crate contains the musical data model and the action/effect
//! vocabulary used by chordboard-core and the chordboard binary.

pub mod action;
mod music;

pub use action::{Action, DispatchResult, MidiEffect};
pub use music::{ChordShape, ChordSlot, MusicalKey};

/// Index of one of the six emulated guitar strings, low to high.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct StringPosition(u8);

impl StringPosition {
    pub const COUNT: usize = 6;

    pub const ALL: [StringPosition; 6] = [
        StringPosition(0),
        StringPosition(1),
        StringPosition(2),
        StringPosition(3),
        StringPosition(4),
        StringPosition(5),
    ];

    /// Create a StringPosition. Panics if index >= 6.
    pub fn new(index: u8) -> Self {
        assert!((index as usize) < Self::COUNT, "string position out of range");
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for StringPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque identifier for a physical string-strike input (the keyboard
/// character the player hits). Keys the pressed-note map; which of the six
/// strings it drives is resolved separately by the string-key map.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct StringKey(char);

impl StringKey {
    pub fn new(ch: char) -> Self {
        Self(ch)
    }

    pub fn get(self) -> char {
        self.0
    }
}

impl std::fmt::Display for StringKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_position_all_has_six() {
        assert_eq!(StringPosition::ALL.len(), StringPosition::COUNT);
    }

    #[test]
    fn string_position_indices_0_to_5() {
        let indices: Vec<usize> = StringPosition::ALL.iter().map(|p| p.index()).collect();
        assert_eq!(indices, (0..6).collect::<Vec<usize>>());
    }

    #[test]
    #[should_panic]
    fn string_position_rejects_out_of_range() {
        StringPosition::new(6);
    }

    #[test]
    fn string_key_round_trips_char() {
        assert_eq!(StringKey::new('b').get(), 'b');
    }
}
