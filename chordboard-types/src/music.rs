use serde::{Deserialize, Serialize};

use crate::StringPosition;

/// Musical key (tonal center) selecting which chord set is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MusicalKey {
    C,
    G,
    D,
}

impl MusicalKey {
    pub const ALL: [MusicalKey; 3] = [MusicalKey::C, MusicalKey::G, MusicalKey::D];

    pub fn name(&self) -> &'static str {
        match self {
            MusicalKey::C => "C",
            MusicalKey::G => "G",
            MusicalKey::D => "D",
        }
    }
}

/// Scale-degree chord role within a key, plus the open-strings slot.
///
/// Not every key maps every slot; lookup through the chord table is
/// fallible and absent pairs are reported as errors, never as shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChordSlot {
    I,
    Ii,
    Iii,
    Iv,
    V,
    Vi,
    Vii,
    Open,
}

impl ChordSlot {
    pub const ALL: [ChordSlot; 8] = [
        ChordSlot::I,
        ChordSlot::Ii,
        ChordSlot::Iii,
        ChordSlot::Iv,
        ChordSlot::V,
        ChordSlot::Vi,
        ChordSlot::Vii,
        ChordSlot::Open,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ChordSlot::I => "I",
            ChordSlot::Ii => "ii",
            ChordSlot::Iii => "iii",
            ChordSlot::Iv => "IV",
            ChordSlot::V => "V",
            ChordSlot::Vi => "vi",
            ChordSlot::Vii => "vii\u{00b0}",
            ChordSlot::Open => "Open",
        }
    }
}

/// The six MIDI pitches assigned to the six string positions for one
/// chord, low string to high string. Pitches may repeat across positions
/// (open voicings reuse pitch classes on multiple strings).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChordShape([u8; 6]);

impl ChordShape {
    pub const fn new(pitches: [u8; 6]) -> Self {
        Self(pitches)
    }

    pub fn pitch(&self, position: StringPosition) -> u8 {
        self.0[position.index()]
    }

    pub fn pitches(&self) -> &[u8; 6] {
        &self.0
    }
}

impl std::fmt::Display for ChordShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{} {} {} {} {} {}]",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn key_all_has_3() {
        assert_eq!(MusicalKey::ALL.len(), 3);
    }

    #[test]
    fn key_names_unique() {
        let names: HashSet<&str> = MusicalKey::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names.len(), MusicalKey::ALL.len());
    }

    #[test]
    fn slot_all_has_8() {
        assert_eq!(ChordSlot::ALL.len(), 8);
    }

    #[test]
    fn slot_names_unique() {
        let names: HashSet<&str> = ChordSlot::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(names.len(), ChordSlot::ALL.len());
    }

    #[test]
    fn shape_indexes_low_to_high() {
        let shape = ChordShape::new([40, 45, 50, 55, 59, 64]);
        assert_eq!(shape.pitch(StringPosition::new(0)), 40);
        assert_eq!(shape.pitch(StringPosition::new(5)), 64);
    }

    #[test]
    fn shape_display_lists_pitches() {
        let shape = ChordShape::new([48, 48, 52, 55, 60, 64]);
        assert_eq!(shape.to_string(), "[48 48 52 55 60 64]");
    }
}
