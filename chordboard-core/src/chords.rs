//! Static chord table.
//!
//! Maps (key, slot) to the six MIDI pitches assigned to the six string
//! positions, low string to high string. Voicings follow open guitar
//! positions; where a voicing plays fewer than six strings the lowest
//! sounding pitch is doubled onto the unplayed low strings, so every
//! defined shape is always exactly six pitches.
//!
//! Key C defines all eight slots. Keys G and D have no open-position
//! diminished voicing, so their vii° slot is unmapped and lookup reports
//! it as an error instead of returning a shape.

use chordboard_types::{ChordShape, ChordSlot, MusicalKey};

use crate::error::ChordError;

/// Look up the chord shape for a (key, slot) pair.
pub fn shape(key: MusicalKey, slot: ChordSlot) -> Result<ChordShape, ChordError> {
    chord_pitches(key, slot)
        .map(ChordShape::new)
        .ok_or(ChordError::UnknownMapping { key, slot })
}

fn chord_pitches(key: MusicalKey, slot: ChordSlot) -> Option<[u8; 6]> {
    use ChordSlot::*;
    use MusicalKey::*;

    let pitches = match (key, slot) {
        // Key of C major
        (C, I) => [48, 48, 52, 55, 60, 64],   // C major
        (C, Ii) => [50, 50, 50, 57, 62, 65],  // D minor
        (C, Iii) => [40, 47, 52, 55, 59, 64], // E minor
        (C, Iv) => [53, 53, 53, 57, 60, 65],  // F major
        (C, V) => [43, 47, 50, 55, 59, 67],   // G major
        (C, Vi) => [45, 45, 52, 57, 60, 64],  // A minor
        (C, Vii) => [50, 50, 50, 56, 59, 65], // B diminished

        // Key of G major
        (G, I) => [43, 47, 50, 55, 59, 67],   // G major
        (G, Ii) => [45, 45, 52, 57, 60, 64],  // A minor
        (G, Iii) => [47, 47, 54, 59, 62, 66], // B minor
        (G, Iv) => [48, 48, 52, 55, 60, 64],  // C major
        (G, V) => [50, 50, 50, 57, 62, 66],   // D major
        (G, Vi) => [40, 47, 52, 55, 59, 64],  // E minor

        // Key of D major
        (D, I) => [50, 50, 50, 57, 62, 66],   // D major
        (D, Ii) => [40, 47, 52, 55, 59, 64],  // E minor
        (D, Iii) => [42, 49, 54, 57, 61, 66], // F# minor
        (D, Iv) => [43, 47, 50, 55, 59, 67],  // G major
        (D, V) => [45, 45, 52, 57, 61, 64],   // A major
        (D, Vi) => [47, 47, 54, 59, 62, 66],  // B minor

        // Standard tuning, all strings open: E2 A2 D3 G3 B3 E4
        (_, Open) => [40, 45, 50, 55, 59, 64],

        (G, Vii) | (D, Vii) => return None,
    };

    Some(pitches)
}
