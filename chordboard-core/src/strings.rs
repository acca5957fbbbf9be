//! Static string-key map: which physical input drives which string.
//!
//! `b n m i o p` play the six strings low to high, matching a split
//! left-hand/right-hand layout on a QWERTY keyboard.

use chordboard_types::{StringKey, StringPosition};

use crate::error::ChordError;

/// Resolve a physical string input to its string position.
pub fn string_position(key: StringKey) -> Result<StringPosition, ChordError> {
    let index = match key.get() {
        'b' => 0, // low E
        'n' => 1, // A
        'm' => 2, // D
        'i' => 3, // G
        'o' => 4, // B
        'p' => 5, // high E
        _ => return Err(ChordError::UnknownString(key)),
    };
    Ok(StringPosition::new(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_all_six_strings_low_to_high() {
        let keys = ['b', 'n', 'm', 'i', 'o', 'p'];
        for (expected, ch) in keys.into_iter().enumerate() {
            let position = string_position(StringKey::new(ch)).unwrap();
            assert_eq!(position.index(), expected);
        }
    }

    #[test]
    fn rejects_unmapped_input() {
        assert_eq!(
            string_position(StringKey::new('z')),
            Err(ChordError::UnknownString(StringKey::new('z')))
        );
    }

    #[test]
    fn mapping_is_case_sensitive() {
        assert!(string_position(StringKey::new('B')).is_err());
    }
}
