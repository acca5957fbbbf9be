use chordboard_types::{ChordSlot, MusicalKey, StringKey};
use thiserror::Error;

/// Errors surfaced by the chord-state machine and the MIDI sink.
///
/// `DeviceUnavailable` is fatal at startup; the other two are recoverable,
/// the offending event is ignored and prior state is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChordError {
    #[error("no chord mapped to {} in key {}", .slot.name(), .key.name())]
    UnknownMapping { key: MusicalKey, slot: ChordSlot },

    #[error("key '{0}' is not mapped to a string")]
    UnknownString(StringKey),

    #[error("MIDI output unavailable: {0}")]
    DeviceUnavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_mapping_names_key_and_slot() {
        let err = ChordError::UnknownMapping { key: MusicalKey::G, slot: ChordSlot::Vii };
        assert_eq!(err.to_string(), "no chord mapped to vii\u{00b0} in key G");
    }

    #[test]
    fn unknown_string_names_the_key() {
        let err = ChordError::UnknownString(StringKey::new('z'));
        assert_eq!(err.to_string(), "key 'z' is not mapped to a string");
    }
}
