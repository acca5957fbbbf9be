//! Compiled-in keymap: raw key events to actions.
//!
//! Digits 1-7 pick the diatonic chords, 8 the open strings, `c`/`g`/`d`
//! switch the musical key, Esc or Ctrl+C quits. Every other plain
//! character is treated as a string-strike candidate; the string-key map
//! in chordboard-core decides whether it actually drives a string.

use chordboard_types::{Action, ChordSlot, MusicalKey, StringKey};

use crate::input::{InputEvent, KeyCode};

/// Resolve a key event to an action, or None for events the app ignores.
pub fn resolve(event: &InputEvent) -> Option<Action> {
    if event.modifiers.ctrl || event.modifiers.alt {
        return match (event.modifiers.ctrl, event.key) {
            (true, KeyCode::Char('c')) => Some(Action::Quit),
            _ => None,
        };
    }

    match event.key {
        KeyCode::Escape => Some(Action::Quit),
        KeyCode::Char(ch) => Some(resolve_char(ch)),
    }
}

fn resolve_char(ch: char) -> Action {
    match ch {
        '1' => Action::SelectChord(ChordSlot::I),
        '2' => Action::SelectChord(ChordSlot::Ii),
        '3' => Action::SelectChord(ChordSlot::Iii),
        '4' => Action::SelectChord(ChordSlot::Iv),
        '5' => Action::SelectChord(ChordSlot::V),
        '6' => Action::SelectChord(ChordSlot::Vi),
        '7' => Action::SelectChord(ChordSlot::Vii),
        '8' => Action::SelectChord(ChordSlot::Open),
        'c' => Action::SelectKey(MusicalKey::C),
        'g' => Action::SelectKey(MusicalKey::G),
        'd' => Action::SelectKey(MusicalKey::D),
        other => Action::Strike(StringKey::new(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Modifiers;

    #[test]
    fn digits_select_chord_slots() {
        assert_eq!(
            resolve(&InputEvent::key(KeyCode::Char('1'))),
            Some(Action::SelectChord(ChordSlot::I))
        );
        assert_eq!(
            resolve(&InputEvent::key(KeyCode::Char('7'))),
            Some(Action::SelectChord(ChordSlot::Vii))
        );
        assert_eq!(
            resolve(&InputEvent::key(KeyCode::Char('8'))),
            Some(Action::SelectChord(ChordSlot::Open))
        );
    }

    #[test]
    fn letters_select_musical_keys() {
        assert_eq!(
            resolve(&InputEvent::key(KeyCode::Char('g'))),
            Some(Action::SelectKey(MusicalKey::G))
        );
    }

    #[test]
    fn other_chars_become_strike_candidates() {
        assert_eq!(
            resolve(&InputEvent::key(KeyCode::Char('b'))),
            Some(Action::Strike(StringKey::new('b')))
        );
        // Unbound characters still resolve; dispatch rejects them.
        assert_eq!(
            resolve(&InputEvent::key(KeyCode::Char('z'))),
            Some(Action::Strike(StringKey::new('z')))
        );
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        assert_eq!(resolve(&InputEvent::key(KeyCode::Escape)), Some(Action::Quit));
        assert_eq!(
            resolve(&InputEvent::new(KeyCode::Char('c'), Modifiers::ctrl())),
            Some(Action::Quit)
        );
    }

    #[test]
    fn other_modified_keys_are_ignored() {
        assert_eq!(resolve(&InputEvent::new(KeyCode::Char('x'), Modifiers::ctrl())), None);
        let alt = Modifiers { ctrl: false, alt: true };
        assert_eq!(resolve(&InputEvent::new(KeyCode::Char('b'), alt)), None);
    }
}
