//! # chordboard-core
//!
//! The chord-state machine behind the chordboard binary: the static chord
//! table, the string-key map, selection and pressed-note state, and the
//! dispatch function that turns actions into MIDI side effects.

pub mod chords;
pub mod dispatch;
pub mod error;
pub mod state;
pub mod strings;

pub use dispatch::{dispatch_action, MUTE_VELOCITY, STRIKE_VELOCITY};
pub use error::ChordError;
pub use state::{AppState, PressedNotes, SelectionState};
