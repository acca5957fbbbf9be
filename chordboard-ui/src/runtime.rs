//! Event-loop runtime: owns the application state and the MIDI sink.
//!
//! Single-threaded and strictly ordered: events are polled one at a time,
//! dispatched against the state, and their MIDI effects flushed to the
//! sink before the next event is read. Recoverable dispatch errors are
//! logged and the event dropped; state is untouched.

use std::io;
use std::time::Duration;

use chordboard_core::{chords, dispatch_action, AppState};
use chordboard_types::MidiEffect;
use crossterm::{
    cursor::MoveTo,
    execute,
    style::Print,
    terminal::{Clear, ClearType},
};

use crate::input::{AppEvent, InputEvent, InputSource};
use crate::keymap;
use crate::midi::MidiSink;

const POLL_TIMEOUT: Duration = Duration::from_millis(10);

/// General MIDI program 24: acoustic guitar (nylon).
pub const GUITAR_PROGRAM: u8 = 24;

const HELP_LINE: &str =
    "chordboard | 1-7 chord, 8 open strings, c/g/d key, b n m i o p strings, Esc quits";

/// Top-level runtime that owns all application state and drives the loop.
pub struct AppRuntime {
    state: AppState,
    sink: MidiSink,
}

impl AppRuntime {
    pub fn new(sink: MidiSink) -> Self {
        Self { state: AppState::new(), sink }
    }

    /// Main event loop. Returns when a quit event arrives.
    pub fn run(&mut self, input: &mut dyn InputSource) -> io::Result<()> {
        self.draw(true)?;
        loop {
            let Some(event) = input.poll_event(POLL_TIMEOUT) else {
                continue;
            };
            match event {
                AppEvent::Key(key) => {
                    if self.handle_key(&key)? {
                        break;
                    }
                }
                AppEvent::Resize => self.draw(true)?,
            }
        }
        self.sink.close();
        Ok(())
    }

    /// Handle one key event. Returns true if the app should quit.
    fn handle_key(&mut self, event: &InputEvent) -> io::Result<bool> {
        let Some(action) = keymap::resolve(event) else {
            return Ok(false);
        };
        match dispatch_action(&action, &mut self.state) {
            Ok(result) => {
                self.apply_midi(&result.midi);
                if result.quit {
                    return Ok(true);
                }
                self.draw(false)?;
            }
            Err(err) => log::warn!("event ignored: {err}"),
        }
        Ok(false)
    }

    fn apply_midi(&mut self, effects: &[MidiEffect]) {
        for effect in effects {
            let sent = match *effect {
                MidiEffect::NoteOn { pitch, velocity } => self.sink.note_on(pitch, velocity),
                MidiEffect::NoteOff { pitch, velocity } => self.sink.note_off(pitch, velocity),
            };
            if let Err(err) = sent {
                log::warn!("MIDI send failed: {err}");
            }
        }
    }

    fn draw(&self, full: bool) -> io::Result<()> {
        let mut out = io::stdout();
        if full {
            execute!(out, Clear(ClearType::All), MoveTo(0, 0), Print(HELP_LINE))?;
        }
        let selection = self.state.selection;
        let shape = match chords::shape(selection.key, selection.slot) {
            Ok(shape) => shape.to_string(),
            Err(_) => "(unmapped)".to_string(),
        };
        let status = format!(
            "key {}  chord {}  {}  strings held: {}",
            selection.key.name(),
            selection.slot.name(),
            shape,
            self.state.pressed.len(),
        );
        execute!(out, MoveTo(0, 2), Clear(ClearType::CurrentLine), Print(status))
    }
}

/// Public entry point: build the runtime around an opened sink and run it.
pub fn run(input: &mut dyn InputSource, sink: MidiSink) -> io::Result<()> {
    let mut runtime = AppRuntime::new(sink);
    runtime.run(input)
}
