//! MIDI output sink over midir.

use chordboard_core::ChordError;
use midir::{MidiOutput, MidiOutputConnection};

const NOTE_OFF: u8 = 0x80;
const NOTE_ON: u8 = 0x90;
const PROGRAM_CHANGE: u8 = 0xC0;

fn note_on_message(pitch: u8, velocity: u8) -> [u8; 3] {
    [NOTE_ON, pitch & 0x7F, velocity & 0x7F]
}

fn note_off_message(pitch: u8, velocity: u8) -> [u8; 3] {
    [NOTE_OFF, pitch & 0x7F, velocity & 0x7F]
}

/// MIDI output sink, connected once at startup and closed at shutdown.
/// All messages go out on channel 1.
pub struct MidiSink {
    connection: Option<MidiOutputConnection>,
    port_name: String,
}

impl MidiSink {
    /// Connect to the MIDI output port at `port_index`.
    pub fn open(port_index: usize) -> Result<Self, ChordError> {
        let midi_out = MidiOutput::new("chordboard")
            .map_err(|e| ChordError::DeviceUnavailable(e.to_string()))?;
        let ports = midi_out.ports();
        let port = ports.get(port_index).ok_or_else(|| {
            ChordError::DeviceUnavailable(format!("no MIDI output port at index {port_index}"))
        })?;
        let port_name = midi_out
            .port_name(port)
            .unwrap_or_else(|_| "unknown".to_string());
        let connection = midi_out
            .connect(port, "chordboard-out")
            .map_err(|e| ChordError::DeviceUnavailable(e.to_string()))?;
        log::info!("MIDI output connected to '{port_name}'");
        Ok(Self { connection: Some(connection), port_name })
    }

    pub fn port_name(&self) -> &str {
        &self.port_name
    }

    pub fn set_instrument(&mut self, program: u8) -> Result<(), ChordError> {
        self.send(&[PROGRAM_CHANGE, program & 0x7F])
    }

    pub fn note_on(&mut self, pitch: u8, velocity: u8) -> Result<(), ChordError> {
        self.send(&note_on_message(pitch, velocity))
    }

    pub fn note_off(&mut self, pitch: u8, velocity: u8) -> Result<(), ChordError> {
        self.send(&note_off_message(pitch, velocity))
    }

    fn send(&mut self, message: &[u8]) -> Result<(), ChordError> {
        match self.connection.as_mut() {
            Some(conn) => conn
                .send(message)
                .map_err(|e| ChordError::DeviceUnavailable(e.to_string())),
            None => Err(ChordError::DeviceUnavailable("connection closed".into())),
        }
    }

    pub fn close(&mut self) {
        if let Some(conn) = self.connection.take() {
            conn.close();
            log::info!("MIDI output closed");
        }
    }
}

impl Drop for MidiSink {
    fn drop(&mut self) {
        self.close();
    }
}
