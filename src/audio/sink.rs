//! Capabilities the audio player runs on

use embedded_io::{ErrorKind, ErrorType, Read, Seek};

/// Channel layout of the sample stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channels {
    Mono,
    Stereo,
}

/// Format the sink is opened with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkConfig {
    pub bits_per_sample: u16,
    pub channels: Channels,
    pub sample_rate: u32,
    /// Size of the sink's own double buffer, in bytes
    pub internal_buffer_len: usize,
}

/// Audio output fed one buffer per drain callback
///
/// The sink raises its drain callback whenever half of its internal buffer
/// has been played out; the integration then calls
/// [`WavPlayer::on_drain`](super::WavPlayer::on_drain).
pub trait AudioSink: ErrorType {
    fn open(&mut self, config: SinkConfig) -> Result<(), Self::Error>;

    /// Queue `samples`, blocking until the sink has room for them
    ///
    /// Must make progress without interrupts, since teardown may call it
    /// from inside a critical section.
    fn write(&mut self, samples: &[u8]) -> Result<(), Self::Error>;

    fn close(&mut self);
}

/// Read-only directory the player loads WAV files from
pub trait FileSystem {
    type File: Read + Seek;

    fn exists(&mut self, path: &str) -> bool;

    fn open(&mut self, path: &str) -> Result<Self::File, ErrorKind>;
}
