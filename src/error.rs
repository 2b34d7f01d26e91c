//! Error types shared across the crate.
//!
//! Configuration problems are reported by the call that set them. Evaluation
//! problems only surface once a player runs a frame.

use core::fmt;

/// Invalid configuration, raised synchronously by the setter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The effect list is longer than the player has outputs
    TooManyEffects { max: usize },
    /// A slot refers to an effect that was never registered
    UnknownEffect,
    /// Effect registry has no room left
    RegistryFull,
    /// Flash count must be greater than zero
    InvalidFlashCount,
    /// Step count must be greater than zero
    InvalidStepCount,
    /// Colour list longer than the effect can hold
    TooManyColours { max: usize },
    /// Frame rate must be greater than zero
    InvalidFrameRate,
    /// Tone frequency outside `20..=20_000` Hz
    FrequencyOutOfRange,
    /// Tone amplitude outside `0.0..=1.0`
    AmplitudeOutOfRange,
    /// Root directory and file name do not fit the path buffer
    PathTooLong,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyEffects { max } => {
                write!(f, "effect list must have a length less or equal to {max}")
            }
            Self::UnknownEffect => f.write_str("slot refers to an unregistered effect"),
            Self::RegistryFull => f.write_str("no room left to register another effect"),
            Self::InvalidFlashCount => f.write_str("flashes must be greater than zero"),
            Self::InvalidStepCount => f.write_str("steps must be greater than zero"),
            Self::TooManyColours { max } => write!(f, "at most {max} colours are supported"),
            Self::InvalidFrameRate => f.write_str("fps must be greater than zero"),
            Self::FrequencyOutOfRange => {
                f.write_str("frequency out of range, expected between 20Hz and 20KHz")
            }
            Self::AmplitudeOutOfRange => {
                f.write_str("amplitude out of range, expected 0.0 to 1.0")
            }
            Self::PathTooLong => f.write_str("file path too long"),
        }
    }
}

/// Failure while evaluating a frame. Fatal to the running player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FxError {
    /// The slot binding does not fit the effect it points at
    IncompatibleBinding,
    /// The effect produced a value this player cannot display
    UnsupportedValue,
    /// Writing to the output failed
    Output,
}

impl fmt::Display for FxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompatibleBinding => f.write_str("slot binding does not fit its effect"),
            Self::UnsupportedValue => f.write_str("incorrect effect setup for this player"),
            Self::Output => f.write_str("failed to write to output"),
        }
    }
}

/// Malformed WAV header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// Missing `RIFF` tag
    InvalidChunkId,
    /// Missing `WAVE` tag
    InvalidFormat,
    /// Missing `fmt ` tag
    InvalidSubChunk,
    /// No `data` tag within the search window
    DataChunkNotFound,
    /// File ends inside the header
    Truncated,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidChunkId => f.write_str("WAV chunk ID invalid"),
            Self::InvalidFormat => f.write_str("WAV format invalid"),
            Self::InvalidSubChunk => f.write_str("WAV sub chunk 1 ID invalid"),
            Self::DataChunkNotFound => f.write_str("WAV sub chunk 2 ID not found"),
            Self::Truncated => f.write_str("WAV header truncated"),
        }
    }
}

/// Errors reported by the audio player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioError {
    /// File not present in the root directory
    NotFound,
    Config(ConfigError),
    Format(FormatError),
    /// Reading or seeking the file failed
    Io(embedded_io::ErrorKind),
    /// The audio sink rejected an operation
    Sink(embedded_io::ErrorKind),
    /// Driving the amplifier enable pin failed
    Amplifier,
}

impl fmt::Display for AudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => f.write_str("file not found"),
            Self::Config(err) => write!(f, "{err}"),
            Self::Format(err) => write!(f, "{err}"),
            Self::Io(kind) => write!(f, "file error: {kind:?}"),
            Self::Sink(kind) => write!(f, "audio sink error: {kind:?}"),
            Self::Amplifier => f.write_str("failed to switch the amplifier"),
        }
    }
}

impl From<ConfigError> for AudioError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<FormatError> for AudioError {
    fn from(err: FormatError) -> Self {
        Self::Format(err)
    }
}

impl core::error::Error for ConfigError {}
impl core::error::Error for FxError {}
impl core::error::Error for FormatError {}
impl core::error::Error for AudioError {}
