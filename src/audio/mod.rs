//! Audio playback: WAV files streamed from a file system and synthesized
//! tones, fed to a double-buffered sink.

mod player;
mod sink;
mod tone;
mod wav;

pub use player::{
    INTERNAL_BUFFER_LEN, MAX_PATH_LEN, NoAmp, PlaybackMode, PlaybackState, SILENCE_BUFFER_LEN,
    WAV_BUFFER_LEN, WavPlayer, WavPlayerConfig,
};
pub use sink::{AudioSink, Channels, FileSystem, SinkConfig};
pub use tone::{
    MAX_FREQUENCY, MIN_FREQUENCY, TONE_BITS_PER_SAMPLE, TONE_BUFFER_LEN, TONE_FULL_WAVES,
    TONE_SAMPLE_RATE, ToneBuffer, ToneShape, synthesize,
};
pub use wav::{DATA_SEARCH_WINDOW, WavHeader, WavReader};
