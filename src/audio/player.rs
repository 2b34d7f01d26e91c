//! Streaming WAV and tone player

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType as PinErrorType, OutputPin};
use heapless::String;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::tone::{self, TONE_BITS_PER_SAMPLE, TONE_SAMPLE_RATE, ToneBuffer, ToneShape};
use super::{AudioSink, Channels, FileSystem, SinkConfig, WavReader};
use crate::error::{AudioError, ConfigError};

/// Bytes of silence written while paused, flushing or stopped
pub const SILENCE_BUFFER_LEN: usize = 1024;
/// Bytes read from the file per drain
pub const WAV_BUFFER_LEN: usize = 1024;
/// Default size of the sink's internal buffer
pub const INTERNAL_BUFFER_LEN: usize = WAV_BUFFER_LEN * 2;
/// Longest `root + name` path
pub const MAX_PATH_LEN: usize = 64;

static SILENCE: [u8; SILENCE_BUFFER_LEN] = [0; SILENCE_BUFFER_LEN];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Play,
    Pause,
    /// Draining the sink with silence before stopping
    Flush,
    Stop,
    /// Nothing opened yet, or torn down
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackMode {
    Wav,
    Tone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavPlayerConfig {
    /// Size of the sink's internal buffer, in bytes
    pub internal_buffer_len: usize,
    /// Directory WAV files are looked up in
    pub root: &'static str,
}

impl Default for WavPlayerConfig {
    fn default() -> Self {
        Self {
            internal_buffer_len: INTERNAL_BUFFER_LEN,
            root: "/",
        }
    }
}

/// Stand-in for a board without an amplifier enable line
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAmp;

impl PinErrorType for NoAmp {
    type Error = Infallible;
}

impl OutputPin for NoAmp {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Audio player feeding an [`AudioSink`] one buffer per drain callback
///
/// Playback starts by priming the sink with a buffer of silence. From then
/// on the sink's drain callback must call [`WavPlayer::on_drain`], which
/// writes the next buffer according to the playback state.
///
/// ```ignore
/// static PLAYER: Shared<WavPlayer<SdCard, I2sOut, AmpPin>> = Shared::new();
///
/// // I2S half-buffer interrupt
/// PLAYER.with(|player| player.on_drain());
/// ```
pub struct WavPlayer<FS: FileSystem, S: AudioSink, A: OutputPin = NoAmp> {
    fs: FS,
    sink: S,
    amp: A,
    sink_open: bool,

    root: String<MAX_PATH_LEN>,
    internal_buffer_len: usize,

    state: PlaybackState,
    mode: PlaybackMode,
    flush_count: usize,

    wav: Option<WavReader<FS::File>>,
    looping: bool,
    loop_count: u32,
    samples: [u8; WAV_BUFFER_LEN],

    tone: ToneBuffer,
    queued_tone: Option<ToneBuffer>,
}

impl<FS: FileSystem, S: AudioSink> WavPlayer<FS, S, NoAmp> {
    pub fn new(fs: FS, sink: S, config: WavPlayerConfig) -> Result<Self, ConfigError> {
        Self::with_amp(fs, sink, NoAmp, config)
    }
}

impl<FS: FileSystem, S: AudioSink, A: OutputPin> WavPlayer<FS, S, A> {
    /// Player that switches `amp` on while the sink is open
    pub fn with_amp(fs: FS, sink: S, amp: A, config: WavPlayerConfig) -> Result<Self, ConfigError> {
        let mut player = Self {
            fs,
            sink,
            amp,
            sink_open: false,
            root: String::new(),
            internal_buffer_len: config.internal_buffer_len,
            state: PlaybackState::None,
            mode: PlaybackMode::Wav,
            flush_count: 0,
            wav: None,
            looping: false,
            loop_count: 0,
            samples: [0; WAV_BUFFER_LEN],
            tone: ToneBuffer::new(),
            queued_tone: None,
        };
        player.set_root(config.root)?;
        Ok(player)
    }

    /// Directory later `play_wav` calls look files up in
    pub fn set_root(&mut self, root: &str) -> Result<(), ConfigError> {
        let mut path = String::new();
        path.push_str(root.trim_end_matches('/'))
            .and_then(|()| path.push('/'))
            .map_err(|()| ConfigError::PathTooLong)?;
        self.root = path;
        Ok(())
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    fn path(&self, name: &str) -> Result<String<MAX_PATH_LEN>, ConfigError> {
        let mut path = self.root.clone();
        path.push_str(name).map_err(|()| ConfigError::PathTooLong)?;
        Ok(path)
    }

    /// Play `name` from the root directory, replacing current playback
    ///
    /// The file is opened and its header parsed before current playback is
    /// torn down, so a missing or malformed file leaves it untouched.
    pub fn play_wav(&mut self, name: &str, looping: bool) -> Result<(), AudioError> {
        let path = self.path(name)?;
        if !self.fs.exists(&path) {
            return Err(AudioError::NotFound);
        }
        let file = self.fs.open(&path).map_err(AudioError::Io)?;
        let reader = WavReader::new(file)?;
        let header = *reader.header();

        self.teardown()?;

        #[cfg(feature = "esp32-log")]
        println!("[WavPlayer.play_wav] playing {} (loop: {:?})", path, looping);

        self.wav = Some(reader);
        self.looping = looping;
        self.loop_count = 0;
        self.start_sink(
            SinkConfig {
                bits_per_sample: header.bits_per_sample,
                channels: header.channels,
                sample_rate: header.sample_rate,
                internal_buffer_len: self.internal_buffer_len,
            },
            PlaybackMode::Wav,
        )
    }

    /// Play a continuous tone mixed from `shapes`
    ///
    /// While a tone is already playing or paused the new buffer is queued,
    /// swapped in on the next drain and playback resumes.
    pub fn play_tone(
        &mut self,
        frequency: f32,
        amplitude: f32,
        shapes: &[ToneShape],
    ) -> Result<(), AudioError> {
        let buffer = tone::synthesize(frequency, amplitude, shapes)?;

        if self.mode == PlaybackMode::Tone
            && matches!(self.state, PlaybackState::Play | PlaybackState::Pause)
        {
            self.queued_tone = Some(buffer);
            self.state = PlaybackState::Play;
            return Ok(());
        }

        self.teardown()?;

        #[cfg(feature = "esp32-log")]
        println!("[WavPlayer.play_tone] playing {:?} Hz", frequency);

        self.tone = buffer;
        self.queued_tone = None;
        self.start_sink(
            SinkConfig {
                bits_per_sample: TONE_BITS_PER_SAMPLE,
                channels: Channels::Mono,
                sample_rate: TONE_SAMPLE_RATE,
                internal_buffer_len: self.internal_buffer_len,
            },
            PlaybackMode::Tone,
        )
    }

    pub fn pause(&mut self) {
        if self.state == PlaybackState::Play {
            self.state = PlaybackState::Pause;
        }
    }

    pub fn resume(&mut self) {
        if self.state == PlaybackState::Pause {
            self.state = PlaybackState::Play;
        }
    }

    /// Stop playback, flushing the sink with silence first for WAV files
    pub fn stop(&mut self) {
        if !matches!(self.state, PlaybackState::Play | PlaybackState::Pause) {
            return;
        }
        match self.mode {
            PlaybackMode::Wav => {
                self.wav = None;
                self.state = PlaybackState::Flush;
            }
            PlaybackMode::Tone => self.state = PlaybackState::Stop,
        }
    }

    /// Whether sound is playing, paused or still being flushed
    pub fn is_playing(&self) -> bool {
        !matches!(self.state, PlaybackState::None | PlaybackState::Stop)
    }

    pub fn is_paused(&self) -> bool {
        self.state == PlaybackState::Pause
    }

    pub const fn state(&self) -> PlaybackState {
        self.state
    }

    pub const fn mode(&self) -> PlaybackMode {
        self.mode
    }

    /// Times a looping file has wrapped around
    pub const fn loop_count(&self) -> u32 {
        self.loop_count
    }

    /// Feed the sink its next buffer. Call this from the drain callback.
    ///
    /// A failed read ends WAV playback: the file is closed, the player
    /// moves on to flushing and the error is returned.
    pub fn on_drain(&mut self) -> Result<(), AudioError> {
        match self.state {
            PlaybackState::Play => match self.mode {
                PlaybackMode::Wav => self.play_wav_chunk(),
                PlaybackMode::Tone => {
                    if let Some(next) = self.queued_tone.take() {
                        self.tone = next;
                    }
                    self.sink.write(&self.tone).map_err(sink_error)
                }
            },
            PlaybackState::Pause | PlaybackState::Stop => {
                self.sink.write(&SILENCE).map_err(sink_error)
            }
            PlaybackState::Flush => {
                self.flush_count = self.flush_count.saturating_sub(1);
                if self.flush_count == 0 {
                    self.state = PlaybackState::Stop;
                }
                self.sink.write(&SILENCE).map_err(sink_error)
            }
            PlaybackState::None => Ok(()),
        }
    }

    fn play_wav_chunk(&mut self) -> Result<(), AudioError> {
        let filled = match self.fill_samples() {
            Ok(filled) => filled,
            Err(err) => {
                self.wav = None;
                self.state = PlaybackState::Flush;
                return Err(err);
            }
        };

        self.samples[filled..].fill(0);
        self.sink.write(&self.samples).map_err(sink_error)?;

        if filled < WAV_BUFFER_LEN {
            self.wav = None;
            self.state = PlaybackState::Flush;
        }
        Ok(())
    }

    /// Read the next chunk of samples, wrapping around when looping
    fn fill_samples(&mut self) -> Result<usize, AudioError> {
        let Some(reader) = self.wav.as_mut() else {
            return Ok(0);
        };
        if !self.looping {
            return reader.read_into(&mut self.samples);
        }

        let mut filled = 0;
        while filled < WAV_BUFFER_LEN {
            let read = reader.read_into(&mut self.samples[filled..])?;
            filled += read;
            if read == 0 {
                if reader.header().data_size == 0 {
                    break;
                }
                reader.seek(0)?;
                self.loop_count += 1;
            }
        }
        Ok(filled)
    }

    fn start_sink(&mut self, config: SinkConfig, mode: PlaybackMode) -> Result<(), AudioError> {
        self.sink.open(config).map_err(sink_error)?;
        self.sink_open = true;

        self.mode = mode;
        self.state = PlaybackState::Play;
        self.flush_count = self.internal_buffer_len / SILENCE_BUFFER_LEN + 1;

        self.sink.write(&SILENCE).map_err(sink_error)?;
        self.amp.set_high().map_err(|_| AudioError::Amplifier)
    }

    /// Stop, drain the remaining flush buffers and release the sink
    fn teardown(&mut self) -> Result<(), AudioError> {
        self.stop();
        let drained = loop {
            if !self.is_playing() {
                break Ok(());
            }
            if let Err(err) = self.on_drain() {
                break Err(err);
            }
        };

        // Released even when the flush failed
        let mut amp = Ok(());
        if self.sink_open {
            amp = self.amp.set_low().map_err(|_| AudioError::Amplifier);
            self.sink.close();
            self.sink_open = false;
        }
        self.wav = None;
        self.queued_tone = None;
        self.state = PlaybackState::None;
        drained.and(amp)
    }

    /// Stop playback and release the sink
    pub fn deinit(&mut self) -> Result<(), AudioError> {
        #[cfg(feature = "esp32-log")]
        println!("[WavPlayer.deinit] releasing sink");

        self.teardown()
    }

    pub const fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub const fn amp(&self) -> &A {
        &self.amp
    }

    pub fn release(self) -> (FS, S, A) {
        (self.fs, self.sink, self.amp)
    }
}

fn sink_error<E: embedded_io::Error>(err: E) -> AudioError {
    AudioError::Sink(err.kind())
}
