//! Tone synthesis

use heapless::Vec;

use crate::error::ConfigError;

pub const TONE_SAMPLE_RATE: u32 = 44_100;
pub const TONE_BITS_PER_SAMPLE: u16 = 16;
/// Whole waveform cycles held in a tone buffer
pub const TONE_FULL_WAVES: usize = 2;

pub const MIN_FREQUENCY: f32 = 20.0;
pub const MAX_FREQUENCY: f32 = 20_000.0;

const BYTES_PER_SAMPLE: usize = (TONE_BITS_PER_SAMPLE / 8) as usize;

/// Size of the buffer for the lowest frequency
pub const TONE_BUFFER_LEN: usize =
    TONE_FULL_WAVES * (TONE_SAMPLE_RATE as usize / MIN_FREQUENCY as usize) * BYTES_PER_SAMPLE;

/// 16-bit little-endian mono samples, replayed on every drain
pub type ToneBuffer = Vec<u8, TONE_BUFFER_LEN>;

/// Waveforms that can be mixed into a tone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneShape {
    Sine,
    Square,
    Triangle,
}

impl ToneShape {
    const ALL: [Self; 3] = [Self::Sine, Self::Square, Self::Triangle];

    /// Relative loudness, so mixed shapes sound balanced
    const fn level(self) -> f32 {
        match self {
            Self::Sine => 1.0,
            Self::Square => 0.2,
            Self::Triangle => 0.5,
        }
    }

    /// Value of sample `index` within one cycle
    ///
    /// Sine and square span `-1.0..=1.0`. The triangle shape is a rising
    /// ramp from `-0.5` up to just below `0.5`.
    #[allow(clippy::cast_precision_loss)]
    fn sample(self, index: usize, per_cycle: usize) -> f32 {
        match self {
            Self::Sine => {
                libm::sinf(core::f32::consts::TAU * index as f32 / per_cycle as f32)
            }
            Self::Square => {
                if index < per_cycle / 2 {
                    1.0
                } else {
                    -1.0
                }
            }
            Self::Triangle => (index as f32 - (per_cycle / 2) as f32) / per_cycle as f32,
        }
    }
}

/// Build a tone buffer holding two whole cycles of `frequency`
///
/// Each shape in `shapes` is mixed in once, however often it is listed. An
/// empty list gives silence.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn synthesize(
    frequency: f32,
    amplitude: f32,
    shapes: &[ToneShape],
) -> Result<ToneBuffer, ConfigError> {
    if !(MIN_FREQUENCY..=MAX_FREQUENCY).contains(&frequency) {
        return Err(ConfigError::FrequencyOutOfRange);
    }
    if !(0.0..=1.0).contains(&amplitude) {
        return Err(ConfigError::AmplitudeOutOfRange);
    }

    let per_cycle = (TONE_SAMPLE_RATE as f32 / frequency) as usize;
    let maximum = f32::from(i16::MAX) * amplitude;

    let mut buffer = ToneBuffer::new();
    for i in 0..per_cycle * TONE_FULL_WAVES {
        let index = i % per_cycle;
        let mixed: f32 = ToneShape::ALL
            .iter()
            .filter(|shape| shapes.contains(shape))
            .map(|shape| shape.sample(index, per_cycle) * shape.level())
            .sum();
        let sample = (mixed.clamp(-1.0, 1.0) * maximum) as i16;
        buffer
            .extend_from_slice(&sample.to_le_bytes())
            .map_err(|()| ConfigError::FrequencyOutOfRange)?;
    }
    Ok(buffer)
}
