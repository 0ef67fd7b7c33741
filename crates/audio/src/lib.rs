//! Placeholder page-turn sound.
//!
//! White noise shaped by a three-segment envelope (sharp rise, short drop
//! to half level, long fade) with sparse random crackle on top.

mod error;

pub use error::AudioError;

use hound::{SampleFormat, WavSpec, WavWriter};
use rand::Rng;
use std::path::Path;

/// Largest magnitude written; the 16-bit minimum is never produced.
pub const SAMPLE_LIMIT: i32 = 32767;

/// Shape of the synthesized clip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipSpec {
    pub sample_rate: u32,
    pub duration_ms: u32,
    /// Integer amplitude a full-scale noise sample maps to
    pub peak: f64,
    /// Chance per sample of an extra crackle spike
    pub crackle_probability: f64,
}

impl Default for ClipSpec {
    fn default() -> Self {
        Self {
            sample_rate: 44_100,
            duration_ms: 400,
            peak: 24_000.0,
            crackle_probability: 0.05,
        }
    }
}

impl ClipSpec {
    pub fn frame_count(&self) -> usize {
        (self.sample_rate as u64 * self.duration_ms as u64 / 1000) as usize
    }

    fn wav_spec(&self) -> WavSpec {
        WavSpec {
            channels: 1,
            sample_rate: self.sample_rate,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        }
    }
}

/// What ended up in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipInfo {
    pub frames: usize,
    pub sample_rate: u32,
}

/// Amplitude multiplier at normalized time `t` in `[0, 1)`.
pub fn envelope(t: f64) -> f64 {
    if t < 0.1 {
        t / 0.1
    } else if t < 0.3 {
        1.0 - ((t - 0.1) / 0.2) * 0.5
    } else {
        0.5 * (1.0 - (t - 0.3) / 0.7)
    }
}

/// Generates the clip samples. Output is random unless `rng` is seeded.
pub fn synthesize<R: Rng + ?Sized>(spec: &ClipSpec, rng: &mut R) -> Vec<i16> {
    let frames = spec.frame_count();
    let mut samples = Vec::with_capacity(frames);

    for i in 0..frames {
        let t = i as f64 / frames as f64;

        let mut noise: f64 = rng.gen_range(-1.0..=1.0);
        if rng.gen::<f64>() < spec.crackle_probability {
            noise += rng.gen_range(-0.5..=0.5);
        }

        let value = (noise * envelope(t) * spec.peak) as i32;
        samples.push(value.clamp(-SAMPLE_LIMIT, SAMPLE_LIMIT) as i16);
    }

    samples
}

/// Synthesizes a clip and writes it as mono 16-bit PCM WAV, overwriting
/// any existing file.
pub fn write_clip<R: Rng + ?Sized>(
    path: &Path,
    spec: &ClipSpec,
    rng: &mut R,
) -> Result<ClipInfo, AudioError> {
    log::info!("[Audio] generating {}", path.display());

    let samples = synthesize(spec, rng);
    let mut writer = WavWriter::create(path, spec.wav_spec())?;
    for sample in &samples {
        writer.write_sample(*sample)?;
    }
    writer.finalize()?;

    log::info!(
        "[Audio] wrote {} frames at {} Hz",
        samples.len(),
        spec.sample_rate
    );
    Ok(ClipInfo {
        frames: samples.len(),
        sample_rate: spec.sample_rate,
    })
}
