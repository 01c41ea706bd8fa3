pub mod reader;
pub mod wav;

pub use reader::{audio_file_info, can_read_file, decode_samples, read_audio_file};

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the decode operations.
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("audio file path is empty")]
    InvalidInput,
    #[error("audio file does not exist: {}", .0.display())]
    NotFound(PathBuf),
    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),
    #[error("audio stream error: {0}")]
    Io(#[from] std::io::Error),
}

/// Format descriptor derived from the container's fmt chunk.
///
/// Read-only and scoped to a single decode call; `frames` counts sample
/// frames in the data chunk (one sample per channel each).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioFormat {
    pub sample_rate: u32,
    pub channels: u16,
    pub bits_per_sample: u16,
    pub big_endian: bool,
    pub frames: u64,
}

impl AudioFormat {
    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Bytes per sample frame across all channels.
    pub fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    pub fn duration_seconds(&self) -> f64 {
        self.frames as f64 / self.sample_rate as f64
    }

    /// WAV stores 8-bit samples unsigned and 16-bit samples signed.
    pub fn encoding(&self) -> &'static str {
        if self.bits_per_sample == 8 {
            "PCM_UNSIGNED"
        } else {
            "PCM_SIGNED"
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} Hz, {} bit, {}, {}-endian",
            self.encoding(),
            self.sample_rate,
            self.bits_per_sample,
            match self.channels {
                1 => "mono".to_string(),
                2 => "stereo".to_string(),
                n => format!("{n} channels"),
            },
            if self.big_endian { "big" } else { "little" },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pcm16_stereo() -> AudioFormat {
        AudioFormat {
            sample_rate: 44100,
            channels: 2,
            bits_per_sample: 16,
            big_endian: false,
            frames: 88200,
        }
    }

    #[test]
    fn block_align_spans_all_channels() {
        assert_eq!(pcm16_stereo().block_align(), 4);
        assert_eq!(pcm16_stereo().bytes_per_sample(), 2);
    }

    #[test]
    fn duration_is_frames_over_rate() {
        assert_eq!(pcm16_stereo().duration_seconds(), 2.0);
    }

    #[test]
    fn encoding_follows_bit_depth() {
        let mut format = pcm16_stereo();
        assert_eq!(format.encoding(), "PCM_SIGNED");
        format.bits_per_sample = 8;
        assert_eq!(format.encoding(), "PCM_UNSIGNED");
    }

    #[test]
    fn display_summarizes_format() {
        assert_eq!(
            pcm16_stereo().to_string(),
            "PCM_SIGNED 44100 Hz, 16 bit, stereo, little-endian"
        );
    }
}
