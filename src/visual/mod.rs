pub mod bars;
pub mod demo;
pub mod waveform;

pub use demo::generate_sample_audio;

use std::io::{self, Write};

use log::{info, warn};

/// Renders sample buffers as terminal panels.
///
/// Both panels are single-pass, stateless transforms of the input buffer;
/// the struct only carries canvas dimensions.
#[derive(Debug, Clone, Copy)]
pub struct Visualizer {
    /// Waveform canvas width in columns.
    pub width: usize,
    /// Waveform canvas height in rows.
    pub height: usize,
    /// Number of frequency-band bars.
    pub num_bars: usize,
    /// Bar canvas height in rows.
    pub max_bar_height: usize,
}

impl Default for Visualizer {
    fn default() -> Self {
        Self {
            width: 80,
            height: 20,
            num_bars: 20,
            max_bar_height: 15,
        }
    }
}

impl Visualizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws both panels for `samples`. An empty buffer draws nothing.
    pub fn visualize(&self, samples: &[f32], out: &mut impl Write) -> io::Result<()> {
        if samples.is_empty() {
            warn!("No audio data to visualize");
            return Ok(());
        }

        info!("Visualizing {} audio samples", samples.len());
        waveform::render(samples, self.width, self.height, out)?;
        writeln!(out)?;
        bars::render(samples, self.num_bars, self.max_bar_height, out)
    }

    /// Draws both panels for the synthetic demo buffer.
    pub fn visualize_sample(&self, out: &mut impl Write) -> io::Result<()> {
        info!("Generating sample visualization...");
        self.visualize(&demo::generate_sample_audio(), out)
    }
}
