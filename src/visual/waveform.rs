//! Waveform panel: abs-mean downsampling plus row/column thresholding.

use std::io::{self, Write};

use crate::term::{self, Tint};

/// Reduces `samples` to at most `target_width` column values.
///
/// Each bin is the mean of the absolute sample values it covers — an
/// amplitude proxy, not a true downsample; sign information is discarded.
/// Buffers that already fit are passed through untouched, signs included.
pub fn downsample(samples: &[f32], target_width: usize) -> Vec<f32> {
    if samples.len() <= target_width {
        return samples.to_vec();
    }

    let samples_per_bin = samples.len() as f64 / target_width as f64;
    (0..target_width)
        .map(|bin| {
            let start = (bin as f64 * samples_per_bin) as usize;
            let end = ((bin + 1) as f64 * samples_per_bin) as usize;
            let bin_samples = &samples[start..end.min(samples.len())];
            if bin_samples.is_empty() {
                0.0
            } else {
                bin_samples.iter().map(|s| s.abs()).sum::<f32>() / bin_samples.len() as f32
            }
        })
        .collect()
}

/// Draws the waveform canvas: `height` thresholded rows over the downsampled
/// columns, then a full-width border.
pub fn render(
    samples: &[f32],
    width: usize,
    height: usize,
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(out, "{}", term::paint("🌊 Waveform Visualization", Tint::Info))?;

    let columns = downsample(samples, width);
    for row in (0..height).rev() {
        write!(out, "│")?;
        let threshold = row as f32 / height as f32;
        for &value in &columns {
            // Shift [-1,1] to [0,1]; abs-mean bins are already non-negative,
            // which biases filled cells toward the upper half.
            let normalized = (value + 1.0) / 2.0;
            if normalized >= threshold {
                let tint = if normalized > 0.8 {
                    Tint::Error
                } else if normalized > 0.6 {
                    Tint::Warning
                } else {
                    Tint::Success
                };
                write!(out, "{}", term::paint("█", tint))?;
            } else {
                write!(out, " ")?;
            }
        }
        writeln!(out)?;
    }

    writeln!(out, "└{}", term::rule(width))?;
    Ok(())
}
