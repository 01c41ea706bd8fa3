//! Frequency-band panel: abs-mean magnitude per contiguous time-domain block.
//!
//! The "bands" are time-domain partitions, not a spectral transform; the
//! low/mid/high trichotomy is by band index only.

use std::io::{self, Write};

use crate::term::{self, Tint};

/// Mean absolute magnitude per band.
///
/// Bands are `len / num_bands` samples wide; the final band also takes the
/// division remainder. A buffer shorter than `num_bands` yields all-zero
/// bands.
pub fn band_magnitudes(samples: &[f32], num_bands: usize) -> Vec<f32> {
    if num_bands == 0 {
        return Vec::new();
    }
    let samples_per_band = samples.len() / num_bands;
    if samples_per_band == 0 {
        return vec![0.0; num_bands];
    }

    (0..num_bands)
        .map(|band| {
            let start = band * samples_per_band;
            let end = if band + 1 == num_bands {
                samples.len()
            } else {
                (band + 1) * samples_per_band
            };
            let band_samples = &samples[start..end];
            band_samples.iter().map(|s| s.abs()).sum::<f32>() / band_samples.len() as f32
        })
        .collect()
}

/// Draws the bar canvas: `max_bar_height` rows of two-column bars, a rule,
/// and the tier legend.
pub fn render(
    samples: &[f32],
    num_bars: usize,
    max_bar_height: usize,
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(out, "{}", term::paint("📊 Frequency Bars", Tint::Accent))?;

    let bands = band_magnitudes(samples, num_bars);
    for row in (1..=max_bar_height).rev() {
        for (band, &magnitude) in bands.iter().enumerate() {
            let bar_height = magnitude * max_bar_height as f32;
            if bar_height >= row as f32 {
                write!(out, "{}", term::paint("██", band_tint(band, num_bars)))?;
            } else {
                write!(out, "  ")?;
            }
        }
        writeln!(out)?;
    }

    writeln!(out, "{}", "──".repeat(num_bars))?;
    writeln!(out, "Low Freq        Mid Freq        High Freq")?;
    Ok(())
}

fn band_tint(band: usize, num_bands: usize) -> Tint {
    if band < num_bands / 3 {
        Tint::Low
    } else if band < 2 * num_bands / 3 {
        Tint::Mid
    } else {
        Tint::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::set_color;
    use pretty_assertions::assert_eq;

    #[test]
    fn final_band_absorbs_the_remainder() {
        // 10 samples over 3 bands: 3 + 3 + 4.
        let samples = [0.3, 0.3, 0.3, 0.0, 0.0, 0.0, 0.6, 0.6, 0.6, 0.6];
        assert_eq!(band_magnitudes(&samples, 3), vec![0.3, 0.0, 0.6]);
    }

    #[test]
    fn magnitudes_are_non_negative_for_signed_input() {
        let samples: Vec<f32> = (0..100)
            .map(|i| if i % 2 == 0 { 0.8 } else { -0.8 })
            .collect();
        for magnitude in band_magnitudes(&samples, 20) {
            assert!(magnitude >= 0.0);
        }
    }

    #[test]
    fn short_buffer_yields_all_zero_bands() {
        assert_eq!(band_magnitudes(&[0.5, 0.5, 0.5], 20), vec![0.0; 20]);
    }

    #[test]
    fn empty_buffer_yields_all_zero_bands() {
        assert_eq!(band_magnitudes(&[], 4), vec![0.0; 4]);
    }

    #[test]
    fn bands_tier_into_index_thirds() {
        assert_eq!(band_tint(0, 20), Tint::Low);
        assert_eq!(band_tint(5, 20), Tint::Low);
        assert_eq!(band_tint(6, 20), Tint::Mid);
        assert_eq!(band_tint(12, 20), Tint::Mid);
        assert_eq!(band_tint(13, 20), Tint::High);
        assert_eq!(band_tint(19, 20), Tint::High);
    }

    #[test]
    fn canvas_has_bar_rows_plus_header_rule_and_legend() {
        set_color(false);
        let mut out = Vec::new();
        render(&vec![0.5; 100], 4, 6, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 1 + 6 + 1 + 1);
        assert!(lines[0].contains("Frequency Bars"));
        assert_eq!(lines[7], "─".repeat(8));
        assert_eq!(lines[8], "Low Freq        Mid Freq        High Freq");
    }

    #[test]
    fn bar_height_scales_with_magnitude() {
        set_color(false);
        let mut out = Vec::new();
        // One band at 0.5 magnitude over 4 rows fills rows 1 and 2 only.
        render(&vec![0.5; 10], 1, 4, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "  "); // row 4
        assert_eq!(lines[2], "  "); // row 3
        assert_eq!(lines[3], "██"); // row 2
        assert_eq!(lines[4], "██"); // row 1
    }
}
