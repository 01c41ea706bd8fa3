//! Deterministic synthetic buffer for demo mode.

use std::f32::consts::PI;

const SAMPLE_RATE: usize = 1000;
const DURATION_SECONDS: f32 = 2.0;

/// Generates the demo buffer: three sine components under a slowly decaying
/// tremolo envelope. Deterministic, so the demo always draws the same scene.
pub fn generate_sample_audio() -> Vec<f32> {
    let num_samples = (SAMPLE_RATE as f32 * DURATION_SECONDS) as usize;

    (0..num_samples)
        .map(|i| {
            let time = i as f32 / SAMPLE_RATE as f32;
            let sample = 0.3 * (2.0 * PI * 100.0 * time).sin()
                + 0.2 * (2.0 * PI * 300.0 * time).sin()
                + 0.1 * (2.0 * PI * 800.0 * time).sin();
            let envelope = (-time * 0.5).exp() * (1.0 + 0.5 * (2.0 * PI * 5.0 * time).sin());
            sample * envelope
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_rate_times_duration_samples() {
        assert_eq!(generate_sample_audio().len(), 2000);
    }

    #[test]
    fn first_sample_is_silence() {
        assert_eq!(generate_sample_audio()[0], 0.0);
    }

    #[test]
    fn stays_within_the_unit_range() {
        for sample in generate_sample_audio() {
            assert!((-1.0..=1.0).contains(&sample));
        }
    }
}
