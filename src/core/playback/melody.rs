//! core/playback/melody.rs
//! Built-in fallback for when the configured music file cannot be
//! played: a soft music-box phrase synthesized into a sample buffer,
//! intended to be looped.

use std::f32::consts::TAU;

use rodio::buffer::SamplesBuffer;

const SAMPLE_RATE: u32 = 44_100;
const NOTE_SECONDS: f32 = 0.75;
const GAIN: f32 = 0.16;

/// The phrase, in Hz: a slow broken-chord figure in C that turns around
/// on the dominant so the loop seam is gentle.
const NOTES: &[f32] = &[
    523.25,  // C5
    659.25,  // E5
    783.99,  // G5
    1046.50, // C6
    880.00,  // A5
    783.99,  // G5
    659.25,  // E5
    587.33,  // D5
];

pub(super) fn music_box() -> SamplesBuffer {
    let samples_per_note = (SAMPLE_RATE as f32 * NOTE_SECONDS) as usize;
    let mut samples = Vec::with_capacity(samples_per_note * NOTES.len());

    for &freq in NOTES {
        for i in 0..samples_per_note {
            let t = i as f32 / SAMPLE_RATE as f32;

            // Fundamental plus a whisper of the octave reads as "music
            // box" instead of a bare test tone.
            let tone = (t * freq * TAU).sin() + 0.3 * (t * freq * 2.0 * TAU).sin();

            // Pluck envelope: instant attack, exponential decay.
            let envelope = (-3.5 * t).exp();

            samples.push(tone * envelope * GAIN);
        }
    }

    SamplesBuffer::new(1, SAMPLE_RATE, samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phrase_has_the_expected_length() {
        let samples: Vec<f32> = music_box().collect();
        let samples_per_note = (SAMPLE_RATE as f32 * NOTE_SECONDS) as usize;
        assert_eq!(samples.len(), NOTES.len() * samples_per_note);
    }

    #[test]
    fn phrase_is_audible_but_cannot_clip() {
        let peak = music_box().fold(0.0f32, |peak, s| peak.max(s.abs()));
        assert!(peak > 0.05);
        assert!(peak < 1.0);
    }
}
