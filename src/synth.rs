//! Sine tone synthesis with click-free fade envelopes

use std::f64::consts::TAU;

/// Output sample rate in Hz
pub const SAMPLE_RATE: u32 = 44100;

/// Length of the linear fade-in/fade-out ramp in seconds
pub const FADE_SECONDS: f64 = 0.01;

/// Number of samples covering `seconds` at the output rate.
///
/// Shared by tone, silence and chord generation so buffers of equal duration
/// always have equal length, independent of frequency.
pub fn sample_count(seconds: f64) -> usize {
    (seconds * SAMPLE_RATE as f64).round() as usize
}

fn fade_samples() -> usize {
    (FADE_SECONDS * SAMPLE_RATE as f64) as usize
}

/// Generate a sine tone at `frequency` Hz for `seconds`, scaled by `volume`.
///
/// A 10 ms linear fade-in and fade-out are applied to avoid clicks at
/// segment boundaries. Buffers too short to hold both ramps without overlap
/// skip shaping entirely, so very short tones may click.
pub fn tone(frequency: f64, seconds: f64, volume: f64) -> Vec<f32> {
    let count = sample_count(seconds);
    let step = TAU * frequency / SAMPLE_RATE as f64;

    let mut samples = Vec::with_capacity(count);
    for i in 0..count {
        samples.push(((step * i as f64).sin() * volume) as f32);
    }

    apply_fade(&mut samples);
    samples
}

/// Generate silence for `seconds`
pub fn silence(seconds: f64) -> Vec<f32> {
    vec![0.0; sample_count(seconds)]
}

/// Mix one tone per frequency into a single buffer of the shared duration.
///
/// Each tone is synthesized at `volume / len` so the combined amplitude stays
/// bounded by `volume`. An empty frequency list yields silence.
pub fn chord(frequencies: &[f64], seconds: f64, volume: f64) -> Vec<f32> {
    let mut mixed = silence(seconds);
    if frequencies.is_empty() {
        return mixed;
    }

    let per_note = volume / frequencies.len() as f64;
    for &frequency in frequencies {
        let tone = tone(frequency, seconds, per_note);
        for (out, sample) in mixed.iter_mut().zip(tone) {
            *out += sample;
        }
    }

    mixed
}

fn apply_fade(samples: &mut [f32]) {
    let fade = fade_samples();
    if samples.len() <= fade * 2 {
        return;
    }

    let last = samples.len() - 1;
    for i in 0..fade {
        let gain = i as f32 / fade as f32;
        samples[i] *= gain;
        samples[last - i] *= gain;
    }
}
