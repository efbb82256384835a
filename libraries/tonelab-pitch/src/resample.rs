//! Resampling pitch shift
//!
//! Reads the input at a scaled rate with linear interpolation between
//! neighboring samples. Pitch and duration change together: shifting up an
//! octave halves the frame count.

/// Resample one channel by the given pitch ratio
///
/// Output index `i` reads source position `i * ratio`, interpolating between
/// the two nearest samples; the upper neighbor is clamped to the last valid
/// index so the tail never reads out of bounds.
pub(crate) fn resample_channel(samples: &[f32], ratio: f64) -> Vec<f32> {
    if samples.is_empty() {
        return Vec::new();
    }

    let new_len = (samples.len() as f64 / ratio).floor() as usize;
    let last = samples.len() - 1;
    let mut out = Vec::with_capacity(new_len);

    for i in 0..new_len {
        let source_pos = i as f64 * ratio;
        let index = (source_pos.floor() as usize).min(last);
        let next = (index + 1).min(last);
        let frac = (source_pos - index as f64) as f32;
        out.push(samples[index] + (samples[next] - samples[index]) * frac);
    }

    out
}
