use crate::foundation::{
    error::{SvganimError, SvganimResult},
    math::{format_sig, round_decimals},
};

#[derive(Clone, Debug, PartialEq)]
/// Normalized keyframe times shared by every track of one animation.
pub struct KeyframeTable {
    /// Length of one loop in seconds, rounded to `precision` decimal places.
    pub total_time: f64,
    /// `total_time` formatted for a SMIL `dur` attribute (e.g. `"9s"`).
    pub duration_string: String,
    /// `2N + 1` formatted fractions of `total_time`.
    ///
    /// Index `2i + 1` is where frame `i` stops being static and starts transitioning,
    /// index `2i + 2` is where that transition ends.
    pub transition_times: Vec<String>,
}

impl KeyframeTable {
    /// Number of frames the table was built for.
    pub fn frame_count(&self) -> usize {
        self.transition_times.len() / 2
    }

    /// Time at `idx`; negative indices count from the end (`-1` is the last entry).
    ///
    /// Panics when `idx` is out of range, which only happens for tables built for fewer
    /// than two frames.
    pub fn time(&self, idx: isize) -> &str {
        let len = self.transition_times.len() as isize;
        let i = if idx < 0 { len + idx } else { idx };
        &self.transition_times[i as usize]
    }

    /// Join times at the given indices for a `keyTimes` attribute.
    pub fn key_times_at(&self, indices: &[isize]) -> String {
        indices
            .iter()
            .map(|&i| self.time(i))
            .collect::<Vec<_>>()
            .join(";")
    }

    /// All times joined for a `keyTimes` attribute.
    pub fn key_times(&self) -> String {
        self.transition_times.join(";")
    }
}

/// Build the keyframe table for `frame_count` frames.
///
/// Each frame is shown for `static_secs`, then crosses to the next one over
/// `transition_secs`; the last frame transitions back to the first.
#[tracing::instrument]
pub fn generate_timings(
    frame_count: usize,
    static_secs: f64,
    transition_secs: f64,
    precision: u32,
) -> SvganimResult<KeyframeTable> {
    if frame_count < 2 {
        return Err(SvganimError::validation(format!(
            "animation needs at least 2 frames, got {frame_count}"
        )));
    }
    if !(static_secs.is_finite() && static_secs >= 0.0) {
        return Err(SvganimError::validation(
            "static duration must be finite and >= 0",
        ));
    }
    if !(transition_secs.is_finite() && transition_secs >= 0.0) {
        return Err(SvganimError::validation(
            "transition duration must be finite and >= 0",
        ));
    }

    let period = static_secs + transition_secs;
    let total_time = round_decimals(period * frame_count as f64, precision);
    if total_time == 0.0 {
        return Err(SvganimError::domain(
            "static and transition durations are both zero; keyframe times are undefined",
        ));
    }

    let mut transition_times = Vec::with_capacity(2 * frame_count + 1);
    transition_times.push("0".to_string());
    for i in 0..frame_count {
        let first = period * i as f64 + static_secs;
        let second = first + transition_secs;
        transition_times.push(format_sig(first / total_time, precision));
        transition_times.push(format_sig(second / total_time, precision));
    }

    let table = KeyframeTable {
        total_time,
        duration_string: format!("{}s", format_sig(total_time, precision)),
        transition_times,
    };
    tracing::debug!(
        total_time = table.total_time,
        key_times = %table.key_times(),
        "generated keyframe table"
    );
    Ok(table)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timing.rs"]
mod tests;
