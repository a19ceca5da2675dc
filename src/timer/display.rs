//! Pure display computations: `MM:SS` text and progress ring ratio

/// Render seconds as `MM:SS`. Minutes are not capped, so 6000s and above
/// produce a wider minutes field.
pub fn format_time(total_seconds: u64) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}", minutes, seconds)
}

/// Ratio used as a stroke offset for a circular progress indicator.
///
/// `1.0` draws nothing (untouched timer), `0.0` draws the full ring. A
/// non-positive total is treated as not started. Inputs where `time_left`
/// exceeds `total_seconds` are not clamped.
pub fn progress_ratio(total_seconds: i64, time_left: i64) -> f64 {
    if total_seconds <= 0 {
        return 1.0;
    }

    let elapsed = (total_seconds - time_left) as f64 / total_seconds as f64;
    1.0 - elapsed
}
