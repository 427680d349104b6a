/// Format seconds as `MM:SS`.
///
/// Non-finite input renders as `00:00`. There is no hours field, so anything
/// past 99 minutes simply widens the minute column (`6000.0` is `100:00`).
/// Negative input is treated as zero.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() {
        return "00:00".to_string();
    }
    let seconds = seconds.max(0.0);
    let minutes = (seconds / 60.0).floor() as u64;
    let secs = (seconds % 60.0).floor() as u64;
    format!("{:02}:{:02}", minutes, secs)
}

/// The `elapsed / total` label shown next to the progress bar.
pub fn progress_label(current: f64, duration: f64) -> String {
    format!("{} / {}", format_time(current), format_time(duration))
}

/// Fraction of the way through the media, or `None` when the duration is not
/// a finite positive number and the display should be left alone.
pub fn progress_fraction(current: f64, duration: f64) -> Option<f64> {
    if duration.is_finite() && duration > 0.0 {
        Some(current / duration)
    } else {
        None
    }
}
