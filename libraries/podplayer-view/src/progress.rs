//! Progress display helpers

/// Fill of the progress bar in whole percent
///
/// `floor(progress * 100 / duration)`, 0 for a zero duration and never above
/// 100.
pub fn fill_percent(progress_secs: u32, duration_secs: u32) -> u8 {
    if duration_secs == 0 {
        return 0;
    }
    let percent = u64::from(progress_secs) * 100 / u64::from(duration_secs);
    percent.min(100) as u8
}

/// Format whole seconds as `MM:SS`
///
/// Minutes are not wrapped into hours, so a 62-minute episode reads `62:05`.
pub fn format_time(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Floor a media-element position to whole seconds
///
/// NaN and negative positions read as 0.
pub fn whole_seconds(position: f64) -> u32 {
    if position.is_nan() || position <= 0.0 {
        0
    } else if position >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        position.floor() as u32
    }
}
