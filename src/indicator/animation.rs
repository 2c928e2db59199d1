use std::time::{SystemTime, UNIX_EPOCH};

/// One pulse step every 250ms (a full cycle is about one second).
const PULSE_CYCLE_MS: u64 = 250;

/// Frame index that cycles through `frame_count` frames based on system time.
#[inline]
pub fn pulse_frame(frame_count: usize) -> usize {
    if frame_count == 0 {
        return 0;
    }
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    ((now / PULSE_CYCLE_MS) % frame_count as u64) as usize
}

/// Liveness marker glyph for the given frame.
pub(crate) fn pulse_glyph(frames: &[&'static str], frame: usize) -> &'static str {
    if frames.is_empty() {
        return "";
    }
    frames[frame % frames.len()]
}
