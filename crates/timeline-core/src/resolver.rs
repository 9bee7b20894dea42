//! Active-segment resolution against a playhead position.
//!
//! Resolution is a two-phase policy over store order:
//! 1. The first segment whose `[start, end)` span contains the position.
//! 2. Otherwise, the *last* segment whose start is at or before the
//!    position (reverse scan).
//!
//! Phase 2 makes segments sticky: once the playhead passes the final
//! segment's end, that segment stays active instead of flipping to none,
//! and gaps between segments resolve to the most recently started
//! segment. Only a position before every start resolves to none.

use subline_transcript_model::Segment;

/// Resolve the active segment for a playhead position in seconds.
///
/// The position is normalized to a non-negative whole second before the
/// scan, matching the one-second granularity of timeline scrubbing.
pub fn resolve_active(segments: &[Segment], position_secs: f64) -> Option<&Segment> {
    let position = position_secs.max(0.0).floor();

    if let Some(inside) = segments.iter().find(|s| s.contains(position)) {
        return Some(inside);
    }

    let fallback = segments
        .iter()
        .rev()
        .find(|s| position >= s.start_secs());
    if fallback.is_none() {
        tracing::trace!(position, "playhead precedes every segment start");
    }
    fallback
}

/// Clamp a jump target into the valid timeline range `[0, total_duration]`.
pub fn clamp_position(position_secs: f64, total_duration: f64) -> f64 {
    position_secs.clamp(0.0, total_duration.max(0.0))
}
