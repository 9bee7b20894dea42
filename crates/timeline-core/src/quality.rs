//! Advisory timing consistency checks.
//!
//! The store deliberately accepts degenerate timing (reversed spans,
//! overlaps, out-of-order sequences) rather than rejecting edits. This
//! pass reports those conditions so the editing surface can surface them
//! to the user; nothing here mutates or corrects the segments.

use subline_transcript_model::{parse_timecode, Segment};

/// Inspect segments for timing issues, in store order.
///
/// Returns one human-readable finding per issue; an empty list means the
/// transcript timing is clean.
pub fn inspect_segments(segments: &[Segment]) -> Vec<String> {
    let mut issues = Vec::new();

    for (i, segment) in segments.iter().enumerate() {
        let position = i + 1;

        if parse_timecode(&segment.start).is_none() {
            issues.push(format!(
                "Segment {position} ({}): unparseable start timecode {:?}",
                segment.id, segment.start
            ));
        }
        if parse_timecode(&segment.end).is_none() {
            issues.push(format!(
                "Segment {position} ({}): unparseable end timecode {:?}",
                segment.id, segment.end
            ));
        }

        if segment.end_secs() <= segment.start_secs() {
            issues.push(format!(
                "Segment {position} ({}): end {} is not after start {}",
                segment.id, segment.end, segment.start
            ));
        }
    }

    for pair in segments.windows(2) {
        let (current, next) = (&pair[0], &pair[1]);

        if current.end_secs() > next.start_secs() {
            issues.push(format!(
                "Segments {} and {}: overlapping spans ({} > {})",
                current.id, next.id, current.end, next.start
            ));
        }
        if next.start_secs() < current.start_secs() {
            issues.push(format!(
                "Segments {} and {}: out of temporal order",
                current.id, next.id
            ));
        }
    }

    if !issues.is_empty() {
        tracing::debug!(count = issues.len(), "transcript timing issues found");
    }
    issues
}
