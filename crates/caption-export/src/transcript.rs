//! Plain transcript generation.

use subline_transcript_model::Segment;

/// Generate a plain transcript: trimmed, non-empty segment texts joined
/// by newlines, in store order.
pub fn to_plain_transcript(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|segment| segment.text.trim())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
