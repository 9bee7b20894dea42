//! Substring search over transcript segments.

use subline_transcript_model::Segment;

/// Filter segments by a free-text query, preserving store order.
///
/// The match is a case-insensitive substring test against the segment
/// text, the raw start and end timecode strings, and the segment id, so
/// typing `00:00:18` (or just `18`) finds segments by timing as well as
/// by phrase. An empty or whitespace-only query returns every segment.
pub fn filter_segments<'a>(segments: &'a [Segment], query: &str) -> Vec<&'a Segment> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return segments.iter().collect();
    }

    segments
        .iter()
        .filter(|segment| {
            segment.text.to_lowercase().contains(&q)
                || segment.start.to_lowercase().contains(&q)
                || segment.end.to_lowercase().contains(&q)
                || segment.id.to_lowercase().contains(&q)
        })
        .collect()
}
