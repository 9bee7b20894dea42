//! Transcript segments and the ordered segment store.
//!
//! Segments are held in insertion order, and that order is authoritative
//! for display and export. The store never re-sorts by time: a segment
//! whose edited boundaries put it temporally out of order with its
//! neighbors stays exactly where it is. Timing consistency is a
//! data-quality concern surfaced to the user, not something the store
//! enforces.

use serde::{Deserialize, Serialize};

use crate::timecode::{format_timecode, parse_timecode};

/// Unique identifier for a transcript segment.
pub type SegmentId = String;

/// Span of a freshly created segment in seconds.
pub const DEFAULT_SEGMENT_SPAN_SECS: f64 = 3.0;

/// Text placed into a freshly created segment.
pub const PLACEHOLDER_TEXT: &str = "New subtitle line...";

/// A single time-coded transcript segment.
///
/// `start` and `end` are stored as canonical `HH:MM:SS` strings. Numeric
/// positions are derived on demand; a stored string that no longer parses
/// resolves to 0 seconds rather than failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Stable identifier, assigned at creation and never reused.
    pub id: SegmentId,

    /// Start boundary as a clock string.
    pub start: String,

    /// End boundary as a clock string.
    pub end: String,

    /// Free-form segment text. May be empty.
    pub text: String,
}

impl Segment {
    /// Create a segment from numeric boundaries.
    pub fn new(
        id: impl Into<SegmentId>,
        start_secs: f64,
        end_secs: f64,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            start: format_timecode(start_secs),
            end: format_timecode(end_secs),
            text: text.into(),
        }
    }

    /// Start boundary in seconds (0 if the stored string is unparseable).
    pub fn start_secs(&self) -> f64 {
        parse_timecode(&self.start).unwrap_or(0.0)
    }

    /// End boundary in seconds (0 if the stored string is unparseable).
    pub fn end_secs(&self) -> f64 {
        parse_timecode(&self.end).unwrap_or(0.0)
    }

    /// Duration in seconds. May be zero or negative for degenerate timing.
    pub fn duration_secs(&self) -> f64 {
        self.end_secs() - self.start_secs()
    }

    /// Whether `position` falls within the half-open `[start, end)` span.
    pub fn contains(&self, position_secs: f64) -> bool {
        position_secs >= self.start_secs() && position_secs < self.end_secs()
    }
}

/// A shallow field patch applied to an existing segment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SegmentPatch {
    pub start: Option<String>,
    pub end: Option<String>,
    pub text: Option<String>,
}

impl SegmentPatch {
    pub fn start(mut self, value: impl Into<String>) -> Self {
        self.start = Some(value.into());
        self
    }

    pub fn end(mut self, value: impl Into<String>) -> Self {
        self.end = Some(value.into());
        self
    }

    pub fn text(mut self, value: impl Into<String>) -> Self {
        self.text = Some(value.into());
        self
    }

    /// Whether the patch carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none() && self.text.is_none()
    }
}

/// Error returned when a patch or lookup names an unknown segment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Segment not found: {id}")]
pub struct SegmentNotFound {
    pub id: SegmentId,
}

/// The ordered collection of transcript segments.
///
/// There is exactly one writer (the interactive editing surface); all
/// derived views are pure functions over `segments()` and recompute on
/// every read.
#[derive(Debug, Clone)]
pub struct SegmentStore {
    segments: Vec<Segment>,
    next_id: u64,
}

impl Default for SegmentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SegmentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
            next_id: 1,
        }
    }

    /// Seed a store from an ordered transcript.
    ///
    /// The id counter advances past the largest `seg_<n>` suffix already
    /// present so that later creations never collide with seeded ids.
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        let next_id = segments
            .iter()
            .filter_map(|s| s.id.strip_prefix("seg_")?.parse::<u64>().ok())
            .max()
            .map_or(1, |max| max + 1);
        Self { segments, next_id }
    }

    /// Append a new segment spanning `[after_secs, after_secs + 3]` with
    /// placeholder text, and return it.
    pub fn create_segment(&mut self, after_secs: f64) -> &Segment {
        let id = format!("seg_{}", self.next_id);
        self.next_id += 1;
        self.segments.push(Segment::new(
            id,
            after_secs,
            after_secs + DEFAULT_SEGMENT_SPAN_SECS,
            PLACEHOLDER_TEXT,
        ));
        self.segments.last().expect("segment was just pushed")
    }

    /// Apply a shallow field merge to the segment with the given id.
    ///
    /// Timing is not validated and the sequence is not reordered, even if
    /// the new boundaries are temporally inconsistent. An unknown id
    /// leaves the store untouched.
    pub fn patch_segment(
        &mut self,
        id: &str,
        patch: SegmentPatch,
    ) -> Result<&Segment, SegmentNotFound> {
        let segment = self
            .segments
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| SegmentNotFound { id: id.to_string() })?;

        if let Some(start) = patch.start {
            segment.start = start;
        }
        if let Some(end) = patch.end {
            segment.end = end;
        }
        if let Some(text) = patch.text {
            segment.text = text;
        }
        Ok(segment)
    }

    /// Look up a segment by id.
    pub fn find_by_id(&self, id: &str) -> Option<&Segment> {
        self.segments.iter().find(|s| s.id == id)
    }

    /// All segments in authoritative display/export order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Consume the store, yielding the ordered segment sequence.
    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Total timeline duration: the maximum end boundary across all
    /// segments, with a floor of 1 second to avoid degenerate ranges.
    pub fn total_duration(&self) -> f64 {
        self.segments
            .iter()
            .map(Segment::end_secs)
            .fold(1.0, f64::max)
    }
}

/// Parse an ordered transcript from a JSON array of segments.
pub fn parse_transcript(json: &str) -> Result<Vec<Segment>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Serialize an ordered transcript to a pretty-printed JSON array.
pub fn serialize_transcript(segments: &[Segment]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_segment_store() -> SegmentStore {
        SegmentStore::from_segments(vec![
            Segment::new("seg_1", 0.0, 3.0, "A"),
            Segment::new("seg_2", 3.0, 6.0, "B"),
        ])
    }

    #[test]
    fn test_create_segment_defaults() {
        let mut store = SegmentStore::new();
        let segment = store.create_segment(10.0);

        assert_eq!(segment.id, "seg_1");
        assert_eq!(segment.start, "00:00:10");
        assert_eq!(segment.end, "00:00:13");
        assert_eq!(segment.text, PLACEHOLDER_TEXT);
    }

    #[test]
    fn test_created_ids_never_collide_with_seeded_ids() {
        let mut store = two_segment_store();
        let segment = store.create_segment(6.0);
        assert_eq!(segment.id, "seg_3");

        let next = store.create_segment(9.0).id.clone();
        assert_eq!(next, "seg_4");
    }

    #[test]
    fn test_patch_merges_only_given_fields() {
        let mut store = two_segment_store();
        let patched = store
            .patch_segment("seg_1", SegmentPatch::default().text("Hello"))
            .unwrap();

        assert_eq!(patched.text, "Hello");
        assert_eq!(patched.start, "00:00:00");
        assert_eq!(patched.end, "00:00:03");
    }

    #[test]
    fn test_patch_unknown_id_reports_not_found() {
        let mut store = two_segment_store();
        let err = store
            .patch_segment("seg_99", SegmentPatch::default().text("x"))
            .unwrap_err();
        assert_eq!(err.id, "seg_99");
        assert_eq!(store.find_by_id("seg_1").unwrap().text, "A");
    }

    #[test]
    fn test_patch_does_not_reorder_out_of_order_timing() {
        let mut store = two_segment_store();
        store
            .patch_segment("seg_1", SegmentPatch::default().start("00:01:00"))
            .unwrap();

        let ids: Vec<&str> = store.segments().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["seg_1", "seg_2"]);
    }

    #[test]
    fn test_patch_accepts_degenerate_timing() {
        let mut store = two_segment_store();
        let patched = store
            .patch_segment("seg_2", SegmentPatch::default().end("00:00:01"))
            .unwrap();
        assert!(patched.duration_secs() < 0.0);
    }

    #[test]
    fn test_total_duration_has_floor_of_one() {
        assert_eq!(SegmentStore::new().total_duration(), 1.0);

        let store = SegmentStore::from_segments(vec![Segment::new("seg_1", 0.0, 0.0, "")]);
        assert_eq!(store.total_duration(), 1.0);

        assert_eq!(two_segment_store().total_duration(), 6.0);
    }

    #[test]
    fn test_unparseable_boundary_resolves_to_zero() {
        let mut store = two_segment_store();
        let patched = store
            .patch_segment("seg_1", SegmentPatch::default().start("garbage"))
            .unwrap();
        assert_eq!(patched.start_secs(), 0.0);
    }

    #[test]
    fn test_contains_is_half_open() {
        let segment = Segment::new("seg_1", 3.0, 6.0, "B");
        assert!(!segment.contains(2.0));
        assert!(segment.contains(3.0));
        assert!(segment.contains(5.0));
        assert!(!segment.contains(6.0));
    }

    #[test]
    fn test_transcript_json_roundtrip() {
        let segments = two_segment_store().into_segments();
        let json = serialize_transcript(&segments).unwrap();
        let parsed = parse_transcript(&json).unwrap();
        assert_eq!(parsed, segments);
    }
}
