//! Voiceover script projection.

use subline_transcript_model::Segment;

/// Flatten all segment text into a single narration script.
///
/// The script opens with a tag line naming the selected voice profile,
/// followed by every segment's trimmed text joined with single spaces.
/// Empty segments are skipped. The projection is recomputed from the
/// live segments on every call, so edits are always reflected.
pub fn project_script(segments: &[Segment], voice: &str) -> String {
    let body = segments
        .iter()
        .map(|segment| segment.text.trim())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    format!("Tone {voice}. {body}")
}
