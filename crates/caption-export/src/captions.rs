//! Caption document generation in SRT and WebVTT formats.

use std::path::Path;

use subline_common::error::SublineResult;
use subline_transcript_model::{format_caption_time, format_vtt_time, Segment};

use crate::transcript::to_plain_transcript;

/// Generate an SRT caption document from segments in store order.
///
/// Each cue is a 1-based positional index line, a
/// `HH:MM:SS,mmm --> HH:MM:SS,mmm` range line, and the cue text, with
/// cues separated by a single blank line. Cue numbering is positional
/// and independent of segment ids.
pub fn to_caption_document(segments: &[Segment]) -> String {
    segments
        .iter()
        .enumerate()
        .map(|(index, segment)| {
            format!(
                "{}\n{} --> {}\n{}",
                index + 1,
                format_caption_time(segment.start_secs()),
                format_caption_time(segment.end_secs()),
                segment.text
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Generate a WebVTT caption document from segments in store order.
pub fn to_vtt_document(segments: &[Segment]) -> String {
    let mut output = String::from("WEBVTT\n\n");

    for segment in segments {
        output.push_str(&format!(
            "{} --> {}\n",
            format_vtt_time(segment.start_secs()),
            format_vtt_time(segment.end_secs()),
        ));
        output.push_str(&segment.text);
        output.push_str("\n\n");
    }

    output
}

/// Write captions to a file, choosing the format from the extension:
/// `vtt` and `txt` are recognized, anything else defaults to SRT.
pub fn write_captions(segments: &[Segment], path: &Path) -> SublineResult<()> {
    let content = match path.extension().and_then(|e| e.to_str()) {
        Some("vtt") => to_vtt_document(segments),
        Some("txt") => to_plain_transcript(segments),
        _ => to_caption_document(segments),
    };
    std::fs::write(path, content)?;
    tracing::info!(path = %path.display(), cues = segments.len(), "captions written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_segments() -> Vec<Segment> {
        vec![
            Segment::new("seg_1", 0.0, 3.0, "A"),
            Segment::new("seg_2", 3.0, 6.0, "B"),
        ]
    }

    #[test]
    fn test_srt_document_layout() {
        let srt = to_caption_document(&demo_segments());
        assert_eq!(
            srt,
            "1\n00:00:00,000 --> 00:00:03,000\nA\n\n2\n00:00:03,000 --> 00:00:06,000\nB"
        );
    }

    #[test]
    fn test_srt_indices_are_positional_not_id_based() {
        let segments = vec![
            Segment::new("seg_9", 0.0, 2.0, "first"),
            Segment::new("seg_4", 2.0, 4.0, "second"),
        ];
        let srt = to_caption_document(&segments);
        assert!(srt.starts_with("1\n"));
        assert!(srt.contains("\n\n2\n"));
    }

    #[test]
    fn test_srt_export_is_idempotent() {
        let segments = demo_segments();
        assert_eq!(to_caption_document(&segments), to_caption_document(&segments));
    }

    #[test]
    fn test_srt_empty_store_yields_empty_document() {
        assert_eq!(to_caption_document(&[]), "");
    }

    #[test]
    fn test_srt_degenerate_timing_passes_through() {
        let mut segment = Segment::new("seg_1", 5.0, 8.0, "reversed");
        segment.end = "00:00:02".to_string();

        let srt = to_caption_document(std::slice::from_ref(&segment));
        assert!(srt.contains("00:00:05,000 --> 00:00:02,000"));
    }

    #[test]
    fn test_vtt_document_layout() {
        let vtt = to_vtt_document(&demo_segments());
        assert!(vtt.starts_with("WEBVTT\n\n"));
        assert!(vtt.contains("00:00:00.000 --> 00:00:03.000\nA\n"));
        assert!(vtt.contains("00:00:03.000 --> 00:00:06.000\nB\n"));
    }

    #[test]
    fn test_write_captions_dispatches_on_extension() {
        let dir = std::env::temp_dir().join("subline_test_export");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();

        let segments = demo_segments();

        let srt_path = dir.join("out.srt");
        write_captions(&segments, &srt_path).unwrap();
        let srt = std::fs::read_to_string(&srt_path).unwrap();
        assert!(srt.starts_with("1\n00:00:00,000"));

        let vtt_path = dir.join("out.vtt");
        write_captions(&segments, &vtt_path).unwrap();
        let vtt = std::fs::read_to_string(&vtt_path).unwrap();
        assert!(vtt.starts_with("WEBVTT"));

        let txt_path = dir.join("out.txt");
        write_captions(&segments, &txt_path).unwrap();
        let txt = std::fs::read_to_string(&txt_path).unwrap();
        assert_eq!(txt, "A\nB");

        std::fs::remove_dir_all(&dir).ok();
    }
}
