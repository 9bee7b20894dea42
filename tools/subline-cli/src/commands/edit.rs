//! Patch a segment's timing or text.

use std::path::PathBuf;

use subline_transcript_model::{parse_timecode, LoadedDocument, SegmentPatch, SegmentStore};

pub fn run(
    path: PathBuf,
    segment_id: String,
    start: Option<String>,
    end: Option<String>,
    text: Option<String>,
) -> anyhow::Result<()> {
    let mut loaded =
        LoadedDocument::load(&path).map_err(|e| anyhow::anyhow!("Failed to load document: {e}"))?;

    let patch = SegmentPatch { start, end, text };
    if patch.is_empty() {
        anyhow::bail!("Nothing to change: pass --start, --end, or --text.");
    }

    let mut store = SegmentStore::from_segments(std::mem::take(&mut loaded.document.segments));
    let updated = store
        .patch_segment(&segment_id, patch)
        .map_err(|e| anyhow::anyhow!(e))?
        .clone();

    println!("Updated {}:", updated.id);
    println!("  {} - {}", updated.start, updated.end);
    println!("  {}", updated.text);

    // The store accepts whatever was typed; surface the rough edges here.
    for (label, value) in [("start", &updated.start), ("end", &updated.end)] {
        if parse_timecode(value).is_none() {
            println!("  warning: {label} timecode {value:?} does not parse; it resolves to 00:00:00");
        }
    }
    if updated.duration_secs() <= 0.0 {
        println!("  warning: end is not after start; run `subline check` for a full report");
    }

    loaded.document.segments = store.into_segments();
    loaded
        .save()
        .map_err(|e| anyhow::anyhow!("Failed to save document: {e}"))?;

    Ok(())
}
