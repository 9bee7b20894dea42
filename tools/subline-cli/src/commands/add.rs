//! Append a new segment at the end of the timeline.

use std::path::PathBuf;

use subline_transcript_model::{LoadedDocument, SegmentStore};

pub fn run(path: PathBuf) -> anyhow::Result<()> {
    let mut loaded =
        LoadedDocument::load(&path).map_err(|e| anyhow::anyhow!("Failed to load document: {e}"))?;

    let mut store = SegmentStore::from_segments(std::mem::take(&mut loaded.document.segments));
    let after = store.total_duration();
    let created = store.create_segment(after).clone();

    println!("Added {}:", created.id);
    println!("  {} - {}", created.start, created.end);
    println!("  {}", created.text);

    loaded.document.segments = store.into_segments();
    loaded
        .save()
        .map_err(|e| anyhow::anyhow!("Failed to save document: {e}"))?;

    Ok(())
}
