//! Filter segments by text, timecode, or id.

use std::path::PathBuf;

use subline_timeline_core::filter_segments;
use subline_transcript_model::LoadedDocument;

pub fn run(path: PathBuf, query: String) -> anyhow::Result<()> {
    let loaded =
        LoadedDocument::load(&path).map_err(|e| anyhow::anyhow!("Failed to load document: {e}"))?;

    let segments = &loaded.document.segments;
    let hits = filter_segments(segments, &query);

    if hits.is_empty() {
        println!("No segments match {query:?}.");
        return Ok(());
    }

    println!("{} of {} segment(s) match {query:?}:", hits.len(), segments.len());
    for segment in hits {
        println!("  {} • {} - {}", segment.id, segment.start, segment.end);
        println!("      {}", segment.text);
    }

    Ok(())
}
