//! Show transcript document information.

use std::path::PathBuf;

use subline_timeline_core::inspect_segments;
use subline_transcript_model::{format_timecode, LoadedDocument, SegmentStore};

pub fn run(path: PathBuf) -> anyhow::Result<()> {
    let loaded =
        LoadedDocument::load(&path).map_err(|e| anyhow::anyhow!("Failed to load document: {e}"))?;

    let d = &loaded.document;
    let store = SegmentStore::from_segments(d.segments.clone());

    println!("Document: {}", d.name);
    println!("  ID: {}", d.id);
    println!("  Created: {}", d.created_at);
    println!("  Modified: {}", d.modified_at);
    println!("  Voice: {}", d.voice);
    println!();

    println!("Timeline:");
    println!("  Segments: {}", store.len());
    println!("  Duration: {}", format_timecode(store.total_duration()));

    let issues = inspect_segments(store.segments());
    if issues.is_empty() {
        println!("  Timing: clean");
    } else {
        println!(
            "  Timing: {} issue(s), run `subline check` for details",
            issues.len()
        );
    }

    Ok(())
}
