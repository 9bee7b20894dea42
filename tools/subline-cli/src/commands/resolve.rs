//! Resolve the active segment at a playhead position.

use std::path::PathBuf;

use subline_timeline_core::{clamp_position, resolve_active};
use subline_transcript_model::{format_timecode, parse_timecode, LoadedDocument, SegmentStore};

pub fn run(path: PathBuf, at: String) -> anyhow::Result<()> {
    let loaded =
        LoadedDocument::load(&path).map_err(|e| anyhow::anyhow!("Failed to load document: {e}"))?;

    let Some(position) = parse_timecode(&at) else {
        anyhow::bail!("Unparseable position: {at:?}. Use a timecode like 00:01:24 or plain seconds.");
    };

    let store = SegmentStore::from_segments(loaded.document.segments);
    let position = clamp_position(position, store.total_duration());

    println!(
        "Playhead {} / {}",
        format_timecode(position),
        format_timecode(store.total_duration())
    );

    match resolve_active(store.segments(), position) {
        Some(segment) => {
            println!("Active segment: {}", segment.id);
            println!("  {} - {}", segment.start, segment.end);
            println!("  {}", segment.text);
        }
        None => println!("No active segment (playhead precedes the first segment)."),
    }

    Ok(())
}
