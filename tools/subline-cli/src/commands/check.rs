//! Report transcript timing issues.

use std::path::PathBuf;

use subline_timeline_core::inspect_segments;
use subline_transcript_model::LoadedDocument;

pub fn run(path: PathBuf) -> anyhow::Result<()> {
    println!("Checking document at: {}", path.display());

    let loaded =
        LoadedDocument::load(&path).map_err(|e| anyhow::anyhow!("Failed to load document: {e}"))?;

    let issues = inspect_segments(&loaded.document.segments);
    if issues.is_empty() {
        println!("  Segments: {}", loaded.document.segments.len());
        println!("\nNo timing issues found.");
    } else {
        println!("\nTiming issues:");
        for issue in &issues {
            println!("  - {issue}");
        }
        println!(
            "\n{} issue(s) found. Segments are kept as-is; exports reproduce them verbatim.",
            issues.len()
        );
    }

    Ok(())
}
