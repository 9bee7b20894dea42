//! Export captions from a transcript document.

use std::path::PathBuf;

use subline_caption_export::write_captions;
use subline_transcript_model::LoadedDocument;

pub fn run(path: PathBuf, output: Option<PathBuf>, format: String) -> anyhow::Result<()> {
    let loaded =
        LoadedDocument::load(&path).map_err(|e| anyhow::anyhow!("Failed to load document: {e}"))?;

    if !matches!(format.as_str(), "srt" | "vtt" | "txt") {
        anyhow::bail!("Unknown format: {format}. Use: srt, vtt, txt");
    }

    let output_path = output.unwrap_or_else(|| loaded.path.with_extension(&format));
    tracing::debug!(path = %output_path.display(), "resolved export target");

    write_captions(&loaded.document.segments, &output_path)
        .map_err(|e| anyhow::anyhow!("Export failed: {e}"))?;

    println!(
        "Wrote {} cue(s) to {}",
        loaded.document.segments.len(),
        output_path.display()
    );

    Ok(())
}
