//! Initialize a new transcript document.

use std::path::PathBuf;

use subline_common::config::AppConfig;
use subline_transcript_model::LoadedDocument;

pub fn run(name: String, output: PathBuf, empty: bool, voice: Option<String>) -> anyhow::Result<()> {
    let voice = voice.unwrap_or_else(|| AppConfig::load().editor.voice);

    let path = output.join(&name).join("transcript.json");
    println!("Creating document '{}' at {}", name, path.display());

    let loaded = LoadedDocument::create(&path, name.as_str(), voice.as_str(), !empty)
        .map_err(|e| anyhow::anyhow!("Failed to create document: {e}"))?;

    println!("Document created successfully:");
    println!("  File: {}", loaded.path.display());
    println!("  Voice: {}", loaded.document.voice);
    println!("  Segments: {}", loaded.document.segments.len());
    if !empty {
        println!();
        println!("The demo transcript is in place; try:");
        println!("  subline resolve {} --at 00:00:04", loaded.path.display());
        println!("  subline export {}", loaded.path.display());
    }

    Ok(())
}
