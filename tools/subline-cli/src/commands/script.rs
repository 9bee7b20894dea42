//! Project the voiceover script.

use std::path::PathBuf;

use subline_timeline_core::project_script;
use subline_transcript_model::LoadedDocument;

pub fn run(path: PathBuf, voice: Option<String>) -> anyhow::Result<()> {
    let loaded =
        LoadedDocument::load(&path).map_err(|e| anyhow::anyhow!("Failed to load document: {e}"))?;

    let voice = voice.unwrap_or_else(|| loaded.document.voice.clone());
    println!("{}", project_script(&loaded.document.segments, &voice));

    Ok(())
}
