//! On-disk transcript documents.
//!
//! A document is the file-level container the CLI reads and writes:
//! metadata plus the ordered segment sequence, serialized as pretty JSON.
//! The engine itself never touches the filesystem; loading and saving
//! happen at the collaborator boundary.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::segment::Segment;

/// Top-level transcript document (`transcript.json`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptDocument {
    /// Schema version.
    pub version: String,

    /// Human-readable document name.
    pub name: String,

    /// Unique document identifier (UUID).
    pub id: String,

    /// Creation timestamp (ISO 8601).
    pub created_at: String,

    /// Last modified timestamp (ISO 8601).
    pub modified_at: String,

    /// Selected voice profile for script projection.
    pub voice: String,

    /// Ordered transcript segments.
    pub segments: Vec<Segment>,
}

impl TranscriptDocument {
    /// Create a new empty document with defaults.
    pub fn new(name: impl Into<String>, voice: impl Into<String>) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            version: "1.0".to_string(),
            name: name.into(),
            id: uuid_v4(),
            created_at: now.clone(),
            modified_at: now,
            voice: voice.into(),
            segments: vec![],
        }
    }

    /// Create a document pre-filled with the demo transcript.
    pub fn seeded(name: impl Into<String>, voice: impl Into<String>) -> Self {
        let mut document = Self::new(name, voice);
        document.segments = default_transcript();
        document
    }

    /// Stamp the modified-at timestamp.
    pub fn touch(&mut self) {
        self.modified_at = chrono::Utc::now().to_rfc3339();
    }
}

/// A transcript document bound to its filesystem location.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    /// Path of the backing JSON file.
    pub path: PathBuf,

    /// The document contents.
    pub document: TranscriptDocument,
}

impl LoadedDocument {
    /// Load a document from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref().to_path_buf();

        let json = std::fs::read_to_string(&path).map_err(|e| DocumentError::IoError {
            path: path.clone(),
            source: e,
        })?;

        let document: TranscriptDocument =
            serde_json::from_str(&json).map_err(|e| DocumentError::ParseError {
                path: path.clone(),
                source: e,
            })?;

        Ok(Self { path, document })
    }

    /// Save the document back to its file, updating the modified stamp.
    pub fn save(&mut self) -> Result<(), DocumentError> {
        self.document.touch();

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| DocumentError::IoError {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let json =
            serde_json::to_string_pretty(&self.document).map_err(|e| DocumentError::ParseError {
                path: self.path.clone(),
                source: e,
            })?;
        std::fs::write(&self.path, json).map_err(|e| DocumentError::IoError {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Create a new document on disk.
    pub fn create(
        path: impl AsRef<Path>,
        name: impl Into<String>,
        voice: impl Into<String>,
        seeded: bool,
    ) -> Result<Self, DocumentError> {
        let document = if seeded {
            TranscriptDocument::seeded(name, voice)
        } else {
            TranscriptDocument::new(name, voice)
        };

        let mut loaded = Self {
            path: path.as_ref().to_path_buf(),
            document,
        };
        loaded.save()?;
        Ok(loaded)
    }
}

/// Errors that can occur when working with transcript documents.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("I/O error at {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Parse error in {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// The demo transcript used to seed new documents.
pub fn default_transcript() -> Vec<Segment> {
    [
        (0, 3, "Hello, today we will start with a short introduction."),
        (
            3,
            6,
            "Next we will show how subtitle styling updates in real time.",
        ),
        (6, 10, "After that you can export the file as SRT or VTT."),
        (
            10,
            14,
            "This interface version demonstrates frontend behavior only.",
        ),
        (
            14,
            18,
            "In a real recording, subtitle chunks can become much denser.",
        ),
        (
            18,
            21,
            "Use the timeline to jump to exact moments before editing.",
        ),
        (
            21,
            24,
            "Each edited line immediately updates the voiceover script.",
        ),
        (
            24,
            28,
            "You can switch between original, subtitled, and voiceover preview.",
        ),
        (
            28,
            31,
            "Search helps locate segments by phrase when the list is long.",
        ),
        (
            31,
            35,
            "The active segment remains synchronized with the playhead.",
        ),
        (35, 39, "You can also jump directly by entering a timecode."),
        (
            39,
            43,
            "Style controls define subtitle size, position, and background.",
        ),
        (
            43,
            46,
            "Voice controls tune the synthetic narration profile and tone.",
        ),
        (
            46,
            50,
            "Exports always reflect the latest edited subtitle timeline.",
        ),
    ]
    .iter()
    .enumerate()
    .map(|(index, (start, end, text))| {
        Segment::new(
            format!("seg_{}", index + 1),
            *start as f64,
            *end as f64,
            *text,
        )
    })
    .collect()
}

/// Generate a simple UUID v4 without external dependency.
fn uuid_v4() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    format!(
        "{:08x}-{:04x}-4{:03x}-{:04x}-{:012x}",
        (seed & 0xFFFFFFFF) as u32,
        ((seed >> 32) & 0xFFFF) as u16,
        ((seed >> 48) & 0x0FFF) as u16,
        (((seed >> 60) & 0x3F) | 0x80) as u16 | (((seed >> 66) & 0x3FF) as u16) << 6,
        (seed >> 76) & 0xFFFFFFFFFFFF,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_defaults() {
        let document = TranscriptDocument::new("Launch video", "nova");
        assert_eq!(document.name, "Launch video");
        assert_eq!(document.version, "1.0");
        assert_eq!(document.voice, "nova");
        assert!(document.segments.is_empty());
    }

    #[test]
    fn test_seeded_document_carries_demo_transcript() {
        let document = TranscriptDocument::seeded("Demo", "nova");
        assert_eq!(document.segments.len(), 14);
        assert_eq!(document.segments[0].id, "seg_1");
        assert_eq!(document.segments[0].start, "00:00:00");
        assert_eq!(document.segments[13].end, "00:00:50");
    }

    #[test]
    fn test_document_serialization_roundtrip() {
        let document = TranscriptDocument::seeded("Demo", "atlas");
        let json = serde_json::to_string_pretty(&document).unwrap();
        let parsed: TranscriptDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.name, document.name);
        assert_eq!(parsed.voice, "atlas");
        assert_eq!(parsed.segments, document.segments);
    }

    #[test]
    fn test_loaded_document_create_and_load() {
        let dir = std::env::temp_dir().join("subline_test_document");
        let _ = std::fs::remove_dir_all(&dir);

        let path = dir.join("transcript.json");
        let created = LoadedDocument::create(&path, "Integration Test", "nova", true).unwrap();
        assert_eq!(created.document.name, "Integration Test");

        let loaded = LoadedDocument::load(&path).unwrap();
        assert_eq!(loaded.document.name, "Integration Test");
        assert_eq!(loaded.document.segments.len(), 14);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_missing_file_reports_io_error() {
        let path = std::env::temp_dir().join("subline_missing").join("nope.json");
        let err = LoadedDocument::load(&path).unwrap_err();
        assert!(matches!(err, DocumentError::IoError { .. }));
    }
}
