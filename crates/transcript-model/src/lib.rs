//! Subline Transcript Model
//!
//! Defines the core data contracts for Subline transcripts:
//! - **Timecodes:** Parsing and formatting of clock strings and caption timestamps
//! - **Segments:** Time-coded text segments and the ordered segment store
//! - **Documents:** On-disk transcript documents with metadata
//!
//! Segment boundaries are stored as canonical `HH:MM:SS` strings so that
//! edited values survive serialization verbatim; numeric positions are
//! always derived on demand through the timecode codec.

pub mod document;
pub mod segment;
pub mod timecode;

pub use document::*;
pub use segment::*;
pub use timecode::*;
