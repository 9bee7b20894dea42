//! Subline Caption Export
//!
//! Serializes the segment store into downloadable text artifacts:
//! - **SRT:** numbered cues with comma-millisecond timestamps
//! - **WebVTT:** header plus dot-millisecond cues
//! - **Plain transcript:** newline-joined segment text
//!
//! Formatting is a pure function of the segment sequence: cue order is
//! store order, and degenerate timing passes through uncorrected. Turning
//! the produced strings into files is the only I/O here, and it stays at
//! the edge in [`write_captions`].

pub mod captions;
pub mod transcript;

pub use captions::*;
pub use transcript::*;
