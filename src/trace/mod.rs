//! Recorded execution traces.
//!
//! A trace is a header followed by a flat sequence of entries. Each entry is tagged with an
//! [`EntryKind`](crate::classify::EntryKind) byte and a
//! [`TraceEntryTag`](crate::protocol::TraceEntryTag) opcode and carries an opaque payload:
//!
//! ```text
//! header : "PFTR" version:u8
//! entry  : kind:u8 opcode:compressed-u32 payload_len:compressed-u32 payload
//! ```
//!
//! Compressed integers use the ECMA-335 II.23.2 encoding, see [`crate::file::parser`].
//!
//! # Key Components
//!
//! - [`Trace`] - a validated trace, from disk or memory
//! - [`TraceEntry`] / [`Opcode`] - a decoded entry and its possibly-unknown opcode
//! - [`DecodeConfig`] - lenient or strict decoding
//! - [`TraceWriter`] - builds traces
//! - [`TraceSummary`] - per-classification entry counts
//!
//! # Examples
//!
//! ```rust
//! use pathflip::protocol::{ConstraintKind, TraceEntryTag};
//! use pathflip::trace::{DecodeConfig, Trace, TraceWriter};
//!
//! let mut writer = TraceWriter::new();
//! writer.push(ConstraintKind::False.into(), TraceEntryTag::MatchEqualFalse, &[])?;
//!
//! let trace = Trace::from_mem(writer.finish())?;
//! for entry in trace.entries(DecodeConfig::strict())? {
//!     let entry = entry?;
//!     assert!(entry.is_candidate());
//! }
//! # Ok::<(), pathflip::Error>(())
//! ```

mod config;
mod entry;
mod reader;
mod summary;
mod writer;

pub use config::DecodeConfig;
pub use entry::{Opcode, TraceEntry};
pub use reader::Entries;
pub use summary::TraceSummary;
pub use writer::TraceWriter;

use std::path::Path;

use crate::{file::File, Error::NotSupported, Result};

/// Leading bytes of every trace.
pub const TRACE_MAGIC: [u8; 4] = *b"PFTR";

/// Format version written by [`TraceWriter`] and accepted by [`Trace`].
pub const TRACE_VERSION: u8 = 1;

/// Length of the header in bytes.
pub const HEADER_LEN: usize = TRACE_MAGIC.len() + 1;

/// A trace whose header has been validated.
#[derive(Debug)]
pub struct Trace {
    file: File,
}

impl Trace {
    /// Memory-map and validate a trace file.
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] or [`crate::Error::Empty`] from loading and
    /// [`crate::Error::NotSupported`] for a foreign header or version.
    pub fn from_file(path: &Path) -> Result<Trace> {
        Self::load(File::from_file(path)?)
    }

    /// Validate a trace held in memory.
    ///
    /// # Errors
    /// Returns [`crate::Error::Empty`] for empty input and
    /// [`crate::Error::NotSupported`] for a foreign header or version.
    pub fn from_mem(data: Vec<u8>) -> Result<Trace> {
        Self::load(File::from_mem(data)?)
    }

    fn load(file: File) -> Result<Trace> {
        let Ok(header) = file.data_slice(0, HEADER_LEN) else {
            log::warn!("Trace of {} bytes is shorter than its header", file.len());
            return Err(NotSupported);
        };

        if header[..TRACE_MAGIC.len()] != TRACE_MAGIC {
            log::warn!("Trace does not start with {TRACE_MAGIC:?}");
            return Err(NotSupported);
        }

        let version = header[TRACE_MAGIC.len()];
        if version != TRACE_VERSION {
            log::warn!("Trace version {version} is not supported (expected {TRACE_VERSION})");
            return Err(NotSupported);
        }

        Ok(Trace { file })
    }

    /// Size of the trace in bytes, header included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.file.len()
    }

    /// Returns `true` if the trace has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.file.len() == HEADER_LEN
    }

    /// The raw bytes, header included.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        self.file.data()
    }

    /// Iterate the entries.
    ///
    /// # Errors
    /// Fails only if the header was not validated, which [`Trace`] guarantees; entry errors
    /// are reported through the iterator.
    pub fn entries(&self, config: DecodeConfig) -> Result<Entries<'_>> {
        Entries::new(self.file.data(), HEADER_LEN, config)
    }

    /// All exploration candidates, in trace order.
    ///
    /// # Errors
    /// Returns the first decoding error.
    pub fn candidates(&self, config: DecodeConfig) -> Result<Vec<TraceEntry<'_>>> {
        let mut candidates = Vec::new();
        for entry in self.entries(config)? {
            let entry = entry?;
            if entry.is_candidate() {
                candidates.push(entry);
            }
        }
        Ok(candidates)
    }

    /// Count the entries by classification.
    ///
    /// # Errors
    /// Returns the first decoding error.
    pub fn summary(&self, config: DecodeConfig) -> Result<TraceSummary> {
        TraceSummary::collect(self, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{classify::EntryKind, protocol::TraceEntryTag, Error};

    #[test]
    fn header_validation() {
        assert!(matches!(Trace::from_mem(Vec::new()), Err(Error::Empty)));
        assert!(matches!(
            Trace::from_mem(b"PFT".to_vec()),
            Err(Error::NotSupported)
        ));
        assert!(matches!(
            Trace::from_mem(b"XXXX\x01".to_vec()),
            Err(Error::NotSupported)
        ));
        assert!(matches!(
            Trace::from_mem(b"PFTR\x02".to_vec()),
            Err(Error::NotSupported)
        ));

        let trace = Trace::from_mem(b"PFTR\x01".to_vec()).unwrap();
        assert!(trace.is_empty());
        assert_eq!(trace.entries(DecodeConfig::default()).unwrap().count(), 0);
    }

    #[test]
    fn candidates_in_order() {
        let mut writer = TraceWriter::new();
        writer
            .push(EntryKind::Event, TraceEntryTag::ErlangTl1, &[])
            .unwrap();
        writer
            .push(EntryKind::Event, TraceEntryTag::Spawn, &[])
            .unwrap();
        writer
            .push(EntryKind::Event, TraceEntryTag::ErlangHd1, &[])
            .unwrap();

        let trace = Trace::from_mem(writer.finish()).unwrap();
        assert!(!trace.is_empty());

        let candidates = trace.candidates(DecodeConfig::default()).unwrap();
        let tags: Vec<_> = candidates.iter().map(|e| e.opcode).collect();
        assert_eq!(
            tags,
            vec![
                Opcode::Known(TraceEntryTag::ErlangTl1),
                Opcode::Known(TraceEntryTag::ErlangHd1)
            ]
        );
        assert_eq!(candidates[0].offset, HEADER_LEN);
    }
}
