use crate::{
    classify::EntryKind,
    file::parser::write_compressed_uint,
    protocol::{TraceEntryTag, WireCode},
    trace::{TRACE_MAGIC, TRACE_VERSION},
    Result,
};

/// Builds a trace in memory, header first, one entry per `push`.
///
/// # Examples
///
/// ```rust
/// use pathflip::classify::EntryKind;
/// use pathflip::protocol::{ConstraintKind, TraceEntryTag};
/// use pathflip::trace::{Trace, TraceWriter};
///
/// let mut writer = TraceWriter::new();
/// writer.push(ConstraintKind::True.into(), TraceEntryTag::GuardTrue, b"x")?;
/// writer.push(EntryKind::Event, TraceEntryTag::MsgSend, &[])?;
///
/// let trace = Trace::from_mem(writer.finish())?;
/// assert_eq!(trace.entries(Default::default())?.count(), 2);
/// # Ok::<(), pathflip::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct TraceWriter {
    buffer: Vec<u8>,
    entries: usize,
}

impl Default for TraceWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TraceWriter {
    /// Start a trace with the current header.
    #[must_use]
    pub fn new() -> Self {
        let mut buffer = Vec::with_capacity(64);
        buffer.extend_from_slice(&TRACE_MAGIC);
        buffer.push(TRACE_VERSION);

        TraceWriter { buffer, entries: 0 }
    }

    /// Append a catalogued entry.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if the payload is too long to encode.
    pub fn push(&mut self, kind: EntryKind, tag: TraceEntryTag, payload: &[u8]) -> Result<()> {
        self.push_raw(kind.code(), tag.code(), payload)
    }

    /// Append an entry from raw codes, without checking them against the catalogue.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if `opcode` or the payload length exceed the
    /// compressed integer range. Nothing is written in that case.
    pub fn push_raw(&mut self, kind: u8, opcode: u32, payload: &[u8]) -> Result<()> {
        let Ok(len) = u32::try_from(payload.len()) else {
            return Err(malformed_error!("Payload of {} bytes", payload.len()));
        };

        let mut header = Vec::with_capacity(9);
        header.push(kind);
        write_compressed_uint(opcode, &mut header)?;
        write_compressed_uint(len, &mut header)?;

        self.buffer.extend_from_slice(&header);
        self.buffer.extend_from_slice(payload);
        self.entries += 1;
        Ok(())
    }

    /// Number of entries pushed so far.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries
    }

    /// The encoded trace.
    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_only() {
        let writer = TraceWriter::new();
        assert_eq!(writer.entry_count(), 0);
        assert_eq!(writer.finish(), b"PFTR\x01");
    }

    #[test]
    fn entry_layout() {
        let mut writer = TraceWriter::new();
        writer
            .push(EntryKind::Event, TraceEntryTag::ErlangTl1, &[0x10, 0x20])
            .unwrap();
        assert_eq!(writer.entry_count(), 1);
        assert_eq!(&writer.finish()[5..], &[0x00, 0x1A, 0x02, 0x10, 0x20]);
    }

    #[test]
    fn raw_out_of_range_writes_nothing() {
        let mut writer = TraceWriter::new();
        assert!(writer.push_raw(0, u32::MAX, &[]).is_err());
        assert_eq!(writer.entry_count(), 0);
        assert_eq!(writer.finish().len(), 5);
    }
}
