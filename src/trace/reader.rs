use crate::{
    classify::EntryKind,
    file::parser::Parser,
    protocol::{ConstraintKind, TraceEntryTag, WireCode},
    trace::{DecodeConfig, Opcode, TraceEntry},
    Error, Result,
};

/// Iterator over the entries of a trace body.
///
/// Yields `Err` once for the first undecodable entry and then stops.
pub struct Entries<'a> {
    parser: Parser<'a>,
    config: DecodeConfig,
    failed: bool,
}

impl<'a> Entries<'a> {
    /// Iterate `data`, which must start at `start` with the first entry.
    pub(crate) fn new(data: &'a [u8], start: usize, config: DecodeConfig) -> Result<Self> {
        let mut parser = Parser::new(data);
        parser.seek(start)?;

        Ok(Entries {
            parser,
            config,
            failed: false,
        })
    }

    fn read_entry(&mut self) -> Result<TraceEntry<'a>> {
        let offset = self.parser.pos();

        let kind_code = self.parser.read_le::<u8>()?;
        if self.config.strict
            && kind_code != EntryKind::EVENT_CODE
            && ConstraintKind::from_code(kind_code).is_none()
        {
            return Err(Error::UnknownTag {
                family: "entry kind",
                code: u32::from(kind_code),
            });
        }
        let kind = EntryKind::from_code(kind_code);

        let code = self.parser.read_compressed_uint()?;
        let opcode = Opcode::from_code(code);
        if let Opcode::Unknown(code) = opcode {
            if self.config.strict {
                return Err(Error::UnknownTag {
                    family: TraceEntryTag::FAMILY,
                    code,
                });
            }
            log::debug!("Entry at {offset:#x} has uncatalogued opcode {code}");
        }

        let len = self.parser.read_compressed_uint()? as usize;
        if len > self.config.max_payload_len {
            return Err(Error::PayloadTooLarge {
                len,
                limit: self.config.max_payload_len,
            });
        }
        let payload = self.parser.read_bytes(len)?;

        log::trace!("Entry at {offset:#x}: {kind:?} {opcode} ({len} bytes)");

        Ok(TraceEntry {
            offset,
            kind,
            opcode,
            payload,
        })
    }
}

impl<'a> Iterator for Entries<'a> {
    type Item = Result<TraceEntry<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || !self.parser.has_more_data() {
            return None;
        }

        let entry = self.read_entry();
        if entry.is_err() {
            self.failed = true;
        }
        Some(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_body() {
        // guard_true constraint, empty payload; erlang:hd/1 event with 2 payload bytes
        let body = [0x01, 0x03, 0x00, 0x00, 0x19, 0x02, 0xAA, 0xBB];
        let entries: Vec<_> = Entries::new(&body, 0, DecodeConfig::default())
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].kind, EntryKind::Constraint(ConstraintKind::True));
        assert_eq!(entries[0].opcode, Opcode::Known(TraceEntryTag::GuardTrue));
        assert_eq!(entries[1].offset, 3);
        assert_eq!(entries[1].opcode, Opcode::Known(TraceEntryTag::ErlangHd1));
        assert_eq!(entries[1].payload, &[0xAA, 0xBB]);
    }

    #[test]
    fn lenient_keeps_unknown() {
        let body = [0x09, 0x16, 0x00];
        let mut entries = Entries::new(&body, 0, DecodeConfig::lenient()).unwrap();

        let entry = entries.next().unwrap().unwrap();
        assert_eq!(entry.kind, EntryKind::Event);
        assert_eq!(entry.opcode, Opcode::Unknown(22));
        assert!(entries.next().is_none());
    }

    #[test]
    fn strict_rejects_unknown() {
        let body = [0x00, 0x16, 0x00];
        let mut entries = Entries::new(&body, 0, DecodeConfig::strict()).unwrap();
        assert!(matches!(
            entries.next(),
            Some(Err(Error::UnknownTag { code: 22, .. }))
        ));
        assert!(entries.next().is_none());

        let body = [0x07, 0x03, 0x00];
        let mut entries = Entries::new(&body, 0, DecodeConfig::strict()).unwrap();
        assert!(matches!(
            entries.next(),
            Some(Err(Error::UnknownTag {
                family: "entry kind",
                code: 7
            }))
        ));
    }

    #[test]
    fn truncated_payload() {
        let body = [0x00, 0x19, 0x04, 0xAA];
        let mut entries = Entries::new(&body, 0, DecodeConfig::default()).unwrap();
        assert!(matches!(entries.next(), Some(Err(Error::OutOfBounds))));
        assert!(entries.next().is_none());
    }

    #[test]
    fn payload_limit() {
        let body = [0x00, 0x19, 0x04, 0xAA, 0xBB, 0xCC, 0xDD];
        let config = DecodeConfig::default().with_max_payload_len(3);
        let mut entries = Entries::new(&body, 0, config).unwrap();
        assert!(matches!(
            entries.next(),
            Some(Err(Error::PayloadTooLarge { len: 4, limit: 3 }))
        ));
    }
}
