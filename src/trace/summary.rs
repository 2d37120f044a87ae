use crate::{
    protocol::TagFamily,
    trace::{DecodeConfig, Opcode, Trace, TraceEntry},
    Result,
};

/// Entry counts of a trace, broken down by classification.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TraceSummary {
    /// All decoded entries
    pub entries: usize,
    /// Entries recording a boolean path constraint
    pub constraints: usize,
    /// Entries that are not concurrency side effects
    pub interpretable: usize,
    /// Entries that could be negated
    pub reversible: usize,
    /// Interpretable and reversible entries, i.e. exploration candidates
    pub candidates: usize,
    /// Entries whose opcode is outside the catalogue
    pub unknown_opcodes: usize,
    /// Entries with a structural tag
    pub structural: usize,
    /// Entries with a concurrency tag
    pub concurrency: usize,
    /// Entries with a built-in function tag
    pub builtin: usize,
}

impl TraceSummary {
    /// Decode every entry of `trace` and count it.
    ///
    /// # Errors
    /// Returns the first decoding error.
    pub fn collect(trace: &Trace, config: DecodeConfig) -> Result<Self> {
        let mut summary = TraceSummary::default();
        for entry in trace.entries(config)? {
            summary.record(&entry?);
        }

        log::debug!(
            "Summarised {} entries, {} exploration candidates",
            summary.entries,
            summary.candidates
        );
        Ok(summary)
    }

    /// Count a single entry.
    pub fn record(&mut self, entry: &TraceEntry<'_>) {
        self.entries += 1;

        if entry.kind.is_constraint() {
            self.constraints += 1;
        }
        let interpretable = entry.is_interpretable();
        let reversible = entry.is_reversible();
        if interpretable {
            self.interpretable += 1;
        }
        if reversible {
            self.reversible += 1;
        }
        if interpretable && reversible {
            self.candidates += 1;
        }

        match entry.opcode {
            Opcode::Known(tag) => match tag.family() {
                TagFamily::Structural => self.structural += 1,
                TagFamily::Concurrency => self.concurrency += 1,
                TagFamily::Builtin => self.builtin += 1,
            },
            Opcode::Unknown(_) => self.unknown_opcodes += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        classify::EntryKind,
        protocol::{ConstraintKind, TraceEntryTag},
        trace::TraceWriter,
    };

    #[test]
    fn counts() {
        let mut writer = TraceWriter::new();
        writer
            .push(EntryKind::Event, TraceEntryTag::Params, &[1, 2, 3])
            .unwrap();
        writer
            .push(ConstraintKind::True.into(), TraceEntryTag::GuardTrue, &[])
            .unwrap();
        writer
            .push(ConstraintKind::False.into(), TraceEntryTag::ListEmpty, &[])
            .unwrap();
        writer
            .push(EntryKind::Event, TraceEntryTag::ErlangHd1, &[])
            .unwrap();
        writer
            .push(EntryKind::Event, TraceEntryTag::ErlangIsInteger1, &[])
            .unwrap();
        writer
            .push(ConstraintKind::True.into(), TraceEntryTag::MsgReceive, &[])
            .unwrap();
        writer.push_raw(0, 300, &[]).unwrap();

        let trace = Trace::from_mem(writer.finish()).unwrap();
        let summary = TraceSummary::collect(&trace, DecodeConfig::lenient()).unwrap();

        assert_eq!(
            summary,
            TraceSummary {
                entries: 7,
                constraints: 3,
                interpretable: 6,
                reversible: 4,
                candidates: 3,
                unknown_opcodes: 1,
                structural: 3,
                concurrency: 1,
                builtin: 2,
            }
        );
    }

    #[test]
    fn strict_fails_on_unknown() {
        let mut writer = TraceWriter::new();
        writer.push_raw(0, 300, &[]).unwrap();

        let trace = Trace::from_mem(writer.finish()).unwrap();
        assert!(TraceSummary::collect(&trace, DecodeConfig::strict()).is_err());
    }
}
