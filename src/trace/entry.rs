use std::fmt;

use crate::{
    classify::{self, EntryKind, TagFlags},
    protocol::{TraceEntryTag, WireCode},
};

/// The opcode of a decoded entry, which may lie outside the catalogue in lenient mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// A catalogued tag
    Known(TraceEntryTag),
    /// A raw code with no catalogue entry
    Unknown(u32),
}

impl Opcode {
    /// Decodes a raw code; never fails.
    #[must_use]
    pub fn from_code(code: u32) -> Self {
        match TraceEntryTag::from_code(code) {
            Some(tag) => Opcode::Known(tag),
            None => Opcode::Unknown(code),
        }
    }

    /// The raw code.
    #[must_use]
    pub fn code(self) -> u32 {
        match self {
            Opcode::Known(tag) => tag.code(),
            Opcode::Unknown(code) => code,
        }
    }

    /// The catalogued tag, if any.
    #[must_use]
    pub fn tag(self) -> Option<TraceEntryTag> {
        match self {
            Opcode::Known(tag) => Some(tag),
            Opcode::Unknown(_) => None,
        }
    }
}

impl From<TraceEntryTag> for Opcode {
    fn from(tag: TraceEntryTag) -> Self {
        Opcode::Known(tag)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Opcode::Known(tag) => write!(f, "{tag}"),
            Opcode::Unknown(code) => write!(f, "unknown({code})"),
        }
    }
}

/// One decoded trace entry. The payload is borrowed from the trace and left uninterpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceEntry<'a> {
    /// Byte offset of the entry within the trace
    pub offset: usize,
    /// Constraint polarity or plain event
    pub kind: EntryKind,
    /// What the entry records
    pub opcode: Opcode,
    /// Opaque operation specific payload
    pub payload: &'a [u8],
}

impl TraceEntry<'_> {
    /// See [`classify::is_interpretable_code`].
    #[must_use]
    pub fn is_interpretable(&self) -> bool {
        classify::is_interpretable_code(self.opcode.code())
    }

    /// See [`classify::is_reversible`].
    #[must_use]
    pub fn is_reversible(&self) -> bool {
        classify::is_reversible(self.kind, self.opcode.tag())
    }

    /// Interpretable and reversible: the entry can be negated to drive exploration.
    #[must_use]
    pub fn is_candidate(&self) -> bool {
        self.is_interpretable() && self.is_reversible()
    }

    /// Classification flags of the opcode.
    #[must_use]
    pub fn flags(&self) -> TagFlags {
        classify::flags_for_code(self.opcode.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::ConstraintKind;

    fn entry(kind: EntryKind, opcode: Opcode) -> TraceEntry<'static> {
        TraceEntry {
            offset: 0,
            kind,
            opcode,
            payload: &[],
        }
    }

    #[test]
    fn opcode_decoding() {
        assert_eq!(Opcode::from_code(3), Opcode::Known(TraceEntryTag::GuardTrue));
        assert_eq!(Opcode::from_code(23), Opcode::Unknown(23));
        assert_eq!(Opcode::Unknown(23).code(), 23);
        assert_eq!(Opcode::Unknown(23).to_string(), "unknown(23)");
        assert_eq!(Opcode::from(TraceEntryTag::ErlangTl1).to_string(), "erlang:tl/1");
    }

    #[test]
    fn candidates() {
        let guard = entry(
            EntryKind::Constraint(ConstraintKind::False),
            TraceEntryTag::GuardFalse.into(),
        );
        assert!(guard.is_candidate());

        let hd = entry(EntryKind::Event, TraceEntryTag::ErlangHd1.into());
        assert!(hd.is_candidate());

        let is_int = entry(EntryKind::Event, TraceEntryTag::ErlangIsInteger1.into());
        assert!(is_int.is_interpretable());
        assert!(!is_int.is_candidate());

        let recv = entry(
            EntryKind::Constraint(ConstraintKind::True),
            TraceEntryTag::MsgReceive.into(),
        );
        assert!(recv.is_reversible());
        assert!(!recv.is_candidate());

        let unknown = entry(EntryKind::Event, Opcode::Unknown(999));
        assert!(unknown.is_interpretable());
        assert!(!unknown.is_reversible());
        assert_eq!(unknown.flags(), TagFlags::INTERPRETABLE);
    }
}
