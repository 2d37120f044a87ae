//! Reversibility classification of recorded trace entries.
//!
//! Path exploration negates a recorded decision and asks the solver for an input that takes
//! the other branch. Only some entries can be inverted that way. This module decides which:
//!
//! - [`is_interpretable`] excludes concurrency side effects (spawns and messages), which
//!   cannot be flipped by a local boolean constraint.
//! - [`is_reversible_bif`] is the explicit table of built-in functions whose outcome can be
//!   inverted symbolically. Anything not listed is non-reversible.
//! - [`is_reversible`] combines both notions: a boolean path constraint is always
//!   reversible, otherwise the wrapped built-in decides.
//!
//! Every predicate has a typed form and a `*_code` form that accepts raw integers straight
//! from a trace file. The raw forms are total and fall back to the conservative default for
//! integers outside the catalogue instead of failing.
//!
//! # Examples
//!
//! ```rust
//! use pathflip::classify::{is_interpretable, is_reversible, is_reversible_code, EntryKind};
//! use pathflip::protocol::{ConstraintKind, TraceEntryTag};
//!
//! assert!(!is_interpretable(TraceEntryTag::MsgReceive));
//! assert!(is_reversible(EntryKind::Constraint(ConstraintKind::True), None));
//! assert!(is_reversible(EntryKind::Event, Some(TraceEntryTag::ErlangHd1)));
//! assert!(!is_reversible(EntryKind::Event, Some(TraceEntryTag::ErlangIsInteger1)));
//!
//! // raw form, unknown opcode
//! assert!(!is_reversible_code(0, 9999));
//! ```
//!
//! # Thread Safety
//!
//! All functions are pure and hold no state; they can be called concurrently from any
//! number of threads.

use bitflags::bitflags;

use crate::protocol::{ConstraintKind, TraceEntryTag, WireCode};

/// Whether a trace entry records a boolean path constraint or some other event.
///
/// Decoding a raw kind byte is total: `1` and `2` are constraint polarities, every other
/// byte is an [`EntryKind::Event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// A taken branch with the given polarity
    Constraint(ConstraintKind),
    /// Anything that is not a path constraint
    Event,
}

impl EntryKind {
    /// Byte written for [`EntryKind::Event`] entries.
    pub const EVENT_CODE: u8 = 0;

    /// Decodes a raw kind byte.
    #[must_use]
    pub fn from_code(code: u8) -> Self {
        match ConstraintKind::from_code(code) {
            Some(kind) => EntryKind::Constraint(kind),
            None => EntryKind::Event,
        }
    }

    /// The byte this kind is stored as.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            EntryKind::Constraint(kind) => kind.code(),
            EntryKind::Event => Self::EVENT_CODE,
        }
    }

    /// Returns `true` for path constraints of either polarity.
    #[must_use]
    pub const fn is_constraint(self) -> bool {
        matches!(self, EntryKind::Constraint(_))
    }
}

impl From<ConstraintKind> for EntryKind {
    fn from(kind: ConstraintKind) -> Self {
        EntryKind::Constraint(kind)
    }
}

bitflags! {
    /// Classification summary of a single trace entry tag.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TagFlags: u8 {
        /// Records a spawn or message side effect
        const CONCURRENCY = 0x01;
        /// Drawn from the built-in function sub-range
        const BUILTIN = 0x02;
        /// Candidate for local constraint inversion
        const INTERPRETABLE = 0x04;
        /// Built-in whose outcome can be inverted symbolically
        const REVERSIBLE = 0x08;
    }
}

/// Returns `true` if the raw kind byte is one of the two constraint polarities.
#[must_use]
pub fn is_constraint_kind(code: u8) -> bool {
    ConstraintKind::from_code(code).is_some()
}

/// Returns `false` exactly for the five concurrency tags.
///
/// Spawns, spawn completions and message send/receive/consume record side effects between
/// processes; flipping them is not expressible as a satisfiable boolean constraint.
#[must_use]
pub fn is_interpretable(tag: TraceEntryTag) -> bool {
    !matches!(
        tag,
        TraceEntryTag::Spawn
            | TraceEntryTag::Spawned
            | TraceEntryTag::MsgSend
            | TraceEntryTag::MsgReceive
            | TraceEntryTag::MsgConsume
    )
}

/// Raw form of [`is_interpretable`].
///
/// Codes outside the catalogue count as interpretable; only the five known concurrency codes
/// are excluded. Callers that need to reject unknown codes must check membership themselves.
#[must_use]
pub fn is_interpretable_code(code: u32) -> bool {
    match TraceEntryTag::from_code(code) {
        Some(tag) => is_interpretable(tag),
        None => true,
    }
}

/// The built-in reversibility table.
///
/// `erlang:hd/1` and `erlang:tl/1` are reversible. `erlang:is_integer/1` is not: "not an
/// integer" is no single invertible equation over the structure of the tested value.
/// Non-built-in tags are never reversible through this table.
#[must_use]
pub fn is_reversible_bif(tag: TraceEntryTag) -> bool {
    // No wildcard: a new tag must be classified here before the crate compiles.
    match tag {
        TraceEntryTag::ErlangHd1 => true,
        TraceEntryTag::ErlangTl1 => true,
        TraceEntryTag::ErlangIsInteger1 => false,
        TraceEntryTag::Params
        | TraceEntryTag::GuardTrue
        | TraceEntryTag::GuardFalse
        | TraceEntryTag::MatchEqualTrue
        | TraceEntryTag::MatchEqualFalse
        | TraceEntryTag::TupleSize
        | TraceEntryTag::TupleNotSize
        | TraceEntryTag::TupleNotTuple
        | TraceEntryTag::ListNonEmpty
        | TraceEntryTag::ListEmpty
        | TraceEntryTag::ListNotList
        | TraceEntryTag::Spawn
        | TraceEntryTag::Spawned
        | TraceEntryTag::MsgSend
        | TraceEntryTag::MsgReceive
        | TraceEntryTag::MsgConsume
        | TraceEntryTag::UnfoldTuple
        | TraceEntryTag::UnfoldList => false,
    }
}

/// Raw form of [`is_reversible_bif`]. Unknown opcodes are non-reversible.
#[must_use]
pub fn is_reversible_bif_code(code: u32) -> bool {
    match TraceEntryTag::from_code(code) {
        Some(tag) => is_reversible_bif(tag),
        None => false,
    }
}

/// Decides whether a trace entry is a candidate for constraint inversion.
///
/// Constraint entries are reversible without consulting `opcode`. Other entries are
/// reversible only if `opcode` is a built-in listed as reversible by [`is_reversible_bif`].
#[must_use]
pub fn is_reversible(kind: EntryKind, opcode: Option<TraceEntryTag>) -> bool {
    kind.is_constraint() || opcode.is_some_and(is_reversible_bif)
}

/// Raw form of [`is_reversible`], total over all integers.
#[must_use]
pub fn is_reversible_code(kind: u8, opcode: u32) -> bool {
    is_constraint_kind(kind) || is_reversible_bif_code(opcode)
}

impl TraceEntryTag {
    /// Summarises family membership and both predicates as [`TagFlags`].
    #[must_use]
    pub fn flags(self) -> TagFlags {
        let mut flags = TagFlags::empty();
        flags.set(TagFlags::CONCURRENCY, self.is_concurrency());
        flags.set(TagFlags::BUILTIN, self.is_builtin());
        flags.set(TagFlags::INTERPRETABLE, is_interpretable(self));
        flags.set(TagFlags::REVERSIBLE, is_reversible_bif(self));
        flags
    }
}

/// Raw form of [`TraceEntryTag::flags`]. Unknown codes are interpretable and nothing else.
#[must_use]
pub fn flags_for_code(code: u32) -> TagFlags {
    match TraceEntryTag::from_code(code) {
        Some(tag) => tag.flags(),
        None => TagFlags::INTERPRETABLE,
    }
}
