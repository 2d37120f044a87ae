use strum::{Display, EnumCount, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::protocol::{codes, impl_wire_conversions, WireCode};

/// Broad grouping of trace entry tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum TagFamily {
    /// Deterministic, local computation steps (bindings, guards, matches, unfolding)
    Structural,
    /// Process spawning and message passing side effects
    Concurrency,
    /// Interpreted primitive operations, drawn from the sparse high sub-range
    Builtin,
}

/// Identifies what kind of event a single trace entry records.
///
/// Structural and concurrency tags occupy `1..=19`. Built-in function tags start at
/// [`codes::OP_BUILTIN_BASE`]; new primitives get codes above the current maximum. Codes
/// reserved by [`codes::is_reserved_code`] never decode to a tag.
///
/// Built-in tags display as `module:function/arity`, everything else in `snake_case`.
/// Both forms (and `erlang_hd_1` style aliases) parse back through [`std::str::FromStr`].
///
/// # Examples
///
/// ```rust
/// use pathflip::protocol::{TagFamily, TraceEntryTag, WireCode};
///
/// let tag: TraceEntryTag = "erlang:tl/1".parse()?;
/// assert_eq!(tag, TraceEntryTag::ErlangTl1);
/// assert_eq!(tag.code(), 26);
/// assert_eq!(tag.family(), TagFamily::Builtin);
/// assert_eq!(TraceEntryTag::MsgSend.family(), TagFamily::Concurrency);
/// # Ok::<(), strum::ParseError>(())
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumCount,
    Display,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
#[repr(u32)]
pub enum TraceEntryTag {
    /// Binding of function parameters to symbolic variables
    Params = codes::OP_PARAMS,
    /// Guard evaluated to true
    GuardTrue = codes::OP_GUARD_TRUE,
    /// Guard evaluated to false
    GuardFalse = codes::OP_GUARD_FALSE,
    /// Pattern match equality succeeded
    MatchEqualTrue = codes::OP_MATCH_EQUAL_TRUE,
    /// Pattern match equality failed
    MatchEqualFalse = codes::OP_MATCH_EQUAL_FALSE,
    /// Value is a tuple of the expected size
    TupleSize = codes::OP_TUPLE_SZ,
    /// Value is a tuple of a different size
    TupleNotSize = codes::OP_TUPLE_NOT_SZ,
    /// Value is not a tuple
    TupleNotTuple = codes::OP_TUPLE_NOT_TPL,
    /// Value is a non-empty list
    ListNonEmpty = codes::OP_LIST_NON_EMPTY,
    /// Value is the empty list
    ListEmpty = codes::OP_LIST_EMPTY,
    /// Value is not a list
    ListNotList = codes::OP_LIST_NOT_LST,
    /// Process spawn requested
    Spawn = codes::OP_SPAWN,
    /// Spawned process started
    Spawned = codes::OP_SPAWNED,
    /// Message sent
    MsgSend = codes::OP_MSG_SEND,
    /// Message arrived in a mailbox
    MsgReceive = codes::OP_MSG_RECEIVE,
    /// Message removed from a mailbox by a receive clause
    MsgConsume = codes::OP_MSG_CONSUME,
    /// Tuple split into its elements
    UnfoldTuple = codes::OP_UNFOLD_TUPLE,
    /// List split into its elements
    UnfoldList = codes::OP_UNFOLD_LIST,
    /// `erlang:hd/1`
    #[strum(to_string = "erlang:hd/1", serialize = "erlang_hd_1")]
    ErlangHd1 = codes::OP_ERLANG_HD_1,
    /// `erlang:tl/1`
    #[strum(to_string = "erlang:tl/1", serialize = "erlang_tl_1")]
    ErlangTl1 = codes::OP_ERLANG_TL_1,
    /// `erlang:is_integer/1`
    #[strum(to_string = "erlang:is_integer/1", serialize = "erlang_is_integer_1")]
    ErlangIsInteger1 = codes::OP_ERLANG_IS_INTEGER_1,
}

impl TraceEntryTag {
    /// The family this tag belongs to.
    #[must_use]
    pub const fn family(self) -> TagFamily {
        match self {
            TraceEntryTag::Spawn
            | TraceEntryTag::Spawned
            | TraceEntryTag::MsgSend
            | TraceEntryTag::MsgReceive
            | TraceEntryTag::MsgConsume => TagFamily::Concurrency,
            TraceEntryTag::ErlangHd1
            | TraceEntryTag::ErlangTl1
            | TraceEntryTag::ErlangIsInteger1 => TagFamily::Builtin,
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
            | TraceEntryTag::UnfoldTuple
            | TraceEntryTag::UnfoldList => TagFamily::Structural,
        }
    }

    /// Returns `true` for built-in function tags.
    #[must_use]
    pub const fn is_builtin(self) -> bool {
        matches!(self.family(), TagFamily::Builtin)
    }

    /// Returns `true` for the five process / message tags.
    #[must_use]
    pub const fn is_concurrency(self) -> bool {
        matches!(self.family(), TagFamily::Concurrency)
    }

    /// Highest code currently assigned. New built-ins are numbered above it.
    #[must_use]
    pub fn max_code() -> u32 {
        TraceEntryTag::iter().map(WireCode::code).max().unwrap_or(0)
    }

    /// All tags of the given family, in code order.
    pub fn of_family(family: TagFamily) -> impl Iterator<Item = TraceEntryTag> {
        TraceEntryTag::iter().filter(move |tag| tag.family() == family)
    }
}

impl WireCode for TraceEntryTag {
    type Repr = u32;

    const FAMILY: &'static str = "trace entry tag";

    fn code(self) -> u32 {
        self as u32
    }

    fn from_code(code: u32) -> Option<Self> {
        match code {
            codes::OP_PARAMS => Some(TraceEntryTag::Params),
            codes::OP_GUARD_TRUE => Some(TraceEntryTag::GuardTrue),
            codes::OP_GUARD_FALSE => Some(TraceEntryTag::GuardFalse),
            codes::OP_MATCH_EQUAL_TRUE => Some(TraceEntryTag::MatchEqualTrue),
            codes::OP_MATCH_EQUAL_FALSE => Some(TraceEntryTag::MatchEqualFalse),
            codes::OP_TUPLE_SZ => Some(TraceEntryTag::TupleSize),
            codes::OP_TUPLE_NOT_SZ => Some(TraceEntryTag::TupleNotSize),
            codes::OP_TUPLE_NOT_TPL => Some(TraceEntryTag::TupleNotTuple),
            codes::OP_LIST_NON_EMPTY => Some(TraceEntryTag::ListNonEmpty),
            codes::OP_LIST_EMPTY => Some(TraceEntryTag::ListEmpty),
            codes::OP_LIST_NOT_LST => Some(TraceEntryTag::ListNotList),
            codes::OP_SPAWN => Some(TraceEntryTag::Spawn),
            codes::OP_SPAWNED => Some(TraceEntryTag::Spawned),
            codes::OP_MSG_SEND => Some(TraceEntryTag::MsgSend),
            codes::OP_MSG_RECEIVE => Some(TraceEntryTag::MsgReceive),
            codes::OP_MSG_CONSUME => Some(TraceEntryTag::MsgConsume),
            codes::OP_UNFOLD_TUPLE => Some(TraceEntryTag::UnfoldTuple),
            codes::OP_UNFOLD_LIST => Some(TraceEntryTag::UnfoldList),
            codes::OP_ERLANG_HD_1 => Some(TraceEntryTag::ErlangHd1),
            codes::OP_ERLANG_TL_1 => Some(TraceEntryTag::ErlangTl1),
            codes::OP_ERLANG_IS_INTEGER_1 => Some(TraceEntryTag::ErlangIsInteger1),
            _ => None,
        }
    }
}

impl_wire_conversions!(TraceEntryTag, u32);

#[cfg(test)]
mod tests {
    use super::*;
    use strum::EnumCount;

    #[test]
    fn reserved_codes_never_decode() {
        assert_eq!(TraceEntryTag::from_code(0), None);
        assert_eq!(TraceEntryTag::from_code(codes::OP_RETIRED_SPEC), None);
        for code in codes::OP_RESERVED_GAP {
            assert_eq!(TraceEntryTag::from_code(code), None);
        }
        for tag in TraceEntryTag::iter() {
            assert!(!codes::is_reserved_code(tag.code()));
        }
    }

    #[test]
    fn families() {
        assert_eq!(TraceEntryTag::of_family(TagFamily::Concurrency).count(), 5);
        assert_eq!(TraceEntryTag::of_family(TagFamily::Builtin).count(), 3);
        assert_eq!(TraceEntryTag::of_family(TagFamily::Structural).count(), 13);
        assert_eq!(TraceEntryTag::COUNT, 21);
    }

    #[test]
    fn builtins_sit_in_high_range() {
        for tag in TraceEntryTag::iter() {
            assert_eq!(tag.is_builtin(), tag.code() >= codes::OP_BUILTIN_BASE);
        }
        assert_eq!(TraceEntryTag::max_code(), codes::OP_ERLANG_IS_INTEGER_1);
    }

    #[test]
    fn names_parse_back() {
        for tag in TraceEntryTag::iter() {
            assert_eq!(tag.to_string().parse::<TraceEntryTag>().unwrap(), tag);
        }
        assert_eq!(TraceEntryTag::GuardTrue.to_string(), "guard_true");
        assert_eq!(TraceEntryTag::ErlangHd1.to_string(), "erlang:hd/1");
        assert_eq!(
            "erlang_is_integer_1".parse::<TraceEntryTag>().unwrap(),
            TraceEntryTag::ErlangIsInteger1
        );
        let name: &'static str = TraceEntryTag::MsgConsume.into();
        assert_eq!(name, "msg_consume");
    }
}
