use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

use crate::protocol::{codes, impl_wire_conversions, WireCode};

/// Classifies a concrete value exchanged with the solver.
///
/// Encoded values carry one of these tags next to their payload so the receiving side knows
/// how to decode the raw representation. [`ValueTypeTag::Any`] marks a value whose type is
/// not constrained.
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
#[repr(u8)]
pub enum ValueTypeTag {
    /// Unconstrained value
    Any = codes::JSON_TYPE_ANY,
    /// Arbitrary precision integer
    Integer = codes::JSON_TYPE_INT,
    /// Floating point number
    Float = codes::JSON_TYPE_FLOAT,
    /// Atom (interned symbol)
    Atom = codes::JSON_TYPE_ATOM,
    /// Proper or improper list
    List = codes::JSON_TYPE_LIST,
    /// Fixed size tuple
    Tuple = codes::JSON_TYPE_TUPLE,
    /// Process identifier
    ProcessId = codes::JSON_TYPE_PID,
    /// Unique reference
    Reference = codes::JSON_TYPE_REF,
}

impl WireCode for ValueTypeTag {
    type Repr = u8;

    const FAMILY: &'static str = "value type";

    fn code(self) -> u8 {
        self as u8
    }

    fn from_code(code: u8) -> Option<Self> {
        match code {
            codes::JSON_TYPE_ANY => Some(ValueTypeTag::Any),
            codes::JSON_TYPE_INT => Some(ValueTypeTag::Integer),
            codes::JSON_TYPE_FLOAT => Some(ValueTypeTag::Float),
            codes::JSON_TYPE_ATOM => Some(ValueTypeTag::Atom),
            codes::JSON_TYPE_LIST => Some(ValueTypeTag::List),
            codes::JSON_TYPE_TUPLE => Some(ValueTypeTag::Tuple),
            codes::JSON_TYPE_PID => Some(ValueTypeTag::ProcessId),
            codes::JSON_TYPE_REF => Some(ValueTypeTag::Reference),
            _ => None,
        }
    }
}

impl_wire_conversions!(ValueTypeTag, u8);
