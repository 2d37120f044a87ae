//! The shared vocabulary between the execution engine, recorded traces and the solver.
//!
//! This module is the single source of truth for every integer or string tag the bridge
//! exchanges. Raw constants live in [`codes`]; the typed enums below are built from them so
//! that consumers get exhaustiveness checking instead of loose integers.
//!
//! # Key Components
//!
//! - [`ValueTypeTag`] - how an encoded concrete value is to be interpreted
//! - [`SolverCommand`] - request opcodes sent to the solver process
//! - [`ConstraintKind`] - polarity of a recorded boolean path constraint
//! - [`TraceEntryTag`] - what kind of event a trace entry records
//! - [`MODEL_START`] / [`MODEL_END`] - framing of model dumps in solver output
//!
//! # Examples
//!
//! ```rust
//! use pathflip::protocol::{SolverCommand, TraceEntryTag, WireCode};
//!
//! assert_eq!(SolverCommand::Stop.code(), 42);
//! assert_eq!(TraceEntryTag::from_code(25), Some(TraceEntryTag::ErlangHd1));
//! assert_eq!(TraceEntryTag::from_code(21), None);
//! ```
//!
//! # Thread Safety
//!
//! Everything here is literal constant data and `Copy` enums, safe to share across threads
//! without synchronization.

pub mod codes;

mod command;
mod constraint;
mod tag;
mod value;

pub use command::{SolverCommand, MODEL_END, MODEL_START};
pub use constraint::ConstraintKind;
pub use tag::{TagFamily, TraceEntryTag};
pub use value::ValueTypeTag;

/// Conversion between a typed catalogue value and its frozen wire integer.
pub trait WireCode: Sized + Copy {
    /// Integer type used on the wire for this family.
    type Repr: Copy;

    /// Human readable family name, used in [`crate::Error::UnknownTag`].
    const FAMILY: &'static str;

    /// The stable wire value.
    fn code(self) -> Self::Repr;

    /// Decodes a wire value, `None` if it is not part of the catalogue.
    fn from_code(code: Self::Repr) -> Option<Self>;
}

/// Implements `TryFrom<$repr>` and `From<$ty> for $repr` on top of [`WireCode`].
macro_rules! impl_wire_conversions {
    ($ty:ty, $repr:ty) => {
        impl TryFrom<$repr> for $ty {
            type Error = crate::Error;

            fn try_from(code: $repr) -> crate::Result<Self> {
                <$ty as crate::protocol::WireCode>::from_code(code).ok_or(
                    crate::Error::UnknownTag {
                        family: <$ty as crate::protocol::WireCode>::FAMILY,
                        code: u32::from(code),
                    },
                )
            }
        }

        impl From<$ty> for $repr {
            fn from(value: $ty) -> Self {
                crate::protocol::WireCode::code(value)
            }
        }
    };
}

pub(crate) use impl_wire_conversions;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::{EnumCount, IntoEnumIterator};

    fn assert_distinct<T>()
    where
        T: WireCode + IntoEnumIterator + EnumCount,
        T::Repr: Eq + std::hash::Hash,
    {
        let codes: HashSet<T::Repr> = T::iter().map(WireCode::code).collect();
        assert_eq!(codes.len(), T::COUNT, "{} codes collide", T::FAMILY);
    }

    fn assert_round_trip<T>()
    where
        T: WireCode + IntoEnumIterator + PartialEq + std::fmt::Debug,
    {
        for value in T::iter() {
            assert_eq!(T::from_code(value.code()), Some(value));
        }
    }

    #[test]
    fn families_are_collision_free() {
        assert_distinct::<ValueTypeTag>();
        assert_distinct::<SolverCommand>();
        assert_distinct::<ConstraintKind>();
        assert_distinct::<TraceEntryTag>();
    }

    #[test]
    fn codes_round_trip() {
        assert_round_trip::<ValueTypeTag>();
        assert_round_trip::<SolverCommand>();
        assert_round_trip::<ConstraintKind>();
        assert_round_trip::<TraceEntryTag>();
    }

    #[test]
    fn try_from_reports_family() {
        match SolverCommand::try_from(7_u8) {
            Err(crate::Error::UnknownTag { family, code }) => {
                assert_eq!(family, SolverCommand::FAMILY);
                assert_eq!(code, 7);
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
