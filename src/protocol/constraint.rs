use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

use crate::protocol::{codes, impl_wire_conversions, WireCode};

/// Polarity of a boolean path constraint, i.e. which side of a branch was taken.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumCount,
    Display,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum ConstraintKind {
    /// The condition held on the recorded run
    True = codes::CONSTRAINT_TRUE,
    /// The condition failed on the recorded run
    False = codes::CONSTRAINT_FALSE,
}

impl ConstraintKind {
    /// The opposite polarity; what the solver is asked to satisfy when the branch is flipped.
    #[must_use]
    pub const fn negate(self) -> Self {
        match self {
            ConstraintKind::True => ConstraintKind::False,
            ConstraintKind::False => ConstraintKind::True,
        }
    }
}

impl From<bool> for ConstraintKind {
    fn from(taken: bool) -> Self {
        if taken {
            ConstraintKind::True
        } else {
            ConstraintKind::False
        }
    }
}

impl WireCode for ConstraintKind {
    type Repr = u8;

    const FAMILY: &'static str = "constraint kind";

    fn code(self) -> u8 {
        self as u8
    }

    fn from_code(code: u8) -> Option<Self> {
        match code {
            codes::CONSTRAINT_TRUE => Some(ConstraintKind::True),
            codes::CONSTRAINT_FALSE => Some(ConstraintKind::False),
            _ => None,
        }
    }
}

impl_wire_conversions!(ConstraintKind, u8);

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn negate_is_involution() {
        for kind in ConstraintKind::iter() {
            assert_ne!(kind.negate(), kind);
            assert_eq!(kind.negate().negate(), kind);
        }
    }

    #[test]
    fn codes() {
        assert_eq!(ConstraintKind::True.code(), 1);
        assert_eq!(ConstraintKind::False.code(), 2);
        assert_eq!(ConstraintKind::from_code(0), None);
        assert_eq!(ConstraintKind::from_code(3), None);
        assert_eq!(ConstraintKind::from(true), ConstraintKind::True);
    }
}
