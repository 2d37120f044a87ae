//! Raw wire constants shared with the solver process and stored in trace files.
//!
//! Every integer here is persisted on disk or exchanged on the wire, so the values are
//! frozen: new constants get new numbers, existing ones are never renumbered or reused.
//! The typed enums in [`crate::protocol`] are defined from these constants.
//!
//! Trace entry tags come in two sub-ranges. Structural and concurrency tags occupy
//! `1..=19`; built-in function tags start at [`OP_BUILTIN_BASE`] and grow upwards.
//! The codes in [`OP_RESERVED_GAP`] and [`OP_RETIRED_SPEC`] are never assigned.
#![allow(missing_docs)]

use std::ops::RangeInclusive;

// ── Value type tags ────────────────────────────────────────────────────────

pub const JSON_TYPE_ANY: u8 = 0;
pub const JSON_TYPE_INT: u8 = 1;
pub const JSON_TYPE_FLOAT: u8 = 2;
pub const JSON_TYPE_ATOM: u8 = 3;
pub const JSON_TYPE_LIST: u8 = 4;
pub const JSON_TYPE_TUPLE: u8 = 5;
pub const JSON_TYPE_PID: u8 = 6;
pub const JSON_TYPE_REF: u8 = 7;

// ── Solver commands ────────────────────────────────────────────────────────

pub const CMD_LOAD_TRACE_FILE: u8 = 1;
pub const CMD_SOLVE: u8 = 2;
pub const CMD_GET_MODEL: u8 = 3;
pub const CMD_ADD_AXIOMS: u8 = 4;
pub const CMD_FIX_VARIABLE: u8 = 5;
pub const CMD_RESET_SOLVER: u8 = 6;
/// Shutdown sentinel, deliberately outside the contiguous command range.
pub const CMD_STOP: u8 = 42;

// ── Response framing ───────────────────────────────────────────────────────

pub const RSP_MODEL_DELIMITER_START: &str = "model_start";
pub const RSP_MODEL_DELIMITER_END: &str = "model_end";

// ── Constraint kinds ───────────────────────────────────────────────────────

pub const CONSTRAINT_TRUE: u8 = 1;
pub const CONSTRAINT_FALSE: u8 = 2;

// ── Trace entry tags: structural / control ────────────────────────────────

pub const OP_PARAMS: u32 = 1;
/// Retired tag for function specs; kept reserved for old trace files.
pub const OP_RETIRED_SPEC: u32 = 2;
pub const OP_GUARD_TRUE: u32 = 3;
pub const OP_GUARD_FALSE: u32 = 4;
pub const OP_MATCH_EQUAL_TRUE: u32 = 5;
pub const OP_MATCH_EQUAL_FALSE: u32 = 6;
pub const OP_TUPLE_SZ: u32 = 7;
pub const OP_TUPLE_NOT_SZ: u32 = 8;
pub const OP_TUPLE_NOT_TPL: u32 = 9;
pub const OP_LIST_NON_EMPTY: u32 = 10;
pub const OP_LIST_EMPTY: u32 = 11;
pub const OP_LIST_NOT_LST: u32 = 12;

// Concurrency side effects
pub const OP_SPAWN: u32 = 13;
pub const OP_SPAWNED: u32 = 14;
pub const OP_MSG_SEND: u32 = 15;
pub const OP_MSG_RECEIVE: u32 = 16;
pub const OP_MSG_CONSUME: u32 = 17;

// Unfolding
pub const OP_UNFOLD_TUPLE: u32 = 18;
pub const OP_UNFOLD_LIST: u32 = 19;

/// Unassigned gap between the structural and built-in sub-ranges.
pub const OP_RESERVED_GAP: RangeInclusive<u32> = 20..=24;

// ── Trace entry tags: built-in functions ──────────────────────────────────

pub const OP_BUILTIN_BASE: u32 = 25;
pub const OP_ERLANG_HD_1: u32 = 25;
pub const OP_ERLANG_TL_1: u32 = 26;
pub const OP_ERLANG_IS_INTEGER_1: u32 = 27;

/// Returns `true` for codes that are reserved and must never be assigned to a tag.
#[must_use]
pub fn is_reserved_code(code: u32) -> bool {
    code == OP_RETIRED_SPEC || OP_RESERVED_GAP.contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_codes() {
        assert!(is_reserved_code(OP_RETIRED_SPEC));
        for code in 20..=24 {
            assert!(is_reserved_code(code));
        }
        assert!(!is_reserved_code(OP_PARAMS));
        assert!(!is_reserved_code(OP_UNFOLD_LIST));
        assert!(!is_reserved_code(OP_BUILTIN_BASE));
    }

    #[test]
    fn builtin_range_above_structural() {
        assert!(OP_BUILTIN_BASE > *OP_RESERVED_GAP.end());
        assert_eq!(OP_ERLANG_HD_1, OP_BUILTIN_BASE);
        assert!(CMD_STOP > CMD_RESET_SOLVER);
    }
}
