//! # pathflip Prelude
//!
//! The types and functions most consumers of the bridge need, for glob import.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all pathflip operations
pub use crate::Error;

/// The result type used throughout pathflip
pub use crate::Result;

// ================================================================================================
// Protocol Catalogue
// ================================================================================================

/// Typed catalogue values and their wire conversion
pub use crate::protocol::{
    ConstraintKind, SolverCommand, TagFamily, TraceEntryTag, ValueTypeTag, WireCode, MODEL_END,
    MODEL_START,
};

// ================================================================================================
// Classification
// ================================================================================================

/// Reversibility predicates
pub use crate::classify::{
    is_interpretable, is_reversible, is_reversible_bif, EntryKind, TagFlags,
};

// ================================================================================================
// Traces and Solver Output
// ================================================================================================

/// Trace decoding and encoding
pub use crate::trace::{DecodeConfig, Opcode, Trace, TraceEntry, TraceSummary, TraceWriter};

/// Model framing
pub use crate::solver::{split_model, ModelReader};
