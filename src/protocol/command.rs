use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

use crate::protocol::{codes, impl_wire_conversions, WireCode};

/// Marks the first line of a model dump in the solver's output stream.
pub const MODEL_START: &str = codes::RSP_MODEL_DELIMITER_START;

/// Marks the last line of a model dump in the solver's output stream.
pub const MODEL_END: &str = codes::RSP_MODEL_DELIMITER_END;

/// A request frame sent to the external solver process.
///
/// Operations occupy the contiguous range `1..=6`. [`SolverCommand::Stop`] sits well above
/// it and ends the session instead of asking the solver to do work.
///
/// # Examples
///
/// ```rust
/// use pathflip::protocol::{SolverCommand, WireCode};
///
/// assert_eq!(SolverCommand::Solve.code(), 2);
/// assert!(SolverCommand::Stop.is_shutdown());
/// assert!(!SolverCommand::ResetSolver.is_shutdown());
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
#[repr(u8)]
pub enum SolverCommand {
    /// Load a recorded trace file into the solver
    LoadTraceFile = codes::CMD_LOAD_TRACE_FILE,
    /// Check satisfiability of the loaded constraints
    Solve = codes::CMD_SOLVE,
    /// Request the satisfying model of the last solve
    GetModel = codes::CMD_GET_MODEL,
    /// Add background axioms
    AddAxioms = codes::CMD_ADD_AXIOMS,
    /// Pin a variable to a concrete value
    FixVariable = codes::CMD_FIX_VARIABLE,
    /// Drop all solver state
    ResetSolver = codes::CMD_RESET_SOLVER,
    /// Protocol shutdown
    Stop = codes::CMD_STOP,
}

impl SolverCommand {
    /// Returns `true` for the shutdown sentinel.
    #[must_use]
    pub const fn is_shutdown(self) -> bool {
        matches!(self, SolverCommand::Stop)
    }
}

impl WireCode for SolverCommand {
    type Repr = u8;

    const FAMILY: &'static str = "solver command";

    fn code(self) -> u8 {
        self as u8
    }

    fn from_code(code: u8) -> Option<Self> {
        match code {
            codes::CMD_LOAD_TRACE_FILE => Some(SolverCommand::LoadTraceFile),
            codes::CMD_SOLVE => Some(SolverCommand::Solve),
            codes::CMD_GET_MODEL => Some(SolverCommand::GetModel),
            codes::CMD_ADD_AXIOMS => Some(SolverCommand::AddAxioms),
            codes::CMD_FIX_VARIABLE => Some(SolverCommand::FixVariable),
            codes::CMD_RESET_SOLVER => Some(SolverCommand::ResetSolver),
            codes::CMD_STOP => Some(SolverCommand::Stop),
            _ => None,
        }
    }
}

impl_wire_conversions!(SolverCommand, u8);
