// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
//#![deny(unsafe_code)]
// - 'file/mod.rs' uses mmap to map a trace file into memory

//! # pathflip
//!
//! The wire vocabulary and reversibility classification of a concolic execution engine's
//! constraint-solver bridge.
//!
//! A concolic engine runs the program under test on concrete inputs, records every branch
//! decision into a trace, and then asks an external constraint solver for inputs that flip one
//! of those decisions. `pathflip` supplies the pieces both sides have to agree on:
//!
//! - **Protocol catalogue** - value type tags, solver commands, model delimiters, constraint
//!   kinds and trace entry tags, each with a frozen integer encoding
//! - **Reversibility classification** - which recorded entries can be negated to explore the
//!   branch that was not taken
//! - **Traces** - reading and writing recorded traces and summarising their candidates
//! - **Solver framing** - extracting model dumps from the solver's output stream
//!
//! Collecting constraints, running the solver and feeding models back into the program are
//! left to the surrounding engine.
//!
//! ## Quick Start
//!
//! ```rust
//! use pathflip::prelude::*;
//!
//! let mut writer = TraceWriter::new();
//! writer.push(ConstraintKind::True.into(), TraceEntryTag::GuardTrue, &[])?;
//! writer.push(EntryKind::Event, TraceEntryTag::MsgSend, &[])?;
//! writer.push(EntryKind::Event, TraceEntryTag::ErlangHd1, &[])?;
//!
//! let trace = Trace::from_mem(writer.finish())?;
//! let summary = trace.summary(DecodeConfig::default())?;
//! assert_eq!(summary.entries, 3);
//! assert_eq!(summary.candidates, 2);
//! # Ok::<(), pathflip::Error>(())
//! ```
//!
//! ## Classification without a trace
//!
//! ```rust
//! use pathflip::classify::{is_interpretable_code, is_reversible_bif_code};
//! use pathflip::protocol::codes;
//!
//! assert!(!is_interpretable_code(codes::OP_SPAWN));
//! assert!(is_reversible_bif_code(codes::OP_ERLANG_TL_1));
//! assert!(!is_reversible_bif_code(codes::OP_ERLANG_IS_INTEGER_1));
//! ```

#[macro_use]
pub(crate) mod error;

/// Raw trace bytes, from disk or memory, and the cursor parser over them.
pub mod file;

/// Convenient re-exports of the most commonly used types and traits.
///
/// ```rust
/// use pathflip::prelude::*;
///
/// assert!(is_reversible(EntryKind::Event, Some(TraceEntryTag::ErlangTl1)));
/// ```
pub mod prelude;

pub mod classify;
pub mod protocol;
pub mod solver;
pub mod trace;

/// `pathflip` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `pathflip` Error type
///
/// ```rust
/// use pathflip::{Error, trace::Trace};
///
/// match Trace::from_mem(b"not a trace".to_vec()) {
///     Ok(_) => println!("Loaded"),
///     Err(Error::NotSupported) => println!("Foreign header"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub use error::Error;

pub use file::{parser::Parser, File};
pub use trace::{DecodeConfig, Trace};
