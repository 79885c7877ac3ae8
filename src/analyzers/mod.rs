//! Derivation of the three chart-ready summary tables.
//!
//! Each aggregator recomputes its summary from scratch out of the loaded
//! survey tables and the current month/state selection. None of them keeps
//! state between invocations, so repeated identical selections yield
//! identical output.

pub mod frequency;
pub mod hospitalization;
pub mod income;
pub mod types;
pub mod utility;
