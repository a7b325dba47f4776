//! pharmval-engine — Risk-adjusted NPV engine for pharmaceutical assets.
//!
//! Every function here is pure: no I/O, no logging, no shared state.
//! Degenerate inputs (empty horizon, unknown phase, zero cost) collapse to
//! zero contributions instead of failing, so a live UI can recompute on
//! every keystroke. Use [`validation::validate`] to surface those cases.

pub mod mechanism;
pub mod phase_table;
pub mod royalty;
pub mod cashflow;
pub mod valuation;
pub mod loe;
pub mod validation;

pub use cashflow::{cashflow_schedule, present_value, YearCashflow};
pub use valuation::compose;
pub use validation::{validate, ValuationWarning};
