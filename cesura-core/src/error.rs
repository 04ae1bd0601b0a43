//! Core error types

use thiserror::Error;

/// Errors produced by the boundary engine
#[derive(Error, Debug)]
pub enum CoreError {
    /// The per-call time budget ran out before detection finished
    #[error("boundary detection exceeded its time budget of {budget_ms} ms")]
    BudgetExceeded {
        /// The configured budget, in milliseconds
        budget_ms: u64,
    },
}
