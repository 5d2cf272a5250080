//! Error types for the BMI calculator core

use thiserror::Error;

/// Errors raised when turning caller input into core types
///
/// The calculations themselves never fail: an incomplete measurement yields
/// no BMI rather than an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("Unknown answer for {question}: {value}")]
    UnknownAnswer {
        question: &'static str,
        value: String,
    },

    #[error("Validation error: {0}")]
    Validation(String),
}
