/// Failures of the partial operations on [`BigUint`](crate::BigUint).
///
/// None of these are recovered from inside the crate; each one is the outcome of
/// the single operation that produced it.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Text was empty or held something other than ASCII decimal digits.
    #[error("Only non-negative integers are supported.")]
    InvalidFormat,
    /// The subtrahend was larger than the minuend.
    #[error("Result would be negative, not supported in this implementation.")]
    NegativeResult,
    #[error("Division by zero.")]
    DivisionByZero,
}

pub type Result<T> = std::result::Result<T, Error>;
