use thiserror::Error;

/// Errors surfaced by [`BigInt`](crate::BigInt) construction and division.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BigIntError {
    // Input was not an optional `-` followed by decimal digits
    #[error("BigInt(\"{0}\") is not a decimal integer")]
    InvalidArgument(String),

    // Zero divisor
    #[error("division by BigInt(0)")]
    DivisionByZero,
}
