/// Errors from fallible [`Complex`](crate::Complex) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ComplexError {
    /// The divisor's squared magnitude was below [`DIVISION_EPSILON`](crate::DIVISION_EPSILON).
    #[error("cannot divide by zero")]
    DivisionByZero,
}
