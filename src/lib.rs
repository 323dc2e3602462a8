//! A small generic complex number type over any primitive integer or float.
//!
//! Note that comparisons between [`Complex`] values (`==`, `<`, ...) compare magnitudes, so
//! `1+0i == 0+1i`. See [`Complex`] for details.

mod complex;
mod error;
mod scalar;

pub use complex::{Complex, DIVISION_EPSILON};
pub use error::ComplexError;
pub use scalar::Scalar;

pub type Result<T, E = ComplexError> = std::result::Result<T, E>;
