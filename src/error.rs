//! Error handling.

use crate::io::InputPair;
use thiserror::Error;

/// Result type of every fallible property calculation.
pub type Result<T> = std::result::Result<T, Error>;

/// Error returned by the property functions.
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Error {
    /// An input lies outside the IF97 validity envelope for the selected
    /// region or the global envelope.
    #[error("{quantity} = {value} is outside the valid range [{min}; {max}]")]
    OutOfRange {
        /// Name of the offending quantity.
        quantity: &'static str,
        /// Specified value.
        value: f64,
        /// Lower bound of the valid span.
        min: f64,
        /// Upper bound of the valid span.
        max: f64,
    },

    /// The classifier could not place the point into any IF97 region.
    #[error("no IF97 region contains the point ({label1} = {value1}, {label2} = {value2})")]
    NoRegion {
        /// Name of the first coordinate.
        label1: &'static str,
        /// First coordinate.
        value1: f64,
        /// Name of the second coordinate.
        label2: &'static str,
        /// Second coordinate.
        value2: f64,
    },

    /// An iterative solver failed to meet its tolerance.
    #[error("{operation} did not converge after {iterations} iterations (last residual {residual:e})")]
    ConvergenceFailure {
        /// Name of the operation that iterated.
        operation: &'static str,
        /// Residual of the last iterate.
        residual: f64,
        /// Number of iterations performed.
        iterations: u32,
    },

    /// The requested pair of independent variables has no direct formulation.
    #[error("input pair {0:?} is not supported")]
    UnsupportedPair(InputPair),
}
