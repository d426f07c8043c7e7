//! Error types for Aspekt.
//!
//! This module provides the interception error taxonomy using `thiserror`:
//!
//! - [`AspectError`] - construction and dynamic-dispatch errors
//! - [`BoxError`] - the boxed error type carried across the boundary
//!
//! Two failure classes deliberately have no variant here. A replacement
//! argument list of the wrong arity is recovered locally inside dispatch
//! (warning plus fall-back to the original arguments), and a failure
//! raised by the wrapped method is re-surfaced to the caller as the same
//! boxed error, never wrapped.

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised by proxy construction and dynamic dispatch.
#[derive(Error, Debug)]
pub enum AspectError {
    /// The wrapped target declares no interceptable methods.
    /// Fatal at construction, never raised per call.
    #[error("target exposes an empty capability surface")]
    EmptySurface,

    /// The descriptor is not part of the target's capability surface.
    #[error("method `{0}` is not part of the capability surface")]
    UnknownMethod(&'static str),

    /// A dynamic argument did not hold its declared type.
    #[error("argument {index} of method `{method}` is not a `{expected}`")]
    ArgumentType {
        /// Method being invoked.
        method: &'static str,
        /// Zero-based argument position.
        index: usize,
        /// The type the slot was expected to hold.
        expected: &'static str,
    },

    /// A produced value did not hold the type the caller asked for.
    #[error("method `{method}` did not produce a `{expected}` value")]
    ValueType {
        /// Method that produced the value.
        method: &'static str,
        /// The type the caller asked for.
        expected: &'static str,
    },
}
