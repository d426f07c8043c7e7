//! # aspekt-core
//!
//! Core traits for the Aspekt call-interception library.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! policies and extensions that don't need the full `aspekt-std`
//! implementation.
//!
//! # Two-Layer Architecture
//!
//! Aspekt wraps an arbitrary object behind a transparent stand-in so that
//! every call to the object's methods can be observed, rewritten,
//! suppressed, or logged without touching the object's own implementation.
//! Two layers compose the subsystem:
//!
//! ## Layer 1: Interception Core ([`Tracked`])
//!
//! An object opts into interception by exposing a *capability surface* — a
//! static table of [`MethodDescriptor`]s — together with a by-descriptor
//! dynamic invocation entry point. The proxy in `aspekt-std` funnels every
//! call on the stand-in through that single entry point.
//!
//! - **Structural**: eligibility comes from the declared surface, not from
//!   a particular base type
//! - **Non-owning**: the stand-in borrows the real object and never
//!   outlives it
//!
//! ## Layer 2: Aspect Policy ([`Aspect`])
//!
//! A pluggable `before`/`after` hook pair bound to exactly one proxy at
//! construction. `before` may rewrite the argument list; `after` observes
//! the produced value (or its absence) and runs exactly once per
//! intercepted call, whether the call completed, was suppressed, or failed.
//!
//! # Error Types
//!
//! - [`AspectError`] - construction and dynamic-dispatch errors
//! - [`BoxError`] - the boxed error type carried across the interception
//!   boundary

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod args;
mod aspect;
mod descriptor;
mod error;
mod tracked;

// Re-exports
pub use args::{CallArgs, CallValue, arg, downcast_arg};
pub use aspect::{Aspect, NoopAspect};
pub use descriptor::{MethodDescriptor, ReturnKind};
pub use error::{AspectError, BoxError};
pub use tracked::Tracked;
