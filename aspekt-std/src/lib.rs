//! # aspekt-std
//!
//! Standard implementations for the Aspekt call-interception library.
//!
//! `aspekt-core` defines the vocabulary (capability surfaces, method
//! descriptors, the hook pair); this crate provides the pieces a consumer
//! actually wires together:
//!
//! - [`Proxy`] - the stand-in callers invoke; funnels every call through
//!   the single dispatch algorithm
//! - [`TrackingHandle`] - the process-wide enable flag with a narrow API
//!   to flip it
//! - [`LifecycleTracer`] - the shipped aspect that narrates begin/end of
//!   every intercepted call through `tracing`
//! - [`testing`] - reusable test doubles for hook-order, rewrite, and
//!   failure tests

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod proxy;
pub mod testing;
mod tracer;
mod tracking;

// Re-exports
pub use proxy::Proxy;
pub use tracer::LifecycleTracer;
pub use tracking::TrackingHandle;
