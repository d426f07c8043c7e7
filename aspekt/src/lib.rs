//! # aspekt - Transparent Call Interception
//!
//! `aspekt` wraps an arbitrary object behind a transparent stand-in so
//! that every call to the object's methods can be observed, rewritten,
//! suppressed, or logged without changing the object's own implementation.
//!
//! Interception happens purely at invocation time through a wrapping
//! indirection layer: no code weaving, no generated proxies. An object
//! opts in by declaring a *capability surface* ([`Tracked`]); callers hold
//! a [`Proxy`] whose single dispatch point runs the bound [`Aspect`]'s
//! `before`/`after` hooks around the real invocation. A shared
//! [`TrackingHandle`] turns the whole mechanism off, making the stand-in
//! observably identical to the raw object.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use aspekt::{MethodDescriptor, Proxy, TrackingHandle, LifecycleTracer, arg};
//!
//! const INITIALIZE: MethodDescriptor = MethodDescriptor::void("initialize", 0);
//! const SURFACE: &[MethodDescriptor] = &[INITIALIZE];
//!
//! // Implement Tracked for your type: expose SURFACE, match on the
//! // descriptor name in call_dynamic, downcast arguments as needed.
//!
//! let tracking = TrackingHandle::new(true);
//! let proxy = Proxy::wrap(&renderer, LifecycleTracer::new("renderer"), tracking)?;
//! proxy.call_void(&INITIALIZE, vec![])?;
//! ```
//!
//! A typed stand-in is explicit delegation: implement the capability trait
//! for a thin wrapper around the proxy, packing arguments with [`arg`] and
//! dispatching through [`Proxy::call_void`] / [`Proxy::call_value`]. The
//! integration tests show the full pattern.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use aspekt_core::{
    // Hook pair
    Aspect,
    // Error types
    AspectError,
    BoxError,
    // Dynamic arguments
    CallArgs,
    CallValue,
    // Descriptors
    MethodDescriptor,
    NoopAspect,
    ReturnKind,
    // Capability marker
    Tracked,
    arg,
    downcast_arg,
};

pub use aspekt_std::{LifecycleTracer, Proxy, TrackingHandle};

// Test doubles
pub use aspekt_std::testing;
