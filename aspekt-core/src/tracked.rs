//! # Capability Marker Layer (Tracked)
//!
//! An object opts into interception by implementing [`Tracked`]: it
//! declares its capability surface (the method set the proxy is allowed to
//! intercept) and provides a single by-descriptor invocation entry point.
//!
//! The surface is structural — any type can participate, there is no
//! required base type. Incidental members that are not listed on the
//! surface are invisible to the interception core.
//!
//! # Writing an implementation
//!
//! Declare descriptors as `const` items, match on the descriptor name in
//! [`call_dynamic`], and recover typed arguments with [`downcast_arg`].
//! A descriptor that is not on the surface is
//! [`AspectError::UnknownMethod`].
//!
//! ```rust,ignore
//! const INITIALIZE: MethodDescriptor = MethodDescriptor::void("initialize", 0);
//! const SURFACE: &[MethodDescriptor] = &[INITIALIZE];
//!
//! impl Tracked for Renderer {
//!     fn surface(&self) -> &'static [MethodDescriptor] {
//!         SURFACE
//!     }
//!
//!     fn call_dynamic(
//!         &self,
//!         method: &MethodDescriptor,
//!         _args: CallArgs,
//!     ) -> Result<Option<CallValue>, BoxError> {
//!         match method.name {
//!             "initialize" => {
//!                 self.initialize()?;
//!                 Ok(None)
//!             }
//!             other => Err(AspectError::UnknownMethod(other).into()),
//!         }
//!     }
//! }
//! ```
//!
//! [`call_dynamic`]: Tracked::call_dynamic
//! [`downcast_arg`]: crate::downcast_arg
//! [`AspectError::UnknownMethod`]: crate::AspectError::UnknownMethod

use crate::{
    args::{CallArgs, CallValue},
    descriptor::MethodDescriptor,
    error::BoxError,
};

/// An object eligible for call interception via its declared capability
/// surface.
///
/// The proxy holds a non-owning reference to the target for its entire
/// lifetime; ownership stays with the target's own subsystem. Targets are
/// invoked through `&self`, so methods with observable side effects use
/// interior mutability, and thread-safety of the target remains the
/// target's own responsibility — the interception layer neither adds nor
/// removes synchronization.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Tracked`",
    label = "missing `Tracked` implementation",
    note = "Tracked objects must declare a capability surface and a by-descriptor `call_dynamic`."
)]
pub trait Tracked: Send + Sync {
    /// The capability surface: the methods the interception core is
    /// allowed to intercept.
    fn surface(&self) -> &'static [MethodDescriptor];

    /// Invoke the named method with a dynamic argument list.
    ///
    /// Returns `Ok(None)` for void methods and `Ok(Some(value))` for
    /// value-returning methods. A failure raised here is re-surfaced to
    /// the stand-in's caller unchanged.
    fn call_dynamic(
        &self,
        method: &MethodDescriptor,
        args: CallArgs,
    ) -> Result<Option<CallValue>, BoxError>;
}

// Smart-pointer targets forward to their contents.
impl<T: Tracked + ?Sized> Tracked for Box<T> {
    fn surface(&self) -> &'static [MethodDescriptor] {
        (**self).surface()
    }

    fn call_dynamic(
        &self,
        method: &MethodDescriptor,
        args: CallArgs,
    ) -> Result<Option<CallValue>, BoxError> {
        (**self).call_dynamic(method, args)
    }
}

impl<T: Tracked + ?Sized> Tracked for std::sync::Arc<T> {
    fn surface(&self) -> &'static [MethodDescriptor] {
        (**self).surface()
    }

    fn call_dynamic(
        &self,
        method: &MethodDescriptor,
        args: CallArgs,
    ) -> Result<Option<CallValue>, BoxError> {
        (**self).call_dynamic(method, args)
    }
}
