//! # Aspect Policy Layer (Aspect)
//!
//! The pluggable cross-cutting behavior bound to one proxy: a
//! `before`/`after` hook pair that observes (and may rewrite) every
//! intercepted call without the wrapped object's knowledge.
//!
//! # Contract
//!
//! - `before` runs ahead of the real call and may supply a same-arity
//!   replacement argument list. It must not be used to abort a call —
//!   suppression is the proxy's intercept-call flag, not a hook concern.
//! - `after` is observation only and runs exactly once per intercepted
//!   call: after a completed call with the produced value, after a
//!   suppressed void call with `None`, and after a failed call with
//!   `None`.
//! - A hook failure propagates to the caller immediately; a failing
//!   `before` skips both the real call and the `after` hook.

use crate::{
    args::{CallArgs, CallValue},
    descriptor::MethodDescriptor,
    error::BoxError,
};

/// A `before`/`after` hook pair implementing one cross-cutting behavior.
///
/// Aspects are stateless apart from whatever identity they carry for
/// logging, and are bound to exactly one proxy at construction. Both hooks
/// default to no-ops, so a policy only implements the side it cares about.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Aspect`",
    label = "missing `Aspect` implementation",
    note = "Aspects provide `before` and `after` hooks around intercepted calls; both have default bodies."
)]
pub trait Aspect: Send + Sync {
    /// Inspect an imminent call, optionally supplying a replacement
    /// argument list.
    ///
    /// `Ok(None)` means "no change": the original arguments are used. A
    /// replacement whose length disagrees with the descriptor's arity is
    /// discarded by the proxy with a warning.
    fn before(
        &self,
        method: &MethodDescriptor,
        args: &CallArgs,
    ) -> Result<Option<CallArgs>, BoxError> {
        let _ = (method, args);
        Ok(None)
    }

    /// Observe a finished call.
    ///
    /// `value` is `Some` only when the real method ran and produced a
    /// value; suppressed and failed calls observe `None`.
    fn after(&self, method: &MethodDescriptor, value: Option<&CallValue>) -> Result<(), BoxError> {
        let _ = (method, value);
        Ok(())
    }
}

// Allow Box<dyn Aspect> to be used where Aspect is expected.
impl Aspect for Box<dyn Aspect> {
    fn before(
        &self,
        method: &MethodDescriptor,
        args: &CallArgs,
    ) -> Result<Option<CallArgs>, BoxError> {
        (**self).before(method, args)
    }

    fn after(&self, method: &MethodDescriptor, value: Option<&CallValue>) -> Result<(), BoxError> {
        (**self).after(method, value)
    }
}

/// An aspect that observes nothing and rewrites nothing.
///
/// Useful as a placeholder while wiring a proxy, and as the baseline in
/// pass-through tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAspect;

impl Aspect for NoopAspect {}
