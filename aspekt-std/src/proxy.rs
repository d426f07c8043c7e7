//! # Interception Core (Proxy)
//!
//! The stand-in callers invoke in place of the real object. Every call is
//! funneled through one dispatch point, [`Proxy::call`], which resolves
//! the enable state, runs the bound aspect's hooks around the real
//! invocation, and hands the result (or failure) back to the caller
//! indistinguishably from a direct call.
//!
//! # Dispatch order
//!
//! For an enabled proxy, one call executes strictly in program order on
//! the caller's thread:
//!
//! 1. `before` hook, which may supply a replacement argument list
//! 2. suppression check: a void method under the intercept-call flag is
//!    never invoked
//! 3. arity validation of the replacement; a mismatch is discarded with a
//!    warning and the original arguments are used
//! 4. the real method
//! 5. `after` hook, unconditionally — including when the real method
//!    failed
//!
//! There is no queuing, cancellation, or timeout: a call that enters
//! dispatch runs to completion or failure synchronously.

use crate::tracking::TrackingHandle;
use aspekt_core::{Aspect, AspectError, BoxError, CallArgs, CallValue, MethodDescriptor, Tracked};
use std::{
    any::Any,
    sync::atomic::{AtomicBool, Ordering},
};
use tracing::warn;

/// A transparent stand-in for one [`Tracked`] object.
///
/// The binding is immutable: a proxy wraps exactly one target and one
/// aspect for its entire lifetime, and holds the target by non-owning
/// reference, so it can never outlive the subsystem that owns the real
/// object.
///
/// The only mutable state is a pair of flags: the shared
/// [`TrackingHandle`] read once per call, and the per-proxy intercept-call
/// flag that suppresses void calls.
///
/// # Example
///
/// ```rust,ignore
/// let tracking = TrackingHandle::new(true);
/// let proxy = Proxy::wrap(&renderer, LifecycleTracer::new("renderer"), tracking)?;
///
/// proxy.call_void(&INITIALIZE, vec![])?;
/// let budget: u32 = proxy.call_value(&FRAME_BUDGET, vec![arg(2u32)])?;
/// ```
pub struct Proxy<'t, T: Tracked + ?Sized, A: Aspect> {
    target: &'t T,
    aspect: A,
    tracking: TrackingHandle,
    intercept_calls: AtomicBool,
}

impl<'t, T: Tracked + ?Sized, A: Aspect> std::fmt::Debug for Proxy<'t, T, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Proxy")
            .field("tracking", &self.tracking)
            .field("intercept_calls", &self.intercept_calls)
            .finish_non_exhaustive()
    }
}

impl<'t, T: Tracked + ?Sized, A: Aspect> Proxy<'t, T, A> {
    /// Wrap a target, binding the aspect and the tracking handle.
    ///
    /// Fails with [`AspectError::EmptySurface`] when the target declares
    /// no interceptable methods; misconfiguration is a construction-time
    /// failure, never a per-call one.
    pub fn wrap(target: &'t T, aspect: A, tracking: TrackingHandle) -> Result<Self, AspectError> {
        if target.surface().is_empty() {
            return Err(AspectError::EmptySurface);
        }
        Ok(Self {
            target,
            aspect,
            tracking,
            intercept_calls: AtomicBool::new(false),
        })
    }

    /// Set the initial intercept-call state while wiring the proxy.
    pub fn intercepting(self, intercept: bool) -> Self {
        self.intercept_calls.store(intercept, Ordering::Release);
        self
    }

    /// Flip the intercept-call flag at runtime.
    ///
    /// While set, void-returning methods are suppressed entirely: `before`
    /// and `after` still run, the real method does not.
    pub fn set_intercept_calls(&self, intercept: bool) {
        self.intercept_calls.store(intercept, Ordering::Release);
    }

    /// Whether void calls are currently suppressed.
    pub fn intercepts_calls(&self) -> bool {
        self.intercept_calls.load(Ordering::Acquire)
    }

    /// The wrapped target.
    pub fn target(&self) -> &T {
        self.target
    }

    /// The wrapped target's capability surface.
    pub fn surface(&self) -> &'static [MethodDescriptor] {
        self.target.surface()
    }

    /// The tracking handle this proxy consults.
    pub fn tracking(&self) -> &TrackingHandle {
        &self.tracking
    }

    /// Dispatch one call against the stand-in.
    ///
    /// With tracking disabled this is a direct forward to the target: no
    /// hook runs and no argument is inspected, so behavior is observably
    /// identical to calling the real object.
    ///
    /// With tracking enabled, the hooks run around the real invocation as
    /// described at the module level. A failure raised by the real method
    /// is never swallowed: `after` observes the failed call (`None`
    /// value), then the same boxed error is returned to the caller.
    ///
    /// Hook failures propagate immediately: a failing `before` skips both
    /// the real call and `after`; a failing `after` surfaces its error
    /// unless the real call itself failed, in which case the call's error
    /// wins and the hook error is logged and discarded.
    pub fn call(
        &self,
        method: &MethodDescriptor,
        args: CallArgs,
    ) -> Result<Option<CallValue>, BoxError> {
        if !self.tracking.is_enabled() {
            return self.target.call_dynamic(method, args);
        }

        debug_assert_eq!(
            args.len(),
            method.arity,
            "call site arity disagrees with descriptor `{method}`",
        );

        let replacement = self.aspect.before(method, &args)?;

        let outcome = if self.intercepts_calls() && method.is_void() {
            // Suppressed: the real method is never invoked.
            Ok(None)
        } else {
            let effective = match replacement {
                Some(rewritten) if rewritten.len() == method.arity => rewritten,
                Some(rewritten) => {
                    warn!(
                        method = method.name,
                        expected = method.arity,
                        got = rewritten.len(),
                        "post-modification argument count mismatch for method `{}`",
                        method.name,
                    );
                    args
                }
                None => args,
            };
            self.target.call_dynamic(method, effective)
        };

        let observed = match &outcome {
            Ok(value) => value.as_ref(),
            Err(_) => None,
        };
        let after = self.aspect.after(method, observed);

        match (outcome, after) {
            (Ok(value), Ok(())) => Ok(value),
            (Ok(_), Err(hook_err)) => Err(hook_err),
            (Err(call_err), Ok(())) => Err(call_err),
            (Err(call_err), Err(hook_err)) => {
                warn!(
                    method = method.name,
                    error = %hook_err,
                    "after hook failed while surfacing a call failure",
                );
                Err(call_err)
            }
        }
    }

    /// Dispatch a void-returning method.
    pub fn call_void(&self, method: &MethodDescriptor, args: CallArgs) -> Result<(), BoxError> {
        self.call(method, args).map(|_| ())
    }

    /// Dispatch a value-returning method and downcast the produced value.
    pub fn call_value<R: Any>(&self, method: &MethodDescriptor, args: CallArgs) -> Result<R, BoxError> {
        let Some(value) = self.call(method, args)? else {
            return Err(AspectError::ValueType {
                method: method.name,
                expected: std::any::type_name::<R>(),
            }
            .into());
        };
        match value.downcast::<R>() {
            Ok(boxed) => Ok(*boxed),
            Err(_) => Err(AspectError::ValueType {
                method: method.name,
                expected: std::any::type_name::<R>(),
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Phase, RecordingAspect, RewritingAspect, TraceEntry};
    use aspekt_core::{NoopAspect, arg, downcast_arg};
    use std::sync::atomic::AtomicUsize;

    const SET_LEVEL: MethodDescriptor = MethodDescriptor::void("set_level", 1);
    const LEVEL: MethodDescriptor = MethodDescriptor::returning("level", 0);
    const SURFACE: &[MethodDescriptor] = &[SET_LEVEL, LEVEL];

    #[derive(Default)]
    struct Gauge {
        level: AtomicUsize,
        writes: AtomicUsize,
    }

    impl Tracked for Gauge {
        fn surface(&self) -> &'static [MethodDescriptor] {
            SURFACE
        }

        fn call_dynamic(
            &self,
            method: &MethodDescriptor,
            args: CallArgs,
        ) -> Result<Option<CallValue>, BoxError> {
            match method.name {
                "set_level" => {
                    let level = *downcast_arg::<usize>(method, &args, 0)?;
                    self.level.store(level, Ordering::SeqCst);
                    self.writes.fetch_add(1, Ordering::SeqCst);
                    Ok(None)
                }
                "level" => Ok(Some(arg(self.level.load(Ordering::SeqCst)))),
                other => Err(AspectError::UnknownMethod(other).into()),
            }
        }
    }

    #[test]
    fn empty_surface_is_rejected_at_construction() {
        struct Bare;

        impl Tracked for Bare {
            fn surface(&self) -> &'static [MethodDescriptor] {
                &[]
            }

            fn call_dynamic(
                &self,
                method: &MethodDescriptor,
                _args: CallArgs,
            ) -> Result<Option<CallValue>, BoxError> {
                Err(AspectError::UnknownMethod(method.name).into())
            }
        }

        let err = Proxy::wrap(&Bare, NoopAspect, TrackingHandle::default()).unwrap_err();
        assert!(matches!(err, AspectError::EmptySurface));
    }

    #[test]
    fn disabled_tracking_bypasses_hooks() {
        let gauge = Gauge::default();
        let recorder = RecordingAspect::new();
        let proxy = Proxy::wrap(&gauge, recorder.clone(), TrackingHandle::default()).unwrap();

        proxy.call_void(&SET_LEVEL, vec![arg(7usize)]).unwrap();
        let level: usize = proxy.call_value(&LEVEL, vec![]).unwrap();

        assert_eq!(level, 7);
        assert_eq!(recorder.count(), 0);
    }

    #[test]
    fn enabled_tracking_runs_hooks_in_order() {
        let gauge = Gauge::default();
        let recorder = RecordingAspect::new();
        let proxy = Proxy::wrap(&gauge, recorder.clone(), TrackingHandle::new(true)).unwrap();

        let level: usize = proxy.call_value(&LEVEL, vec![]).unwrap();

        assert_eq!(level, 0);
        assert_eq!(
            recorder.trace(),
            vec![
                TraceEntry {
                    phase: Phase::Before,
                    method: "level",
                    produced: false,
                },
                TraceEntry {
                    phase: Phase::After,
                    method: "level",
                    produced: true,
                },
            ],
        );
    }

    #[test]
    fn intercept_flag_suppresses_void_calls_only() {
        let gauge = Gauge::default();
        let recorder = RecordingAspect::new();
        let proxy = Proxy::wrap(&gauge, recorder.clone(), TrackingHandle::new(true))
            .unwrap()
            .intercepting(true);

        proxy.call_void(&SET_LEVEL, vec![arg(9usize)]).unwrap();
        assert_eq!(gauge.writes.load(Ordering::SeqCst), 0);

        // after still fired exactly once, with no value observed
        let after: Vec<_> = recorder
            .trace()
            .into_iter()
            .filter(|entry| entry.phase == Phase::After)
            .collect();
        assert_eq!(after.len(), 1);
        assert!(!after[0].produced);

        // value-returning methods are never suppressed
        let level: usize = proxy.call_value(&LEVEL, vec![]).unwrap();
        assert_eq!(level, 0);
    }

    #[test]
    fn mismatched_rewrite_falls_back_to_original_args() {
        let gauge = Gauge::default();
        let rewriter = RewritingAspect::new(|_, _| Some(vec![arg(1usize), arg(2usize)]));
        let proxy = Proxy::wrap(&gauge, rewriter, TrackingHandle::new(true)).unwrap();

        proxy.call_void(&SET_LEVEL, vec![arg(42usize)]).unwrap();

        assert_eq!(gauge.level.load(Ordering::SeqCst), 42);
        assert_eq!(gauge.writes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn matching_rewrite_replaces_args() {
        let gauge = Gauge::default();
        let rewriter = RewritingAspect::new(|_, _| Some(vec![arg(11usize)]));
        let proxy = Proxy::wrap(&gauge, rewriter, TrackingHandle::new(true)).unwrap();

        proxy.call_void(&SET_LEVEL, vec![arg(42usize)]).unwrap();

        assert_eq!(gauge.level.load(Ordering::SeqCst), 11);
    }

    #[test]
    fn unknown_method_surfaces_from_target() {
        let gauge = Gauge::default();
        let proxy = Proxy::wrap(&gauge, NoopAspect, TrackingHandle::new(true)).unwrap();

        const GHOST: MethodDescriptor = MethodDescriptor::void("ghost", 0);
        let err = proxy.call_void(&GHOST, vec![]).unwrap_err();
        let err = err.downcast::<AspectError>().unwrap();
        assert!(matches!(*err, AspectError::UnknownMethod("ghost")));
    }

    #[test]
    fn value_type_mismatch_is_reported() {
        let gauge = Gauge::default();
        let proxy = Proxy::wrap(&gauge, NoopAspect, TrackingHandle::new(true)).unwrap();

        let err = proxy.call_value::<String>(&LEVEL, vec![]).unwrap_err();
        let err = err.downcast::<AspectError>().unwrap();
        assert!(matches!(*err, AspectError::ValueType { method: "level", .. }));
    }

    #[test]
    fn runtime_toggles_take_effect_between_calls() {
        let gauge = Gauge::default();
        let recorder = RecordingAspect::new();
        let proxy = Proxy::wrap(&gauge, recorder.clone(), TrackingHandle::default()).unwrap();

        proxy.call_void(&SET_LEVEL, vec![arg(1usize)]).unwrap();
        assert_eq!(recorder.count(), 0);

        proxy.tracking().enable();
        proxy.call_void(&SET_LEVEL, vec![arg(2usize)]).unwrap();
        assert_eq!(recorder.count(), 2);
        assert_eq!(gauge.writes.load(Ordering::SeqCst), 2);
    }
}
