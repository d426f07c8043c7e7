//! Testing utilities for Aspekt.
//!
//! This module provides reusable doubles for exercising proxies:
//!
//! - [`RecordingAspect`]: records the hook order of every intercepted call
//! - [`RewritingAspect`]: programmable argument rewriting in `before`
//! - [`FailingAspect`]: programmable hook failures
//! - [`Counter`]: a shared invocation counter for target side effects

use aspekt_core::{Aspect, BoxError, CallArgs, CallValue, MethodDescriptor};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Recording Aspect
// ============================================================================

/// Which hook of the pair produced a trace entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The `before` hook.
    Before,
    /// The `after` hook.
    After,
}

/// One recorded hook invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceEntry {
    /// Which hook ran.
    pub phase: Phase,
    /// The method being intercepted.
    pub method: &'static str,
    /// Whether `after` observed a produced value. Always `false` for
    /// `before` entries.
    pub produced: bool,
}

/// An aspect that records every hook invocation it receives.
///
/// Clones share the trace, so a test keeps one clone and hands the other
/// to the proxy.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingAspect::new();
/// let proxy = Proxy::wrap(&target, recorder.clone(), tracking)?;
///
/// proxy.call_void(&INITIALIZE, vec![])?;
/// assert_eq!(recorder.count(), 2);
/// ```
pub struct RecordingAspect {
    trace: Arc<Mutex<Vec<TraceEntry>>>,
}

impl RecordingAspect {
    /// Create a new recording aspect with an empty trace.
    pub fn new() -> Self {
        Self {
            trace: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a clone of the recorded trace.
    pub fn trace(&self) -> Vec<TraceEntry> {
        self.trace.lock().unwrap().clone()
    }

    /// Get the number of recorded hook invocations.
    pub fn count(&self) -> usize {
        self.trace.lock().unwrap().len()
    }

    /// Clear the trace.
    pub fn clear(&self) {
        self.trace.lock().unwrap().clear();
    }
}

impl Default for RecordingAspect {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for RecordingAspect {
    fn clone(&self) -> Self {
        Self {
            trace: self.trace.clone(),
        }
    }
}

impl Aspect for RecordingAspect {
    fn before(
        &self,
        method: &MethodDescriptor,
        _args: &CallArgs,
    ) -> Result<Option<CallArgs>, BoxError> {
        self.trace.lock().unwrap().push(TraceEntry {
            phase: Phase::Before,
            method: method.name,
            produced: false,
        });
        Ok(None)
    }

    fn after(&self, method: &MethodDescriptor, value: Option<&CallValue>) -> Result<(), BoxError> {
        self.trace.lock().unwrap().push(TraceEntry {
            phase: Phase::After,
            method: method.name,
            produced: value.is_some(),
        });
        Ok(())
    }
}

// ============================================================================
// Rewriting Aspect
// ============================================================================

/// An aspect whose `before` hook runs a programmable rewrite.
///
/// Returning `None` from the closure keeps the original arguments;
/// returning `Some(list)` supplies a replacement, which the proxy will
/// discard with a warning when its length disagrees with the method's
/// arity.
pub struct RewritingAspect {
    rewrite: Box<dyn Fn(&MethodDescriptor, &CallArgs) -> Option<CallArgs> + Send + Sync>,
}

impl RewritingAspect {
    /// Create a rewriting aspect from a closure.
    pub fn new(
        rewrite: impl Fn(&MethodDescriptor, &CallArgs) -> Option<CallArgs> + Send + Sync + 'static,
    ) -> Self {
        Self {
            rewrite: Box::new(rewrite),
        }
    }
}

impl Aspect for RewritingAspect {
    fn before(
        &self,
        method: &MethodDescriptor,
        args: &CallArgs,
    ) -> Result<Option<CallArgs>, BoxError> {
        Ok((self.rewrite)(method, args))
    }
}

// ============================================================================
// Failing Aspect
// ============================================================================

/// An aspect with programmable hook failures.
///
/// Records like [`RecordingAspect`] so tests can assert which hooks ran
/// around the failure; clones share the trace.
pub struct FailingAspect {
    fail_before: bool,
    fail_after: bool,
    trace: Arc<Mutex<Vec<TraceEntry>>>,
}

impl FailingAspect {
    /// An aspect whose `before` hook fails.
    pub fn before_failure() -> Self {
        Self {
            fail_before: true,
            fail_after: false,
            trace: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// An aspect whose `after` hook fails.
    pub fn after_failure() -> Self {
        Self {
            fail_before: false,
            fail_after: true,
            trace: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a clone of the recorded trace.
    pub fn trace(&self) -> Vec<TraceEntry> {
        self.trace.lock().unwrap().clone()
    }

    /// Get the number of recorded hook invocations.
    pub fn count(&self) -> usize {
        self.trace.lock().unwrap().len()
    }
}

impl Clone for FailingAspect {
    fn clone(&self) -> Self {
        Self {
            fail_before: self.fail_before,
            fail_after: self.fail_after,
            trace: self.trace.clone(),
        }
    }
}

impl Aspect for FailingAspect {
    fn before(
        &self,
        method: &MethodDescriptor,
        _args: &CallArgs,
    ) -> Result<Option<CallArgs>, BoxError> {
        self.trace.lock().unwrap().push(TraceEntry {
            phase: Phase::Before,
            method: method.name,
            produced: false,
        });
        if self.fail_before {
            return Err(format!("before hook failed for `{}`", method.name).into());
        }
        Ok(None)
    }

    fn after(&self, method: &MethodDescriptor, value: Option<&CallValue>) -> Result<(), BoxError> {
        self.trace.lock().unwrap().push(TraceEntry {
            phase: Phase::After,
            method: method.name,
            produced: value.is_some(),
        });
        if self.fail_after {
            return Err(format!("after hook failed for `{}`", method.name).into());
        }
        Ok(())
    }
}

// ============================================================================
// Counter
// ============================================================================

/// A shared invocation counter for target side effects.
///
/// # Example
///
/// ```rust,ignore
/// let inits = Counter::new();
/// let target = Renderer { inits: inits.clone() };
///
/// // Use behind a proxy...
/// assert_eq!(inits.get(), 1);
/// ```
#[derive(Default)]
pub struct Counter(Arc<AtomicUsize>);

impl Counter {
    /// Create a counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the counter.
    pub fn bump(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    /// Read the counter.
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.0.store(0, Ordering::SeqCst);
    }
}

impl Clone for Counter {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}
