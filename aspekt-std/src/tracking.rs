//! The process-wide interception enable flag.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// A handle for toggling interception at runtime.
///
/// The handle is the explicit rendition of a global "tracking enabled"
/// flag: it is created during configuration, passed into [`Proxy::wrap`],
/// and read once per dispatched call. Clones share state, so the
/// configuration layer keeps one handle and every proxy observes flips
/// immediately.
///
/// While the handle is disabled, a proxy forwards calls straight to its
/// target with no hook invocation and no argument inspection.
///
/// [`Proxy::wrap`]: crate::Proxy::wrap
#[derive(Debug, Clone)]
pub struct TrackingHandle(Arc<AtomicBool>);

impl TrackingHandle {
    /// Create a new tracking handle with the given initial state.
    pub fn new(enabled: bool) -> Self {
        Self(Arc::new(AtomicBool::new(enabled)))
    }

    /// Check if interception is currently enabled.
    pub fn is_enabled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Enable interception.
    pub fn enable(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Disable interception.
    pub fn disable(&self) {
        self.0.store(false, Ordering::Release);
    }

    /// Toggle the flag, returning the new state.
    pub fn toggle(&self) -> bool {
        // Use fetch_xor for atomic toggle
        !self.0.fetch_xor(true, Ordering::AcqRel)
    }

    /// Set the flag.
    pub fn set(&self, enabled: bool) {
        self.0.store(enabled, Ordering::Release);
    }
}

impl Default for TrackingHandle {
    /// Interception is opt-in: a default handle is disabled.
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_disabled() {
        assert!(!TrackingHandle::default().is_enabled());
    }

    #[test]
    fn clones_share_state() {
        let handle = TrackingHandle::default();
        let shared = handle.clone();

        handle.enable();
        assert!(shared.is_enabled());

        assert!(!shared.toggle());
        assert!(!handle.is_enabled());
    }
}
