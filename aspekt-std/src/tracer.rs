//! Lifecycle tracer: the shipped concrete aspect.

use aspekt_core::{Aspect, BoxError, CallArgs, CallValue, MethodDescriptor};

/// An aspect that narrates module lifecycle transitions.
///
/// Logs a "begin" marker before and an "end" marker after every
/// intercepted call, keyed by the wrapped object's identity label. Used to
/// narrate the initialization order of pluggable subsystems without those
/// subsystems knowing they are being observed.
///
/// Stateless apart from the label; output goes through `tracing` at info
/// level.
pub struct LifecycleTracer {
    subject: String,
}

impl LifecycleTracer {
    /// Create a tracer for the named subject.
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
        }
    }

    /// The identity label this tracer logs under.
    pub fn subject(&self) -> &str {
        &self.subject
    }
}

impl Aspect for LifecycleTracer {
    fn before(
        &self,
        method: &MethodDescriptor,
        _args: &CallArgs,
    ) -> Result<Option<CallArgs>, BoxError> {
        tracing::info!(
            subject = %self.subject,
            method = method.name,
            "begin {}.{}",
            self.subject,
            method.name,
        );
        Ok(None)
    }

    fn after(&self, method: &MethodDescriptor, value: Option<&CallValue>) -> Result<(), BoxError> {
        tracing::info!(
            subject = %self.subject,
            method = method.name,
            produced = value.is_some(),
            "end {}.{}",
            self.subject,
            method.name,
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracer_never_rewrites_arguments() {
        let tracer = LifecycleTracer::new("renderer");
        let method = MethodDescriptor::void("initialize", 0);

        assert!(tracer.before(&method, &vec![]).unwrap().is_none());
        assert!(tracer.after(&method, None).is_ok());
        assert_eq!(tracer.subject(), "renderer");
    }
}
