//! Method descriptors: the dispatch key for intercepted calls.
//!
//! A descriptor is the language-neutral stand-in for a reflection handle:
//! enough metadata (name, declared return kind, formal arity) for a proxy
//! to route a call and for a policy to identify what it is observing,
//! without tying either to a concrete signature.

use std::fmt;

/// Declared return kind of a method on a capability surface.
///
/// Suppression via the intercept-call flag is restricted to [`Void`]
/// methods; [`Value`] methods always reach the real object.
///
/// [`Void`]: ReturnKind::Void
/// [`Value`]: ReturnKind::Value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReturnKind {
    /// The method produces no value.
    Void,
    /// The method produces a value.
    Value,
}

/// Identity of one method on a capability surface.
///
/// Descriptors are declared as `const` items next to the capability trait
/// they describe and passed by reference through dispatch and into hooks.
///
/// # Example
///
/// ```rust,ignore
/// const INITIALIZE: MethodDescriptor = MethodDescriptor::void("initialize", 0);
/// const FRAME_BUDGET: MethodDescriptor = MethodDescriptor::returning("frame_budget", 1);
///
/// const SURFACE: &[MethodDescriptor] = &[INITIALIZE, FRAME_BUDGET];
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MethodDescriptor {
    /// Method name, unique within one capability surface.
    pub name: &'static str,
    /// Declared return kind.
    pub return_kind: ReturnKind,
    /// Formal parameter count.
    pub arity: usize,
}

impl MethodDescriptor {
    /// Describe a void-returning method.
    pub const fn void(name: &'static str, arity: usize) -> Self {
        Self {
            name,
            return_kind: ReturnKind::Void,
            arity,
        }
    }

    /// Describe a value-returning method.
    pub const fn returning(name: &'static str, arity: usize) -> Self {
        Self {
            name,
            return_kind: ReturnKind::Value,
            arity,
        }
    }

    /// Whether the method is declared void.
    pub const fn is_void(&self) -> bool {
        matches!(self.return_kind, ReturnKind::Void)
    }
}

impl fmt::Display for MethodDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.arity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_return_kind() {
        let init = MethodDescriptor::void("initialize", 0);
        assert!(init.is_void());
        assert_eq!(init.arity, 0);

        let budget = MethodDescriptor::returning("frame_budget", 1);
        assert!(!budget.is_void());
        assert_eq!(budget.to_string(), "frame_budget/1");
    }
}
