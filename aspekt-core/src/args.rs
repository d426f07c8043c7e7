//! Dynamic argument and return-value representation.
//!
//! Arguments cross the interception boundary as type-erased boxes so that
//! one dispatch point can serve methods whose signatures are not known in
//! advance. The arity of an argument list is its length.

use crate::{descriptor::MethodDescriptor, error::AspectError};
use std::any::Any;

/// A single type-erased argument or return value.
pub type CallValue = Box<dyn Any + Send>;

/// The argument list of one intercepted call.
pub type CallArgs = Vec<CallValue>;

/// Box a single argument for a dynamic call.
pub fn arg<T: Any + Send>(value: T) -> CallValue {
    Box::new(value)
}

/// Recover a typed argument from a dynamic argument list.
///
/// Fails with [`AspectError::ArgumentType`] when the slot is missing or
/// holds a different type; targets surface that error from their
/// [`Tracked::call_dynamic`] implementation.
///
/// [`Tracked::call_dynamic`]: crate::Tracked::call_dynamic
pub fn downcast_arg<'a, T: Any>(
    method: &MethodDescriptor,
    args: &'a CallArgs,
    index: usize,
) -> Result<&'a T, AspectError> {
    args.get(index)
        .and_then(|slot| slot.downcast_ref::<T>())
        .ok_or(AspectError::ArgumentType {
            method: method.name,
            index,
            expected: std::any::type_name::<T>(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESIZE: MethodDescriptor = MethodDescriptor::void("resize", 2);

    #[test]
    fn downcast_recovers_typed_argument() {
        let args: CallArgs = vec![arg(640u32), arg(480u32)];
        assert_eq!(*downcast_arg::<u32>(&RESIZE, &args, 1).unwrap(), 480);
    }

    #[test]
    fn downcast_reports_wrong_type_and_missing_slot() {
        let args: CallArgs = vec![arg("wide")];
        let err = downcast_arg::<u32>(&RESIZE, &args, 0).unwrap_err();
        assert!(matches!(err, AspectError::ArgumentType { index: 0, .. }));

        let err = downcast_arg::<u32>(&RESIZE, &args, 1).unwrap_err();
        assert!(matches!(err, AspectError::ArgumentType { index: 1, .. }));
    }
}
