//! The flattened description of a wrapper.

use std::sync::Arc;

use super::flags::WrapFlags;
use super::slot::Partials;
use crate::error::WrapError;
use crate::value::{Function, Value};

/// What a wrapper ultimately calls.
#[derive(Clone, Debug, PartialEq)]
pub enum Target {
    /// A callable fixed at wrap time.
    Function(Function),
    /// A property name resolved on the receiver at every call.
    Key(Arc<str>),
}

impl Target {
    /// The parameter count used to derive a wrapper's arity. Method-name
    /// targets are unknown until call time and count as zero.
    pub fn declared_arity(&self) -> usize {
        match self {
            Self::Function(function) => function.arity(),
            Self::Key(_) => 0,
        }
    }

    /// The wrapped function, if it is fixed.
    pub const fn as_function(&self) -> Option<&Function> {
        match self {
            Self::Function(function) => Some(function),
            Self::Key(_) => None,
        }
    }

    /// Name used for the produced wrapper.
    pub fn name(&self) -> Arc<str> {
        match self {
            Self::Function(function) => function.shared_name(),
            Self::Key(key) => Arc::clone(key),
        }
    }

    /// Wrap details the target itself already carries.
    pub fn wrapped_with(&self) -> &[&'static str] {
        match self {
            Self::Function(function) => function.wrapped_with(),
            Self::Key(_) => &[],
        }
    }

    /// Finds the callable to invoke for `receiver`.
    ///
    /// # Errors
    ///
    /// Returns [`WrapError::NotCallable`] if a method-name target does not
    /// name a function on the receiver.
    pub fn resolve(&self, receiver: &Value) -> Result<Function, WrapError> {
        match self {
            Self::Function(function) => Ok(function.clone()),
            Self::Key(key) => match receiver.as_object().map(|object| object.get(key)) {
                Some(Value::Function(function)) => Ok(function),
                _ => Err(WrapError::NotCallable {
                    key: Arc::clone(key),
                }),
            },
        }
    }
}

/// Everything needed to rebuild or re-derive a wrapper.
///
/// One record exists per produced wrapper. A record is immutable once its
/// wrapper exists; wrapping that wrapper again merges this record into the
/// new request instead of nesting calls.
///
/// # Examples
///
/// ```rust
/// use funcwrap::slots;
/// use funcwrap::value::{Function, Value};
/// use funcwrap::wrap::{self, WrapEngine, WrapFlags};
///
/// let volume = Function::new("volume", 3, |_, arguments| {
///     Ok(Value::from(arguments.iter().filter_map(Value::as_number).product::<f64>()))
/// });
///
/// let curried = wrap::curry(&volume, None).unwrap();
/// let partially = wrap::partial(&curried, slots![2]).unwrap();
///
/// let metadata = WrapEngine::global().metadata(&partially).unwrap();
/// assert_eq!(metadata.flags(), WrapFlags::CURRY | WrapFlags::PARTIAL);
/// assert_eq!(metadata.target().as_function(), Some(&volume));
/// assert_eq!(metadata.arity(), Some(2));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct WrapMetadata {
    pub(crate) target: Target,
    pub(crate) flags: WrapFlags,
    pub(crate) receiver: Option<Value>,
    pub(crate) partials_left: Option<Partials>,
    pub(crate) partials_right: Option<Partials>,
    pub(crate) arg_positions: Option<Vec<usize>>,
    pub(crate) arity_cap: Option<usize>,
    pub(crate) arity: Option<usize>,
}

impl WrapMetadata {
    pub(crate) const fn new(target: Target, flags: WrapFlags) -> Self {
        Self {
            target,
            flags,
            receiver: None,
            partials_left: None,
            partials_right: None,
            arg_positions: None,
            arity_cap: None,
            arity: None,
        }
    }

    /// The innermost callable (or method name).
    #[inline]
    pub const fn target(&self) -> &Target {
        &self.target
    }

    /// The active behaviors.
    #[inline]
    pub const fn flags(&self) -> WrapFlags {
        self.flags
    }

    /// The bound receiver.
    #[inline]
    pub const fn receiver(&self) -> Option<&Value> {
        self.receiver.as_ref()
    }

    /// Arguments prepended to every call.
    #[inline]
    pub const fn partials_left(&self) -> Option<&Partials> {
        self.partials_left.as_ref()
    }

    /// Arguments appended to every call.
    #[inline]
    pub const fn partials_right(&self) -> Option<&Partials> {
        self.partials_right.as_ref()
    }

    /// The argument permutation.
    #[inline]
    pub fn arg_positions(&self) -> Option<&[usize]> {
        self.arg_positions.as_deref()
    }

    /// The maximum number of forwarded arguments.
    #[inline]
    pub const fn arity_cap(&self) -> Option<usize> {
        self.arity_cap
    }

    /// The arity consulted by currying.
    #[inline]
    pub const fn arity(&self) -> Option<usize> {
        self.arity
    }

    /// The receiver a call observes: the bound one under `BIND`, otherwise
    /// the call-time receiver.
    pub(crate) fn receiver_for(&self, call_receiver: &Value) -> Value {
        if self.flags.contains(WrapFlags::BIND) {
            self.receiver.clone().unwrap_or_default()
        } else {
            call_receiver.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Object;

    #[test]
    fn test_key_target_resolves_current_property() {
        let object = Object::new();
        let first = Function::new("first", 0, |_, _| Ok(Value::from(1)));
        object.set("method", first.clone());

        let target = Target::Key(Arc::from("method"));
        let receiver = Value::from(&object);
        assert_eq!(target.resolve(&receiver), Ok(first));

        let second = Function::new("second", 0, |_, _| Ok(Value::from(2)));
        object.set("method", second.clone());
        assert_eq!(target.resolve(&receiver), Ok(second));
    }

    #[test]
    fn test_key_target_without_function_is_not_callable() {
        let target = Target::Key(Arc::from("missing"));
        assert_eq!(
            target.resolve(&Value::from(Object::new())),
            Err(WrapError::NotCallable {
                key: Arc::from("missing")
            })
        );
        assert!(target.resolve(&Value::Null).is_err());
    }

    #[test]
    fn test_receiver_for_prefers_bound_receiver() {
        let function = Function::new("noop", 0, |_, _| Ok(Value::Undefined));
        let mut metadata = WrapMetadata::new(Target::Function(function), WrapFlags::BIND);
        metadata.receiver = Some(Value::from("bound"));
        assert_eq!(metadata.receiver_for(&Value::from("call")), Value::from("bound"));

        metadata.flags = WrapFlags::EMPTY;
        assert_eq!(metadata.receiver_for(&Value::from("call")), Value::from("call"));
    }
}
