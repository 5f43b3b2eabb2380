//! Error type shared by callables and the wrapping engine.

use std::sync::Arc;

use crate::value::Value;

/// Errors raised while wrapping or invoking functions.
///
/// `InvalidArgument` is the only failure of the wrapping step itself.
/// Once a wrapper exists, invoking it raises either `NotCallable` (a
/// method-name binding found no function on its receiver) or whatever the
/// wrapped function raised, unchanged.
///
/// # Examples
///
/// ```rust
/// use funcwrap::error::WrapError;
/// use funcwrap::value::{Function, Value};
///
/// let fail = Function::new("fail", 0, |_, _| Err(WrapError::thrown("boom")));
/// assert_eq!(fail.invoke(&[]), Err(WrapError::Thrown(Value::from("boom"))));
/// assert_eq!(WrapError::thrown("boom").to_string(), "uncaught boom");
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WrapError {
    /// The wrap target is not callable and no method-name binding was
    /// requested.
    #[error("expected a function, found {found}")]
    InvalidArgument {
        /// Type name of the rejected target.
        found: &'static str,
    },

    /// The property named by a method-name binding is not a function at
    /// call time.
    #[error("property `{key}` of the bound receiver is not a function")]
    NotCallable {
        /// The property that was looked up.
        key: Arc<str>,
    },

    /// A value raised by user code.
    #[error("uncaught {0}")]
    Thrown(Value),
}

impl WrapError {
    /// Raises an arbitrary value from a function body.
    pub fn thrown(value: impl Into<Value>) -> Self {
        Self::Thrown(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let error = WrapError::InvalidArgument { found: "number" };
        assert_eq!(error.to_string(), "expected a function, found number");
    }

    #[test]
    fn test_not_callable_display() {
        let error = WrapError::NotCallable {
            key: Arc::from("greet"),
        };
        assert_eq!(
            error.to_string(),
            "property `greet` of the bound receiver is not a function"
        );
    }
}
