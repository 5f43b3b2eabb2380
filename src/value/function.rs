//! Shared callables with explicit arity.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Value;
use crate::error::WrapError;

/// The body of a callable: receives the receiver (`this`) and the argument
/// list, and either returns a value or raises a [`WrapError`].
pub type NativeFn = dyn Fn(&Value, &[Value]) -> Result<Value, WrapError> + Send + Sync;

/// Identity of a [`Function`].
///
/// Identifiers are allocated from a process-wide counter and never reused,
/// so they stay unique even after the function they named is dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FunctionId(u64);

impl FunctionId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw identifier.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FunctionId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "#{}", self.0)
    }
}

struct FunctionInner {
    id: FunctionId,
    name: Arc<str>,
    arity: usize,
    wrapped_with: Vec<&'static str>,
    body: Box<NativeFn>,
}

/// A reference-counted callable.
///
/// Cloning a `Function` is cheap and yields the *same* function: clones
/// share one identity, so `ptr_eq` and `==` on [`Value::Function`] hold
/// between them. The declared arity plays the role of a parameter count and
/// is what currying consults to decide when enough arguments arrived.
///
/// # Examples
///
/// ```rust
/// use funcwrap::value::{Function, Object, Value};
///
/// let greet = Function::new("greet", 1, |receiver, arguments| {
///     let name = receiver
///         .as_object()
///         .map(|object| object.get("name"))
///         .unwrap_or_default();
///     Ok(Value::from(format!("{}, {}", arguments[0], name)))
/// });
///
/// let receiver = Object::new();
/// receiver.set("name", "Alice");
///
/// let result = greet.call(&Value::from(&receiver), &[Value::from("Hello")]).unwrap();
/// assert_eq!(result, Value::from("Hello, Alice"));
/// ```
#[derive(Clone)]
pub struct Function(Arc<FunctionInner>);

impl Function {
    /// Creates a function from a native body.
    pub fn new<F>(name: impl Into<Arc<str>>, arity: usize, body: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> Result<Value, WrapError> + Send + Sync + 'static,
    {
        Self::from_parts(FunctionId::next(), name.into(), arity, Vec::new(), Box::new(body))
    }

    pub(crate) fn from_parts(
        id: FunctionId,
        name: Arc<str>,
        arity: usize,
        wrapped_with: Vec<&'static str>,
        body: Box<NativeFn>,
    ) -> Self {
        Self(Arc::new(FunctionInner {
            id,
            name,
            arity,
            wrapped_with,
            body,
        }))
    }

    /// Calls the function with an explicit receiver.
    ///
    /// # Errors
    ///
    /// Returns whatever the body raises, unchanged.
    #[inline]
    pub fn call(&self, receiver: &Value, arguments: &[Value]) -> Result<Value, WrapError> {
        (self.0.body)(receiver, arguments)
    }

    /// Calls the function with [`Value::Undefined`] as receiver.
    ///
    /// # Errors
    ///
    /// Returns whatever the body raises, unchanged.
    #[inline]
    pub fn invoke(&self, arguments: &[Value]) -> Result<Value, WrapError> {
        self.call(&Value::Undefined, arguments)
    }

    /// The unique identity of this function.
    #[inline]
    pub fn id(&self) -> FunctionId {
        self.0.id
    }

    /// The function name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub(crate) fn shared_name(&self) -> Arc<str> {
        Arc::clone(&self.0.name)
    }

    /// The declared number of parameters.
    #[inline]
    pub fn arity(&self) -> usize {
        self.0.arity
    }

    /// Names of the wrapping behaviors this function was built from, sorted.
    ///
    /// Empty for functions created with [`Function::new`].
    #[inline]
    pub fn wrapped_with(&self) -> &[&'static str] {
        &self.0.wrapped_with
    }

    /// Returns `true` if both handles refer to the same function.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Function {}

impl fmt::Debug for Function {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Function")
            .field("id", &self.0.id)
            .field("name", &self.0.name)
            .field("arity", &self.0.arity)
            .field("wrapped_with", &self.0.wrapped_with)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Function {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "fn {}/{}", self.0.name, self.0.arity)?;
        if !self.0.wrapped_with.is_empty() {
            write!(
                formatter,
                " /* [wrapped with {}] */",
                self.0.wrapped_with.join(", ")
            )?;
        }
        Ok(())
    }
}

static_assertions::assert_impl_all!(Function: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;

    fn echo() -> Function {
        Function::new("echo", 2, |_, arguments| Ok(Value::Array(arguments.to_vec())))
    }

    #[test]
    fn test_clones_share_identity() {
        let function = echo();
        let clone = function.clone();
        assert!(function.ptr_eq(&clone));
        assert_eq!(function.id(), clone.id());
    }

    #[test]
    fn test_distinct_functions_have_distinct_ids() {
        assert_ne!(echo().id(), echo().id());
    }

    #[test]
    fn test_invoke_uses_undefined_receiver() {
        let receiver_of = Function::new("receiver_of", 0, |receiver, _| Ok(receiver.clone()));
        assert_eq!(receiver_of.invoke(&[]).unwrap(), Value::Undefined);
    }

    #[test]
    fn test_display_plain_function() {
        assert_eq!(echo().to_string(), "fn echo/2");
    }
}
