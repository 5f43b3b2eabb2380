//! Dynamically typed values understood by the wrapping engine.
//!
//! The engine manipulates receivers and argument lists of arbitrary shape,
//! so callables exchange [`Value`]s rather than statically typed
//! parameters. The model is intentionally small:
//!
//! - [`Value`]: the tagged union passed to and returned from callables
//! - [`Object`]: a shared, mutable property bag used as a receiver
//! - [`Function`]: a shared callable with an explicit declared arity
//!
//! # Examples
//!
//! ```rust
//! use funcwrap::value::{Function, Value};
//!
//! let add = Function::new("add", 2, |_, arguments| {
//!     let sum: f64 = arguments.iter().filter_map(Value::as_number).sum();
//!     Ok(Value::from(sum))
//! });
//!
//! let result = add.invoke(&[Value::from(1), Value::from(2)]).unwrap();
//! assert_eq!(result, Value::from(3));
//! ```

mod function;
mod object;

use std::fmt;
use std::sync::Arc;

pub use function::{Function, FunctionId, NativeFn};
pub use object::Object;

/// A dynamically typed value.
///
/// Objects and functions compare by identity; every other variant compares
/// structurally. Numbers follow IEEE 754 equality, so `NaN != NaN` (see
/// [`Value::same_value_zero`] for the NaN-aware comparison).
#[derive(Clone, Debug, Default)]
pub enum Value {
    /// The absent value. Unfilled argument positions read as `Undefined`.
    #[default]
    Undefined,
    /// An explicit null.
    Null,
    /// A boolean.
    Bool(bool),
    /// A double-precision number.
    Number(f64),
    /// An immutable string.
    String(Arc<str>),
    /// An ordered list of values.
    Array(Vec<Self>),
    /// A shared property bag.
    Object(Object),
    /// A callable.
    Function(Function),
}

impl Value {
    /// Returns `true` for [`Value::Undefined`].
    #[inline]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Returns `true` if the value can be called.
    #[inline]
    pub const fn is_function(&self) -> bool {
        matches!(self, Self::Function(_))
    }

    /// Returns the numeric payload, if any.
    #[inline]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the string payload, if any.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(string) => Some(string),
            _ => None,
        }
    }

    /// Returns the array payload, if any.
    #[inline]
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(values) => Some(values),
            _ => None,
        }
    }

    /// Returns the object payload, if any.
    #[inline]
    pub const fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Returns the callable payload, if any.
    #[inline]
    pub const fn as_function(&self) -> Option<&Function> {
        match self {
            Self::Function(function) => Some(function),
            _ => None,
        }
    }

    /// A short name for the variant, used in error messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
            Self::Function(_) => "function",
        }
    }

    /// Equality that treats `NaN` as equal to itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcwrap::value::Value;
    ///
    /// let nan = Value::from(f64::NAN);
    /// assert_ne!(nan, nan.clone());
    /// assert!(nan.same_value_zero(&Value::from(f64::NAN)));
    /// ```
    pub fn same_value_zero(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(left), Self::Number(right)) if left.is_nan() && right.is_nan() => true,
            _ => self == other,
        }
    }

    /// Renders the value as a property key.
    ///
    /// Strings are used verbatim; every other value uses its display form.
    pub fn to_property_key(&self) -> Arc<str> {
        match self {
            Self::String(string) => Arc::clone(string),
            other => Arc::from(other.to_string()),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Bool(left), Self::Bool(right)) => left == right,
            #[allow(clippy::float_cmp)]
            (Self::Number(left), Self::Number(right)) => left == right,
            (Self::String(left), Self::String(right)) => left == right,
            (Self::Array(left), Self::Array(right)) => left == right,
            (Self::Object(left), Self::Object(right)) => left.ptr_eq(right),
            (Self::Function(left), Self::Function(right)) => left.ptr_eq(right),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => formatter.write_str("undefined"),
            Self::Null => formatter.write_str("null"),
            Self::Bool(value) => write!(formatter, "{value}"),
            Self::Number(number) => write!(formatter, "{number}"),
            Self::String(string) => formatter.write_str(string),
            Self::Array(values) => {
                formatter.write_str("[")?;
                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{value}")?;
                }
                formatter.write_str("]")
            }
            Self::Object(_) => formatter.write_str("[object Object]"),
            Self::Function(function) => write!(formatter, "{function}"),
        }
    }
}

macro_rules! impl_from_number {
    ($($source:ty),* $(,)?) => {
        $(
            impl From<$source> for Value {
                #[inline]
                fn from(number: $source) -> Self {
                    Self::Number(f64::from(number))
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, u8, u16, u32, f32, f64);

impl From<i64> for Value {
    #[inline]
    #[allow(clippy::cast_precision_loss)]
    fn from(number: i64) -> Self {
        Self::Number(number as f64)
    }
}

impl From<usize> for Value {
    #[inline]
    #[allow(clippy::cast_precision_loss)]
    fn from(number: usize) -> Self {
        Self::Number(number as f64)
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(string: &str) -> Self {
        Self::String(Arc::from(string))
    }
}

impl From<String> for Value {
    #[inline]
    fn from(string: String) -> Self {
        Self::String(Arc::from(string))
    }
}

impl From<Arc<str>> for Value {
    #[inline]
    fn from(string: Arc<str>) -> Self {
        Self::String(string)
    }
}

impl From<Vec<Self>> for Value {
    #[inline]
    fn from(values: Vec<Self>) -> Self {
        Self::Array(values)
    }
}

impl From<Object> for Value {
    #[inline]
    fn from(object: Object) -> Self {
        Self::Object(object)
    }
}

impl From<&Object> for Value {
    #[inline]
    fn from(object: &Object) -> Self {
        Self::Object(object.clone())
    }
}

impl From<Function> for Value {
    #[inline]
    fn from(function: Function) -> Self {
        Self::Function(function)
    }
}

impl From<&Function> for Value {
    #[inline]
    fn from(function: &Function) -> Self {
        Self::Function(function.clone())
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Undefined, Into::into)
    }
}

/// Builds a `Vec<Value>` argument list, converting each element with
/// [`Value::from`].
///
/// # Examples
///
/// ```rust
/// use funcwrap::args;
/// use funcwrap::value::Value;
///
/// let arguments = args![1, "two", true];
/// assert_eq!(arguments, vec![Value::from(1), Value::from("two"), Value::from(true)]);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::value::Value>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::value::Value::from($value)),+]
    };
}

static_assertions::assert_impl_all!(Value: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_objects_compare_by_identity() {
        let first = Object::new();
        let second = Object::new();
        assert_eq!(Value::from(&first), Value::from(&first));
        assert_ne!(Value::from(&first), Value::from(&second));
    }

    #[test]
    fn test_same_value_zero_matches_nan() {
        let nan = Value::from(f64::NAN);
        assert!(nan.same_value_zero(&Value::from(f64::NAN)));
        assert!(Value::from(0.0).same_value_zero(&Value::from(-0.0)));
    }

    #[test]
    fn test_property_key_of_number() {
        assert_eq!(&*Value::from(3).to_property_key(), "3");
        assert_eq!(&*Value::from("name").to_property_key(), "name");
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(None::<i32>), Value::Undefined);
        assert_eq!(Value::from(Some(2)), Value::from(2));
    }
}
