//! Named entry points over the process-wide engine.
//!
//! Each function builds one [`WrapRequest`] and hands it to
//! [`WrapEngine::global`]:
//!
//! - [`bind`] / [`bind_key`]: fix the receiver, optionally with arguments
//! - [`curry`] / [`curry_right`]: collect arguments until the arity is met
//! - [`partial`] / [`partial_right`]: fix leading or trailing arguments
//! - [`rearg`], [`ary`], [`flip`]: reshape the argument list
//!
//! Wrapping a wrapper flattens the layers where possible, so chains of
//! these calls stay a single call deep.

use super::engine::{WrapEngine, WrapRequest};
use super::flags::WrapFlags;
use super::slot::Slot;
use crate::error::WrapError;
use crate::value::{Function, Value};

fn to_signed(count: usize) -> i64 {
    i64::try_from(count).unwrap_or(i64::MAX)
}

/// Fixes the receiver of `function`, and optionally its leading arguments.
///
/// A receiver fixed once cannot be replaced by binding again.
///
/// # Errors
///
/// Returns [`WrapError::InvalidArgument`] if `function` is not a function.
///
/// # Examples
///
/// ```
/// use funcwrap::slots;
/// use funcwrap::value::{Function, Object, Value};
/// use funcwrap::wrap;
///
/// let greet = Function::new("greet", 2, |receiver, arguments| {
///     let user = receiver.as_object().map(|object| object.get("user")).unwrap_or_default();
///     Ok(Value::from(format!("{} {}{}", arguments[0], user, arguments[1])))
/// });
///
/// let object = Object::new();
/// object.set("user", "fred");
///
/// let bound = wrap::bind(&greet, &object, slots!["hi"]).unwrap();
/// assert_eq!(bound.invoke(&[Value::from("!")]).unwrap(), Value::from("hi fred!"));
/// ```
pub fn bind(
    function: impl Into<Value>,
    receiver: impl Into<Value>,
    partials: Vec<Slot>,
) -> Result<Function, WrapError> {
    WrapEngine::global().wrap(
        WrapRequest::new(function, WrapFlags::BIND)
            .receiver(receiver)
            .partials(partials),
    )
}

/// Binds the method stored under `key` on `object`.
///
/// The method is looked up on every call, so redefining the property
/// changes what the wrapper calls.
///
/// # Errors
///
/// Never fails at wrap time. Calling the wrapper returns
/// [`WrapError::NotCallable`] if the property is not a function then.
///
/// # Examples
///
/// ```
/// use funcwrap::args;
/// use funcwrap::value::{Function, Object, Value};
/// use funcwrap::wrap;
///
/// let object = Object::new();
/// object.set("greet", Function::new("greet", 0, |_, _| Ok(Value::from("hi"))));
///
/// let bound = wrap::bind_key(&object, "greet", Vec::new()).unwrap();
/// assert_eq!(bound.invoke(&args![]).unwrap(), Value::from("hi"));
///
/// object.set("greet", Function::new("greet", 0, |_, _| Ok(Value::from("hiya"))));
/// assert_eq!(bound.invoke(&args![]).unwrap(), Value::from("hiya"));
/// ```
pub fn bind_key(
    object: impl Into<Value>,
    key: impl Into<Value>,
    partials: Vec<Slot>,
) -> Result<Function, WrapError> {
    WrapEngine::global().wrap(
        WrapRequest::new(key, WrapFlags::BIND | WrapFlags::BIND_KEY)
            .receiver(object)
            .partials(partials),
    )
}

/// Curries `function` from the left.
///
/// `arity` defaults to the declared parameter count.
///
/// # Errors
///
/// Returns [`WrapError::InvalidArgument`] if `function` is not a function.
///
/// # Examples
///
/// ```
/// use funcwrap::args;
/// use funcwrap::value::{Function, Value};
/// use funcwrap::wrap;
///
/// let list = Function::new("list", 3, |_, arguments| Ok(Value::Array(arguments.to_vec())));
/// let curried = wrap::curry(&list, None).unwrap();
///
/// let step = curried.invoke(&args![1]).unwrap();
/// let step = step.as_function().unwrap().invoke(&args![2]).unwrap();
/// let result = step.as_function().unwrap().invoke(&args![3]).unwrap();
/// assert_eq!(result, Value::from(args![1, 2, 3]));
/// ```
pub fn curry(function: impl Into<Value>, arity: Option<usize>) -> Result<Function, WrapError> {
    curried(function, WrapFlags::CURRY, arity)
}

/// Curries `function` from the right: later calls supply earlier
/// arguments.
///
/// # Errors
///
/// Returns [`WrapError::InvalidArgument`] if `function` is not a function.
///
/// # Examples
///
/// ```
/// use funcwrap::args;
/// use funcwrap::value::{Function, Value};
/// use funcwrap::wrap;
///
/// let list = Function::new("list", 3, |_, arguments| Ok(Value::Array(arguments.to_vec())));
/// let curried = wrap::curry_right(&list, None).unwrap();
///
/// let step = curried.invoke(&args![3]).unwrap();
/// let result = step.as_function().unwrap().invoke(&args![1, 2]).unwrap();
/// assert_eq!(result, Value::from(args![1, 2, 3]));
/// ```
pub fn curry_right(
    function: impl Into<Value>,
    arity: Option<usize>,
) -> Result<Function, WrapError> {
    curried(function, WrapFlags::CURRY_RIGHT, arity)
}

fn curried(
    function: impl Into<Value>,
    flags: WrapFlags,
    arity: Option<usize>,
) -> Result<Function, WrapError> {
    let request = WrapRequest::new(function, flags);
    let request = match arity {
        Some(arity) => request.arity(to_signed(arity)),
        None => request,
    };
    WrapEngine::global().wrap(request)
}

/// Fixes leading arguments. [`__`](super::__) leaves a position open for
/// the call-time arguments.
///
/// # Errors
///
/// Returns [`WrapError::InvalidArgument`] if `function` is not a function.
///
/// # Examples
///
/// ```
/// use funcwrap::{args, slots};
/// use funcwrap::value::{Function, Value};
/// use funcwrap::wrap;
///
/// let list = Function::new("list", 3, |_, arguments| Ok(Value::Array(arguments.to_vec())));
/// let middle = wrap::partial(&list, slots![1, __, 3]).unwrap();
/// assert_eq!(middle.invoke(&args![2]).unwrap(), Value::from(args![1, 2, 3]));
/// ```
pub fn partial(function: impl Into<Value>, partials: Vec<Slot>) -> Result<Function, WrapError> {
    WrapEngine::global().wrap(WrapRequest::new(function, WrapFlags::PARTIAL).partials(partials))
}

/// Fixes trailing arguments.
///
/// # Errors
///
/// Returns [`WrapError::InvalidArgument`] if `function` is not a function.
///
/// # Examples
///
/// ```
/// use funcwrap::{args, slots};
/// use funcwrap::value::{Function, Value};
/// use funcwrap::wrap;
///
/// let list = Function::new("list", 3, |_, arguments| Ok(Value::Array(arguments.to_vec())));
/// let tail = wrap::partial_right(&list, slots![__, 3]).unwrap();
/// assert_eq!(tail.invoke(&args![1, 2]).unwrap(), Value::from(args![1, 2, 3]));
/// ```
pub fn partial_right(
    function: impl Into<Value>,
    partials: Vec<Slot>,
) -> Result<Function, WrapError> {
    WrapEngine::global()
        .wrap(WrapRequest::new(function, WrapFlags::PARTIAL_RIGHT).partials(partials))
}

/// Reorders arguments: the argument at `positions[i]` is passed in
/// position `i`.
///
/// # Errors
///
/// Returns [`WrapError::InvalidArgument`] if `function` is not a function.
///
/// # Examples
///
/// ```
/// use funcwrap::args;
/// use funcwrap::value::{Function, Value};
/// use funcwrap::wrap;
///
/// let list = Function::new("list", 3, |_, arguments| Ok(Value::Array(arguments.to_vec())));
/// let reordered = wrap::rearg(&list, vec![2, 0, 1]).unwrap();
/// assert_eq!(
///     reordered.invoke(&args!["b", "c", "a"]).unwrap(),
///     Value::from(args!["a", "b", "c"])
/// );
/// ```
pub fn rearg(function: impl Into<Value>, positions: Vec<usize>) -> Result<Function, WrapError> {
    WrapEngine::global().wrap(WrapRequest::new(function, WrapFlags::REARG).arg_positions(positions))
}

/// Forwards at most `cap` arguments.
///
/// # Errors
///
/// Returns [`WrapError::InvalidArgument`] if `function` is not a function.
///
/// # Examples
///
/// ```
/// use funcwrap::args;
/// use funcwrap::value::{Function, Value};
/// use funcwrap::wrap;
///
/// let count = Function::new("count", 3, |_, arguments| Ok(Value::from(arguments.len())));
/// let unary = wrap::ary(&count, 1).unwrap();
/// assert_eq!(unary.invoke(&args![1, 2, 3]).unwrap(), Value::from(1));
/// assert_eq!(unary.arity(), 1);
/// ```
pub fn ary(function: impl Into<Value>, cap: usize) -> Result<Function, WrapError> {
    let function = function.into();
    let declared = function.as_function().map_or(0, Function::arity);
    WrapEngine::global().wrap(
        WrapRequest::new(function, WrapFlags::ARY)
            .arity_cap(to_signed(cap))
            .arity(to_signed(cap.min(declared))),
    )
}

/// Reverses the arguments.
///
/// # Errors
///
/// Returns [`WrapError::InvalidArgument`] if `function` is not a function.
///
/// # Examples
///
/// ```
/// use funcwrap::args;
/// use funcwrap::value::{Function, Value};
/// use funcwrap::wrap;
///
/// let list = Function::new("list", 3, |_, arguments| Ok(Value::Array(arguments.to_vec())));
/// let flipped = wrap::flip(&list).unwrap();
/// assert_eq!(flipped.invoke(&args![1, 2, 3]).unwrap(), Value::from(args![3, 2, 1]));
/// ```
pub fn flip(function: impl Into<Value>) -> Result<Function, WrapError> {
    WrapEngine::global().wrap(WrapRequest::new(function, WrapFlags::FLIP))
}
