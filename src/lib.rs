//! # funcwrap
//!
//! A function-wrapping engine over dynamically typed values: receiver
//! binding, currying, partial application with placeholders, argument
//! reordering, capping, and flipping, all produced by one engine that
//! flattens layered wraps into a single wrapper.
//!
//! ## Overview
//!
//! - **Values**: [`value::Value`] and callable [`value::Function`]s
//! - **Wrapping**: [`wrap::WrapEngine`] and the named entry points
//!   ([`wrap::bind`], [`wrap::curry`], [`wrap::partial`], ...)
//! - **Array helpers**: [`array::last_index_of`], [`array::pull_at`]
//! - **String helpers**: [`string::trim_end`]
//!
//! ## Feature Flags
//!
//! - `value`: Value model
//! - `wrap`: Wrap engine (implies `value`)
//! - `array`: Array helpers
//! - `string`: String helpers
//! - `fxhash`: Faster hashing for the wrapper metadata store
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use funcwrap::prelude::*;
//!
//! let add = Function::new("add", 2, |_, arguments| {
//!     Ok(Value::from(arguments.iter().filter_map(Value::as_number).sum::<f64>()))
//! });
//!
//! let increment = partial(&add, slots![1]).unwrap();
//! assert_eq!(increment.invoke(&args![41]).unwrap(), Value::from(42));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use funcwrap::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "value")]
    pub use crate::error::WrapError;

    #[cfg(feature = "value")]
    pub use crate::value::{Function, Object, Value};

    #[cfg(feature = "value")]
    pub use crate::args;

    #[cfg(feature = "wrap")]
    pub use crate::wrap::*;

    #[cfg(feature = "wrap")]
    pub use crate::slots;

    #[cfg(feature = "array")]
    pub use crate::array::*;

    #[cfg(feature = "string")]
    pub use crate::string::*;
}

#[cfg(feature = "value")]
pub mod error;

#[cfg(feature = "value")]
pub mod value;

#[cfg(feature = "wrap")]
pub mod wrap;

#[cfg(feature = "array")]
pub mod array;

#[cfg(feature = "string")]
pub mod string;
