//! Function wrapping: binding, currying, partial application, and argument
//! reshaping through one engine.
//!
//! Every wrapper is described by a [`WrapMetadata`] record: the innermost
//! target, a set of [`WrapFlags`], and the data those flags need. The
//! [`WrapEngine`] keeps the record of each live wrapper, so wrapping a
//! wrapper folds both records into one instead of stacking call layers.
//!
//! # Builders
//!
//! The engine picks the cheapest strategy able to honor the final flags
//! ([`WrapKind`]):
//!
//! | Kind      | Flags                                        |
//! |-----------|----------------------------------------------|
//! | `Bind`    | none, or `BIND`                              |
//! | `Curry`   | exactly `CURRY` or `CURRY_RIGHT`             |
//! | `Partial` | `PARTIAL` or `BIND \| PARTIAL`, without holes |
//! | `Hybrid`  | everything else                              |
//!
//! # Examples
//!
//! ```rust
//! use funcwrap::{args, slots};
//! use funcwrap::value::{Function, Value};
//! use funcwrap::wrap;
//!
//! let list = Function::new("list", 3, |_, arguments| Ok(Value::Array(arguments.to_vec())));
//!
//! let curried = wrap::curry(&list, None).unwrap();
//! let with_first = wrap::partial(&curried, slots![1]).unwrap();
//!
//! // One wrapper around `list`, expecting the two remaining arguments.
//! assert_eq!(with_first.arity(), 2);
//! assert_eq!(with_first.to_string(), "fn list/2 /* [wrapped with curry, partial] */");
//!
//! let step = with_first.invoke(&args![2]).unwrap();
//! let result = step.as_function().unwrap().invoke(&args![3]).unwrap();
//! assert_eq!(result, Value::from(args![1, 2, 3]));
//! ```

mod args;
mod bind;
mod combinators;
mod curry;
mod engine;
mod flags;
mod hybrid;
mod kind;
mod merge;
mod metadata;
mod partial;
mod slot;
mod store;

use crate::value::NativeFn;

pub use combinators::{ary, bind, bind_key, curry, curry_right, flip, partial, partial_right, rearg};
pub use engine::{WrapEngine, WrapRequest, wrap};
pub use flags::WrapFlags;
pub use kind::WrapKind;
pub use metadata::{Target, WrapMetadata};
pub use slot::{Holders, Partials, Placeholder, Slot, __};

/// The boxed call body every builder produces.
pub(crate) type Body = Box<NativeFn>;
