//! The wrap engine: validates requests, merges layers, and dispatches to a
//! builder.

use std::fmt;
use std::sync::{Arc, LazyLock};

use super::Body;
use super::flags::WrapFlags;
use super::kind::WrapKind;
use super::merge::merge;
use super::metadata::{Target, WrapMetadata};
use super::slot::{Partials, Slot};
use super::store::{MetadataStore, Registration};
use super::{bind, curry, hybrid, partial};
use crate::error::WrapError;
use crate::value::{Function, FunctionId, Value};

static GLOBAL: LazyLock<WrapEngine> = LazyLock::new(WrapEngine::new);

/// Produces wrappers and remembers how each one was built.
///
/// Cloning an engine is cheap; clones share the same metadata store.
/// Most code uses the process-wide [`WrapEngine::global`] through the
/// named entry points in [`crate::wrap`]. A separate engine is useful
/// when wrappers must not merge with those produced elsewhere.
///
/// # Examples
///
/// ```rust
/// use funcwrap::args;
/// use funcwrap::value::{Function, Value};
/// use funcwrap::wrap::{WrapEngine, WrapFlags, WrapRequest};
///
/// let engine = WrapEngine::new();
/// let add = Function::new("add", 2, |_, arguments| {
///     Ok(Value::from(arguments.iter().filter_map(Value::as_number).sum::<f64>()))
/// });
///
/// let curried = engine.wrap(WrapRequest::new(&add, WrapFlags::CURRY)).unwrap();
/// let add_one = curried.invoke(&args![1]).unwrap();
/// let result = add_one.as_function().unwrap().invoke(&args![2]).unwrap();
/// assert_eq!(result, Value::from(3));
/// assert_eq!(engine.tracked(), 2);
/// ```
#[derive(Clone, Default)]
pub struct WrapEngine {
    store: MetadataStore,
}

impl WrapEngine {
    /// Creates an engine with an empty store.
    pub fn new() -> Self {
        Self {
            store: MetadataStore::new(),
        }
    }

    /// The process-wide engine used by the named entry points.
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Produces a wrapper for `request`.
    ///
    /// When the target is itself a wrapper produced by this engine, the
    /// layers are flattened into one wrapper around the innermost function
    /// whenever that preserves behavior.
    ///
    /// # Errors
    ///
    /// Returns [`WrapError::InvalidArgument`] if the target is not a
    /// function and [`WrapFlags::BIND_KEY`] is not requested.
    pub fn wrap(&self, request: WrapRequest) -> Result<Function, WrapError> {
        let WrapRequest {
            target,
            mut flags,
            receiver,
            partials,
            arg_positions,
            arity_cap,
            arity,
        } = request;

        let target = if flags.contains(WrapFlags::BIND_KEY) {
            match target {
                Value::Function(function) => Target::Function(function),
                other => Target::Key(other.to_property_key()),
            }
        } else {
            match target {
                Value::Function(function) => Target::Function(function),
                other => {
                    return Err(WrapError::InvalidArgument {
                        found: other.type_name(),
                    });
                }
            }
        };

        let partials = if partials.is_empty() {
            flags.remove(WrapFlags::PARTIALS);
            None
        } else {
            if !flags.intersects(WrapFlags::PARTIALS) {
                flags.insert(WrapFlags::PARTIAL);
            }
            Some(Partials::new(partials))
        };
        let newly_fixed = partials.as_ref().map_or(0, Partials::fixed_count);

        let mut fresh = WrapMetadata::new(target, flags);
        fresh.receiver = receiver;
        if flags.contains(WrapFlags::PARTIAL_RIGHT) {
            fresh.partials_right = partials;
        } else {
            fresh.partials_left = partials;
        }
        fresh.arg_positions = arg_positions;
        fresh.arity_cap = arity_cap.map(clamp);
        fresh.arity = arity.map(clamp);

        let prior = match &fresh.target {
            Target::Function(function) if !flags.contains(WrapFlags::BIND_KEY) => {
                self.store.get(function)
            }
            _ => None,
        };
        let merged = prior.is_some_and(|prior| merge(&mut fresh, &prior));

        let base = fresh
            .arity
            .unwrap_or_else(|| fresh.target.declared_arity());
        let arity = base.saturating_sub(newly_fixed);
        fresh.arity = Some(arity);
        if arity == 0 {
            fresh.flags.remove(WrapFlags::CURRIED);
        }

        tracing::debug!(
            function = %fresh.target.name(),
            flags = %fresh.flags,
            merged,
            arity,
            "wrap requested"
        );
        Ok(self.assemble(fresh))
    }

    /// The metadata recorded for `function`, if it is a live wrapper
    /// produced by this engine.
    pub fn metadata(&self, function: &Function) -> Option<Arc<WrapMetadata>> {
        self.store.get(function)
    }

    /// Number of live wrappers this engine tracks.
    pub fn tracked(&self) -> usize {
        self.store.len()
    }

    /// Builds and registers the wrapper for finished metadata.
    pub(crate) fn assemble(&self, metadata: WrapMetadata) -> Function {
        let kind = WrapKind::select(metadata.flags, metadata.partials_left.as_ref());
        let metadata = Arc::new(metadata);

        let body = match kind {
            WrapKind::Bind => bind::build(&metadata),
            WrapKind::Curry => curry::build(self.clone(), &metadata),
            WrapKind::Partial => partial::build(&metadata),
            WrapKind::Hybrid => hybrid::build(self.clone(), &metadata),
        };

        let mut wrapped_with: Vec<&'static str> = metadata
            .target
            .wrapped_with()
            .iter()
            .copied()
            .chain(metadata.flags.details())
            .collect();
        wrapped_with.sort_unstable();
        wrapped_with.dedup();

        let name = metadata.target.name();
        let arity = metadata.arity.unwrap_or(0);
        let id = FunctionId::next();
        tracing::debug!(wrapper = %id, name = %name, %kind, arity, "wrapper built");

        let registered = Registered {
            body,
            _registration: self.store.set(id, metadata),
        };
        let body: Body = Box::new(move |receiver: &Value, arguments: &[Value]| {
            registered.call(receiver, arguments)
        });
        Function::from_parts(id, name, arity, wrapped_with, body)
    }
}

impl fmt::Debug for WrapEngine {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("WrapEngine")
            .field("tracked", &self.tracked())
            .finish()
    }
}

/// A builder body that owns its store entry.
struct Registered {
    body: Body,
    _registration: Registration,
}

impl Registered {
    #[inline]
    fn call(&self, receiver: &Value, arguments: &[Value]) -> Result<Value, WrapError> {
        (self.body)(receiver, arguments)
    }
}

fn clamp(value: i64) -> usize {
    usize::try_from(value.max(0)).unwrap_or(usize::MAX)
}

/// A request to produce one wrapper.
///
/// # Examples
///
/// ```rust
/// use funcwrap::slots;
/// use funcwrap::value::{Function, Value};
/// use funcwrap::wrap::{self, WrapFlags, WrapRequest};
///
/// let describe = Function::new("describe", 2, |_, arguments| {
///     Ok(Value::from(format!("{} {}", arguments[0], arguments[1])))
/// });
///
/// let request = WrapRequest::new(&describe, WrapFlags::PARTIAL_RIGHT)
///     .partials(slots!["world"]);
/// let greet = wrap::wrap(request).unwrap();
/// assert_eq!(greet.invoke(&[Value::from("hello")]).unwrap(), Value::from("hello world"));
/// ```
#[derive(Clone, Debug)]
pub struct WrapRequest {
    target: Value,
    flags: WrapFlags,
    receiver: Option<Value>,
    partials: Vec<Slot>,
    arg_positions: Option<Vec<usize>>,
    arity_cap: Option<i64>,
    arity: Option<i64>,
}

impl WrapRequest {
    /// Starts a request for `target` with the given behaviors.
    pub fn new(target: impl Into<Value>, flags: WrapFlags) -> Self {
        Self {
            target: target.into(),
            flags,
            receiver: None,
            partials: Vec::new(),
            arg_positions: None,
            arity_cap: None,
            arity: None,
        }
    }

    /// The receiver to bind under `BIND`.
    #[must_use]
    pub fn receiver(mut self, receiver: impl Into<Value>) -> Self {
        self.receiver = Some(receiver.into());
        self
    }

    /// Arguments to fix, on the right under `PARTIAL_RIGHT` and on the
    /// left otherwise.
    #[must_use]
    pub fn partials(mut self, partials: Vec<Slot>) -> Self {
        self.partials = partials;
        self
    }

    /// The argument permutation for `REARG`.
    #[must_use]
    pub fn arg_positions(mut self, positions: Vec<usize>) -> Self {
        self.arg_positions = Some(positions);
        self
    }

    /// The argument cap for `ARY`. Negative values count as zero.
    #[must_use]
    pub const fn arity_cap(mut self, cap: i64) -> Self {
        self.arity_cap = Some(cap);
        self
    }

    /// The arity consulted by currying. Negative values count as zero.
    #[must_use]
    pub const fn arity(mut self, arity: i64) -> Self {
        self.arity = Some(arity);
        self
    }
}

/// Produces a wrapper with the process-wide engine.
///
/// # Errors
///
/// See [`WrapEngine::wrap`].
pub fn wrap(request: WrapRequest) -> Result<Function, WrapError> {
    WrapEngine::global().wrap(request)
}
