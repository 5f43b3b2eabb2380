//! Currying: accumulate arguments until the arity is satisfied.
//!
//! A curried wrapper called with fewer arguments than its arity does not
//! call the target. It returns a new wrapper (built through the engine, so
//! it is registered and later wraps merge into it) that holds the
//! collected arguments as partials and expects the remainder:
//!
//! ```text
//! curry(f)(a)(b)(c) = curry(f)(a, b)(c) = curry(f)(a, b, c) = f(a, b, c)
//! ```

use std::sync::Arc;

use super::Body;
use super::args::{compose_left, compose_right, to_slots};
use super::engine::WrapEngine;
use super::flags::WrapFlags;
use super::metadata::{Target, WrapMetadata};
use super::slot::Partials;
use crate::value::{Function, Value};

/// Outcome of one call to a curried wrapper.
#[derive(Debug, PartialEq)]
pub(crate) enum CurryStep {
    /// Not enough arguments yet: `supplied` more were collected.
    Pending { supplied: usize },
    /// The arity is satisfied; the target can be invoked.
    Ready,
}

impl CurryStep {
    pub(crate) const fn evaluate(supplied: usize, arity: usize) -> Self {
        if supplied < arity {
            Self::Pending { supplied }
        } else {
            Self::Ready
        }
    }
}

/// Builds a wrapper for a bare `CURRY` or `CURRY_RIGHT` request.
pub(crate) fn build(engine: WrapEngine, metadata: &Arc<WrapMetadata>) -> Body {
    let metadata = Arc::clone(metadata);
    let arity = metadata.arity.unwrap_or(0);

    Box::new(move |receiver: &Value, arguments: &[Value]| {
        match CurryStep::evaluate(arguments.len(), arity) {
            CurryStep::Pending { supplied } => {
                let next = recurry(&engine, &metadata, arguments, supplied);
                Ok(Value::Function(next))
            }
            CurryStep::Ready => metadata.target.resolve(receiver)?.call(receiver, arguments),
        }
    })
}

/// Produces the wrapper that continues a pending curried call.
///
/// The call-time arguments are spliced into the partials on the curry
/// side only (left for `CURRY`, right for `CURRY_RIGHT`); the other side
/// keeps its partials so they still land in their place on the final call.
pub(crate) fn recurry(
    engine: &WrapEngine,
    metadata: &WrapMetadata,
    arguments: &[Value],
    supplied: usize,
) -> Function {
    let from_left = metadata.flags.contains(WrapFlags::CURRY);
    let collected = to_slots(arguments);

    let mut flags = metadata.flags;
    let mut partials_left = metadata.partials_left.clone();
    let mut partials_right = metadata.partials_right.clone();

    if from_left {
        let slots = match &partials_left {
            Some(partials) => compose_left(collected, partials),
            None => collected,
        };
        partials_left = Some(Partials::new(slots));
        flags.insert(WrapFlags::PARTIAL);
    } else {
        let slots = match &partials_right {
            Some(partials) => compose_right(collected, partials),
            None => collected,
        };
        partials_right = Some(Partials::new(slots));
        flags.insert(WrapFlags::PARTIAL_RIGHT);
    }

    if !flags.contains(WrapFlags::CURRY_BOUND) {
        flags.remove(WrapFlags::BIND);
        if matches!(metadata.target, Target::Function(_)) {
            flags.remove(WrapFlags::BIND_KEY);
        }
    }

    let arity = metadata.arity.unwrap_or(0).saturating_sub(supplied);
    tracing::trace!(flags = %flags, supplied, arity, "re-currying");

    let next = WrapMetadata {
        target: metadata.target.clone(),
        flags,
        receiver: metadata.receiver.clone(),
        partials_left,
        partials_right,
        arg_positions: metadata.arg_positions.clone(),
        arity_cap: metadata.arity_cap,
        arity: Some(arity),
    };
    engine.assemble(next)
}
