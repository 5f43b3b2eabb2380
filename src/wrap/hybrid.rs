//! The general wrapper: any combination of behaviors in one pass.
//!
//! Every call applies the requested steps in a fixed order, regardless of
//! the order in which the behaviors were requested across layers:
//!
//! 1. splice left partials, then right partials;
//! 2. re-curry if a curried wrapper received too few arguments, collecting
//!    on the curry side only;
//! 3. reorder by position, or else flip when more than one argument exists;
//! 4. cap the argument count;
//! 5. resolve receiver and target, and invoke.
//!
//! Merging never flattens partials on the opposite side of the curry
//! direction into a curried layer, so step 2 leaves the other side alone.

use std::sync::Arc;

use super::Body;
use super::args::{compose_left, compose_right, reorder, to_slots, to_values};
use super::curry::{CurryStep, recurry};
use super::engine::WrapEngine;
use super::flags::WrapFlags;
use super::metadata::WrapMetadata;
use crate::value::Value;

pub(crate) fn build(engine: WrapEngine, metadata: &Arc<WrapMetadata>) -> Body {
    let metadata = Arc::clone(metadata);
    let curried = metadata.flags.is_curried();
    let flip = metadata.flags.contains(WrapFlags::FLIP);
    let arity_cap = metadata
        .arity_cap
        .filter(|_| metadata.flags.contains(WrapFlags::ARY));
    let arity = metadata.arity.unwrap_or(0);

    Box::new(move |receiver: &Value, arguments: &[Value]| {
        if curried {
            if let CurryStep::Pending { supplied } = CurryStep::evaluate(arguments.len(), arity) {
                return Ok(Value::Function(recurry(&engine, &metadata, arguments, supplied)));
            }
        }

        let mut slots = to_slots(arguments);
        if let Some(partials) = &metadata.partials_left {
            slots = compose_left(slots, partials);
        }
        if let Some(partials) = &metadata.partials_right {
            slots = compose_right(slots, partials);
        }
        let mut values = to_values(slots);

        if let Some(positions) = &metadata.arg_positions {
            values = reorder(values, positions);
        } else if flip && values.len() > 1 {
            values.reverse();
        }

        if let Some(cap) = arity_cap {
            values.truncate(cap);
        }

        let receiver = metadata.receiver_for(receiver);
        metadata.target.resolve(&receiver)?.call(&receiver, &values)
    })
}
