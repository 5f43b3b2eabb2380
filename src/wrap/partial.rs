//! Left partial application without holes.

use std::sync::Arc;

use super::Body;
use super::metadata::WrapMetadata;
use super::slot::Slot;
use crate::value::Value;

/// Builds a wrapper that prepends the fixed left partials to every call.
///
/// Only selected when the partials contain no holes, so every slot is
/// fixed and the splice is a plain concatenation.
pub(crate) fn build(metadata: &Arc<WrapMetadata>) -> Body {
    let metadata = Arc::clone(metadata);
    let fixed: Vec<Value> = metadata
        .partials_left
        .iter()
        .flat_map(|partials| partials.slots().iter().cloned().map(Slot::into_value))
        .collect();

    Box::new(move |receiver: &Value, arguments: &[Value]| {
        let receiver = metadata.receiver_for(receiver);
        let mut spliced = Vec::with_capacity(fixed.len() + arguments.len());
        spliced.extend_from_slice(&fixed);
        spliced.extend_from_slice(arguments);
        metadata.target.resolve(&receiver)?.call(&receiver, &spliced)
    })
}
