//! Receiver binding without argument changes.

use std::sync::Arc;

use super::Body;
use super::metadata::WrapMetadata;
use crate::value::Value;

/// Builds a call-through that fixes the receiver under `BIND` and forwards
/// the call-time receiver otherwise.
pub(crate) fn build(metadata: &Arc<WrapMetadata>) -> Body {
    let metadata = Arc::clone(metadata);
    Box::new(move |receiver: &Value, arguments: &[Value]| {
        let receiver = metadata.receiver_for(receiver);
        metadata.target.resolve(&receiver)?.call(&receiver, arguments)
    })
}
