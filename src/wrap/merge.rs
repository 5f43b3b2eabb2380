//! Flattening of layered wraps.
//!
//! Wrapping a wrapper again would nest one call layer per wrap. Instead the
//! older layer's metadata is folded into the new request, so a chain such
//! as bind → partial → curry → partial still produces a single wrapper
//! around the innermost function. Combinations whose single-pass order
//! would differ from the layered order are left unmerged; the older
//! wrapper is then wrapped like any other function.

use super::args::{compose_left, compose_right};
use super::flags::WrapFlags;
use super::metadata::WrapMetadata;
use super::slot::Partials;

/// Folds `prior` (the older layer) into `fresh` (the new request).
///
/// Returns `false` and leaves `fresh` untouched when the layers cannot be
/// flattened without changing behavior.
pub(crate) fn merge(fresh: &mut WrapMetadata, prior: &WrapMetadata) -> bool {
    if !is_mergeable(fresh, prior) {
        tracing::trace!(
            fresh = %fresh.flags,
            prior = %prior.flags,
            "wrap layers kept separate"
        );
        return false;
    }

    let mut flags = fresh.flags | prior.flags;

    if prior.flags.contains(WrapFlags::BIND) {
        fresh.receiver.clone_from(&prior.receiver);
        if !fresh.flags.contains(WrapFlags::BIND) {
            flags.insert(WrapFlags::CURRY_BOUND);
        }
    }

    if let Some(older) = &prior.partials_left {
        fresh.partials_left = Some(match fresh.partials_left.take() {
            Some(newer) => Partials::new(compose_left(newer.into_slots(), older)),
            None => older.clone(),
        });
    }

    if let Some(older) = &prior.partials_right {
        fresh.partials_right = Some(match fresh.partials_right.take() {
            Some(newer) => Partials::new(compose_right(newer.into_slots(), older)),
            None => older.clone(),
        });
    }

    if fresh.arg_positions.is_none() {
        fresh.arg_positions.clone_from(&prior.arg_positions);
    }

    if prior.flags.contains(WrapFlags::ARY) {
        fresh.arity_cap = match (fresh.arity_cap, prior.arity_cap) {
            (Some(newer), Some(older)) => Some(newer.min(older)),
            (newer, older) => newer.or(older),
        };
    }

    if fresh.arity.is_none() {
        fresh.arity = prior.arity;
    }

    fresh.target = prior.target.clone();
    fresh.flags = flags;
    true
}

fn is_mergeable(fresh: &WrapMetadata, prior: &WrapMetadata) -> bool {
    if fresh.flags.contains(WrapFlags::REARG)
        && (prior.flags.intersects(WrapFlags::REARG | WrapFlags::CURRIED)
            || prior.partials_left.is_some()
            || prior.partials_right.is_some())
    {
        return false;
    }
    if crosses_curry_direction(fresh, prior) {
        return false;
    }
    is_common(fresh.flags | prior.flags) || is_combo(fresh, prior)
}

/// Layers where the newer one feeds arguments to the older curried one
/// from the other end. A single wrapper collects pending arguments on one
/// side only, so these stay as two layers.
fn crosses_curry_direction(fresh: &WrapMetadata, prior: &WrapMetadata) -> bool {
    let left = prior.flags.contains(WrapFlags::CURRY);
    let right = prior.flags.contains(WrapFlags::CURRY_RIGHT);

    (left && (fresh.flags.contains(WrapFlags::CURRY_RIGHT) || fresh.partials_right.is_some()))
        || (right && (fresh.flags.contains(WrapFlags::CURRY) || fresh.partials_left.is_some()))
}

/// Flag unions a single wrapper applies in the same order as the layers.
fn is_common(flags: WrapFlags) -> bool {
    if flags.contains(WrapFlags::FLIP) {
        return false;
    }
    if !flags.contains(WrapFlags::ARY) {
        return true;
    }
    let rest = flags - WrapFlags::ARY;
    rest.is_empty() || rest == WrapFlags::BIND || rest == WrapFlags::BIND_KEY
}

/// Capped layers that still flatten: currying or reordering over a cap.
fn is_combo(fresh: &WrapMetadata, prior: &WrapMetadata) -> bool {
    let positions_within_cap = |metadata: &WrapMetadata| {
        let count = metadata.arg_positions.as_ref().map_or(0, Vec::len);
        prior.arity_cap.is_some_and(|cap| count <= cap)
    };

    (prior.flags == WrapFlags::ARY && fresh.flags == WrapFlags::CURRY)
        || (prior.flags == WrapFlags::ARY
            && fresh.flags == WrapFlags::REARG
            && positions_within_cap(fresh))
        || (prior.flags == WrapFlags::ARY | WrapFlags::REARG
            && positions_within_cap(prior)
            && fresh.flags == WrapFlags::CURRY)
}
