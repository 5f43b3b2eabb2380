//! Builder selection.

use std::fmt;

use super::flags::WrapFlags;
use super::slot::Partials;

/// The builder strategy for a wrapper, cheapest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WrapKind {
    /// Call-through, optionally with a bound receiver.
    Bind,
    /// Pure currying in one direction.
    Curry,
    /// Left partial application without holes, optionally bound.
    Partial,
    /// Any other combination.
    Hybrid,
}

impl WrapKind {
    /// Picks the cheapest builder able to honor `flags`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcwrap::slots;
    /// use funcwrap::wrap::{Partials, WrapFlags, WrapKind};
    ///
    /// assert_eq!(WrapKind::select(WrapFlags::BIND, None), WrapKind::Bind);
    /// assert_eq!(WrapKind::select(WrapFlags::CURRY_RIGHT, None), WrapKind::Curry);
    ///
    /// let fixed = Partials::new(slots![1]);
    /// assert_eq!(WrapKind::select(WrapFlags::PARTIAL, Some(&fixed)), WrapKind::Partial);
    ///
    /// let holed = Partials::new(slots![__, 1]);
    /// assert_eq!(WrapKind::select(WrapFlags::PARTIAL, Some(&holed)), WrapKind::Hybrid);
    /// ```
    pub fn select(flags: WrapFlags, partials_left: Option<&Partials>) -> Self {
        if flags.is_empty() || flags == WrapFlags::BIND {
            Self::Bind
        } else if flags == WrapFlags::CURRY || flags == WrapFlags::CURRY_RIGHT {
            Self::Curry
        } else if (flags == WrapFlags::PARTIAL || flags == WrapFlags::BIND | WrapFlags::PARTIAL)
            && !partials_left.is_some_and(Partials::has_holes)
        {
            Self::Partial
        } else {
            Self::Hybrid
        }
    }
}

impl fmt::Display for WrapKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bind => "bind",
            Self::Curry => "curry",
            Self::Partial => "partial",
            Self::Hybrid => "hybrid",
        };
        formatter.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(WrapFlags::EMPTY, WrapKind::Bind)]
    #[case(WrapFlags::BIND, WrapKind::Bind)]
    #[case(WrapFlags::CURRY, WrapKind::Curry)]
    #[case(WrapFlags::CURRY_RIGHT, WrapKind::Curry)]
    #[case(WrapFlags::CURRY | WrapFlags::CURRY_BOUND, WrapKind::Hybrid)]
    #[case(WrapFlags::BIND | WrapFlags::CURRY, WrapKind::Hybrid)]
    #[case(WrapFlags::PARTIAL_RIGHT, WrapKind::Hybrid)]
    #[case(WrapFlags::FLIP, WrapKind::Hybrid)]
    #[case(WrapFlags::BIND | WrapFlags::BIND_KEY, WrapKind::Hybrid)]
    fn test_select_without_partials(#[case] flags: WrapFlags, #[case] expected: WrapKind) {
        assert_eq!(WrapKind::select(flags, None), expected);
    }

    #[test]
    fn test_bound_partial_without_holes() {
        let partials = Partials::new(crate::slots![1, 2]);
        assert_eq!(
            WrapKind::select(WrapFlags::BIND | WrapFlags::PARTIAL, Some(&partials)),
            WrapKind::Partial
        );
    }
}
