//! Partial argument sequences with holes.
//!
//! A partial application fixes some arguments and leaves others open.
//! Open positions are [`Slot::Hole`]s, filled from call-time arguments in
//! order; fixed positions are [`Slot::Fixed`].
//!
//! The [`slots!`](crate::slots) macro builds such a sequence, recognising
//! `__` as a hole:
//!
//! ```rust
//! use funcwrap::slots;
//! use funcwrap::value::Value;
//! use funcwrap::wrap::{Partials, Slot};
//!
//! let partials = Partials::new(slots![1, __, 3]);
//! assert_eq!(partials.slots()[1], Slot::Hole);
//! assert_eq!(partials.holders(), &[1]);
//! assert_eq!(partials.fixed_count(), 2);
//! ```

use smallvec::SmallVec;

use crate::value::Value;

/// Placeholder marker type for partial application.
///
/// Converts into [`Slot::Hole`]. Inside [`slots!`](crate::slots), write
/// `__` directly; outside of it, use the [`__`] constant with
/// `Slot::from(__)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placeholder;

/// The placeholder constant for partial application.
///
/// Named `__` (double underscore) because `macro_rules!` cannot match a
/// single underscore `_` as a literal token.
///
/// ```rust
/// use funcwrap::wrap::{Slot, __};
///
/// assert_eq!(Slot::from(__), Slot::Hole);
/// ```
#[allow(non_upper_case_globals)]
pub const __: Placeholder = Placeholder;

/// One position of a partial argument sequence.
#[derive(Clone, Debug, PartialEq)]
pub enum Slot {
    /// A fixed argument.
    Fixed(Value),
    /// An open position, filled by a call-time argument.
    Hole,
}

impl Slot {
    /// Returns `true` for [`Slot::Hole`].
    #[inline]
    pub const fn is_hole(&self) -> bool {
        matches!(self, Self::Hole)
    }

    /// The argument this slot contributes to a call; holes read as
    /// [`Value::Undefined`].
    #[inline]
    pub fn into_value(self) -> Value {
        match self {
            Self::Fixed(value) => value,
            Self::Hole => Value::Undefined,
        }
    }
}

impl From<Value> for Slot {
    #[inline]
    fn from(value: Value) -> Self {
        Self::Fixed(value)
    }
}

impl From<Placeholder> for Slot {
    #[inline]
    fn from(_: Placeholder) -> Self {
        Self::Hole
    }
}

/// Hole indexes of a partial sequence. Most partials have very few holes.
pub type Holders = SmallVec<[usize; 4]>;

/// A partial argument sequence together with the indexes of its holes.
///
/// The hole indexes are derived from the slots on construction, so
/// `holders().len() <= len()` always holds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Partials {
    slots: Vec<Slot>,
    holders: Holders,
}

impl Partials {
    /// Builds a sequence and indexes its holes.
    pub fn new(slots: Vec<Slot>) -> Self {
        let holders = slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.is_hole().then_some(index))
            .collect();
        Self { slots, holders }
    }

    /// The slots in order.
    #[inline]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Indexes of the holes, ascending.
    #[inline]
    pub fn holders(&self) -> &[usize] {
        &self.holders
    }

    /// Number of slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if there are no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of fixed (non-hole) slots.
    #[inline]
    pub fn fixed_count(&self) -> usize {
        self.slots.len() - self.holders.len()
    }

    /// Returns `true` if any slot is a hole.
    #[inline]
    pub fn has_holes(&self) -> bool {
        !self.holders.is_empty()
    }

    pub(crate) fn into_slots(self) -> Vec<Slot> {
        self.slots
    }
}

impl From<Vec<Slot>> for Partials {
    fn from(slots: Vec<Slot>) -> Self {
        Self::new(slots)
    }
}

/// Builds a `Vec<Slot>`: `__` becomes [`Slot::Hole`], every other
/// expression becomes [`Slot::Fixed`] via [`Value::from`].
///
/// **Important**: `__` is matched as a literal token, so it works without
/// importing the [`__`](crate::wrap::__) constant.
///
/// # Examples
///
/// ```rust
/// use funcwrap::slots;
/// use funcwrap::value::Value;
/// use funcwrap::wrap::Slot;
///
/// let slots = slots![__, "fixed", -1];
/// assert_eq!(
///     slots,
///     vec![Slot::Hole, Slot::Fixed(Value::from("fixed")), Slot::Fixed(Value::from(-1))]
/// );
/// ```
#[macro_export]
macro_rules! slots {
    (@collect [$($done:expr,)*]) => {
        ::std::vec![$($done),*]
    };
    (@collect [$($done:expr,)*] __ $(, $($rest:tt)*)?) => {
        $crate::slots!(@collect [$($done,)* $crate::wrap::Slot::Hole,] $($($rest)*)?)
    };
    (@collect [$($done:expr,)*] $value:expr $(, $($rest:tt)*)?) => {
        $crate::slots!(
            @collect [$($done,)* $crate::wrap::Slot::Fixed($crate::value::Value::from($value)),]
            $($($rest)*)?
        )
    };
    () => {
        ::std::vec::Vec::<$crate::wrap::Slot>::new()
    };
    ($($items:tt)+) => {
        $crate::slots!(@collect [] $($items)+)
    };
}
