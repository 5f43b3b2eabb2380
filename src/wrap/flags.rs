//! The bitmask of requested wrapping behaviors.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not, Sub};

/// A set of wrapping behaviors.
///
/// Bit values match the classic wrap bitmask, so integer masks from other
/// tooling can be converted with [`WrapFlags::from_bits_truncate`].
///
/// # Examples
///
/// ```rust
/// use funcwrap::wrap::WrapFlags;
///
/// let flags = WrapFlags::BIND | WrapFlags::PARTIAL;
/// assert_eq!(flags.bits(), 33);
/// assert!(flags.contains(WrapFlags::BIND));
/// assert!(!flags.is_curried());
/// assert_eq!(flags.to_string(), "BIND | PARTIAL");
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WrapFlags(u16);

impl WrapFlags {
    /// No behavior: a plain call-through.
    pub const EMPTY: Self = Self(0);
    /// Fix the receiver.
    pub const BIND: Self = Self(1);
    /// Resolve the target from a named property of the receiver per call.
    pub const BIND_KEY: Self = Self(2);
    /// A curried function whose receiver was bound by an older layer.
    pub const CURRY_BOUND: Self = Self(4);
    /// Accumulate arguments left to right until the arity is satisfied.
    pub const CURRY: Self = Self(8);
    /// Accumulate arguments right to left until the arity is satisfied.
    pub const CURRY_RIGHT: Self = Self(16);
    /// Prepend fixed arguments.
    pub const PARTIAL: Self = Self(32);
    /// Append fixed arguments.
    pub const PARTIAL_RIGHT: Self = Self(64);
    /// Reorder arguments by position.
    pub const REARG: Self = Self(128);
    /// Cap the number of forwarded arguments.
    pub const ARY: Self = Self(256);
    /// Reverse the argument order.
    pub const FLIP: Self = Self(512);

    const ALL: u16 = 1023;

    const NAMES: [(Self, &'static str); 10] = [
        (Self::BIND, "BIND"),
        (Self::BIND_KEY, "BIND_KEY"),
        (Self::CURRY_BOUND, "CURRY_BOUND"),
        (Self::CURRY, "CURRY"),
        (Self::CURRY_RIGHT, "CURRY_RIGHT"),
        (Self::PARTIAL, "PARTIAL"),
        (Self::PARTIAL_RIGHT, "PARTIAL_RIGHT"),
        (Self::REARG, "REARG"),
        (Self::ARY, "ARY"),
        (Self::FLIP, "FLIP"),
    ];

    /// Display names of the user-facing behaviors, sorted by name.
    const DETAILS: [(Self, &'static str); 9] = [
        (Self::ARY, "ary"),
        (Self::BIND, "bind"),
        (Self::BIND_KEY, "bind_key"),
        (Self::CURRY, "curry"),
        (Self::CURRY_RIGHT, "curry_right"),
        (Self::FLIP, "flip"),
        (Self::PARTIAL, "partial"),
        (Self::PARTIAL_RIGHT, "partial_right"),
        (Self::REARG, "rearg"),
    ];

    /// Both curry directions.
    pub const CURRIED: Self = Self(Self::CURRY.0 | Self::CURRY_RIGHT.0);
    /// Both partial orientations.
    pub const PARTIALS: Self = Self(Self::PARTIAL.0 | Self::PARTIAL_RIGHT.0);

    /// Converts raw bits, dropping unknown ones.
    #[inline]
    pub const fn from_bits_truncate(bits: u16) -> Self {
        Self(bits & Self::ALL)
    }

    /// The raw bits.
    #[inline]
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Returns `true` if no behavior is set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if every flag of `other` is set.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `true` if any flag of `other` is set.
    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Sets the flags of `other`.
    #[inline]
    pub const fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    /// Clears the flags of `other`.
    #[inline]
    pub const fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }

    /// Returns `true` if either curry direction is requested.
    #[inline]
    pub const fn is_curried(self) -> bool {
        self.intersects(Self::CURRIED)
    }

    /// Lowercase names of the user-facing behaviors that are set, sorted.
    pub fn details(self) -> impl Iterator<Item = &'static str> {
        Self::DETAILS
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, name)| name)
    }
}

impl BitOr for WrapFlags {
    type Output = Self;

    #[inline]
    fn bitor(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl BitOrAssign for WrapFlags {
    #[inline]
    fn bitor_assign(&mut self, other: Self) {
        self.0 |= other.0;
    }
}

impl BitAnd for WrapFlags {
    type Output = Self;

    #[inline]
    fn bitand(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }
}

impl Sub for WrapFlags {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }
}

impl Not for WrapFlags {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Self(!self.0 & Self::ALL)
    }
}

impl fmt::Display for WrapFlags {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return formatter.write_str("EMPTY");
        }
        let mut first = true;
        for (flag, name) in Self::NAMES {
            if self.contains(flag) {
                if !first {
                    formatter.write_str(" | ")?;
                }
                formatter.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for WrapFlags {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "WrapFlags({self})")
    }
}
