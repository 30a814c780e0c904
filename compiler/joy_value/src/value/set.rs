//! Bounded small-integer sets.
//!
//! A set is a membership vector over `0..SET_SIZE`, stored as one `u32`.
//! Iteration is always in ascending member order.

use std::fmt;

/// Number of members in the set domain.
pub const SET_SIZE: u32 = 32;

/// A set of integers drawn from `0..32`.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct SetValue(u32);

impl SetValue {
    pub const EMPTY: SetValue = SetValue(0);

    /// Raw membership bits, bit `n` set when `n` is a member.
    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        SetValue(bits)
    }

    /// Whether `member` lies inside the set domain.
    #[inline]
    pub fn in_domain(member: i64) -> bool {
        (0..i64::from(SET_SIZE)).contains(&member)
    }

    /// Builds a set, returning the first out-of-domain member on failure.
    pub fn try_from_members(members: impl IntoIterator<Item = i64>) -> Result<Self, i64> {
        members
            .into_iter()
            .try_fold(SetValue::EMPTY, |set, member| set.insert(member).ok_or(member))
    }

    /// Adds `member`; `None` if it lies outside the domain.
    pub fn insert(self, member: i64) -> Option<Self> {
        Self::bit(member).map(|bit| SetValue(self.0 | bit))
    }

    pub fn remove(self, member: i64) -> Self {
        match Self::bit(member) {
            Some(bit) => SetValue(self.0 & !bit),
            None => self,
        }
    }

    pub fn contains(self, member: i64) -> bool {
        Self::bit(member).is_some_and(|bit| self.0 & bit != 0)
    }

    #[inline]
    pub const fn union(self, other: Self) -> Self {
        SetValue(self.0 | other.0)
    }

    #[inline]
    pub const fn intersection(self, other: Self) -> Self {
        SetValue(self.0 & other.0)
    }

    #[inline]
    pub const fn symmetric_difference(self, other: Self) -> Self {
        SetValue(self.0 ^ other.0)
    }

    /// Complement against the full domain.
    #[inline]
    pub const fn complement(self) -> Self {
        SetValue(!self.0)
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Smallest member.
    pub fn first(self) -> Option<i64> {
        if self.is_empty() {
            None
        } else {
            Some(i64::from(self.0.trailing_zeros()))
        }
    }

    /// The set without its smallest member.
    #[inline]
    pub const fn rest(self) -> Self {
        // Clears the lowest set bit.
        SetValue(self.0 & self.0.wrapping_sub(1))
    }

    /// The `index`-th member in ascending order.
    pub fn nth(self, index: usize) -> Option<i64> {
        self.iter().nth(index)
    }

    /// Members in ascending order.
    pub fn iter(self) -> impl Iterator<Item = i64> {
        (0..SET_SIZE)
            .filter(move |n| self.0 & (1 << n) != 0)
            .map(i64::from)
    }

    fn bit(member: i64) -> Option<u32> {
        if Self::in_domain(member) {
            Some(1u32 << member)
        } else {
            None
        }
    }
}

impl fmt::Debug for SetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for SetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, member) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{member}")?;
        }
        f.write_str("}")
    }
}
