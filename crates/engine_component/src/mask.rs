//! Membership masks and the bit allocator.
//!
//! Every registered component type owns exactly one bit of a fixed-width
//! [`ComponentMask`]. An entity's mask has that bit set while the entity owns
//! a component of that type, so "does this entity have A and B" reduces to a
//! single AND against the combined mask of A and B.

use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

use crate::error::RegistryError;

/// Raw storage word for a membership mask.
pub type MaskBits = u32;

/// Number of component types a single mask can describe.
pub const MASK_BITS: usize = MaskBits::BITS as usize;

/// A fixed-width bitset of component flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ComponentMask(pub MaskBits);

impl ComponentMask {
    /// The mask with no bits set.
    pub const EMPTY: Self = Self(0);

    /// Returns `true` if no bits are set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if every bit of `other` is also set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `true` if `self` and `other` share at least one bit.
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Returns a copy with the bits of `flag` set.
    #[must_use]
    pub const fn with(self, flag: Self) -> Self {
        Self(self.0 | flag.0)
    }

    /// Returns a copy with the bits of `flag` cleared.
    #[must_use]
    pub const fn without(self, flag: Self) -> Self {
        Self(self.0 & !flag.0)
    }

    /// Number of set bits.
    #[must_use]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }
}

impl BitOr for ComponentMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for ComponentMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for ComponentMask {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl Not for ComponentMask {
    type Output = Self;

    fn not(self) -> Self {
        Self(!self.0)
    }
}

impl std::fmt::Display for ComponentMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#034b}", self.0)
    }
}

/// Hands out single-bit flags, least-significant bit first.
///
/// Allocation is monotonic: flags are never returned to the allocator.
#[derive(Debug, Clone)]
pub struct BitAllocator {
    /// The next flag to hand out, or `None` once every bit has been used.
    next: Option<MaskBits>,
    allocated: usize,
}

impl BitAllocator {
    /// Create an allocator positioned at the least-significant bit.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next: Some(1),
            allocated: 0,
        }
    }

    /// Allocate the next unused flag.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::CapacityExceeded`] once all [`MASK_BITS`]
    /// flags have been handed out.
    pub fn allocate(&mut self) -> Result<ComponentMask, RegistryError> {
        let flag = self.next.ok_or(RegistryError::CapacityExceeded {
            capacity: MASK_BITS,
        })?;
        self.next = flag.checked_mul(2);
        self.allocated += 1;
        Ok(ComponentMask(flag))
    }

    /// Number of flags handed out so far.
    #[must_use]
    pub fn allocated(&self) -> usize {
        self.allocated
    }

    /// Number of flags still available.
    #[must_use]
    pub fn remaining(&self) -> usize {
        MASK_BITS - self.allocated
    }
}

impl Default for BitAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocator_starts_at_lsb_and_doubles() {
        let mut bits = BitAllocator::new();
        assert_eq!(bits.allocate().unwrap(), ComponentMask(1));
        assert_eq!(bits.allocate().unwrap(), ComponentMask(2));
        assert_eq!(bits.allocate().unwrap(), ComponentMask(4));
        assert_eq!(bits.allocated(), 3);
        assert_eq!(bits.remaining(), MASK_BITS - 3);
    }

    #[test]
    fn test_allocator_hands_out_every_bit_then_fails() {
        let mut bits = BitAllocator::new();
        let mut seen = ComponentMask::EMPTY;
        for _ in 0..MASK_BITS {
            let flag = bits.allocate().unwrap();
            assert_eq!(flag.count(), 1);
            assert!(!seen.intersects(flag));
            seen |= flag;
        }
        assert_eq!(seen, ComponentMask(MaskBits::MAX));
        assert!(matches!(
            bits.allocate(),
            Err(RegistryError::CapacityExceeded { capacity: MASK_BITS })
        ));
        // Stays exhausted.
        assert!(bits.allocate().is_err());
        assert_eq!(bits.remaining(), 0);
    }

    #[test]
    fn test_mask_contains_and_intersects() {
        let a = ComponentMask(0b001);
        let b = ComponentMask(0b010);
        let ab = a | b;
        assert!(ab.contains(a));
        assert!(ab.contains(ab));
        assert!(!a.contains(ab));
        assert!(a.intersects(ab));
        assert!(!a.intersects(b));
        assert!(ab.contains(ComponentMask::EMPTY));
    }

    #[test]
    fn test_mask_with_and_without() {
        let a = ComponentMask(0b001);
        let b = ComponentMask(0b100);
        let m = ComponentMask::EMPTY.with(a).with(b);
        assert_eq!(m, ComponentMask(0b101));
        assert_eq!(m.without(a), b);
        assert!(m.without(a).without(b).is_empty());
    }
}
