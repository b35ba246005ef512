use bit_iter::BitIter;
use num_traits::{PrimInt, Unsigned, WrappingShl, WrappingSub};
use poset_max::GreaterOrEqual;

use super::{Bitset, Error};

/// A set of bit positions packed into one unsigned integer.
///
/// Bit `n` of the value is set iff position `n` is in the set. The value is
/// fixed at construction; there are no mutating methods.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PrimitiveBitset<T: Unsigned> {
    pub(super) bits: T,
}

impl<T: Unsigned> PrimitiveBitset<T> {
    pub const fn from_bits(bits: T) -> Self {
        Self { bits }
    }
}

impl<T: Unsigned> From<T> for PrimitiveBitset<T> {
    fn from(bits: T) -> Self {
        Self::from_bits(bits)
    }
}

pub type B8 = PrimitiveBitset<u8>;
pub type B16 = PrimitiveBitset<u16>;
pub type B32 = PrimitiveBitset<u32>;
pub type B64 = PrimitiveBitset<u64>;
pub type B128 = PrimitiveBitset<u128>;

/// Thirty-two elements, one per bit of a `u32`.
pub type BitSet = B32;

pub trait NumBits {
    const NUM_BITS: u32;
}

macro_rules! impl_num_bits {
    ($($t:ty),*) => {
        $(
            impl NumBits for $t {
                const NUM_BITS: u32 = <$t>::BITS;
            }
        )*
    };
}

impl_num_bits!(u8, u16, u32, u64, u128);

impl<T> Bitset for PrimitiveBitset<T>
where
    T: Unsigned + PrimInt + NumBits + WrappingShl + WrappingSub,
    BitIter<T>: From<T> + Iterator<Item = usize>,
{
    const MAX: u32 = T::NUM_BITS - 1;
    type Bits = T;

    fn empty() -> Self {
        Self { bits: T::zero() }
    }

    fn bits(&self) -> T {
        self.bits
    }

    unsafe fn singleton_unchecked(n: u32) -> Self {
        Self { bits: T::one().wrapping_shl(n) }
    }

    unsafe fn range_to_unchecked(n: u32) -> Self {
        Self { bits: T::one().wrapping_shl(n).wrapping_sub(&T::one()) }
    }

    unsafe fn contains_unchecked(&self, n: u32) -> bool {
        let singleton = Self::singleton_unchecked(n);
        (self.bits & singleton.bits) != T::zero()
    }

    fn cardinality(&self) -> u32 {
        self.bits.count_ones()
    }

    unsafe fn max_unchecked(&self) -> u32 {
        Self::MAX.wrapping_sub(self.bits.leading_zeros())
    }

    unsafe fn min_unchecked(&self) -> u32 {
        self.bits.trailing_zeros()
    }

    fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        BitIter::from(self.bits)
    }
}

impl<T> PrimitiveBitset<T>
where
    T: Unsigned + PrimInt + NumBits + WrappingShl + WrappingSub,
    BitIter<T>: From<T> + Iterator<Item = usize>,
{
    pub fn try_from_positions(positions: &[u32]) -> Result<Self, Error> {
        positions.iter().try_fold(Self::empty(), |set, &n| {
            let singleton = Self::singleton(n)?;
            Ok(Self::from_bits(set.bits | singleton.bits))
        })
    }
}

/// `a >= b` iff every position in `b` is also in `a`.
impl<T: Unsigned + PrimInt> GreaterOrEqual for PrimitiveBitset<T> {
    fn greater_or_equal(&self, other: &Self) -> bool {
        (self.bits & other.bits) == other.bits
    }
}
