mod display;
pub mod primitive;
#[cfg(feature = "rand")]
mod sample;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    OutOfBounds,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::OutOfBounds => write!(f, "bit position out of bounds"),
        }
    }
}

impl std::error::Error for Error {}

/// A read-only set of bit positions `0..=MAX`.
pub trait Bitset {
    const MAX: u32;
    type Bits;
    fn within_bounds(n: u32) -> Result<u32, Error> {
        n.le(&Self::MAX).then_some(n).ok_or(Error::OutOfBounds)
    }
    fn empty() -> Self;
    fn bits(&self) -> Self::Bits;
    /// # Safety
    /// `n` must be in `0..=MAX`
    unsafe fn singleton_unchecked(n: u32) -> Self;
    fn singleton(n: u32) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::within_bounds(n).map(|n| unsafe { Self::singleton_unchecked(n) })
    }
    /// The set `{0, .., n - 1}`.
    ///
    /// # Safety
    /// `n` must be in `0..=MAX`
    unsafe fn range_to_unchecked(n: u32) -> Self;
    fn range_to(n: u32) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::within_bounds(n).map(|n| unsafe { Self::range_to_unchecked(n) })
    }
    fn is_empty(&self) -> bool {
        self.cardinality() == 0
    }
    fn is_singleton(&self) -> bool {
        self.cardinality() == 1
    }
    /// # Safety
    /// `n` must be in `0..=MAX`
    unsafe fn contains_unchecked(&self, n: u32) -> bool;
    fn contains(&self, n: u32) -> Result<bool, Error> {
        Self::within_bounds(n).map(|n| unsafe { self.contains_unchecked(n) })
    }
    fn cardinality(&self) -> u32;
    /// # Safety
    /// `self` must be non-empty
    unsafe fn max_unchecked(&self) -> u32;
    fn max(&self) -> Option<u32> {
        (!self.is_empty()).then(|| unsafe { self.max_unchecked() })
    }
    /// # Safety
    /// `self` must be non-empty
    unsafe fn min_unchecked(&self) -> u32;
    fn min(&self) -> Option<u32> {
        (!self.is_empty()).then(|| unsafe { self.min_unchecked() })
    }
    /// Positions in ascending order.
    fn iter(&self) -> impl Iterator<Item = usize> + '_;
}
