use core::fmt::Display;

use num_traits::PrimInt;
use poset_max::{log::ShortForm, GreaterOrEqual};

/// The closed integer range `[left, right]`.
///
/// The bounds are stored as given. An interval with `left > right` is
/// inverted: it contains no point, but still compares bound by bound.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Interval<T = i32> {
    left: T,
    right: T,
}

impl<T> Interval<T> {
    pub const fn new(left: T, right: T) -> Self {
        Self { left, right }
    }
}

impl<T: PrimInt> Interval<T> {
    pub fn left(&self) -> T {
        self.left
    }

    pub fn right(&self) -> T {
        self.right
    }

    pub fn is_inverted(&self) -> bool {
        self.left > self.right
    }

    pub fn contains(&self, value: T) -> bool {
        self.left <= value && value <= self.right
    }
}

impl<T> From<(T, T)> for Interval<T> {
    fn from((left, right): (T, T)) -> Self {
        Self::new(left, right)
    }
}

/// `(a1, a2) >= (b1, b2)` iff `a1 <= b1` and `a2 >= b2`.
impl<T: PrimInt> GreaterOrEqual for Interval<T> {
    fn greater_or_equal(&self, other: &Self) -> bool {
        self.left <= other.left && self.right >= other.right
    }
}

impl<T: Display> Display for Interval<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self { left, right } = self;
        write!(f, "({left}, {right})")
    }
}

impl<T: Display> ShortForm for Interval<T> {
    fn short_form(&self) -> String {
        let Self { left, right } = self;
        format!("[{left}, {right}]")
    }
}

/// Both bounds are drawn independently, then swapped if needed so that `left <= right`.
#[cfg(feature = "rand")]
impl<T: PrimInt> rand::distributions::Distribution<Interval<T>> for rand::distributions::Standard
where
    rand::distributions::Standard: rand::distributions::Distribution<T>,
{
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Interval<T> {
        let (a, b): (T, T) = (rng.gen(), rng.gen());
        Interval::new(a.min(b), a.max(b))
    }
}
