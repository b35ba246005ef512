use num_traits::Unsigned;
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use super::primitive::PrimitiveBitset;

/// Every position is present independently with probability one half.
impl<T: Unsigned> Distribution<PrimitiveBitset<T>> for Standard
where
    Standard: Distribution<T>,
{
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PrimitiveBitset<T> {
        PrimitiveBitset::from_bits(rng.gen())
    }
}
