use core::cmp::Ordering;

/// A partial order exposed through its "greater than or equal" test.
///
/// Unlike `PartialOrd`, implementing this trait does not give `>=` a meaning,
/// so a type can carry a structural order (for instance containment) next to
/// whatever `Ord` it uses for sorting and deduplication.
///
/// Implementations must be reflexive, antisymmetric up to the type's notion of
/// indistinguishability, and transitive. Pairs for which neither direction
/// holds are incomparable.
pub trait GreaterOrEqual {
    fn greater_or_equal(&self, other: &Self) -> bool;

    fn less_or_equal(&self, other: &Self) -> bool {
        other.greater_or_equal(self)
    }

    /// Returns `true` if either value dominates the other.
    fn comparable(&self, other: &Self) -> bool {
        self.greater_or_equal(other) || other.greater_or_equal(self)
    }

    /// `None` when the values are incomparable.
    fn containment_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.greater_or_equal(other), other.greater_or_equal(self)) {
            (true, true) => Some(Ordering::Equal),
            (true, false) => Some(Ordering::Greater),
            (false, true) => Some(Ordering::Less),
            (false, false) => None,
        }
    }
}

macro_rules! impl_total_greater_or_equal {
    ($($t:ty),*) => {
        $(
            impl GreaterOrEqual for $t {
                #[inline(always)]
                fn greater_or_equal(&self, other: &Self) -> bool {
                    self >= other
                }
            }
        )*
    };
}

impl_total_greater_or_equal!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// The product order: a pair dominates another iff it dominates in both coordinates.
impl<A: GreaterOrEqual, B: GreaterOrEqual> GreaterOrEqual for (A, B) {
    fn greater_or_equal(&self, other: &Self) -> bool {
        let (a, b) = self;
        let (c, d) = other;
        a.greater_or_equal(c) && b.greater_or_equal(d)
    }
}

#[cfg(test)]
mod tests {
    use core::cmp::Ordering;

    use itertools::iproduct;

    use super::GreaterOrEqual;

    #[test]
    fn integers_are_totally_ordered() {
        assert!(3i32.greater_or_equal(&3));
        assert!(4u8.greater_or_equal(&3));
        assert!(!(-1i64).greater_or_equal(&0));
        iproduct!(-4i32..4, -4i32..4).for_each(|(a, b)| {
            assert!(a.comparable(&b), "a = {a}, b = {b}");
            assert_eq!(a.containment_cmp(&b), Some(a.cmp(&b)));
        });
    }

    #[test]
    fn pairs_in_the_product_order_can_be_incomparable() {
        assert_eq!((1u32, 5u32).containment_cmp(&(0, 3)), Some(Ordering::Greater));
        assert_eq!((0u32, 3u32).containment_cmp(&(1, 5)), Some(Ordering::Less));
        assert_eq!((2u32, 2u32).containment_cmp(&(2, 2)), Some(Ordering::Equal));
        assert_eq!((1u32, 0u32).containment_cmp(&(0, 1)), None);
        assert!(!(1u32, 0u32).comparable(&(0, 1)));
    }

    #[test]
    fn product_order_on_a_small_grid_is_a_partial_order() {
        let grid = iproduct!(0u8..4, 0u8..4).collect::<Vec<_>>();
        for p in &grid {
            assert!(p.greater_or_equal(p), "p = {p:?}");
        }
        for (p, q) in iproduct!(&grid, &grid) {
            if p.greater_or_equal(q) && q.greater_or_equal(p) {
                assert_eq!(p, q);
            }
            assert_eq!(p.less_or_equal(q), q.greater_or_equal(p));
        }
        for (p, q, r) in iproduct!(&grid, &grid, &grid) {
            if p.greater_or_equal(q) && q.greater_or_equal(r) {
                assert!(p.greater_or_equal(r), "p = {p:?}, q = {q:?}, r = {r:?}");
            }
        }
    }
}
