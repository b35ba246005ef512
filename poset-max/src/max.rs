use crate::order::GreaterOrEqual;

/// Returns whichever of `a` and `b` dominates the other, or `None` if they are
/// incomparable. If each dominates the other, `a` is returned.
pub fn get_max<T: GreaterOrEqual>(a: T, b: T) -> Option<T> {
    if a.greater_or_equal(&b) {
        Some(a)
    } else if b.greater_or_equal(&a) {
        Some(b)
    } else {
        None
    }
}

/// Returns the greater of `a` and `b`, or `dflt` if neither is greater than
/// or equal to the other. If each dominates the other, `a` is returned.
pub fn get_max_default<T: GreaterOrEqual>(a: T, b: T, dflt: T) -> T {
    get_max(a, b).unwrap_or(dflt)
}

#[cfg(test)]
mod tests {
    use itertools::iproduct;

    use crate::order::GreaterOrEqual;

    use super::{get_max, get_max_default};

    /// Ordered by `rank` only, so two values can dominate each other and still differ.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Ranked {
        rank: u32,
        name: &'static str,
    }

    impl GreaterOrEqual for Ranked {
        fn greater_or_equal(&self, other: &Self) -> bool {
            self.rank >= other.rank
        }
    }

    #[test]
    fn mutually_dominating_arguments_return_the_first() {
        let a = Ranked { rank: 1, name: "a" };
        let b = Ranked { rank: 1, name: "b" };
        let dflt = Ranked { rank: 0, name: "dflt" };
        assert_eq!(get_max_default(a, b, dflt).name, "a");
        assert_eq!(get_max_default(b, a, dflt).name, "b");
        assert_eq!(get_max(a, b).map(|r| r.name), Some("a"));
    }

    #[test]
    fn totally_ordered_values_never_fall_back_to_the_default() {
        iproduct!(0u32..8, 0u32..8).for_each(|(a, b)| {
            assert_eq!(get_max_default(a, b, 100), a.max(b), "a = {a}, b = {b}");
        });
    }

    #[test]
    fn incomparable_pairs_fall_back_to_the_default() {
        assert_eq!(get_max_default((1u8, 0u8), (0, 1), (9, 9)), (9, 9));
        assert_eq!(get_max((1u8, 0u8), (0, 1)), None);
        assert_eq!(get_max_default((1u8, 1u8), (0, 1), (9, 9)), (1, 1));
        assert_eq!(get_max_default((0u8, 1u8), (1, 1), (9, 9)), (1, 1));
    }

    #[test]
    fn the_result_is_always_one_of_the_arguments() {
        let grid = iproduct!(0u8..3, 0u8..3).collect::<Vec<_>>();
        let dflt = (7u8, 7u8);
        for (&a, &b) in iproduct!(&grid, &grid) {
            let max = get_max_default(a, b, dflt);
            assert!(max == a || max == b || max == dflt);
            match (a.greater_or_equal(&b), b.greater_or_equal(&a)) {
                (true, _) => assert_eq!(max, a),
                (false, true) => assert_eq!(max, b),
                (false, false) => assert_eq!(max, dflt),
            }
        }
    }
}
