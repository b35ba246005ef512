use core::fmt::Display;

use num_traits::{PrimInt, Unsigned};
use poset_max::log::ShortForm;

use super::{
    primitive::{NumBits, PrimitiveBitset},
    Bitset,
};

/// One character per position from least to most significant: `|` if present, `-` if not.
impl<T: Unsigned + PrimInt + NumBits> Display for PrimitiveBitset<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self { bits } = *self;
        write!(f, "<")?;
        (0..T::NUM_BITS).try_for_each(|n| {
            let mask = T::one().unsigned_shl(n);
            match bits & mask == T::zero() {
                true => write!(f, "-"),
                false => write!(f, "|"),
            }
        })?;
        write!(f, ">")
    }
}

impl<T: Unsigned> ShortForm for PrimitiveBitset<T>
where
    Self: Bitset,
{
    fn short_form(&self) -> String {
        let mut positions = self.iter();
        let Some(first) = positions.next() else {
            return String::from("{}");
        };
        let mut s = format!("{{{first}");
        for n in positions {
            s.push_str(&format!(", {n}"));
        }
        s.push('}');
        s
    }
}
