pub mod bitset;
pub mod interval;

pub use bitset::{primitive::BitSet, Bitset};
pub use interval::Interval;
