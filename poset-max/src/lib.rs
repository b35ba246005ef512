pub mod log;
pub mod max;
pub mod order;

pub use max::{get_max, get_max_default};
pub use order::GreaterOrEqual;
