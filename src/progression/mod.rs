//! Level curve, reward scaling, regions, and the rank ladder.

pub mod curve;
pub mod ranks;
pub mod rewards;

pub use curve::*;
pub use ranks::*;
pub use rewards::*;
