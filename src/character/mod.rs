//! Character stats, aggregation, and persistence.

pub mod attributes;
pub mod derived_stats;
pub mod elemental;
pub mod player;
pub mod save;

pub use attributes::*;
pub use derived_stats::*;
pub use elemental::*;
pub use player::*;
pub use save::*;
