//! Item system: types, equipment, inventory, and the shop catalog.

pub mod catalog;
pub mod equipment;
pub mod inventory;
pub mod types;

pub use catalog::*;
pub use equipment::*;
pub use inventory::*;
pub use types::*;
