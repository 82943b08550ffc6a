//! Combat system types, resolver, and log narration.

pub mod logic;
pub mod narration;
pub mod types;

pub use logic::*;
pub use narration::*;
pub use types::*;
