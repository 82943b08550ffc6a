//! Enhancement, rune socketing, shop scaling, and the player actions that
//! spend currency.

pub mod actions;
pub mod enhancement;
pub mod shop;
pub mod socketing;

pub use actions::*;
pub use enhancement::*;
pub use shop::*;
pub use socketing::*;
