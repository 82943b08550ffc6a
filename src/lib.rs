//! Ironvale - RPG Combat and Progression Simulation Core
//!
//! Stat aggregation, elemental resolution, round-based combat, the XP
//! curve and reward scaling, and the enhancement/shop economy. Hosts hand
//! in `Player` snapshots and apply the returned results themselves.

pub mod character;
pub mod combat;
pub mod config;
pub mod core;
pub mod dice;
pub mod economy;
pub mod items;
pub mod kingdom;
pub mod narrative;
pub mod progression;

pub use character::{
    aggregate_elemental_offense, aggregate_elemental_resistance, aggregate_player_damage,
    aggregate_player_defense, Player,
};
pub use combat::{resolve_combat, CombatOutcome, Enemy};
pub use crate::core::errors::ActionRefused;
pub use dice::{Dice, ScriptedDice};
pub use economy::{attempt_enhancement, EnhancementOutcome};
pub use progression::required_xp_for_level;
