use thiserror::Error;

/// A player action whose preconditions did not hold.
///
/// Refusals leave the player untouched. They are distinct from designed
/// outcomes such as an enhancement destroying its item.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionRefused {
    #[error("not enough silver: need {needed}, have {available}")]
    InsufficientSilver { needed: u64, available: u64 },
    #[error("not enough gold: need {needed}, have {available}")]
    InsufficientGold { needed: u64, available: u64 },
    #[error("inventory is full ({capacity} slots)")]
    InventoryFull { capacity: usize },
    #[error("inventory cannot grow beyond {max} slots")]
    InventoryAtMaximum { max: usize },
    #[error("item {0} is not owned")]
    ItemNotOwned(String),
    #[error("item {0} is not in the inventory")]
    ItemNotInInventory(String),
    #[error("item {0} is not for sale")]
    NotInStock(String),
    #[error("requires level {required}, player is level {actual}")]
    LevelTooLow { required: u32, actual: u32 },
    #[error("{0} cannot be equipped")]
    NotEquippable(String),
    #[error("{0} cannot hold a rune")]
    NotSocketable(String),
    #[error("{0} is not a rune")]
    NotARune(String),
    #[error("{0} is not a potion")]
    NotAPotion(String),
    #[error("{0} cannot be enhanced")]
    NotEnhanceable(String),
    #[error("{0} is already at maximum enhancement")]
    MaxEnhancement(String),
    #[error("equipment slot is empty")]
    SlotEmpty,
    #[error("every rank on the ladder has been claimed")]
    LadderComplete,
}
