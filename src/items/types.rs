use crate::character::attributes::StatType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    Weapon,
    Armor,
    Helmet,
    Shield,
    Leggings,
    Mount,
    Artifact,
    Potion,
    Rune,
}

impl ItemCategory {
    pub fn name(&self) -> &'static str {
        match self {
            ItemCategory::Weapon => "Weapon",
            ItemCategory::Armor => "Armor",
            ItemCategory::Helmet => "Helmet",
            ItemCategory::Shield => "Shield",
            ItemCategory::Leggings => "Leggings",
            ItemCategory::Mount => "Mount",
            ItemCategory::Artifact => "Artifact",
            ItemCategory::Potion => "Potion",
            ItemCategory::Rune => "Rune",
        }
    }

    /// Gear that can hold a rune.
    pub fn is_socketable(&self) -> bool {
        matches!(
            self,
            ItemCategory::Weapon
                | ItemCategory::Armor
                | ItemCategory::Helmet
                | ItemCategory::Shield
                | ItemCategory::Leggings
        )
    }

    /// Anything that occupies an equipment slot.
    pub fn is_equippable(&self) -> bool {
        !matches!(self, ItemCategory::Potion | ItemCategory::Rune)
    }

    /// Armor, helmet, shield and leggings.
    pub fn is_armor_family(&self) -> bool {
        matches!(
            self,
            ItemCategory::Armor | ItemCategory::Helmet | ItemCategory::Shield | ItemCategory::Leggings
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common = 0,
    Rare = 1,
    Epic = 2,
    Legendary = 3,
}

impl Rarity {
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Ice,
    Shock,
    Poison,
}

impl Element {
    pub fn all() -> [Element; 4] {
        [Element::Fire, Element::Ice, Element::Shock, Element::Poison]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Element::Fire => "fire",
            Element::Ice => "ice",
            Element::Shock => "shock",
            Element::Poison => "poison",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementalAffinity {
    pub element: Element,
    pub value: u32,
}

/// Per-element magnitudes. Used for offense and resistance alike.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementalProfile {
    #[serde(default)]
    pub fire: u32,
    #[serde(default)]
    pub ice: u32,
    #[serde(default)]
    pub shock: u32,
    #[serde(default)]
    pub poison: u32,
}

impl ElementalProfile {
    pub fn get(&self, element: Element) -> u32 {
        match element {
            Element::Fire => self.fire,
            Element::Ice => self.ice,
            Element::Shock => self.shock,
            Element::Poison => self.poison,
        }
    }

    pub fn add(&mut self, element: Element, value: u32) {
        let slot = match element {
            Element::Fire => &mut self.fire,
            Element::Ice => &mut self.ice,
            Element::Shock => &mut self.shock,
            Element::Poison => &mut self.poison,
        };
        *slot = slot.saturating_add(value);
    }

    pub fn with(mut self, element: Element, value: u32) -> Self {
        self.add(element, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        Element::all().iter().all(|e| self.get(*e) == 0)
    }
}

/// An owned item instance.
///
/// `bonus` is damage for weapons and mounts, defense for the armor family,
/// healing for potions and the stat bonus for stat runes. Runes carry either
/// `stat_type` or `element`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub category: ItemCategory,
    pub bonus: u32,
    pub price: u64,
    #[serde(default)]
    pub premium_price: u64,
    pub rarity: Rarity,
    #[serde(default)]
    pub min_level: u32,
    #[serde(default)]
    pub upgrade_level: u8,
    #[serde(default)]
    pub upgrade_cost: u64,
    #[serde(default)]
    pub element: Option<ElementalAffinity>,
    #[serde(default)]
    pub stat_type: Option<StatType>,
    #[serde(default)]
    pub socket: Option<Box<Item>>,
}

impl Item {
    pub fn new(name: &str, category: ItemCategory, bonus: u32, price: u64, rarity: Rarity) -> Self {
        Self {
            id: new_item_id(),
            name: name.to_string(),
            category,
            bonus,
            price,
            premium_price: 0,
            rarity,
            min_level: 0,
            upgrade_level: 0,
            upgrade_cost: initial_upgrade_cost(price),
            element: None,
            stat_type: None,
            socket: None,
        }
    }

    pub fn with_element(mut self, element: Element, value: u32) -> Self {
        self.element = Some(ElementalAffinity { element, value });
        self
    }

    pub fn with_stat(mut self, stat: StatType) -> Self {
        self.stat_type = Some(stat);
        self
    }

    pub fn with_min_level(mut self, level: u32) -> Self {
        self.min_level = level;
        self
    }

    pub fn with_premium_price(mut self, gold: u64) -> Self {
        self.premium_price = gold;
        self
    }

    /// The socketed rune's bonus to `stat`, if it grants one.
    pub fn rune_stat_bonus(&self, stat: StatType) -> u32 {
        match &self.socket {
            Some(rune) if rune.stat_type == Some(stat) => rune.bonus,
            _ => 0,
        }
    }

    /// The socketed rune's elemental affinity, if any.
    pub fn rune_element(&self) -> Option<ElementalAffinity> {
        self.socket.as_ref().and_then(|rune| rune.element)
    }

    /// Display name with enhancement prefix, e.g. "+3 Iron Sword".
    pub fn display_name(&self) -> String {
        format!("{}{}", enhancement_prefix(self.upgrade_level), self.name)
    }
}

pub fn new_item_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

pub fn initial_upgrade_cost(price: u64) -> u64 {
    (price / 2).max(1)
}

/// "+5 " or "" for +0
pub fn enhancement_prefix(level: u8) -> String {
    if level == 0 {
        String::new()
    } else {
        format!("+{} ", level)
    }
}
