use super::types::{initial_upgrade_cost, new_item_id, ElementalAffinity, Element, Item, ItemCategory, Rarity};
use crate::character::attributes::StatType;

/// Static item definition. Every instantiation gets a fresh id.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemTemplate {
    pub name: &'static str,
    pub category: ItemCategory,
    pub bonus: u32,
    pub price: u64,
    pub premium_price: u64,
    pub rarity: Rarity,
    pub min_level: u32,
    pub element: Option<ElementalAffinity>,
    pub stat_type: Option<StatType>,
}

impl ItemTemplate {
    pub fn instantiate(&self) -> Item {
        Item {
            id: new_item_id(),
            name: self.name.to_string(),
            category: self.category,
            bonus: self.bonus,
            price: self.price,
            premium_price: self.premium_price,
            rarity: self.rarity,
            min_level: self.min_level,
            upgrade_level: 0,
            upgrade_cost: initial_upgrade_cost(self.price),
            element: self.element,
            stat_type: self.stat_type,
            socket: None,
        }
    }
}

const fn gear(
    name: &'static str,
    category: ItemCategory,
    bonus: u32,
    price: u64,
    rarity: Rarity,
    min_level: u32,
) -> ItemTemplate {
    ItemTemplate {
        name,
        category,
        bonus,
        price,
        premium_price: 0,
        rarity,
        min_level,
        element: None,
        stat_type: None,
    }
}

const fn elemental(mut template: ItemTemplate, element: Element, value: u32) -> ItemTemplate {
    template.element = Some(ElementalAffinity { element, value });
    template
}

const fn stat_rune(name: &'static str, stat: StatType, bonus: u32, price: u64, rarity: Rarity) -> ItemTemplate {
    ItemTemplate {
        name,
        category: ItemCategory::Rune,
        bonus,
        price,
        premium_price: 0,
        rarity,
        min_level: 1,
        element: None,
        stat_type: Some(stat),
    }
}

const fn premium(mut template: ItemTemplate, gold: u64) -> ItemTemplate {
    template.premium_price = gold;
    template
}

static CATALOG: &[ItemTemplate] = &[
    // Weapons
    gear("Rusty Dagger", ItemCategory::Weapon, 3, 40, Rarity::Common, 1),
    gear("Iron Sword", ItemCategory::Weapon, 6, 120, Rarity::Common, 3),
    gear("Steel Halberd", ItemCategory::Weapon, 11, 380, Rarity::Rare, 10),
    elemental(gear("Emberbrand", ItemCategory::Weapon, 15, 900, Rarity::Epic, 20), Element::Fire, 6),
    elemental(gear("Frostfang", ItemCategory::Weapon, 15, 900, Rarity::Epic, 20), Element::Ice, 6),
    premium(elemental(gear("Stormcaller", ItemCategory::Weapon, 24, 2600, Rarity::Legendary, 40), Element::Shock, 12), 25),
    // Armor family
    gear("Padded Vest", ItemCategory::Armor, 3, 50, Rarity::Common, 1),
    gear("Chainmail", ItemCategory::Armor, 7, 240, Rarity::Rare, 8),
    elemental(gear("Salamander Plate", ItemCategory::Armor, 12, 1100, Rarity::Epic, 25), Element::Fire, 8),
    gear("Leather Cap", ItemCategory::Helmet, 2, 30, Rarity::Common, 1),
    gear("Horned Helm", ItemCategory::Helmet, 5, 200, Rarity::Rare, 9),
    gear("Buckler", ItemCategory::Shield, 2, 35, Rarity::Common, 1),
    elemental(gear("Tower Shield", ItemCategory::Shield, 8, 520, Rarity::Epic, 15), Element::Shock, 5),
    gear("Cloth Trousers", ItemCategory::Leggings, 1, 25, Rarity::Common, 1),
    elemental(gear("Viperscale Greaves", ItemCategory::Leggings, 6, 450, Rarity::Rare, 12), Element::Poison, 5),
    // Mounts
    gear("Mule", ItemCategory::Mount, 1, 150, Rarity::Common, 5),
    gear("Warhorse", ItemCategory::Mount, 4, 800, Rarity::Rare, 15),
    premium(gear("Griffin", ItemCategory::Mount, 9, 3000, Rarity::Legendary, 35), 40),
    // Artifacts
    elemental(gear("Ember Charm", ItemCategory::Artifact, 0, 300, Rarity::Rare, 6), Element::Fire, 4),
    elemental(gear("Rimestone", ItemCategory::Artifact, 0, 300, Rarity::Rare, 6), Element::Ice, 4),
    elemental(gear("Serpent Idol", ItemCategory::Artifact, 0, 650, Rarity::Epic, 18), Element::Poison, 7),
    // Potions
    gear("Minor Healing Draught", ItemCategory::Potion, 30, 15, Rarity::Common, 1),
    gear("Healing Potion", ItemCategory::Potion, 80, 45, Rarity::Rare, 10),
    // Runes
    stat_rune("Rune of Might", StatType::Strength, 2, 120, Rarity::Rare),
    stat_rune("Rune of Precision", StatType::Skill, 2, 120, Rarity::Rare),
    stat_rune("Rune of Fortune", StatType::Luck, 2, 120, Rarity::Rare),
    stat_rune("Rune of the Blade", StatType::WeaponArt, 3, 200, Rarity::Epic),
    stat_rune("Rune of the Bulwark", StatType::DefenseArt, 3, 200, Rarity::Epic),
    elemental(gear("Cinder Rune", ItemCategory::Rune, 0, 180, Rarity::Rare, 5), Element::Fire, 5),
    elemental(gear("Glacier Rune", ItemCategory::Rune, 0, 180, Rarity::Rare, 5), Element::Ice, 5),
    elemental(gear("Spark Rune", ItemCategory::Rune, 0, 180, Rarity::Rare, 5), Element::Shock, 5),
    elemental(gear("Venom Rune", ItemCategory::Rune, 0, 180, Rarity::Rare, 5), Element::Poison, 5),
];

/// The built-in shop catalog.
pub fn default_catalog() -> &'static [ItemTemplate] {
    CATALOG
}

pub fn find_template(name: &str) -> Option<&'static ItemTemplate> {
    CATALOG.iter().find(|t| t.name == name)
}
