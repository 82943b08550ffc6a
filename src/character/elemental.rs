//! Elemental offense and resistance profiles.
//!
//! An item's own affinity counts as offense when it sits in the weapon or an
//! artifact slot, and as resistance in the armor family or an artifact slot.
//! Artifacts therefore feed both profiles. Socketed runes add offense from
//! any slot and resistance from the resistance-bearing slots.

use super::player::Player;
use crate::items::{ElementalProfile, Equipment, EquipmentSlot};

pub fn elemental_offense(equipment: &Equipment) -> ElementalProfile {
    let mut profile = ElementalProfile::default();
    for slot in EquipmentSlot::offense_slots() {
        if let Some(affinity) = equipment.get(slot).and_then(|item| item.element) {
            profile.add(affinity.element, affinity.value);
        }
    }
    for item in equipment.iter_equipped() {
        if let Some(affinity) = item.rune_element() {
            profile.add(affinity.element, affinity.value);
        }
    }
    profile
}

pub fn elemental_resistance(equipment: &Equipment) -> ElementalProfile {
    let mut profile = ElementalProfile::default();
    for slot in EquipmentSlot::resistance_slots() {
        let Some(item) = equipment.get(slot) else {
            continue;
        };
        if let Some(affinity) = item.element {
            profile.add(affinity.element, affinity.value);
        }
        if let Some(affinity) = item.rune_element() {
            profile.add(affinity.element, affinity.value);
        }
    }
    profile
}

pub fn aggregate_elemental_offense(player: &Player) -> ElementalProfile {
    elemental_offense(&player.equipment)
}

pub fn aggregate_elemental_resistance(player: &Player) -> ElementalProfile {
    elemental_resistance(&player.equipment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::{Element, Item, ItemCategory, Rarity};

    fn item(category: ItemCategory) -> Item {
        Item::new("Gear", category, 1, 10, Rarity::Common)
    }

    fn elemental_rune(element: Element, value: u32) -> Box<Item> {
        Box::new(item(ItemCategory::Rune).with_element(element, value))
    }

    #[test]
    fn test_empty_equipment_is_neutral() {
        let eq = Equipment::new();
        assert!(elemental_offense(&eq).is_empty());
        assert!(elemental_resistance(&eq).is_empty());
    }

    #[test]
    fn test_weapon_element_is_offense_only() {
        let mut eq = Equipment::new();
        eq.set(
            EquipmentSlot::Weapon,
            Some(item(ItemCategory::Weapon).with_element(Element::Fire, 6)),
        );
        assert_eq!(elemental_offense(&eq).fire, 6);
        assert_eq!(elemental_resistance(&eq).fire, 0);
    }

    #[test]
    fn test_armor_element_is_resistance_only() {
        let mut eq = Equipment::new();
        eq.set(
            EquipmentSlot::Leggings,
            Some(item(ItemCategory::Leggings).with_element(Element::Poison, 5)),
        );
        assert_eq!(elemental_offense(&eq).poison, 0);
        assert_eq!(elemental_resistance(&eq).poison, 5);
    }

    #[test]
    fn test_artifacts_count_for_both() {
        let mut eq = Equipment::new();
        eq.set(
            EquipmentSlot::ArtifactOne,
            Some(item(ItemCategory::Artifact).with_element(Element::Ice, 4)),
        );
        eq.set(
            EquipmentSlot::ArtifactTwo,
            Some(item(ItemCategory::Artifact).with_element(Element::Ice, 3)),
        );
        assert_eq!(elemental_offense(&eq).ice, 7);
        assert_eq!(elemental_resistance(&eq).ice, 7);
    }

    #[test]
    fn test_rune_in_weapon_adds_offense() {
        let mut eq = Equipment::new();
        let mut weapon = item(ItemCategory::Weapon);
        weapon.socket = Some(elemental_rune(Element::Shock, 5));
        eq.set(EquipmentSlot::Weapon, Some(weapon));
        assert_eq!(elemental_offense(&eq).shock, 5);
        assert_eq!(elemental_resistance(&eq).shock, 0);
    }

    #[test]
    fn test_rune_in_armor_adds_both() {
        let mut eq = Equipment::new();
        let mut armor = item(ItemCategory::Armor);
        armor.socket = Some(elemental_rune(Element::Fire, 5));
        eq.set(EquipmentSlot::Armor, Some(armor));
        assert_eq!(elemental_offense(&eq).fire, 5);
        assert_eq!(elemental_resistance(&eq).fire, 5);
    }

    #[test]
    fn test_weapon_affinity_and_rune_stack() {
        let mut eq = Equipment::new();
        let mut weapon = item(ItemCategory::Weapon).with_element(Element::Fire, 6);
        weapon.socket = Some(elemental_rune(Element::Fire, 5));
        eq.set(EquipmentSlot::Weapon, Some(weapon));
        assert_eq!(elemental_offense(&eq).fire, 11);
    }
}
