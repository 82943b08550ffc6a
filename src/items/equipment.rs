use super::types::{Item, ItemCategory};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentSlot {
    Weapon,
    Armor,
    Helmet,
    Shield,
    Leggings,
    Mount,
    ArtifactOne,
    ArtifactTwo,
}

impl EquipmentSlot {
    pub fn all() -> [EquipmentSlot; 8] {
        [
            EquipmentSlot::Weapon,
            EquipmentSlot::Armor,
            EquipmentSlot::Helmet,
            EquipmentSlot::Shield,
            EquipmentSlot::Leggings,
            EquipmentSlot::Mount,
            EquipmentSlot::ArtifactOne,
            EquipmentSlot::ArtifactTwo,
        ]
    }

    /// Slots whose own elemental affinity counts as offense.
    pub fn offense_slots() -> [EquipmentSlot; 3] {
        [
            EquipmentSlot::Weapon,
            EquipmentSlot::ArtifactOne,
            EquipmentSlot::ArtifactTwo,
        ]
    }

    /// Slots whose own elemental affinity counts as resistance.
    pub fn resistance_slots() -> [EquipmentSlot; 6] {
        [
            EquipmentSlot::Armor,
            EquipmentSlot::Helmet,
            EquipmentSlot::Shield,
            EquipmentSlot::Leggings,
            EquipmentSlot::ArtifactOne,
            EquipmentSlot::ArtifactTwo,
        ]
    }

    /// The armor family, whose bonuses sum into defense.
    pub fn defense_slots() -> [EquipmentSlot; 4] {
        [
            EquipmentSlot::Armor,
            EquipmentSlot::Helmet,
            EquipmentSlot::Shield,
            EquipmentSlot::Leggings,
        ]
    }

    /// The slot an item of `category` goes into. Artifacts report the first
    /// artifact slot; potions and runes have none.
    pub fn for_category(category: ItemCategory) -> Option<EquipmentSlot> {
        match category {
            ItemCategory::Weapon => Some(EquipmentSlot::Weapon),
            ItemCategory::Armor => Some(EquipmentSlot::Armor),
            ItemCategory::Helmet => Some(EquipmentSlot::Helmet),
            ItemCategory::Shield => Some(EquipmentSlot::Shield),
            ItemCategory::Leggings => Some(EquipmentSlot::Leggings),
            ItemCategory::Mount => Some(EquipmentSlot::Mount),
            ItemCategory::Artifact => Some(EquipmentSlot::ArtifactOne),
            ItemCategory::Potion | ItemCategory::Rune => None,
        }
    }
}

/// The eight equipment slots. Empty slots contribute nothing.
///
/// IMPORTANT: When adding new slots, use `#[serde(default)]` to keep older
/// save files loadable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    #[serde(default)]
    pub weapon: Option<Item>,
    #[serde(default)]
    pub armor: Option<Item>,
    #[serde(default)]
    pub helmet: Option<Item>,
    #[serde(default)]
    pub shield: Option<Item>,
    #[serde(default)]
    pub leggings: Option<Item>,
    #[serde(default)]
    pub mount: Option<Item>,
    #[serde(default)]
    pub artifact_one: Option<Item>,
    #[serde(default)]
    pub artifact_two: Option<Item>,
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: EquipmentSlot) -> Option<&Item> {
        self.slot_ref(slot).as_ref()
    }

    pub fn set(&mut self, slot: EquipmentSlot, item: Option<Item>) -> Option<Item> {
        std::mem::replace(self.slot_mut(slot), item)
    }

    pub fn take(&mut self, slot: EquipmentSlot) -> Option<Item> {
        self.slot_mut(slot).take()
    }

    /// Bonus of the item in `slot`, zero when empty.
    pub fn bonus(&self, slot: EquipmentSlot) -> u32 {
        self.get(slot).map_or(0, |item| item.bonus)
    }

    pub fn iter_equipped(&self) -> impl Iterator<Item = &Item> {
        EquipmentSlot::all()
            .into_iter()
            .filter_map(move |slot| self.get(slot))
    }

    pub fn iter_slots(&self) -> impl Iterator<Item = (EquipmentSlot, &Item)> {
        EquipmentSlot::all()
            .into_iter()
            .filter_map(move |slot| self.get(slot).map(|item| (slot, item)))
    }

    pub fn find_slot(&self, item_id: &str) -> Option<EquipmentSlot> {
        self.iter_slots()
            .find(|(_, item)| item.id == item_id)
            .map(|(slot, _)| slot)
    }

    pub fn find_mut(&mut self, item_id: &str) -> Option<&mut Item> {
        let slot = self.find_slot(item_id)?;
        self.slot_mut(slot).as_mut()
    }

    pub fn contains(&self, item_id: &str) -> bool {
        self.find_slot(item_id).is_some()
    }

    fn slot_ref(&self, slot: EquipmentSlot) -> &Option<Item> {
        match slot {
            EquipmentSlot::Weapon => &self.weapon,
            EquipmentSlot::Armor => &self.armor,
            EquipmentSlot::Helmet => &self.helmet,
            EquipmentSlot::Shield => &self.shield,
            EquipmentSlot::Leggings => &self.leggings,
            EquipmentSlot::Mount => &self.mount,
            EquipmentSlot::ArtifactOne => &self.artifact_one,
            EquipmentSlot::ArtifactTwo => &self.artifact_two,
        }
    }

    fn slot_mut(&mut self, slot: EquipmentSlot) -> &mut Option<Item> {
        match slot {
            EquipmentSlot::Weapon => &mut self.weapon,
            EquipmentSlot::Armor => &mut self.armor,
            EquipmentSlot::Helmet => &mut self.helmet,
            EquipmentSlot::Shield => &mut self.shield,
            EquipmentSlot::Leggings => &mut self.leggings,
            EquipmentSlot::Mount => &mut self.mount,
            EquipmentSlot::ArtifactOne => &mut self.artifact_one,
            EquipmentSlot::ArtifactTwo => &mut self.artifact_two,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::types::Rarity;
    use super::*;

    fn create_test_item(category: ItemCategory) -> Item {
        Item::new("Test", category, 3, 10, Rarity::Common)
    }

    #[test]
    fn test_equipment_starts_empty() {
        let eq = Equipment::new();
        assert!(eq.weapon.is_none());
        assert_eq!(eq.iter_equipped().count(), 0);
        assert_eq!(eq.bonus(EquipmentSlot::Weapon), 0);
    }

    #[test]
    fn test_set_returns_previous() {
        let mut eq = Equipment::new();
        let first = create_test_item(ItemCategory::Weapon);
        let second = create_test_item(ItemCategory::Weapon);
        assert!(eq.set(EquipmentSlot::Weapon, Some(first.clone())).is_none());
        let displaced = eq.set(EquipmentSlot::Weapon, Some(second.clone()));
        assert_eq!(displaced, Some(first));
        assert_eq!(eq.get(EquipmentSlot::Weapon), Some(&second));
    }

    #[test]
    fn test_equip_all_eight_slots() {
        let mut eq = Equipment::new();
        for slot in EquipmentSlot::all() {
            eq.set(slot, Some(create_test_item(ItemCategory::Artifact)));
        }
        assert_eq!(eq.iter_equipped().count(), 8);
    }

    #[test]
    fn test_find_slot_by_id() {
        let mut eq = Equipment::new();
        let shield = create_test_item(ItemCategory::Shield);
        let id = shield.id.clone();
        eq.set(EquipmentSlot::Shield, Some(shield));
        assert_eq!(eq.find_slot(&id), Some(EquipmentSlot::Shield));
        assert!(eq.contains(&id));
        assert!(!eq.contains("missing"));
    }

    #[test]
    fn test_slot_for_category() {
        assert_eq!(
            EquipmentSlot::for_category(ItemCategory::Artifact),
            Some(EquipmentSlot::ArtifactOne)
        );
        assert_eq!(EquipmentSlot::for_category(ItemCategory::Potion), None);
        assert_eq!(EquipmentSlot::for_category(ItemCategory::Rune), None);
    }

    #[test]
    fn test_old_save_without_artifacts_loads() {
        let json = r#"{"weapon": null, "armor": null}"#;
        let eq: Equipment = serde_json::from_str(json).unwrap();
        assert!(eq.artifact_two.is_none());
    }
}
