use crate::character::player::Player;
use crate::core::errors::ActionRefused;
use crate::items::{Item, ItemCategory};

fn find_owned<'a>(player: &'a Player, item_id: &str) -> Option<&'a Item> {
    player
        .equipment
        .iter_equipped()
        .find(|item| item.id == item_id)
        .or_else(|| player.inventory.get(item_id))
}

fn find_owned_mut<'a>(player: &'a mut Player, item_id: &str) -> Option<&'a mut Item> {
    if player.equipment.contains(item_id) {
        player.equipment.find_mut(item_id)
    } else {
        player.inventory.get_mut(item_id)
    }
}

/// Moves a rune from the inventory into the socket of an owned gear item.
///
/// Any rune already in that socket is discarded. Socketing never fails
/// once the preconditions hold.
pub fn socket_rune(player: &mut Player, rune_id: &str, target_id: &str) -> Result<(), ActionRefused> {
    let rune = player
        .inventory
        .get(rune_id)
        .ok_or_else(|| ActionRefused::ItemNotInInventory(rune_id.to_string()))?;
    if rune.category != ItemCategory::Rune {
        return Err(ActionRefused::NotARune(rune.name.clone()));
    }

    let target = find_owned(player, target_id)
        .ok_or_else(|| ActionRefused::ItemNotOwned(target_id.to_string()))?;
    if !target.category.is_socketable() {
        return Err(ActionRefused::NotSocketable(target.name.clone()));
    }

    let rune = player
        .inventory
        .remove(rune_id)
        .ok_or_else(|| ActionRefused::ItemNotInInventory(rune_id.to_string()))?;
    let target = find_owned_mut(player, target_id)
        .ok_or_else(|| ActionRefused::ItemNotOwned(target_id.to_string()))?;

    if let Some(old) = target.socket.replace(Box::new(rune)) {
        tracing::debug!(item = %target.name, discarded = %old.name, "socketed rune replaced");
    }
    player.refresh_max_hp();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::attributes::{Race, StatType};
    use crate::items::{Element, EquipmentSlot, Rarity};

    fn player_with(items: Vec<Item>) -> Player {
        let mut player = Player::new("Aria".to_string(), Race::Human);
        for item in items {
            player.inventory.push(item).unwrap();
        }
        player
    }

    fn stat_rune(stat: StatType, bonus: u32) -> Item {
        Item::new("Rune", ItemCategory::Rune, bonus, 40, Rarity::Rare).with_stat(stat)
    }

    #[test]
    fn test_socket_into_equipped_weapon() {
        let weapon = Item::new("Sword", ItemCategory::Weapon, 5, 50, Rarity::Common);
        let rune = stat_rune(StatType::Strength, 3);
        let (weapon_id, rune_id) = (weapon.id.clone(), rune.id.clone());
        let mut player = player_with(vec![rune]);
        player.equipment.set(EquipmentSlot::Weapon, Some(weapon));

        socket_rune(&mut player, &rune_id, &weapon_id).unwrap();

        assert!(player.inventory.is_empty());
        let weapon = player.equipment.get(EquipmentSlot::Weapon).unwrap();
        assert_eq!(weapon.rune_stat_bonus(StatType::Strength), 3);
    }

    #[test]
    fn test_second_rune_replaces_first() {
        let armor = Item::new("Mail", ItemCategory::Armor, 6, 50, Rarity::Common);
        let first = Item::new("Cinder", ItemCategory::Rune, 0, 40, Rarity::Rare)
            .with_element(Element::Fire, 4);
        let second = stat_rune(StatType::Luck, 2);
        let (armor_id, first_id, second_id) =
            (armor.id.clone(), first.id.clone(), second.id.clone());
        let mut player = player_with(vec![armor, first, second]);

        socket_rune(&mut player, &first_id, &armor_id).unwrap();
        socket_rune(&mut player, &second_id, &armor_id).unwrap();

        let armor = player.inventory.get(&armor_id).unwrap();
        let socketed = armor.socket.as_ref().unwrap();
        assert_eq!(socketed.id, second_id);
        assert!(armor.rune_element().is_none());
        // The first rune is gone for good
        assert!(!player.owns(&first_id));
        assert_eq!(player.inventory.len(), 1);
    }

    #[test]
    fn test_constitution_rune_raises_max_hp() {
        let armor = Item::new("Mail", ItemCategory::Armor, 6, 50, Rarity::Common);
        let rune = stat_rune(StatType::Constitution, 2);
        let (armor_id, rune_id) = (armor.id.clone(), rune.id.clone());
        let mut player = player_with(vec![rune]);
        player.equipment.set(EquipmentSlot::Armor, Some(armor));
        let before = player.max_hp;

        socket_rune(&mut player, &rune_id, &armor_id).unwrap();
        assert_eq!(player.max_hp, before + 20);
    }

    #[test]
    fn test_refusals_leave_player_untouched() {
        let potion = Item::new("Draught", ItemCategory::Potion, 30, 10, Rarity::Common);
        let mount = Item::new("Mule", ItemCategory::Mount, 1, 30, Rarity::Common);
        let sword = Item::new("Sword", ItemCategory::Weapon, 5, 50, Rarity::Common);
        let rune = stat_rune(StatType::Skill, 1);
        let ids: Vec<String> = [&potion, &mount, &sword, &rune]
            .iter()
            .map(|i| i.id.clone())
            .collect();
        let mut player = player_with(vec![potion, mount, sword, rune]);
        let snapshot = player.clone();

        assert!(matches!(
            socket_rune(&mut player, &ids[3], &ids[0]),
            Err(ActionRefused::NotSocketable(_))
        ));
        assert!(matches!(
            socket_rune(&mut player, &ids[3], &ids[1]),
            Err(ActionRefused::NotSocketable(_))
        ));
        assert!(matches!(
            socket_rune(&mut player, &ids[2], &ids[2]),
            Err(ActionRefused::NotARune(_))
        ));
        assert!(matches!(
            socket_rune(&mut player, &ids[3], "missing"),
            Err(ActionRefused::ItemNotOwned(_))
        ));
        assert!(matches!(
            socket_rune(&mut player, "missing", &ids[2]),
            Err(ActionRefused::ItemNotInInventory(_))
        ));
        assert_eq!(player, snapshot);
    }
}
