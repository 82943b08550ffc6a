use super::player::Player;
use crate::config::Settings;
use crate::core::constants::{KARMA_MAX, KARMA_MIN, MAX_ENHANCEMENT_LEVEL, SAVE_VERSION};
use crate::items::{EquipmentSlot, Item};
use crate::progression::validate_max_xp;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("save file I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("save data is not valid JSON: {0}")]
    Format(#[from] serde_json::Error),
    #[error("save version {found} is newer than supported version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
    #[error("invalid character name: {0}")]
    InvalidName(String),
    #[error("item {0} is both equipped and carried")]
    DuplicateItem(String),
}

#[derive(Serialize, Deserialize)]
struct SaveRecord {
    version: u32,
    player: Player,
}

#[derive(Debug, Clone)]
pub struct CharacterInfo {
    pub id: String,
    pub name: String,
    pub filename: String,
    pub level: u32,
    pub rank_index: u32,
    pub last_save_time: i64,
    pub is_corrupted: bool,
}

/// Serializes a player record as pretty JSON.
pub fn to_json(player: &Player) -> Result<String, SaveError> {
    let record = SaveRecord {
        version: SAVE_VERSION,
        player: player.clone(),
    };
    Ok(serde_json::to_string_pretty(&record)?)
}

/// Parses a player record, refuses one that owns an item twice, and
/// repairs values that drifted out of range.
pub fn from_json(json: &str) -> Result<Player, SaveError> {
    let record: SaveRecord = serde_json::from_str(json)?;
    if record.version > SAVE_VERSION {
        return Err(SaveError::UnsupportedVersion {
            found: record.version,
            supported: SAVE_VERSION,
        });
    }
    let mut player = record.player;
    check_unique_items(&player)?;
    repair_loaded(&mut player);
    Ok(player)
}

fn check_unique_items(player: &Player) -> Result<(), SaveError> {
    let mut seen = HashSet::new();
    let owned = player
        .equipment
        .iter_equipped()
        .chain(player.inventory.items());
    for item in owned {
        if !seen.insert(item.id.as_str()) {
            return Err(SaveError::DuplicateItem(item.id.clone()));
        }
    }
    Ok(())
}

fn repair_loaded(player: &mut Player) {
    validate_max_xp(player);

    let karma = player.karma.clamp(KARMA_MIN, KARMA_MAX);
    if karma != player.karma {
        tracing::warn!(player = %player.name, stored = player.karma, karma, "repaired karma");
        player.karma = karma;
    }

    for slot in EquipmentSlot::all() {
        if let Some(mut item) = player.equipment.take(slot) {
            clamp_upgrade_level(&mut item);
            player.equipment.set(slot, Some(item));
        }
    }
    let carried = player
        .inventory
        .items()
        .iter()
        .map(|item| item.id.clone())
        .collect::<Vec<_>>();
    for id in carried {
        if let Some(item) = player.inventory.get_mut(&id) {
            clamp_upgrade_level(item);
        }
    }

    player.refresh_max_hp();
}

fn clamp_upgrade_level(item: &mut Item) {
    if item.upgrade_level > MAX_ENHANCEMENT_LEVEL {
        tracing::warn!(item = %item.name, stored = item.upgrade_level, "repaired upgrade level");
        item.upgrade_level = MAX_ENHANCEMENT_LEVEL;
    }
}

/// One JSON file per character in a save directory.
pub struct SaveManager {
    save_dir: PathBuf,
}

impl SaveManager {
    pub fn new(save_dir: impl Into<PathBuf>) -> Result<Self, SaveError> {
        let save_dir = save_dir.into();
        fs::create_dir_all(&save_dir)?;
        Ok(Self { save_dir })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, SaveError> {
        Self::new(settings.save_dir.clone())
    }

    pub fn save_dir(&self) -> &Path {
        &self.save_dir
    }

    /// Writes the player and stamps `last_save_time`. Returns the filename.
    pub fn save_character(&self, player: &mut Player) -> Result<String, SaveError> {
        validate_name(&player.name).map_err(SaveError::InvalidName)?;
        player.last_save_time = Utc::now().timestamp();

        let json = to_json(player)?;
        let filename = format!("{}.json", sanitize_name(&player.name));
        fs::write(self.save_dir.join(&filename), json)?;
        tracing::debug!(player = %player.name, file = %filename, "character saved");
        Ok(filename)
    }

    pub fn load_character(&self, filename: &str) -> Result<Player, SaveError> {
        let json = fs::read_to_string(self.save_dir.join(filename))?;
        from_json(&json)
    }

    pub fn exists(&self, filename: &str) -> bool {
        self.save_dir.join(filename).exists()
    }

    /// Every `.json` file in the save directory, newest first. Unreadable
    /// files are listed as corrupted rather than skipped.
    pub fn list_characters(&self) -> Result<Vec<CharacterInfo>, SaveError> {
        let mut characters = Vec::new();

        for entry in fs::read_dir(&self.save_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }
            let filename = path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("")
                .to_string();

            match self.load_character(&filename) {
                Ok(player) => characters.push(CharacterInfo {
                    id: player.id,
                    name: player.name,
                    filename,
                    level: player.level,
                    rank_index: player.rank_index,
                    last_save_time: player.last_save_time,
                    is_corrupted: false,
                }),
                Err(err) => {
                    tracing::warn!(file = %filename, error = %err, "unreadable save file");
                    characters.push(CharacterInfo {
                        id: String::new(),
                        name: "[CORRUPTED]".to_string(),
                        filename,
                        level: 0,
                        rank_index: 0,
                        last_save_time: 0,
                        is_corrupted: true,
                    });
                }
            }
        }

        characters.sort_by(|a, b| b.last_save_time.cmp(&a.last_save_time));
        Ok(characters)
    }

    pub fn delete_character(&self, filename: &str) -> Result<(), SaveError> {
        fs::remove_file(self.save_dir.join(filename))?;
        Ok(())
    }
}

pub fn validate_name(name: &str) -> Result<(), String> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err("Name cannot be empty".to_string());
    }
    if trimmed.len() > 16 {
        return Err("Name must be 16 characters or less".to_string());
    }
    let valid_chars = trimmed
        .chars()
        .all(|c| c.is_alphanumeric() || c == ' ' || c == '-' || c == '_');
    if !valid_chars {
        return Err(
            "Name can only contain letters, numbers, spaces, hyphens, and underscores".to_string(),
        );
    }
    Ok(())
}

pub fn sanitize_name(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .replace(' ', "_")
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::attributes::{Race, StatType};
    use crate::core::constants::MAX_INVENTORY_SLOTS;
    use crate::items::{ItemCategory, Rarity};
    use std::sync::atomic::{AtomicU64, Ordering};

    fn manager_for_test() -> SaveManager {
        static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);
        let test_id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir().join(format!(
            "ironvale-save-test-{}-{}",
            std::process::id(),
            test_id
        ));
        let _ = fs::remove_dir_all(&dir);
        SaveManager::new(dir).expect("Failed to create SaveManager")
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let manager = manager_for_test();
        let mut player = Player::new("Test Hero".to_string(), Race::Dwarf);
        player.level = 7;
        player.max_xp = crate::progression::required_xp_for_level(7);
        player.silver = 1234;
        player.stats.set(StatType::Luck, 9);
        let sword = Item::new("Sword", ItemCategory::Weapon, 6, 120, Rarity::Rare);
        player.equipment.set(EquipmentSlot::Weapon, Some(sword));

        let filename = manager.save_character(&mut player).unwrap();
        assert_eq!(filename, "test_hero.json");
        assert!(manager.exists(&filename));

        let loaded = manager.load_character(&filename).unwrap();
        assert_eq!(loaded, player);
    }

    #[test]
    fn test_load_repairs_max_xp() {
        let mut player = Player::new("Drifter".to_string(), Race::Human);
        player.level = 20;
        player.max_xp = 1;
        let json = to_json(&player).unwrap();
        let loaded = from_json(&json).unwrap();
        assert_eq!(
            loaded.max_xp,
            crate::progression::required_xp_for_level(20)
        );
    }

    #[test]
    fn test_newer_version_rejected() {
        let player = Player::new("Future".to_string(), Race::Elf);
        let json = to_json(&player)
            .unwrap()
            .replacen(
                &format!("\"version\": {}", SAVE_VERSION),
                "\"version\": 99",
                1,
            );
        assert!(matches!(
            from_json(&json),
            Err(SaveError::UnsupportedVersion { found: 99, .. })
        ));
    }

    #[test]
    fn test_load_rejects_overfull_inventory() {
        let mut player = Player::new("Hoarder".to_string(), Race::Human);
        for name in ["A", "B"] {
            let item = Item::new(name, ItemCategory::Weapon, 3, 40, Rarity::Common);
            player.inventory.push(item).unwrap();
        }
        let json = to_json(&player).unwrap().replacen("\"slots\": 10", "\"slots\": 1", 1);
        assert!(matches!(from_json(&json), Err(SaveError::Format(_))));
    }

    #[test]
    fn test_load_clamps_slots_and_karma() {
        let player = Player::new("Saint".to_string(), Race::Human);
        let json = to_json(&player)
            .unwrap()
            .replacen("\"slots\": 10", "\"slots\": 500", 1)
            .replacen("\"karma\": 0", "\"karma\": 9999", 1);
        let loaded = from_json(&json).unwrap();
        assert_eq!(loaded.inventory.slots(), MAX_INVENTORY_SLOTS);
        assert_eq!(loaded.karma, KARMA_MAX);
    }

    #[test]
    fn test_load_clamps_upgrade_level() {
        let mut player = Player::new("Smith".to_string(), Race::Dwarf);
        let mut sword = Item::new("Sword", ItemCategory::Weapon, 6, 120, Rarity::Rare);
        sword.upgrade_level = 9;
        player.equipment.set(EquipmentSlot::Weapon, Some(sword.clone()));
        sword.id = "spare".to_string();
        player.inventory.push(sword).unwrap();
        let json = to_json(&player)
            .unwrap()
            .replace("\"upgrade_level\": 9", "\"upgrade_level\": 42");

        let loaded = from_json(&json).unwrap();
        let equipped = loaded.equipment.get(EquipmentSlot::Weapon).unwrap();
        assert_eq!(equipped.upgrade_level, MAX_ENHANCEMENT_LEVEL);
        assert_eq!(
            loaded.inventory.get("spare").unwrap().upgrade_level,
            MAX_ENHANCEMENT_LEVEL
        );
    }

    #[test]
    fn test_load_rejects_item_owned_twice() {
        let mut player = Player::new("Twin".to_string(), Race::Elf);
        let sword = Item::new("Sword", ItemCategory::Weapon, 6, 120, Rarity::Rare);
        let id = sword.id.clone();
        player.inventory.push(sword.clone()).unwrap();
        player.equipment.set(EquipmentSlot::Weapon, Some(sword));
        assert!(matches!(
            from_json(&to_json(&player).unwrap()),
            Err(SaveError::DuplicateItem(dup)) if dup == id
        ));
    }

    #[test]
    fn test_garbage_is_format_error() {
        assert!(matches!(from_json("not json"), Err(SaveError::Format(_))));
    }

    #[test]
    fn test_invalid_name_not_saved() {
        let manager = manager_for_test();
        let mut player = Player::new("bad/name".to_string(), Race::Human);
        assert!(matches!(
            manager.save_character(&mut player),
            Err(SaveError::InvalidName(_))
        ));
    }

    #[test]
    fn test_list_marks_corrupted_files() {
        let manager = manager_for_test();
        let mut player = Player::new("Alive".to_string(), Race::Orc);
        manager.save_character(&mut player).unwrap();
        fs::write(manager.save_dir().join("broken.json"), "{").unwrap();
        fs::write(manager.save_dir().join("notes.txt"), "ignored").unwrap();

        let list = manager.list_characters().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].name, "Alive");
        assert!(list[1].is_corrupted);

        manager.delete_character("broken.json").unwrap();
        assert_eq!(manager.list_characters().unwrap().len(), 1);
    }

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("  Sir Bob  "), "sir_bob");
        assert_eq!(sanitize_name("Warrior-2"), "warrior-2");
    }
}
