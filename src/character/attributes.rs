use crate::core::constants::{NUM_STATS, STARTING_STAT_VALUE};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum StatType {
    Strength,
    Skill,
    Constitution,
    Luck,
    WeaponArt,
    DefenseArt,
}

impl StatType {
    pub fn all() -> [StatType; NUM_STATS] {
        [
            StatType::Strength,
            StatType::Skill,
            StatType::Constitution,
            StatType::Luck,
            StatType::WeaponArt,
            StatType::DefenseArt,
        ]
    }

    pub fn abbrev(&self) -> &str {
        match self {
            StatType::Strength => "STR",
            StatType::Skill => "SKL",
            StatType::Constitution => "CON",
            StatType::Luck => "LCK",
            StatType::WeaponArt => "WPN",
            StatType::DefenseArt => "DEF",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            StatType::Strength => 0,
            StatType::Skill => 1,
            StatType::Constitution => 2,
            StatType::Luck => 3,
            StatType::WeaponArt => 4,
            StatType::DefenseArt => 5,
        }
    }
}

/// Base character stats. Values never go below zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stats {
    values: [u32; NUM_STATS],
}

impl Default for Stats {
    fn default() -> Self {
        Self::new()
    }
}

impl Stats {
    pub fn new() -> Self {
        Self {
            values: [STARTING_STAT_VALUE; NUM_STATS],
        }
    }

    /// All stats at zero.
    pub fn zero() -> Self {
        Self {
            values: [0; NUM_STATS],
        }
    }

    pub fn get(&self, stat: StatType) -> u32 {
        self.values[stat.index()]
    }

    pub fn set(&mut self, stat: StatType, value: u32) {
        self.values[stat.index()] = value;
    }

    pub fn increment(&mut self, stat: StatType) {
        self.add(stat, 1);
    }

    pub fn add(&mut self, stat: StatType, amount: u32) {
        self.values[stat.index()] = self.values[stat.index()].saturating_add(amount);
    }

    /// Applies a signed modifier, saturating at zero.
    pub fn apply_modifier(&mut self, stat: StatType, delta: i32) {
        let current = self.values[stat.index()] as i64;
        self.values[stat.index()] = (current + delta as i64).clamp(0, u32::MAX as i64) as u32;
    }
}

/// Playable races. Modifiers apply once, at character creation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Race {
    #[default]
    Human,
    Elf,
    Dwarf,
    Orc,
}

impl Race {
    pub fn name(&self) -> &'static str {
        match self {
            Race::Human => "Human",
            Race::Elf => "Elf",
            Race::Dwarf => "Dwarf",
            Race::Orc => "Orc",
        }
    }

    pub fn stat_modifiers(&self) -> &'static [(StatType, i32)] {
        match self {
            Race::Human => &[(StatType::Luck, 1), (StatType::Skill, 1)],
            Race::Elf => &[
                (StatType::Skill, 2),
                (StatType::WeaponArt, 1),
                (StatType::Strength, -1),
            ],
            Race::Dwarf => &[
                (StatType::Constitution, 2),
                (StatType::DefenseArt, 1),
                (StatType::Luck, -1),
            ],
            Race::Orc => &[
                (StatType::Strength, 3),
                (StatType::Skill, -1),
                (StatType::Luck, -1),
            ],
        }
    }
}
