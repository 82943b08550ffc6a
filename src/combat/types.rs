use crate::core::constants::MAX_COMBAT_ROUNDS;
use crate::dice::Dice;
use crate::items::{Element, ElementalProfile};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: String,
    pub name: String,
    pub level: u32,
    pub hp: u32,
    pub max_hp: u32,
    pub damage: u32,
    #[serde(default)]
    pub defense: u32,
    #[serde(default)]
    pub xp_reward: u64,
    #[serde(default)]
    pub silver_reward: u64,
    #[serde(default)]
    pub elemental_offense: ElementalProfile,
    #[serde(default)]
    pub elemental_resistance: ElementalProfile,
}

impl Enemy {
    pub fn new(name: String, level: u32, max_hp: u32, damage: u32, defense: u32) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            level,
            hp: max_hp,
            max_hp,
            damage,
            defense,
            xp_reward: 0,
            silver_reward: 0,
            elemental_offense: ElementalProfile::default(),
            elemental_resistance: ElementalProfile::default(),
        }
    }

    pub fn with_rewards(mut self, xp: u64, silver: u64) -> Self {
        self.xp_reward = xp;
        self.silver_reward = silver;
        self
    }

    pub fn with_offense(mut self, element: Element, value: u32) -> Self {
        self.elemental_offense.add(element, value);
        self
    }

    pub fn with_resistance(mut self, element: Element, value: u32) -> Self {
        self.elemental_resistance.add(element, value);
        self
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }
}

pub fn generate_enemy_name(level: u32, dice: &mut impl Dice) -> String {
    let prefixes: &[&str] = match level {
        0..=10 => &["Meadow", "Field", "Thorn", "Wild"],
        11..=40 => &["Shadow", "Stone", "Cursed", "Grim"],
        41..=100 => &["Molten", "Frozen", "Abyssal", "Dread"],
        _ => &["Eternal", "Tempest", "Elder", "Titan"],
    };
    let suffixes = ["Wolf", "Bandit", "Golem", "Wraith", "Drake", "Troll"];

    let prefix = prefixes[dice.pick(prefixes.len())];
    let suffix = suffixes[dice.pick(suffixes.len())];
    format!("{} {}", prefix, suffix)
}

/// Generates a regular opponent for `level` with +/-10% stat variance.
pub fn generate_enemy(level: u32, dice: &mut impl Dice) -> Enemy {
    let level = level.max(1);
    let name = generate_enemy_name(level, dice);
    let hp_var = dice.roll_range(0.9, 1.1);
    let dmg_var = dice.roll_range(0.9, 1.1);

    let hp = (level.saturating_mul(12).saturating_add(30) as f64 * hp_var).max(1.0) as u32;
    let damage = (level.saturating_mul(2).saturating_add(4) as f64 * dmg_var).max(1.0) as u32;
    let defense = level;
    let xp = 5 + level as u64 * 3;
    let silver = 8 + level as u64 * 4;

    Enemy::new(name, level, hp, damage, defense).with_rewards(xp, silver)
}

/// Presentation class of a log entry. Carries no resolver semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogTag {
    Info,
    PlayerHit,
    EnemyHit,
    Crit,
    Block,
    Win,
    Loss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementalHit {
    pub element: Element,
    pub amount: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatEvent {
    Engaged,
    PlayerHit {
        physical: u32,
        critical: bool,
        elemental: Vec<ElementalHit>,
        total: u32,
    },
    PlayerMissed,
    EnemyBlocked,
    EnemyHit {
        physical: u32,
        elemental: Vec<ElementalHit>,
        total: u32,
    },
    EnemyMissed,
    RoundLimitReached,
    Victory,
    Defeat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatLogEntry {
    pub round: u32,
    pub event: CombatEvent,
}

impl CombatLogEntry {
    pub fn tag(&self) -> LogTag {
        match &self.event {
            CombatEvent::PlayerHit { critical: true, .. } => LogTag::Crit,
            CombatEvent::PlayerHit { .. } => LogTag::PlayerHit,
            CombatEvent::EnemyHit { .. } => LogTag::EnemyHit,
            CombatEvent::EnemyBlocked => LogTag::Block,
            CombatEvent::Victory => LogTag::Win,
            CombatEvent::Defeat => LogTag::Loss,
            CombatEvent::Engaged
            | CombatEvent::PlayerMissed
            | CombatEvent::EnemyMissed
            | CombatEvent::RoundLimitReached => LogTag::Info,
        }
    }
}

/// Everything a caller needs after a battle. The player snapshot is left
/// untouched; apply `remaining_hp` and rewards explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatOutcome {
    pub won: bool,
    pub log: Vec<CombatLogEntry>,
    pub remaining_hp: u32,
    pub enemy_remaining_hp: u32,
    pub player_damage_dealt: u64,
    pub enemy_damage_dealt: u64,
    pub rounds: u32,
}

impl CombatOutcome {
    pub fn hit_round_limit(&self) -> bool {
        self.rounds >= MAX_COMBAT_ROUNDS
            && self
                .log
                .iter()
                .any(|e| e.event == CombatEvent::RoundLimitReached)
    }
}
