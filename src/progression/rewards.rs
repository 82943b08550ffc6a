//! Reward scaling for jobs and quests, and the region layout that gates
//! quest content.

use super::curve::{grant_xp, region_index, LevelUp};
use crate::character::player::Player;
use crate::combat::{generate_enemy, CombatOutcome, Enemy};
use crate::core::constants::*;
use crate::dice::Dice;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
    Boss,
}

impl Difficulty {
    pub fn all() -> [Difficulty; 4] {
        [
            Difficulty::Easy,
            Difficulty::Normal,
            Difficulty::Hard,
            Difficulty::Boss,
        ]
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            Difficulty::Easy => 1.0,
            Difficulty::Normal => 1.3,
            Difficulty::Hard => 1.7,
            Difficulty::Boss => 2.5,
        }
    }

    /// Enemy level offset above the region's first level.
    pub fn level_offset(&self) -> u32 {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Normal => 1,
            Difficulty::Hard => 3,
            Difficulty::Boss => 4,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
            Difficulty::Boss => "Boss",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Reward {
    pub silver: u64,
    pub xp: u64,
}

pub fn silver_multiplier(level: u32) -> f64 {
    1.0 + level as f64 * SILVER_MULT_PER_LEVEL
}

pub fn xp_multiplier(level: u32) -> f64 {
    1.0 + level as f64 * XP_MULT_PER_LEVEL
}

/// Job payout: base yields scaled by player level only.
pub fn job_rewards(base_silver: u64, base_xp: u64, level: u32) -> Reward {
    Reward {
        silver: (base_silver as f64 * silver_multiplier(level)).floor() as u64,
        xp: (base_xp as f64 * xp_multiplier(level)).floor() as u64,
    }
}

/// Quest payout with an explicit variance factor.
pub fn quest_rewards_with_variance(
    base_silver: u64,
    base_xp: u64,
    difficulty: Difficulty,
    level: u32,
    variance: f64,
) -> Reward {
    let tier = difficulty.multiplier();
    Reward {
        silver: (base_silver as f64 * tier * silver_multiplier(level) * variance).floor() as u64,
        xp: (base_xp as f64 * tier * xp_multiplier(level) * variance).floor() as u64,
    }
}

/// Quest payout. Draws one variance factor in [0.8, 1.2) shared by silver
/// and XP.
pub fn quest_rewards(
    base_silver: u64,
    base_xp: u64,
    difficulty: Difficulty,
    level: u32,
    dice: &mut impl Dice,
) -> Reward {
    let variance = dice.roll_range(REWARD_VARIANCE_MIN, REWARD_VARIANCE_MAX);
    quest_rewards_with_variance(base_silver, base_xp, difficulty, level, variance)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub index: u32,
    pub min_level: u32,
    pub max_level: u32,
}

impl Region {
    pub fn contains(&self, level: u32) -> bool {
        level >= self.min_level && level <= self.max_level
    }
}

const REGION_NAMES: [&str; 8] = [
    "Greenhollow",
    "Ashen Marches",
    "Saltreach",
    "Frostmere",
    "Emberdeep",
    "Stormspire",
    "Blightfen",
    "Crown of Ruin",
];

/// Region a player of `level` currently quests in. The last region is
/// open-ended.
pub fn region_for_level(level: u32) -> Region {
    let index = region_index(level).min(MAX_REGION_INDEX);
    let min_level = index * LEVELS_PER_REGION + 1;
    let max_level = if index == MAX_REGION_INDEX {
        u32::MAX
    } else {
        min_level + LEVELS_PER_REGION - 1
    };
    Region {
        index,
        min_level,
        max_level,
    }
}

/// Display name, e.g. "Ashen Marches III". Eight realms of five regions.
pub fn region_name(region: &Region) -> String {
    const NUMERALS: [&str; 5] = ["I", "II", "III", "IV", "V"];
    let realm = REGION_NAMES[(region.index / 5) as usize % REGION_NAMES.len()];
    format!("{} {}", realm, NUMERALS[(region.index % 5) as usize])
}

/// Builds the opponent for a quest of the given tier in `region`.
pub fn quest_enemy(region: &Region, difficulty: Difficulty, dice: &mut impl Dice) -> Enemy {
    let mut enemy = generate_enemy(region.min_level.saturating_add(difficulty.level_offset()), dice);
    if difficulty == Difficulty::Boss {
        enemy.name = format!("{} Warlord", enemy.name);
        enemy.max_hp = enemy.max_hp.saturating_mul(2);
        enemy.hp = enemy.max_hp;
    }
    enemy
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestSettlement {
    pub won: bool,
    pub reward: Option<Reward>,
    pub level_up: Option<LevelUp>,
}

/// Applies a resolved quest battle to the player: HP from the outcome, and
/// on a win the scaled enemy yields plus one level-up check.
pub fn settle_quest_battle(
    player: &mut Player,
    enemy: &Enemy,
    difficulty: Difficulty,
    outcome: &CombatOutcome,
    dice: &mut impl Dice,
) -> QuestSettlement {
    player.hp = outcome.remaining_hp.min(player.max_hp);

    if !outcome.won {
        return QuestSettlement {
            won: false,
            reward: None,
            level_up: None,
        };
    }

    let reward = quest_rewards(
        enemy.silver_reward,
        enemy.xp_reward,
        difficulty,
        player.level,
        dice,
    );
    player.silver = player.silver.saturating_add(reward.silver);
    let level_up = grant_xp(player, reward.xp);

    tracing::debug!(
        enemy = %enemy.name,
        difficulty = difficulty.name(),
        silver = reward.silver,
        xp = reward.xp,
        "quest rewards applied"
    );

    QuestSettlement {
        won: true,
        reward: Some(reward),
        level_up,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::attributes::Race;
    use crate::dice::ScriptedDice;

    #[test]
    fn test_normal_quest_at_level_ten() {
        let reward = quest_rewards_with_variance(100, 0, Difficulty::Normal, 10, 1.0);
        assert_eq!(reward.silver, 455);
    }

    #[test]
    fn test_quest_variance_comes_from_dice() {
        let mut dice = ScriptedDice::new([1.0]);
        let reward = quest_rewards(100, 40, Difficulty::Normal, 10, &mut dice);
        assert_eq!(reward.silver, 455);
        // 40 * 1.3 * 1.5
        assert_eq!(reward.xp, 78);
        assert_eq!(dice.consumed(), 1);
    }

    #[test]
    fn test_job_rewards_ignore_difficulty() {
        let job = job_rewards(100, 40, 10);
        assert_eq!(job.silver, 350);
        assert_eq!(job.xp, 60);
        let quest = quest_rewards_with_variance(100, 40, Difficulty::Easy, 10, 1.0);
        assert_eq!(job, quest);
        let hard = quest_rewards_with_variance(100, 40, Difficulty::Hard, 10, 1.0);
        assert!(hard.silver > job.silver);
    }

    #[test]
    fn test_difficulty_multipliers_ordered() {
        let tiers = Difficulty::all();
        for pair in tiers.windows(2) {
            assert!(pair[0].multiplier() < pair[1].multiplier());
        }
    }

    #[test]
    fn test_region_for_level_bounds() {
        let first = region_for_level(1);
        assert_eq!((first.index, first.min_level, first.max_level), (0, 1, 5));
        let second = region_for_level(6);
        assert_eq!(second.index, 1);
        assert!(second.contains(10));
        assert!(!second.contains(11));

        let last = region_for_level(280);
        assert_eq!(last.index, MAX_REGION_INDEX);
        assert!(last.contains(1000));
    }

    #[test]
    fn test_region_names() {
        assert_eq!(region_name(&region_for_level(1)), "Greenhollow I");
        assert_eq!(region_name(&region_for_level(36)), "Ashen Marches III");
    }

    #[test]
    fn test_boss_enemy_is_tougher() {
        let region = region_for_level(11);
        let mut dice = ScriptedDice::always(50.0);
        let easy = quest_enemy(&region, Difficulty::Easy, &mut dice);
        let boss = quest_enemy(&region, Difficulty::Boss, &mut dice);
        assert!(boss.level > easy.level);
        assert!(boss.max_hp > easy.max_hp * 2);
        assert_eq!(boss.hp, boss.max_hp);
    }

    #[test]
    fn test_settle_lost_battle_grants_nothing() {
        let mut player = Player::new("Aria".to_string(), Race::Human);
        let enemy = Enemy::new("Ogre".to_string(), 5, 100, 30, 2).with_rewards(20, 50);
        let outcome = CombatOutcome {
            won: false,
            log: vec![],
            remaining_hp: 0,
            enemy_remaining_hp: 40,
            player_damage_dealt: 60,
            enemy_damage_dealt: 150,
            rounds: 6,
        };
        let mut dice = ScriptedDice::new([1.0]);
        let settlement = settle_quest_battle(&mut player, &enemy, Difficulty::Normal, &outcome, &mut dice);
        assert!(!settlement.won);
        assert_eq!(settlement.reward, None);
        assert_eq!(player.hp, 0);
        assert_eq!(player.silver, 0);
        assert_eq!(dice.consumed(), 0);
    }

    #[test]
    fn test_settle_won_battle_pays_and_levels() {
        let mut player = Player::new("Aria".to_string(), Race::Human);
        let enemy = Enemy::new("Wolf".to_string(), 1, 10, 2, 0).with_rewards(40, 20);
        let outcome = CombatOutcome {
            won: true,
            log: vec![],
            remaining_hp: 90,
            enemy_remaining_hp: 0,
            player_damage_dealt: 10,
            enemy_damage_dealt: 60,
            rounds: 2,
        };
        let mut dice = ScriptedDice::new([1.0]);
        let settlement = settle_quest_battle(&mut player, &enemy, Difficulty::Easy, &outcome, &mut dice);
        // silver 20 * 1.25, xp 40 * 1.05
        assert_eq!(
            settlement.reward,
            Some(Reward {
                silver: 25,
                xp: 42
            })
        );
        assert_eq!(player.silver, 25);
        assert_eq!(settlement.level_up.map(|l| l.new_level), Some(2));
        // Level-up restores HP after the battle damage was applied
        assert_eq!(player.hp, player.max_hp);
        assert_eq!(player.xp, 12);
    }
}
