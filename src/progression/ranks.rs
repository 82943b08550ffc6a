//! The tournament ladder: a fixed sequence of champions, each beaten once
//! for a permanent stat reward.

use crate::character::attributes::StatType;
use crate::character::player::Player;
use crate::combat::{resolve_combat, CombatOutcome, Enemy};
use crate::core::errors::ActionRefused;
use crate::dice::Dice;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankChallenge {
    pub title: &'static str,
    pub champion: &'static str,
    pub level: u32,
    pub hp: u32,
    pub damage: u32,
    pub defense: u32,
    pub required_level: u32,
    pub reward_stat: StatType,
    pub reward_amount: u32,
}

impl RankChallenge {
    pub fn to_enemy(&self) -> Enemy {
        Enemy::new(
            self.champion.to_string(),
            self.level,
            self.hp,
            self.damage,
            self.defense,
        )
    }
}

const fn rank(
    title: &'static str,
    champion: &'static str,
    level: u32,
    hp: u32,
    damage: u32,
    defense: u32,
    required_level: u32,
    reward_stat: StatType,
    reward_amount: u32,
) -> RankChallenge {
    RankChallenge {
        title,
        champion,
        level,
        hp,
        damage,
        defense,
        required_level,
        reward_stat,
        reward_amount,
    }
}

pub static RANK_LADDER: [RankChallenge; 10] = [
    rank("Squire", "Hedge Knight Bram", 3, 80, 8, 2, 3, StatType::Strength, 1),
    rank("Footman", "Sellsword Veyra", 6, 130, 13, 4, 6, StatType::Skill, 1),
    rank("Sergeant", "Captain Orlen", 10, 200, 20, 7, 10, StatType::Constitution, 2),
    rank("Knight", "Sir Aldric the Grey", 15, 300, 28, 10, 15, StatType::DefenseArt, 2),
    rank("Champion", "The Crimson Duelist", 22, 440, 40, 14, 22, StatType::WeaponArt, 2),
    rank("Warden", "Ysolde of the Pass", 30, 620, 55, 19, 30, StatType::Luck, 3),
    rank("Warlord", "Gorrum Skullsplitter", 40, 860, 72, 25, 40, StatType::Strength, 3),
    rank("High Marshal", "Marshal Tiberon", 55, 1200, 96, 33, 55, StatType::Skill, 4),
    rank("Grandmaster", "The Pale Blademaster", 75, 1700, 130, 45, 75, StatType::WeaponArt, 5),
    rank("Legend", "Ironvale's Undying King", 100, 2400, 175, 60, 100, StatType::Constitution, 6),
];

/// Next unbeaten champion, or `None` once the ladder is cleared.
pub fn next_challenge(rank_index: u32) -> Option<&'static RankChallenge> {
    RANK_LADDER.get(rank_index as usize)
}

/// Title earned so far. Index 0 has not beaten anyone yet.
pub fn rank_title(rank_index: u32) -> &'static str {
    match rank_index {
        0 => "Unranked",
        n => RANK_LADDER
            .get(n as usize - 1)
            .map(|r| r.title)
            .unwrap_or("Legend"),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankResult {
    pub outcome: CombatOutcome,
    pub promoted: bool,
    pub rank_index: u32,
}

/// Fights the next champion. HP carries over from the battle; a win
/// advances `rank_index` by one and grants the champion's stat reward.
pub fn challenge_rank(
    player: &mut Player,
    dice: &mut impl Dice,
) -> Result<RankResult, ActionRefused> {
    let challenge = next_challenge(player.rank_index).ok_or(ActionRefused::LadderComplete)?;
    if player.level < challenge.required_level {
        return Err(ActionRefused::LevelTooLow {
            required: challenge.required_level,
            actual: player.level,
        });
    }

    let outcome = resolve_combat(player, &challenge.to_enemy(), dice);
    player.hp = outcome.remaining_hp.min(player.max_hp);

    if outcome.won {
        player.rank_index += 1;
        player.stats.add(challenge.reward_stat, challenge.reward_amount);
        player.refresh_max_hp();
        tracing::info!(
            player = %player.name,
            title = challenge.title,
            rank = player.rank_index,
            "rank promotion"
        );
    }

    Ok(RankResult {
        promoted: outcome.won,
        rank_index: player.rank_index,
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::attributes::Race;
    use crate::dice::ScriptedDice;

    #[test]
    fn test_ladder_is_ordered() {
        for pair in RANK_LADDER.windows(2) {
            assert!(pair[0].required_level < pair[1].required_level);
            assert!(pair[0].hp < pair[1].hp);
        }
    }

    #[test]
    fn test_rank_titles() {
        assert_eq!(rank_title(0), "Unranked");
        assert_eq!(rank_title(1), "Squire");
        assert_eq!(rank_title(RANK_LADDER.len() as u32), "Legend");
        assert_eq!(rank_title(99), "Legend");
    }

    #[test]
    fn test_challenge_refused_below_level() {
        let mut player = Player::new("Aria".to_string(), Race::Human);
        let mut dice = ScriptedDice::always(0.0);
        let err = challenge_rank(&mut player, &mut dice).unwrap_err();
        assert_eq!(
            err,
            ActionRefused::LevelTooLow {
                required: 3,
                actual: 1
            }
        );
        assert_eq!(dice.consumed(), 0);
    }

    #[test]
    fn test_challenge_refused_when_ladder_complete() {
        let mut player = Player::new("Aria".to_string(), Race::Human);
        player.rank_index = RANK_LADDER.len() as u32;
        let mut dice = ScriptedDice::always(0.0);
        assert_eq!(
            challenge_rank(&mut player, &mut dice),
            Err(ActionRefused::LadderComplete)
        );
    }

    #[test]
    fn test_win_promotes_and_rewards() {
        let mut player = Player::new("Aria".to_string(), Race::Human);
        player.level = 3;
        let strength = player.base_stat(StatType::Strength);
        // Every roll of 0 hits, crits and mitigates
        let mut dice = ScriptedDice::always(0.0);
        let result = challenge_rank(&mut player, &mut dice).unwrap();
        assert!(result.promoted);
        assert_eq!(result.rank_index, 1);
        assert_eq!(player.rank_index, 1);
        assert_eq!(player.base_stat(StatType::Strength), strength + 1);
    }

    #[test]
    fn test_loss_keeps_rank() {
        let mut player = Player::new("Aria".to_string(), Race::Human);
        player.level = 3;
        player.hp = 5;
        // Player misses, no mitigation, enemy hit for more than 5
        let mut dice = ScriptedDice::new([99.9, 99.9, 0.0]);
        let result = challenge_rank(&mut player, &mut dice).unwrap();
        assert!(!result.promoted);
        assert_eq!(player.rank_index, 0);
        assert_eq!(player.hp, 0);
    }
}
