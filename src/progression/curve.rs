use crate::character::player::Player;
use crate::core::constants::*;

/// Content region for a level: one region per five levels, capped at 39.
pub fn region_index(level: u32) -> u32 {
    (level.max(1) - 1) / LEVELS_PER_REGION
}

/// XP required to advance from `level` to the next one.
///
/// Pure function of the level. Levels past 300 reuse the level 300 value.
pub fn required_xp_for_level(level: u32) -> u64 {
    let level = level.clamp(1, MAX_CURVE_LEVEL);
    let region = region_index(level).min(MAX_REGION_INDEX) as f64;
    let avg_quest_xp = REGION_BASE_QUEST_XP + region * REGION_QUEST_XP_STEP;
    let tasks_needed = if level > LATE_GAME_LEVEL {
        LATE_GAME_BASE_TASKS + (level - LATE_GAME_LEVEL) as f64 * LATE_GAME_TASKS_PER_LEVEL
    } else {
        BASE_TASKS_PER_LEVEL + region * TASKS_PER_REGION
    };
    (avg_quest_xp * tasks_needed).floor() as u64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUp {
    pub old_level: u32,
    pub new_level: u32,
}

/// Resolves at most one level-up. Overflow XP carries over; a second
/// level waits for the next check.
pub fn check_level_up(player: &mut Player) -> Option<LevelUp> {
    if player.xp < player.max_xp {
        return None;
    }

    let old_level = player.level;
    player.xp -= player.max_xp;
    player.level += 1;
    player.max_xp = required_xp_for_level(player.level);
    player.refresh_max_hp();
    player.restore();

    tracing::info!(player = %player.name, level = player.level, "level up");

    Some(LevelUp {
        old_level,
        new_level: player.level,
    })
}

/// Adds XP and runs one level-up check.
pub fn grant_xp(player: &mut Player, amount: u64) -> Option<LevelUp> {
    player.xp = player.xp.saturating_add(amount);
    check_level_up(player)
}

/// Save-data integrity check. Rewrites `max_xp` when it no longer matches
/// the curve and returns true if a repair happened.
pub fn validate_max_xp(player: &mut Player) -> bool {
    let expected = required_xp_for_level(player.level);
    if player.max_xp == expected {
        return false;
    }
    tracing::warn!(
        player = %player.name,
        stored = player.max_xp,
        expected,
        "max_xp drifted from the level curve, repairing"
    );
    player.max_xp = expected;
    true
}
