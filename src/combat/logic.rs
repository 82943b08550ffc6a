use super::types::{CombatEvent, CombatLogEntry, CombatOutcome, ElementalHit, Enemy};
use crate::character::derived_stats::DerivedStats;
use crate::character::elemental::{elemental_offense, elemental_resistance};
use crate::character::player::Player;
use crate::core::constants::*;
use crate::dice::Dice;
use crate::items::{Element, ElementalProfile};

/// Everything the player side of a battle needs, resolved once up front.
#[derive(Debug, Clone)]
struct PlayerCombatant {
    derived: DerivedStats,
    offense: ElementalProfile,
    resistance: ElementalProfile,
}

impl PlayerCombatant {
    fn from_player(player: &Player) -> Self {
        Self {
            derived: player.derived(),
            offense: elemental_offense(&player.equipment),
            resistance: elemental_resistance(&player.equipment),
        }
    }
}

/// Per-element damage where the attacker has offense in that element.
/// Elements that resist down to zero are dropped from the result.
pub fn elemental_hits(offense: &ElementalProfile, resistance: &ElementalProfile) -> Vec<ElementalHit> {
    Element::all()
        .into_iter()
        .filter(|element| offense.get(*element) > 0)
        .map(|element| ElementalHit {
            element,
            amount: offense.get(element).saturating_sub(resistance.get(element)),
        })
        .filter(|hit| hit.amount > 0)
        .collect()
}

/// Physical damage after halved defense, never below 1.
pub fn physical_damage(attack: u32, defense: u32) -> f64 {
    (attack as f64 - defense as f64 / 2.0).max(MIN_PHYSICAL_DAMAGE)
}

/// Player hit threshold against this enemy. Unclamped: may exceed 100 or
/// go negative.
pub fn player_hit_threshold(derived: &DerivedStats, enemy: &Enemy) -> f64 {
    derived.hit_chance - enemy.level as f64 * DODGE_PER_ENEMY_LEVEL
}

pub fn enemy_hit_threshold(enemy: &Enemy) -> f64 {
    ENEMY_BASE_HIT_CHANCE + ENEMY_HIT_CHANCE_PER_LEVEL * enemy.level as f64
}

/// Runs a full battle between a player snapshot and an opponent.
///
/// Each round the player attacks (hit roll, then crit roll on a hit). If the
/// enemy survives, it attacks: mitigation roll first, then a hit roll when
/// not mitigated. The loop ends when either side reaches 0 HP or after
/// `MAX_COMBAT_ROUNDS` rounds. The player wins whenever they still stand.
pub fn resolve_combat(player: &Player, enemy: &Enemy, dice: &mut impl Dice) -> CombatOutcome {
    let me = PlayerCombatant::from_player(player);
    let hit_threshold = player_hit_threshold(&me.derived, enemy);
    let enemy_hit = enemy_hit_threshold(enemy);

    let mut player_hp = player.hp as i64;
    let mut enemy_hp = enemy.hp as i64;
    let mut player_damage_dealt: u64 = 0;
    let mut enemy_damage_dealt: u64 = 0;
    let mut round: u32 = 0;

    let mut log = vec![CombatLogEntry {
        round: 0,
        event: CombatEvent::Engaged,
    }];

    while player_hp > 0 && enemy_hp > 0 && round < MAX_COMBAT_ROUNDS {
        round += 1;

        // --- Player attack ---
        if dice.roll_percent() <= hit_threshold {
            let mut physical = physical_damage(me.derived.damage, enemy.defense);
            let critical = dice.roll_percent() <= me.derived.crit_chance;
            if critical {
                physical *= CRIT_MULTIPLIER;
            }
            let elemental = elemental_hits(&me.offense, &enemy.elemental_resistance);
            let elemental_total = elemental.iter().fold(0u32, |sum, hit| sum.saturating_add(hit.amount));
            let total = (physical + elemental_total as f64).floor() as u32;

            enemy_hp -= total as i64;
            player_damage_dealt += total as u64;
            log.push(CombatLogEntry {
                round,
                event: CombatEvent::PlayerHit {
                    physical: physical.floor() as u32,
                    critical,
                    elemental,
                    total,
                },
            });
        } else {
            log.push(CombatLogEntry {
                round,
                event: CombatEvent::PlayerMissed,
            });
        }

        // A slain enemy gets no retaliation this round
        if enemy_hp <= 0 {
            break;
        }

        // --- Enemy attack ---
        if dice.roll_percent() <= me.derived.mitigation_chance {
            log.push(CombatLogEntry {
                round,
                event: CombatEvent::EnemyBlocked,
            });
            continue;
        }

        if dice.roll_percent() <= enemy_hit {
            let physical = physical_damage(enemy.damage, me.derived.defense);
            let elemental = elemental_hits(&enemy.elemental_offense, &me.resistance);
            let elemental_total = elemental.iter().fold(0u32, |sum, hit| sum.saturating_add(hit.amount));
            let total = (physical + elemental_total as f64).floor() as u32;

            player_hp -= total as i64;
            enemy_damage_dealt += total as u64;
            log.push(CombatLogEntry {
                round,
                event: CombatEvent::EnemyHit {
                    physical: physical.floor() as u32,
                    elemental,
                    total,
                },
            });
        } else {
            log.push(CombatLogEntry {
                round,
                event: CombatEvent::EnemyMissed,
            });
        }
    }

    if player_hp > 0 && enemy_hp > 0 {
        log.push(CombatLogEntry {
            round,
            event: CombatEvent::RoundLimitReached,
        });
    }

    let won = player_hp > 0;
    log.push(CombatLogEntry {
        round,
        event: if won {
            CombatEvent::Victory
        } else {
            CombatEvent::Defeat
        },
    });

    tracing::debug!(
        player = %player.name,
        enemy = %enemy.name,
        won,
        rounds = round,
        dealt = player_damage_dealt,
        taken = enemy_damage_dealt,
        "combat resolved"
    );

    CombatOutcome {
        won,
        log,
        remaining_hp: player_hp.max(0) as u32,
        enemy_remaining_hp: enemy_hp.max(0) as u32,
        player_damage_dealt,
        enemy_damage_dealt,
        rounds: round,
    }
}
