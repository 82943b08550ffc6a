//! Display strings for combat log entries.
//!
//! The resolver only records structured events; hosts call into this module
//! when they want text.

use super::types::{CombatEvent, CombatLogEntry, CombatOutcome, ElementalHit};

fn elemental_suffix(hits: &[ElementalHit]) -> String {
    if hits.is_empty() {
        return String::new();
    }
    let parts: Vec<String> = hits
        .iter()
        .map(|hit| format!("{} {}", hit.amount, hit.element.name()))
        .collect();
    format!(" (+{})", parts.join(", "))
}

pub fn describe(entry: &CombatLogEntry, player: &str, enemy: &str) -> String {
    match &entry.event {
        CombatEvent::Engaged => format!("{} faces {}!", player, enemy),
        CombatEvent::PlayerHit {
            physical,
            critical,
            elemental,
            total,
        } => {
            let verb = if *critical { "critically strikes" } else { "hits" };
            format!(
                "{} {} {} for {} damage{} [{} total]",
                player,
                verb,
                enemy,
                physical,
                elemental_suffix(elemental),
                total
            )
        }
        CombatEvent::PlayerMissed => format!("{} evades {}'s attack.", enemy, player),
        CombatEvent::EnemyBlocked => format!("{} blocks {}'s attack!", player, enemy),
        CombatEvent::EnemyHit {
            physical,
            elemental,
            total,
        } => format!(
            "{} hits {} for {} damage{} [{} total]",
            enemy,
            player,
            physical,
            elemental_suffix(elemental),
            total
        ),
        CombatEvent::EnemyMissed => format!("{} misses.", enemy),
        CombatEvent::RoundLimitReached => "Both fighters are exhausted.".to_string(),
        CombatEvent::Victory => format!("{} is victorious!", player),
        CombatEvent::Defeat => format!("{} has been defeated by {}.", player, enemy),
    }
}

/// One line per log entry, prefixed with the round number.
pub fn render_log(outcome: &CombatOutcome, player: &str, enemy: &str) -> Vec<String> {
    outcome
        .log
        .iter()
        .map(|entry| {
            if entry.round == 0 {
                describe(entry, player, enemy)
            } else {
                format!("[{}] {}", entry.round, describe(entry, player, enemy))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::Element;

    #[test]
    fn test_describe_crit_with_elements() {
        let entry = CombatLogEntry {
            round: 3,
            event: CombatEvent::PlayerHit {
                physical: 12,
                critical: true,
                elemental: vec![
                    ElementalHit {
                        element: Element::Fire,
                        amount: 4,
                    },
                    ElementalHit {
                        element: Element::Ice,
                        amount: 1,
                    },
                ],
                total: 17,
            },
        };
        assert_eq!(
            describe(&entry, "Aria", "Wolf"),
            "Aria critically strikes Wolf for 12 damage (+4 fire, 1 ice) [17 total]"
        );
    }

    #[test]
    fn test_describe_block() {
        let entry = CombatLogEntry {
            round: 1,
            event: CombatEvent::EnemyBlocked,
        };
        assert_eq!(describe(&entry, "Aria", "Wolf"), "Aria blocks Wolf's attack!");
    }

    #[test]
    fn test_render_log_prefixes_rounds() {
        let outcome = CombatOutcome {
            won: true,
            log: vec![
                CombatLogEntry {
                    round: 0,
                    event: CombatEvent::Engaged,
                },
                CombatLogEntry {
                    round: 1,
                    event: CombatEvent::Victory,
                },
            ],
            remaining_hp: 10,
            enemy_remaining_hp: 0,
            player_damage_dealt: 5,
            enemy_damage_dealt: 0,
            rounds: 1,
        };
        let lines = render_log(&outcome, "Aria", "Wolf");
        assert_eq!(lines[0], "Aria faces Wolf!");
        assert_eq!(lines[1], "[1] Aria is victorious!");
    }
}
