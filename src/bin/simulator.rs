//! Ironvale Headless Combat Simulator
//!
//! Runs many battles between a reference player and generated enemies and
//! reports aggregate balance numbers. Uses the same `resolve_combat` as any
//! host would.
//!
//! Usage:
//!   cargo run --bin simulator -- [OPTIONS]
//!
//! Options:
//!   --runs N          Number of battles (default: 1000)
//!   --seed N          RNG seed (default: 42)
//!   --level N         Reference player level (default: 10)
//!   --enemy-level N   Enemy level (default: same as --level)
//!   --verbose         Print the first battle's log and narration
//!   --quiet           Only the final summary line

use ironvale::character::attributes::{Race, StatType};
use ironvale::character::player::Player;
use ironvale::combat::{generate_enemy, render_log, resolve_combat};
use ironvale::config::Settings;
use ironvale::economy::scale_shop_item;
use ironvale::items::{default_catalog, EquipmentSlot, ItemCategory};
use ironvale::narrative::{narrate_or_fallback, service_from_settings, NarrativeRequest};
use ironvale::progression::required_xp_for_level;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::str::FromStr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// ── CLI Configuration ────────────────────────────────────────────────

struct SimConfig {
    runs: u32,
    seed: u64,
    level: u32,
    enemy_level: Option<u32>,
    verbose: bool,
    quiet: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            runs: 1000,
            seed: 42,
            level: 10,
            enemy_level: None,
            verbose: false,
            quiet: false,
        }
    }
}

fn parse_value<T: FromStr>(args: &[String], i: usize, flag: &str) -> T {
    match args.get(i).and_then(|v| v.parse().ok()) {
        Some(value) => value,
        None => {
            eprintln!("{flag} requires a number");
            print_usage();
            std::process::exit(1);
        }
    }
}

fn parse_args() -> SimConfig {
    let args: Vec<String> = std::env::args().collect();
    let mut config = SimConfig::default();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--runs" => {
                i += 1;
                config.runs = parse_value(&args, i, "--runs");
            }
            "--seed" => {
                i += 1;
                config.seed = parse_value(&args, i, "--seed");
            }
            "--level" => {
                i += 1;
                config.level = parse_value::<u32>(&args, i, "--level").max(1);
            }
            "--enemy-level" => {
                i += 1;
                config.enemy_level = Some(parse_value::<u32>(&args, i, "--enemy-level").max(1));
            }
            "--verbose" => config.verbose = true,
            "--quiet" => config.quiet = true,
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }
    config
}

fn print_usage() {
    eprintln!(
        "Ironvale Headless Combat Simulator\n\
         \n\
         Usage: simulator [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --runs N          Number of battles (default: 1000)\n\
         \x20 --seed N          RNG seed (default: 42)\n\
         \x20 --level N         Reference player level (default: 10)\n\
         \x20 --enemy-level N   Enemy level (default: same as --level)\n\
         \x20 --verbose         Print the first battle's log and narration\n\
         \x20 --quiet           Only final summary line\n\
         \x20 --help, -h        Show this help"
    );
}

// ── Reference Player ─────────────────────────────────────────────────

/// A level-`level` character with one stat point per level and the best
/// non-premium shop gear for each slot.
fn reference_player(level: u32) -> Player {
    let mut player = Player::new("Simulant".to_string(), Race::Human);
    player.level = level;
    player.max_xp = required_xp_for_level(level);

    let stats = StatType::all();
    for point in 0..level.saturating_sub(1) {
        player.stats.increment(stats[point as usize % stats.len()]);
    }

    let slots = [
        (ItemCategory::Weapon, EquipmentSlot::Weapon),
        (ItemCategory::Armor, EquipmentSlot::Armor),
        (ItemCategory::Helmet, EquipmentSlot::Helmet),
        (ItemCategory::Shield, EquipmentSlot::Shield),
        (ItemCategory::Leggings, EquipmentSlot::Leggings),
        (ItemCategory::Mount, EquipmentSlot::Mount),
    ];
    for (category, slot) in slots {
        let best = default_catalog()
            .iter()
            .filter(|t| t.category == category && t.premium_price == 0 && t.min_level <= level)
            .max_by_key(|t| t.bonus);
        if let Some(template) = best {
            player
                .equipment
                .set(slot, Some(scale_shop_item(template, level)));
        }
    }

    player.refresh_max_hp();
    player.restore();
    player
}

// ── Simulation Statistics ────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
struct SimStats {
    battles: u64,
    wins: u64,
    round_limit_hits: u64,
    total_rounds: u64,
    total_dealt: u64,
    total_taken: u64,
}

impl SimStats {
    fn per_battle(&self, total: u64) -> f64 {
        if self.battles == 0 {
            0.0
        } else {
            total as f64 / self.battles as f64
        }
    }

    fn win_rate(&self) -> f64 {
        self.per_battle(self.wins) * 100.0
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ironvale=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = parse_args();
    let enemy_level = config.enemy_level.unwrap_or(config.level);
    let player = reference_player(config.level);
    let derived = player.derived();

    if !config.quiet {
        eprintln!(
            "Ironvale Simulator: {} battle(s), seed={}, player L{} (dmg {}, def {}, hp {}) vs enemy L{}",
            config.runs,
            config.seed,
            config.level,
            derived.damage,
            derived.defense,
            player.max_hp,
            enemy_level,
        );
    }

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut stats = SimStats::default();

    for battle in 0..config.runs {
        let enemy = generate_enemy(enemy_level, &mut rng);
        let outcome = resolve_combat(&player, &enemy, &mut rng);

        if battle == 0 && config.verbose {
            for line in render_log(&outcome, &player.name, &enemy.name) {
                println!("  {line}");
            }
            let service = service_from_settings(&Settings::from_env());
            let request = NarrativeRequest::new(&player, &enemy.name, &outcome);
            println!("  {}", narrate_or_fallback(service.as_ref(), &request));
        }

        stats.battles += 1;
        stats.total_rounds += outcome.rounds as u64;
        stats.total_dealt += outcome.player_damage_dealt;
        stats.total_taken += outcome.enemy_damage_dealt;
        if outcome.won {
            stats.wins += 1;
        }
        if outcome.hit_round_limit() {
            stats.round_limit_hits += 1;
        }
    }

    if !config.quiet {
        println!("Battles:         {}", stats.battles);
        println!("Wins:            {}", stats.wins);
        println!("Round-cap ends:  {}", stats.round_limit_hits);
    }
    println!(
        "win_rate={:.1}% avg_rounds={:.2} avg_dealt={:.1} avg_taken={:.1}",
        stats.win_rate(),
        stats.per_battle(stats.total_rounds),
        stats.per_battle(stats.total_dealt),
        stats.per_battle(stats.total_taken),
    );
}
