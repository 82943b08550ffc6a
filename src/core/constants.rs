// Combat
pub const MAX_COMBAT_ROUNDS: u32 = 40;
pub const BASE_HIT_CHANCE: f64 = 50.0;
pub const HIT_CHANCE_PER_SKILL: f64 = 2.0;
pub const DODGE_PER_ENEMY_LEVEL: f64 = 3.0;
pub const CRIT_CHANCE_PER_LUCK: f64 = 1.5;
pub const CRIT_CHANCE_CAP: f64 = 50.0;
pub const CRIT_MULTIPLIER: f64 = 1.5;
pub const MITIGATION_PER_SKILL: f64 = 0.5;
pub const MITIGATION_CAP: f64 = 40.0;
pub const ENEMY_BASE_HIT_CHANCE: f64 = 65.0;
pub const ENEMY_HIT_CHANCE_PER_LEVEL: f64 = 2.0;
pub const MIN_PHYSICAL_DAMAGE: f64 = 1.0;

// Stat aggregation
pub const UNARMED_DAMAGE: u32 = 1;
pub const WEAPON_ART_DAMAGE_FACTOR: f64 = 0.5;
pub const BASE_HP: u32 = 100;
pub const HP_PER_CONSTITUTION: u32 = 10;
pub const BASE_ENERGY: u32 = 100;
pub const STARTING_STAT_VALUE: u32 = 5;
pub const NUM_STATS: usize = 6;
pub const STAT_UPGRADE_BASE_COST: u64 = 10;

// Leveling
pub const MAX_CURVE_LEVEL: u32 = 300;
pub const LEVELS_PER_REGION: u32 = 5;
pub const MAX_REGION_INDEX: u32 = 39;
pub const REGION_BASE_QUEST_XP: f64 = 5.0;
pub const REGION_QUEST_XP_STEP: f64 = 5.8;
pub const BASE_TASKS_PER_LEVEL: f64 = 6.0;
pub const TASKS_PER_REGION: f64 = 0.23;
pub const LATE_GAME_LEVEL: u32 = 200;
pub const LATE_GAME_BASE_TASKS: f64 = 15.0;
pub const LATE_GAME_TASKS_PER_LEVEL: f64 = 0.05;

// Reward scaling
pub const SILVER_MULT_PER_LEVEL: f64 = 0.25;
pub const XP_MULT_PER_LEVEL: f64 = 0.05;
pub const REWARD_VARIANCE_MIN: f64 = 0.8;
pub const REWARD_VARIANCE_MAX: f64 = 1.2;

// Karma
pub const KARMA_MIN: i32 = -100;
pub const KARMA_MAX: i32 = 100;

// Inventory
pub const STARTING_INVENTORY_SLOTS: usize = 10;
pub const MAX_INVENTORY_SLOTS: usize = 40;
pub const INVENTORY_SLOT_COST: u64 = 50;

// Enhancement, indexed by target level - 1
pub const MAX_ENHANCEMENT_LEVEL: u8 = 9;
pub const ENHANCEMENT_SUCCESS_RATES: [f64; 9] = [
    100.0, 100.0, 90.0, 75.0, 60.0, // +1-5
    40.0, 25.0, 10.0, 5.0, // +6-9
];
pub const ENHANCEMENT_BONUS_MULTIPLIERS: [f64; 9] = [
    0.10, 0.12, 0.15, 0.18, 0.22, // +1-5
    0.26, 0.30, 0.45, 0.60, // +6-9
];
pub const ENHANCEMENT_COST_GROWTH: f64 = 1.5;

// Shop scaling (per player level)
pub const SHOP_WEAPON_BONUS_PER_LEVEL: f64 = 0.25;
pub const SHOP_ARMOR_BONUS_PER_LEVEL: f64 = 0.15;
pub const SHOP_MOUNT_BONUS_PER_LEVEL: f64 = 0.2;
pub const SHOP_ARTIFACT_BONUS_PER_LEVEL: f64 = 0.1;
pub const SHOP_PRICE_PER_LEVEL: f64 = 0.05;
pub const SHOP_TIER_LEVELS: u32 = 5;
pub const SELL_PRICE_DIVISOR: u64 = 2;

// Kingdom raids
pub const RAID_MIN_CHANCE: f64 = 5.0;
pub const RAID_MAX_CHANCE: f64 = 95.0;

// Save
pub const SAVE_VERSION: u32 = 1;
