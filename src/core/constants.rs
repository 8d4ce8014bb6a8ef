// Player base stats and growth
pub const PLAYER_BASE_HP: i32 = 100;
pub const PLAYER_BASE_ATTACK: i32 = 10;
pub const PLAYER_BASE_DEFENSE: i32 = 5;
pub const MAX_HP_PER_STAGE_CLEAR: i32 = 30;
pub const ATTACK_GROWTH_MIN: i32 = 5;
pub const ATTACK_GROWTH_MAX: i32 = 9;
pub const DEFENSE_GROWTH_MIN: i32 = 3;
pub const DEFENSE_GROWTH_MAX: i32 = 6;

// Healing
pub const VICTORY_HEAL: i32 = 20;
pub const GROWTH_HEAL: i32 = 20;
pub const BLOCK_POTION_HEAL: i32 = 30;

// Critical hits
pub const CRIT_BASE_CHANCE: f64 = 0.10;
pub const CRIT_CHANCE_PER_STAGE: f64 = 0.01;
pub const CRIT_MULTIPLIER: i32 = 2;

// Multi-attack
pub const MULTI_ATTACK_CHANCE: f64 = 0.20;
pub const MULTI_ATTACK_MIN_HITS: u32 = 2;
pub const MULTI_ATTACK_MAX_HITS: u32 = 3;

// Defense
pub const DEFEND_SUCCESS_CHANCE: f64 = 0.50;

// Persistence check (surviving a lethal blow)
pub const PERSIST_CHANCE: f64 = 0.50;
pub const PERSIST_BASE_HP: f64 = 50.0;
pub const PERSIST_HP_PER_STAGE: f64 = 7.5;

// Monster stats by stage
pub const MONSTER_BASE_HP: i32 = 50;
pub const MONSTER_HP_PER_STAGE: i32 = 10;
pub const MONSTER_BASE_ATTACK: i32 = 5;
pub const MONSTER_GROWTH_FLAT_HP: i32 = 10;
pub const MONSTER_COUNTER_BASE_CHANCE: f64 = 0.10;
pub const MONSTER_COUNTER_CHANCE_PER_STAGE: f64 = 0.01;
pub const MONSTER_COUNTER_CHANCE_CAP: f64 = 0.50;

// Reflected counter damage
pub const COUNTER_REFLECT_MULTIPLIER: f64 = 1.5;

// Per-turn action chances: (base, cap). A fresh increment in
// [STAGE_INCREMENT_MIN, STAGE_INCREMENT_MAX) is drawn per chance per turn
// and scaled by (stage - 1). Attack and multi-attack chances are shown in
// the prompt but never rolled; flee and counter are rolled.
pub const ATTACK_CHANCE: (f64, f64) = (0.20, 0.35);
pub const MULTI_ATTACK_DISPLAY_CHANCE: (f64, f64) = (0.15, 0.30);
pub const FLEE_CHANCE: (f64, f64) = (0.03, 0.10);
pub const COUNTER_CHANCE: (f64, f64) = (0.25, 0.40);
pub const STAGE_INCREMENT_MIN: f64 = 0.01;
pub const STAGE_INCREMENT_MAX: f64 = 0.03;

// Campaign
pub const FINAL_STAGE: u32 = 100;
