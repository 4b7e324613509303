// Derived combat stats
pub const ATTACK_PER_LEVEL: u32 = 10;
pub const DEFENSE_PER_LEVEL: u32 = 5;
pub const MIN_DAMAGE_PER_HIT: u32 = 1;

// XP and leveling
pub const XP_PER_LEVEL: u64 = 100;
pub const MAX_HP_PER_LEVEL: u32 = 20;

// Starting player
pub const STARTING_LEVEL: u32 = 1;
pub const STARTING_HP: u32 = 100;
pub const STARTING_GOLD: u32 = 0;

// Quest map placement (degrees)
pub const QUEST_LATITUDE_BOUND: f64 = 70.0;
pub const QUEST_LONGITUDE_BOUND: f64 = 180.0;

// Persistence
pub const SAVE_FILE_NAME: &str = "state.json";
pub const APP_NAME: &str = "taskquest";
