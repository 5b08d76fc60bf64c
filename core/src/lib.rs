pub mod catalog;
pub mod config;
pub mod layout;
pub mod roster;
pub mod selection;
pub mod session;
pub mod task;
pub mod touch;

pub use catalog::{random_task, tasks_for, TaskCatalogEntry, TASK_CATALOG};
pub use config::{
    clamp_player_count, is_valid_player_count, Difficulty, GameConfig, GameType,
    ParseDifficultyError, DIFFICULTIES, PLAYER_COUNT_MAX, PLAYER_COUNT_MIN,
};
pub use layout::{hit_test, slot_center, slot_centers, Viewport, TOUCH_TARGET_RADIUS};
pub use roster::{Player, PlayerId, Roster};
pub use selection::{pick_active, SPIN_FRAMES, SPIN_TICK_MS};
pub use session::{GameSession, SettleEffect, TaskVerdict};
pub use task::{
    parse_task_body, task_url, TaskSource, TASK_FALLBACK_AI, TASK_FALLBACK_RANDOM,
};
pub use touch::{
    key_touch_id, slot_for_key, HoldGate, HoldPhase, TouchId, TouchMap, HOLD_DURATION_MS,
    HOLD_TICK_MS,
};
