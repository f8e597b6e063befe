//! Reward resolver.
//!
//! Pure functions computing hunt durations, kill counts, loot, gold/xp
//! settlement, gear upgrades and equipment bonuses. Nothing here touches
//! [`GameState`](crate::state::GameState); actions call these functions and
//! apply the returned values.
mod bonus;
mod kills;
mod loot;
mod settle;
mod timing;
mod upgrade;

pub use bonus::{EquipmentBonus, equipment_bonus};
pub use kills::{kill_bonus, roll_kill_count};
pub use loot::{KillDrops, LootDrop, LootResult, drop_rate_pct, roll_loot};
pub use settle::{HuntSettlement, SkillGain, settle_rewards};
pub use timing::{hunt_stamina_cost, modified_hunt_time, time_multiplier_pct};
pub use upgrade::{roll_upgrade, upgrade_cost, upgrade_success_pct, upgraded_item};

/// Roll streams mixed into [`compute_seed`](crate::env::compute_seed) so
/// independent rolls of one action never share a seed.
pub mod streams {
    pub const KILLS: u32 = 1;
    pub const LOOT: u32 = 2;
    pub const UPGRADE: u32 = 3;
    pub const EXPLORE: u32 = 4;
    pub const WEATHER: u32 = 5;
}
