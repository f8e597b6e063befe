/// Game configuration constants and tunable parameters.
///
/// Every number here is illustrative sample data for the dashboard; none of
/// it is balanced.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Stamina spent to start a hunt (before weather scaling).
    pub hunt_stamina_cost: u32,
    /// Concurrent hunts allowed. Must not exceed [`Self::MAX_ACTIVE_HUNTS`].
    pub max_active_hunts: usize,
    /// Upper bound of the combined speed bonus, in percent.
    pub speed_bonus_cap_pct: u32,
    /// Shortest possible hunt, as a percentage of the monster's base time.
    pub min_hunt_time_pct: u32,
    /// Hard cap on kills rolled by a single hunt.
    pub max_kills_per_hunt: u32,
    /// Hunt speed granted by each attack speed level, in percent.
    pub speed_pct_per_skill_level: u32,
    /// Drop rate granted by each resource gathering level, in percent.
    pub drop_rate_pct_per_skill_level: u32,
    /// Stamina regeneration granted by each stamina recovery level, in percent.
    pub regen_pct_per_skill_level: u32,
    /// Highest level purchasable in the skill tree.
    pub max_skill_level: u32,
    /// Gold cost per target level when buying a skill level.
    pub skill_cost_per_level: u64,
    pub max_active_quests: usize,
    /// Defeats of a monster required before auto-hunt can be enabled.
    pub auto_hunt_threshold: u32,
    /// Number of hunt records retained in history.
    pub history_capacity: usize,
    pub starting_gold: u64,
    pub starting_stamina: u32,
    pub stamina_regen_per_minute: u32,
    /// Experience required for the second level.
    pub base_xp_to_next_level: u64,
    /// Growth of the xp threshold on each level-up, in percent.
    pub xp_growth_pct: u64,
    /// Drop rate bonus of a fully explored biome, in percent.
    pub explored_biome_drop_bonus_pct: u32,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Capacity of the active hunt list.
    pub const MAX_ACTIVE_HUNTS: usize = 3;
    /// Slots shown by the inventory grid.
    pub const INVENTORY_GRID_SLOTS: usize = 24;
    /// Skill progress is stored in hundredths of a level.
    pub const SKILL_POINTS_PER_LEVEL: u32 = 100;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_HUNT_STAMINA_COST: u32 = 10;
    pub const DEFAULT_SPEED_BONUS_CAP_PCT: u32 = 80;
    pub const DEFAULT_MIN_HUNT_TIME_PCT: u32 = 20;
    pub const DEFAULT_MAX_KILLS: u32 = 8;

    pub fn new() -> Self {
        Self {
            hunt_stamina_cost: Self::DEFAULT_HUNT_STAMINA_COST,
            max_active_hunts: Self::MAX_ACTIVE_HUNTS,
            speed_bonus_cap_pct: Self::DEFAULT_SPEED_BONUS_CAP_PCT,
            min_hunt_time_pct: Self::DEFAULT_MIN_HUNT_TIME_PCT,
            max_kills_per_hunt: Self::DEFAULT_MAX_KILLS,
            speed_pct_per_skill_level: 5,
            drop_rate_pct_per_skill_level: 10,
            regen_pct_per_skill_level: 15,
            max_skill_level: 10,
            skill_cost_per_level: 500,
            max_active_quests: 5,
            auto_hunt_threshold: 10,
            history_capacity: 50,
            starting_gold: 25_000,
            starting_stamina: 100,
            stamina_regen_per_minute: 5,
            base_xp_to_next_level: 1_000,
            xp_growth_pct: 115,
            explored_biome_drop_bonus_pct: 10,
        }
    }

    /// Concurrent hunt limit clamped to the list capacity.
    pub fn active_hunt_limit(&self) -> usize {
        self.max_active_hunts.min(Self::MAX_ACTIVE_HUNTS)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
