//! Change tracking for selective panel refresh.
//!
//! Every action outcome maps to the [`UpdateScope`] it touches, and every
//! [`PanelKind`] to the scope it reads, so a host only rebuilds the panels
//! an event actually affected.

use bitflags::bitflags;
use game_core::{ActionOutcome, ExecutionOutcome, PanelKind};

bitflags! {
    /// Tracks which parts of the game a change touched.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct UpdateScope: u32 {
        /// Active hunts and stamina.
        const HUNTS        = 0b0000_0000_0001;
        const INVENTORY    = 0b0000_0000_0010;
        const GOLD         = 0b0000_0000_0100;
        const SKILLS       = 0b0000_0000_1000;
        /// Level, xp, equipped gear, counters and reputation.
        const PROFILE      = 0b0000_0001_0000;
        const HISTORY      = 0b0000_0010_0000;
        const QUESTS       = 0b0000_0100_0000;
        const ACHIEVEMENTS = 0b0000_1000_0000;
        /// Weather and exploration.
        const WORLD        = 0b0001_0000_0000;
        /// Panel tree shape or content tags.
        const LAYOUT       = 0b0010_0000_0000;

        const ALL = Self::HUNTS.bits()
                  | Self::INVENTORY.bits()
                  | Self::GOLD.bits()
                  | Self::SKILLS.bits()
                  | Self::PROFILE.bits()
                  | Self::HISTORY.bits()
                  | Self::QUESTS.bits()
                  | Self::ACHIEVEMENTS.bits()
                  | Self::WORLD.bits()
                  | Self::LAYOUT.bits();
    }
}

impl Default for UpdateScope {
    fn default() -> Self {
        Self::empty()
    }
}

impl UpdateScope {
    /// State a panel of `kind` renders from.
    pub fn for_panel(kind: PanelKind) -> Self {
        match kind {
            PanelKind::MonsterHunts => Self::HUNTS | Self::SKILLS | Self::PROFILE | Self::WORLD,
            PanelKind::Inventory => Self::INVENTORY | Self::GOLD | Self::PROFILE,
            PanelKind::SkillTree => Self::SKILLS | Self::GOLD,
            PanelKind::Marketplace => Self::GOLD,
            PanelKind::Crafting => Self::INVENTORY | Self::PROFILE,
            PanelKind::GearUpgrading => Self::INVENTORY | Self::GOLD,
            PanelKind::HuntHistory => Self::HISTORY | Self::PROFILE,
            PanelKind::PlayerProfile => Self::PROFILE | Self::GOLD,
            PanelKind::Achievements => Self::ACHIEVEMENTS | Self::PROFILE | Self::SKILLS,
            PanelKind::Quests => Self::QUESTS | Self::INVENTORY | Self::PROFILE | Self::SKILLS,
            PanelKind::Biomes => Self::WORLD,
            PanelKind::Empty => Self::empty(),
        }
    }

    /// State an executed action changed.
    pub fn of_execution(execution: &ExecutionOutcome) -> Self {
        let mut scope = Self::of_outcome(&execution.outcome);
        if execution.level_ups > 0 || !execution.unlocked_monsters.is_empty() {
            scope |= Self::PROFILE | Self::HUNTS;
        }
        if !execution.achievements.is_empty() {
            scope |= Self::ACHIEVEMENTS;
        }
        scope
    }

    pub fn of_outcome(outcome: &ActionOutcome) -> Self {
        match outcome {
            ActionOutcome::HuntStarted(_) => Self::HUNTS,
            ActionOutcome::HuntCompleted(_) => {
                Self::HUNTS
                    | Self::INVENTORY
                    | Self::GOLD
                    | Self::SKILLS
                    | Self::PROFILE
                    | Self::HISTORY
                    | Self::QUESTS
            }
            ActionOutcome::AutoHuntSet { .. } => Self::HUNTS | Self::PROFILE,
            ActionOutcome::Crafted(_) => Self::INVENTORY | Self::PROFILE,
            ActionOutcome::Upgraded(_) | ActionOutcome::Purchased(_) => {
                Self::INVENTORY | Self::GOLD
            }
            ActionOutcome::SkillUpgraded(_) => Self::SKILLS | Self::GOLD,
            ActionOutcome::EquipmentChanged(_) => Self::INVENTORY | Self::PROFILE | Self::HUNTS,
            ActionOutcome::QuestAccepted(_) | ActionOutcome::QuestAbandoned(_) => Self::QUESTS,
            ActionOutcome::QuestCompleted(_) => {
                Self::QUESTS | Self::GOLD | Self::INVENTORY | Self::PROFILE
            }
            ActionOutcome::Explored(_) => Self::WORLD,
            ActionOutcome::StaminaRegenerated { .. } => Self::HUNTS,
            ActionOutcome::WeatherAdvanced(_) => Self::WORLD | Self::HUNTS,
        }
    }

    /// Whether a panel of `kind` must be rebuilt for this change.
    pub fn affects(self, kind: PanelKind) -> bool {
        self.contains(Self::LAYOUT) || self.intersects(Self::for_panel(kind))
    }
}
