//! User intents raised by panels and the layout chrome.
use game_core::{
    Action, BiomeId, Difficulty, EquipmentSlot, HuntId, ItemKey, LayoutError, LayoutTree,
    ListingId, MonsterId, PanelId, PanelKind, QuestId, RecipeId, SkillKind, SplitDirection,
};

/// Button presses inside a panel. Each maps to exactly one game action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PanelIntent {
    StartHunt {
        monster: MonsterId,
        difficulty: Difficulty,
    },
    CollectHunt(HuntId),
    ToggleAutoHunt {
        monster: MonsterId,
        enabled: bool,
    },
    Craft(RecipeId),
    UpgradeGear(ItemKey),
    Buy(ListingId),
    UpgradeSkill(SkillKind),
    Equip(ItemKey),
    Unequip(EquipmentSlot),
    AcceptQuest(QuestId),
    TurnInQuest(QuestId),
    AbandonQuest(QuestId),
    Explore(BiomeId),
}

impl PanelIntent {
    pub fn into_action(self) -> Action {
        match self {
            Self::StartHunt {
                monster,
                difficulty,
            } => Action::start_hunt(monster, difficulty),
            Self::CollectHunt(hunt) => Action::complete_hunt(hunt),
            Self::ToggleAutoHunt { monster, enabled } => Action::set_auto_hunt(monster, enabled),
            Self::Craft(recipe) => Action::craft(recipe),
            Self::UpgradeGear(item) => Action::upgrade_gear(item),
            Self::Buy(listing) => Action::buy(listing),
            Self::UpgradeSkill(skill) => Action::upgrade_skill(skill),
            Self::Equip(item) => Action::equip(item),
            Self::Unequip(slot) => Action::unequip(slot),
            Self::AcceptQuest(quest) => Action::accept_quest(quest),
            Self::TurnInQuest(quest) => Action::complete_quest(quest),
            Self::AbandonQuest(quest) => Action::abandon_quest(quest),
            Self::Explore(biome) => Action::explore(biome),
        }
    }
}

impl From<PanelIntent> for Action {
    fn from(intent: PanelIntent) -> Self {
        intent.into_action()
    }
}

/// Edits to the panel tree from the split, close and resize controls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutCommand {
    Split {
        panel: PanelId,
        direction: SplitDirection,
    },
    SetKind {
        panel: PanelId,
        kind: PanelKind,
    },
    Remove(PanelId),
    Resize {
        container: PanelId,
        sizes: Vec<u8>,
    },
}

impl LayoutCommand {
    pub fn apply(&self, tree: &mut LayoutTree) -> Result<(), LayoutError> {
        match self {
            Self::Split { panel, direction } => tree.split(panel, *direction),
            Self::SetKind { panel, kind } => tree.set_kind(panel, *kind),
            Self::Remove(panel) => tree.remove(panel),
            Self::Resize { container, sizes } => tree.resize(container, sizes),
        }
    }
}
