//! Panel layout tree for the resizable dashboard.
//!
//! The dashboard is a tree of [`LayoutNode`]s. Leaves render one panel of
//! content selected by [`PanelKind`]; containers arrange two or more children
//! along a [`SplitDirection`]. [`LayoutTree`] owns the root and exposes the
//! split / set-kind / remove / resize operations, each of which keeps the
//! leaf-or-container invariant intact.
mod error;
mod node;
mod tree;

pub use error::LayoutError;
pub use node::{LayoutNode, PanelId};
pub use tree::LayoutTree;

/// Content rendered by a leaf panel.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[strum(serialize_all = "kebab-case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PanelKind {
    MonsterHunts,
    Inventory,
    SkillTree,
    Marketplace,
    Crafting,
    GearUpgrading,
    HuntHistory,
    PlayerProfile,
    Achievements,
    Quests,
    Biomes,
    #[default]
    Empty,
}

impl PanelKind {
    /// Title shown in the panel header selector.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::MonsterHunts => "Monster Hunts",
            Self::Inventory => "Inventory",
            Self::SkillTree => "Skill Tree",
            Self::Marketplace => "Marketplace",
            Self::Crafting => "Crafting",
            Self::GearUpgrading => "Gear Upgrading",
            Self::HuntHistory => "Hunt History",
            Self::PlayerProfile => "Player Profile",
            Self::Achievements => "Achievements",
            Self::Quests => "Quests",
            Self::Biomes => "Biomes",
            Self::Empty => "Empty",
        }
    }
}

/// Axis along which a container lays out its children.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SplitDirection {
    Horizontal,
    Vertical,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn panel_kind_string_forms_are_kebab_case() {
        assert_eq!(PanelKind::MonsterHunts.to_string(), "monster-hunts");
        assert_eq!(PanelKind::from_str("skill-tree").unwrap(), PanelKind::SkillTree);
        assert_eq!(PanelKind::default(), PanelKind::Empty);
    }

    #[test]
    fn split_direction_parses_lowercase() {
        assert_eq!(
            SplitDirection::from_str("vertical").unwrap(),
            SplitDirection::Vertical
        );
        assert!(SplitDirection::from_str("diagonal").is_err());
    }
}
