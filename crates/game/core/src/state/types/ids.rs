//! Identifier newtypes.
//!
//! Content is keyed by human-readable slugs (`shadow-wolf`, `iron-ore`) so
//! data files stay diffable. Each kind gets its own newtype so a monster id can
//! never be passed where an item id is expected.

macro_rules! slug_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl core::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

slug_id!(
    /// Monster template identifier.
    MonsterId
);
slug_id!(
    /// Item definition identifier. Stacks of different rarity share it.
    ItemId
);
slug_id!(BiomeId);
slug_id!(RecipeId);
slug_id!(QuestId);
slug_id!(AchievementId);
slug_id!(
    /// Marketplace listing identifier.
    ListingId
);

/// Sequential identifier of a hunt, allocated by [`GameState`](crate::state::GameState).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HuntId(pub u64);

impl core::fmt::Display for HuntId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "hunt#{}", self.0)
    }
}
