//! Marketplace listings.

use crate::state::{ItemId, ListingId};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PriceTrend {
    Up,
    Down,
    #[default]
    Stable,
}

/// A stack offered on the marketplace for a fixed price.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketListing {
    pub id: ListingId,
    pub item: ItemId,
    pub quantity: u32,
    pub price: u64,
    pub seller: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub trend: PriceTrend,
}

/// Read-only access to marketplace offers.
pub trait EconomyOracle: Send + Sync {
    fn listings(&self) -> &[MarketListing];

    fn listing(&self, id: &ListingId) -> Option<&MarketListing> {
        self.listings().iter().find(|listing| &listing.id == id)
    }
}
