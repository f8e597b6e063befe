use crate::env::{GameEnv, MarketListing, OracleError};
use crate::state::{GameState, InventoryItem, ListingId};

use super::{ActionError, ActionTransition};

/// Buys a marketplace listing. Listings are not depleted by purchases.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuyAction {
    pub listing: ListingId,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Purchase {
    pub listing: ListingId,
    pub item: InventoryItem,
    pub price: u64,
}

impl BuyAction {
    fn listing<'e>(&self, env: &GameEnv<'e>) -> Result<&'e MarketListing, ActionError> {
        let listing = env
            .economy()?
            .listing(&self.listing)
            .ok_or_else(|| OracleError::ListingNotFound(self.listing.clone()))?;
        Ok(listing)
    }

    fn goods(&self, env: &GameEnv<'_>) -> Result<(u64, InventoryItem), ActionError> {
        let listing = self.listing(env)?;
        let definition = env
            .catalog()?
            .item(&listing.item)
            .ok_or_else(|| OracleError::ItemNotFound(listing.item.clone()))?;
        Ok((listing.price, definition.instantiate(listing.quantity)))
    }
}

impl ActionTransition for BuyAction {
    type Error = ActionError;
    type Result = Purchase;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let (price, _) = self.goods(env)?;
        if state.gold < price {
            return Err(ActionError::InsufficientGold {
                required: price,
                available: state.gold,
            });
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<Purchase, Self::Error> {
        let (price, item) = self.goods(env)?;
        if !state.spend_gold(price) {
            return Err(ActionError::InsufficientGold {
                required: price,
                available: state.gold,
            });
        }
        state.inventory.add(item.clone());

        tracing::debug!(listing = %self.listing, price, "listing purchased");
        Ok(Purchase {
            listing: self.listing.clone(),
            item,
            price,
        })
    }
}
