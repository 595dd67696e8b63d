use async_trait::async_trait;
use log::{debug, info, warn};
use std::sync::Arc;

use super::holdings_model::{Holding, NewHolding};
use super::holdings_traits::{HoldingStoreTrait, HoldingsServiceTrait};
use super::holdings_validation::{normalize_symbol, validate_new_holding};
use crate::errors::Result;
use crate::settings::SharesPolicy;

/// Mutation façade over a holding store: validation first, then the store.
pub struct HoldingsService {
    store: Arc<dyn HoldingStoreTrait>,
    shares_policy: SharesPolicy,
}

impl HoldingsService {
    pub fn new(store: Arc<dyn HoldingStoreTrait>, shares_policy: SharesPolicy) -> Self {
        HoldingsService {
            store,
            shares_policy,
        }
    }
}

#[async_trait]
impl HoldingsServiceTrait for HoldingsService {
    fn get_holdings(&self) -> Result<Vec<Holding>> {
        self.store.list()
    }

    fn get_holding(&self, symbol: &str) -> Result<Option<Holding>> {
        self.store.get(symbol)
    }

    async fn add_holding(&self, new_holding: NewHolding) -> Result<Holding> {
        debug!("Adding holding {:?}", new_holding.symbol);

        // Pre-check against a snapshot so rule order is stable; the store
        // repeats the duplicate and capacity checks under its lock.
        let existing = self.store.list()?;
        let validated = validate_new_holding(&new_holding, &existing, self.shares_policy)
            .inspect_err(|e| warn!("Rejected holding {:?}: {}", new_holding.symbol, e))?;

        let stored = self.store.add(Holding::from_new(validated))?;
        info!(
            "Added holding {} ({} shares @ {})",
            stored.symbol, stored.shares, stored.purchase_price
        );
        Ok(stored)
    }

    async fn remove_holding(&self, symbol: &str) -> Result<()> {
        self.store.remove(symbol)?;
        info!("Removed holding {}", normalize_symbol(symbol));
        Ok(())
    }
}
