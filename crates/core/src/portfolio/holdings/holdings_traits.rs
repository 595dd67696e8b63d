use async_trait::async_trait;

use super::holdings_model::{Holding, NewHolding};
use crate::errors::Result;

/// Owned collection of holdings for one portfolio.
///
/// Implementations serialize `add`/`remove` against each other and against
/// `list`, so a reader never observes a holding mid-removal.
pub trait HoldingStoreTrait: Send + Sync {
    /// Insert a validated holding.
    ///
    /// Fails with `DuplicateSymbol` if the symbol is already held and with
    /// `CapacityExceeded` if the store is full; the store is unchanged on
    /// failure.
    fn add(&self, holding: Holding) -> Result<Holding>;

    /// Remove the holding with this symbol (case-insensitive).
    fn remove(&self, symbol: &str) -> Result<()>;

    /// Snapshot of all holdings in insertion order.
    fn list(&self) -> Result<Vec<Holding>>;

    fn get(&self, symbol: &str) -> Result<Option<Holding>>;

    fn count(&self) -> Result<usize>;

    /// Configured cap, `None` when unbounded.
    fn max_holdings(&self) -> Option<usize>;
}

#[async_trait]
pub trait HoldingsServiceTrait: Send + Sync {
    fn get_holdings(&self) -> Result<Vec<Holding>>;

    fn get_holding(&self, symbol: &str) -> Result<Option<Holding>>;

    async fn add_holding(&self, new_holding: NewHolding) -> Result<Holding>;

    async fn remove_holding(&self, symbol: &str) -> Result<()>;
}
