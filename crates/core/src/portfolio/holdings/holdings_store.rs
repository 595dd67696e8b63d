use log::debug;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::holdings_model::Holding;
use super::holdings_traits::HoldingStoreTrait;
use super::holdings_validation::normalize_symbol;
use crate::errors::{Error, Result, ValidationError};

/// Process-memory holding store.
///
/// Contents do not survive a restart. One lock guards the whole collection;
/// portfolios are expected to hold at most a few dozen entries.
pub struct InMemoryHoldingStore {
    holdings: RwLock<Vec<Holding>>,
    max_holdings: Option<usize>,
}

impl InMemoryHoldingStore {
    pub fn new(max_holdings: Option<usize>) -> Self {
        Self {
            holdings: RwLock::new(Vec::new()),
            max_holdings,
        }
    }

    pub fn unbounded() -> Self {
        Self::new(None)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Holding>>> {
        self.holdings
            .read()
            .map_err(|e| Error::Store(format!("read lock poisoned: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Holding>>> {
        self.holdings
            .write()
            .map_err(|e| Error::Store(format!("write lock poisoned: {}", e)))
    }
}

impl Default for InMemoryHoldingStore {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl HoldingStoreTrait for InMemoryHoldingStore {
    fn add(&self, holding: Holding) -> Result<Holding> {
        let mut holdings = self.write()?;

        if holdings.iter().any(|h| h.symbol == holding.symbol) {
            return Err(ValidationError::DuplicateSymbol(holding.symbol).into());
        }
        if let Some(max) = self.max_holdings {
            if holdings.len() >= max {
                return Err(ValidationError::CapacityExceeded(max).into());
            }
        }

        holdings.push(holding.clone());
        debug!("Stored holding {} ({} total)", holding.symbol, holdings.len());
        Ok(holding)
    }

    fn remove(&self, symbol: &str) -> Result<()> {
        let symbol = normalize_symbol(symbol);
        let mut holdings = self.write()?;

        let index = holdings
            .iter()
            .position(|h| h.symbol == symbol)
            .ok_or_else(|| Error::NotFound(symbol.clone()))?;
        holdings.remove(index);

        debug!("Removed holding {} ({} left)", symbol, holdings.len());
        Ok(())
    }

    fn list(&self) -> Result<Vec<Holding>> {
        Ok(self.read()?.clone())
    }

    fn get(&self, symbol: &str) -> Result<Option<Holding>> {
        let symbol = normalize_symbol(symbol);
        Ok(self.read()?.iter().find(|h| h.symbol == symbol).cloned())
    }

    fn count(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }

    fn max_holdings(&self) -> Option<usize> {
        self.max_holdings
    }
}
