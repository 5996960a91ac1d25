//! Reloadable handle around an immutable [`RateTable`]
//!
//! Readers take an `Arc` snapshot and keep using it for as long as they like.
//! A reload builds the replacement table first and only then swaps the
//! pointer, so no reader ever sees a partially populated table.

use super::table::RateTable;
use crate::currency::Currency;
use crate::data::sources::RateSource;
use crate::error::Result;
use std::sync::{Arc, PoisonError, RwLock};

/// Shared, atomically replaceable rate table
#[derive(Debug, Clone)]
pub struct SharedRateTable {
    current: Arc<RwLock<Arc<RateTable>>>,
}

impl SharedRateTable {
    pub fn new(table: RateTable) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(table))),
        }
    }

    /// Load the initial table from a rate source, expressed against `anchor`
    pub fn load<S: RateSource + ?Sized>(source: &S, anchor: Currency) -> Result<Self> {
        Ok(Self::new(RateTable::from_source(source, anchor)?))
    }

    /// Current table
    pub fn snapshot(&self) -> Arc<RateTable> {
        // The lock only guards a pointer swap; a poisoned lock still holds a complete table
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Replace the table wholesale
    pub fn replace(&self, table: RateTable) {
        let table = Arc::new(table);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = table;
    }

    /// Rebuild from `source`, keeping the current table's anchor
    ///
    /// On any load or validation failure the current table stays in place.
    pub fn reload<S: RateSource + ?Sized>(&self, source: &S) -> Result<()> {
        let anchor = self.snapshot().anchor();
        let table = RateTable::from_source(source, anchor)?;

        log::info!("Reloaded rate table: {} dates", table.len());
        self.replace(table);
        Ok(())
    }
}
