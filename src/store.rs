//! Rental agreement persistence.
//!
//! Every agreement produced at checkout is saved with an id and a creation
//! timestamp. [`InMemoryAgreementStore`] keeps them in process memory.

use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::RentalAgreement;

/// A saved rental agreement.
#[derive(Debug, Clone, Serialize)]
pub struct StoredAgreement {
    /// Identifier assigned on save.
    pub id: Uuid,
    /// When the agreement was saved.
    pub created_on: DateTime<Utc>,
    /// The agreement itself.
    pub agreement: RentalAgreement,
}

/// Storage for rental agreements.
pub trait AgreementStore: Send + Sync {
    /// Saves an agreement and returns the stored record.
    fn save(&self, agreement: &RentalAgreement) -> EngineResult<StoredAgreement>;

    /// Fetches a stored agreement by id.
    fn get(&self, id: Uuid) -> EngineResult<Option<StoredAgreement>>;

    /// Returns every stored agreement in the order it was saved.
    fn list(&self) -> EngineResult<Vec<StoredAgreement>>;
}

/// An [`AgreementStore`] backed by process memory.
///
/// # Example
///
/// ```
/// use rental_engine::store::{AgreementStore, InMemoryAgreementStore};
///
/// let store = InMemoryAgreementStore::new();
/// assert!(store.list()?.is_empty());
/// # Ok::<(), rental_engine::error::EngineError>(())
/// ```
#[derive(Debug, Default)]
pub struct InMemoryAgreementStore {
    agreements: RwLock<Vec<StoredAgreement>>,
}

impl InMemoryAgreementStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> EngineError {
    EngineError::StoreError {
        message: "agreement store lock poisoned".to_string(),
    }
}

impl AgreementStore for InMemoryAgreementStore {
    fn save(&self, agreement: &RentalAgreement) -> EngineResult<StoredAgreement> {
        let stored = StoredAgreement {
            id: Uuid::new_v4(),
            created_on: Utc::now(),
            agreement: agreement.clone(),
        };

        self.agreements
            .write()
            .map_err(poisoned)?
            .push(stored.clone());
        debug!(agreement_id = %stored.id, "Saved rental agreement");

        Ok(stored)
    }

    fn get(&self, id: Uuid) -> EngineResult<Option<StoredAgreement>> {
        let agreements = self.agreements.read().map_err(poisoned)?;
        Ok(agreements.iter().find(|stored| stored.id == id).cloned())
    }

    fn list(&self) -> EngineResult<Vec<StoredAgreement>> {
        Ok(self.agreements.read().map_err(poisoned)?.clone())
    }
}
