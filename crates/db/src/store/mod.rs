//! Storage abstraction for leads.
//!
//! [`LeadStore`] is the only interface the API sees. Two backends implement
//! it: [`MemoryLeadStore`] (volatile, per process) and [`PgLeadStore`]
//! (durable, Postgres). [`open_store`] picks one at startup from the presence
//! of a database URL; the choice is fixed for the life of the process.

use std::sync::Arc;

use async_trait::async_trait;
use automind_core::lead::{Lead, NewLead};
use serde::Serialize;

pub mod memory;
pub mod postgres;

pub use memory::MemoryLeadStore;
pub use postgres::PgLeadStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Which backend a store uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Volatile,
    Durable,
}

impl StorageBackend {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Volatile => "volatile",
            Self::Durable => "durable",
        }
    }
}

/// Persists and retrieves leads.
#[async_trait]
pub trait LeadStore: Send + Sync {
    /// Store a validated payload under a fresh id and creation timestamp.
    async fn create_lead(&self, input: NewLead) -> Result<Lead, StoreError>;

    /// Fetch one lead. `Ok(None)` when no lead has this id, including ids
    /// that are not valid UUIDs.
    async fn get_lead(&self, id: &str) -> Result<Option<Lead>, StoreError>;

    /// All leads, `created_at` descending, most recent insert first on ties.
    async fn get_all_leads(&self) -> Result<Vec<Lead>, StoreError>;

    fn backend(&self) -> StorageBackend;

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Build the store for this process.
///
/// With a database URL: connect, verify, and migrate, failing on any error
/// so the server never starts half-initialised. Without one: an empty
/// in-memory store.
pub async fn open_store(database_url: Option<&str>) -> Result<Arc<dyn LeadStore>, StoreError> {
    match database_url {
        Some(url) => {
            let store = PgLeadStore::connect(url).await?;
            Ok(Arc::new(store))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, leads are kept in memory and lost on restart");
            Ok(Arc::new(MemoryLeadStore::new()))
        }
    }
}
