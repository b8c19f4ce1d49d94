use async_trait::async_trait;
use automind_core::lead::{Lead, NewLead};
use automind_core::types::parse_lead_id;

use super::{LeadStore, StorageBackend, StoreError};
use crate::repositories::LeadRepo;
use crate::DbPool;

/// Postgres-backed lead store. Id and timestamp come from column defaults.
pub struct PgLeadStore {
    pool: DbPool,
}

impl PgLeadStore {
    /// Wrap an existing pool. The schema must already be migrated.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Connect, check reachability, and apply migrations.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = crate::create_pool(database_url).await?;
        tracing::info!("Database connection pool created");

        crate::health_check(&pool).await?;
        tracing::info!("Database health check passed");

        crate::run_migrations(&pool).await?;
        tracing::info!("Database migrations applied");

        Ok(Self::new(pool))
    }
}

#[async_trait]
impl LeadStore for PgLeadStore {
    async fn create_lead(&self, input: NewLead) -> Result<Lead, StoreError> {
        Ok(LeadRepo::create(&self.pool, &input).await?)
    }

    async fn get_lead(&self, id: &str) -> Result<Option<Lead>, StoreError> {
        let Some(id) = parse_lead_id(id) else {
            return Ok(None);
        };
        Ok(LeadRepo::find_by_id(&self.pool, id).await?)
    }

    async fn get_all_leads(&self) -> Result<Vec<Lead>, StoreError> {
        Ok(LeadRepo::list_all(&self.pool).await?)
    }

    fn backend(&self) -> StorageBackend {
        StorageBackend::Durable
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
