use std::collections::HashMap;

use async_trait::async_trait;
use automind_core::lead::{Lead, NewLead};
use automind_core::types::{parse_lead_id, LeadId, Timestamp};
use tokio::sync::RwLock;

use super::{LeadStore, StorageBackend, StoreError};

/// In-process lead store. Contents are lost when the process exits.
#[derive(Default)]
pub struct MemoryLeadStore {
    leads: RwLock<MemoryLeads>,
}

#[derive(Default)]
struct MemoryLeads {
    /// Leads in insertion order.
    rows: Vec<Lead>,
    /// Position of each lead in `rows`.
    index: HashMap<LeadId, usize>,
}

impl MemoryLeadStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert with an explicit creation time. The id is drawn under the
    /// write lock until it is unused, so an existing lead is never replaced.
    pub(crate) async fn insert_at(&self, input: NewLead, created_at: Timestamp) -> Lead {
        let mut leads = self.leads.write().await;

        let mut id = uuid::Uuid::new_v4();
        while leads.index.contains_key(&id) {
            id = uuid::Uuid::new_v4();
        }

        let lead = input.into_lead(id, created_at);
        let position = leads.rows.len();
        leads.rows.push(lead.clone());
        leads.index.insert(id, position);
        lead
    }
}

#[async_trait]
impl LeadStore for MemoryLeadStore {
    async fn create_lead(&self, input: NewLead) -> Result<Lead, StoreError> {
        Ok(self.insert_at(input, chrono::Utc::now()).await)
    }

    async fn get_lead(&self, id: &str) -> Result<Option<Lead>, StoreError> {
        let Some(id) = parse_lead_id(id) else {
            return Ok(None);
        };
        let leads = self.leads.read().await;
        Ok(leads.index.get(&id).map(|&pos| leads.rows[pos].clone()))
    }

    async fn get_all_leads(&self) -> Result<Vec<Lead>, StoreError> {
        let leads = self.leads.read().await;
        let mut all: Vec<Lead> = leads.rows.iter().rev().cloned().collect();
        // Stable sort keeps the newest-insert-first order among equal timestamps.
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    fn backend(&self) -> StorageBackend {
        StorageBackend::Volatile
    }
}
