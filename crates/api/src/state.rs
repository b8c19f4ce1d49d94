use std::sync::Arc;

use automind_db::store::LeadStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Lead storage chosen at startup (volatile or durable).
    pub store: Arc<dyn LeadStore>,
}
