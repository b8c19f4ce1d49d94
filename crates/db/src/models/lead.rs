//! Row mapping for the `leads` table.

use automind_core::lead::Lead;
use automind_core::types::{LeadId, Timestamp};
use sqlx::FromRow;

/// A row from the `leads` table. The internal `seq` column is never selected.
#[derive(Debug, Clone, FromRow)]
pub struct LeadRow {
    pub id: LeadId,
    pub company_name: String,
    pub industry: String,
    pub company_size: String,
    pub position: String,
    pub challenges: Vec<String>,
    pub main_challenge: Option<String>,
    pub impact_level: Option<String>,
    pub interested_solutions: Vec<String>,
    pub motivation: Option<String>,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub preferred_time: Option<String>,
    pub budget: Option<String>,
    pub urgency: Option<String>,
    pub comments: Option<String>,
    pub created_at: Timestamp,
}

impl From<LeadRow> for Lead {
    fn from(row: LeadRow) -> Self {
        Lead {
            id: row.id,
            company_name: row.company_name,
            industry: row.industry,
            company_size: row.company_size,
            position: row.position,
            challenges: row.challenges,
            main_challenge: row.main_challenge,
            impact_level: row.impact_level,
            interested_solutions: row.interested_solutions,
            motivation: row.motivation,
            full_name: row.full_name,
            email: row.email,
            phone: row.phone,
            preferred_time: row.preferred_time,
            budget: row.budget,
            urgency: row.urgency,
            comments: row.comments,
            created_at: row.created_at,
        }
    }
}
