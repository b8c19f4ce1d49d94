//! Repository for the `leads` table.
//!
//! Leads are write-once, so only insert and read operations exist. The
//! database assigns `id` and `created_at`.

use automind_core::lead::{Lead, NewLead};
use automind_core::types::LeadId;
use sqlx::PgPool;

use crate::models::lead::LeadRow;

/// Column list for `leads` queries.
const COLUMNS: &str = "\
    id, company_name, industry, company_size, position, \
    challenges, main_challenge, impact_level, \
    interested_solutions, motivation, \
    full_name, email, phone, preferred_time, budget, urgency, comments, \
    created_at";

/// Provides data access for leads.
pub struct LeadRepo;

impl LeadRepo {
    /// Insert a lead, letting the database generate `id` and `created_at`.
    pub async fn create(pool: &PgPool, input: &NewLead) -> Result<Lead, sqlx::Error> {
        let query = format!(
            "INSERT INTO leads \
                 (company_name, industry, company_size, position, \
                  challenges, main_challenge, impact_level, \
                  interested_solutions, motivation, \
                  full_name, email, phone, preferred_time, budget, urgency, comments) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16) \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, LeadRow>(&query)
            .bind(&input.company_name)
            .bind(&input.industry)
            .bind(&input.company_size)
            .bind(&input.position)
            .bind(&input.challenges)
            .bind(&input.main_challenge)
            .bind(&input.impact_level)
            .bind(&input.interested_solutions)
            .bind(&input.motivation)
            .bind(&input.full_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.preferred_time)
            .bind(&input.budget)
            .bind(&input.urgency)
            .bind(&input.comments)
            .fetch_one(pool)
            .await?;
        Ok(row.into())
    }

    /// Find a lead by its ID.
    pub async fn find_by_id(pool: &PgPool, id: LeadId) -> Result<Option<Lead>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM leads WHERE id = $1");
        let row = sqlx::query_as::<_, LeadRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Lead::from))
    }

    /// List all leads, newest first. `seq` breaks `created_at` ties so the
    /// most recent insert wins.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Lead>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM leads ORDER BY created_at DESC, seq DESC");
        let rows = sqlx::query_as::<_, LeadRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Lead::from).collect())
    }
}
