use serde::Serialize;

/// Precomputed monthly revenue, read-only reporting feed.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Revenue {
    pub month: String,
    pub revenue: i32,
}
