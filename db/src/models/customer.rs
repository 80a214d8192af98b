use serde::Serialize;
use uuid::Uuid;

/// Minimal customer projection for select fields.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct CustomerField {
    pub id: Uuid,
    pub name: String,
}

/// One row of the filtered customer report, with per-customer aggregates
/// computed in the store.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FilteredCustomerRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub total_invoices: i64,
    pub total_pending: i64,
    pub total_paid: i64,
}
