use serde::Serialize;
use uuid::Uuid;

/// One display row of the customer table, aggregates currency-formatted.
#[derive(Debug, Serialize)]
pub struct CustomersTableRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub total_invoices: i64,
    pub total_pending: String,
    pub total_paid: String,
}
