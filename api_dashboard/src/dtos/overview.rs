use serde::Serialize;

/// Aggregate dashboard metrics for the overview cards.
#[derive(Debug, Serialize)]
pub struct CardData {
    pub number_of_invoices: i64,
    pub number_of_customers: i64,
    pub total_paid_invoices: String,
    pub total_pending_invoices: String,
}
