use common::{error::Res, format::format_currency};
use db::models::revenue::Revenue;
use sqlx::PgPool;

use crate::dtos::overview::CardData;

/// Aggregate metrics for the overview cards. The three reads are mutually
/// independent, so they are fired concurrently and joined before the
/// results are checked.
pub async fn get_card_data(pool: &PgPool) -> Res<CardData> {
    let (invoice_count, customer_count, status_totals) = tokio::join!(
        db::invoice::get_invoice_count(pool),
        db::customer::get_customer_count(pool),
        db::invoice::get_invoice_status_totals(pool),
    );

    let number_of_invoices = invoice_count?;
    let number_of_customers = customer_count?;
    let totals = status_totals?;

    Ok(CardData {
        number_of_invoices,
        number_of_customers,
        total_paid_invoices: format_currency(totals.paid),
        total_pending_invoices: format_currency(totals.pending),
    })
}

pub async fn get_revenue(pool: &PgPool) -> Res<Vec<Revenue>> {
    db::revenue::get_revenue(pool).await
}
