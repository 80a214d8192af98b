use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::models::invoice::{
    FilteredInvoiceRow, InvoiceFormRow, InvoiceStatusTotals, LatestInvoiceRow,
};

fn like_pattern(query: &str) -> String {
    format!("%{}%", query)
}

/// One page of the invoice search. A row matches when `query` is a
/// case-insensitive substring of the customer name or email, the amount or
/// date rendered as text, or the status; the empty query matches every row.
/// `COUNT(*) OVER ()` attaches the full match count to each returned row so
/// the page and the total come back in a single round trip.
pub async fn get_filtered_invoices<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    query: &str,
    limit: i64,
    offset: i64,
) -> Res<Vec<FilteredInvoiceRow>> {
    sqlx::query_as::<_, FilteredInvoiceRow>(
        r#"
        SELECT
            invoices.id,
            invoices.amount,
            invoices.date,
            invoices.status,
            customers.name,
            customers.email,
            customers.image_url,
            COUNT(*) OVER () AS total_count
        FROM invoices
        JOIN customers ON invoices.customer_id = customers.id
        WHERE
            customers.name ILIKE $1 OR
            customers.email ILIKE $1 OR
            invoices.amount::text ILIKE $1 OR
            invoices.date::text ILIKE $1 OR
            invoices.status ILIKE $1
        ORDER BY invoices.date DESC, invoices.id
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(like_pattern(query))
    .bind(limit)
    .bind(offset)
    .fetch_all(executor)
    .await
    .map_err(AppError::store("invoices"))
}

/// Total match count for the same predicate as [`get_filtered_invoices`].
/// Used when a page lands past the match set, where the window aggregate is
/// unavailable.
pub async fn count_filtered_invoices<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    query: &str,
) -> Res<i64> {
    sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*)
        FROM invoices
        JOIN customers ON invoices.customer_id = customers.id
        WHERE
            customers.name ILIKE $1 OR
            customers.email ILIKE $1 OR
            invoices.amount::text ILIKE $1 OR
            invoices.date::text ILIKE $1 OR
            invoices.status ILIKE $1
        "#,
    )
    .bind(like_pattern(query))
    .fetch_one(executor)
    .await
    .map_err(AppError::store("invoices"))
}

pub async fn get_latest_invoices<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
) -> Res<Vec<LatestInvoiceRow>> {
    sqlx::query_as::<_, LatestInvoiceRow>(
        r#"
        SELECT invoices.id, invoices.amount, customers.name, customers.image_url, customers.email
        FROM invoices
        JOIN customers ON invoices.customer_id = customers.id
        ORDER BY invoices.date DESC, invoices.id
        LIMIT $1
        "#,
    )
    .bind(crate::ITEMS_PER_PAGE)
    .fetch_all(executor)
    .await
    .map_err(AppError::store("invoices"))
}

/// An absent row is a valid empty result; the caller decides how to surface it.
pub async fn get_invoice_by_id<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    invoice_id: Uuid,
) -> Res<Option<InvoiceFormRow>> {
    sqlx::query_as::<_, InvoiceFormRow>(
        r#"
        SELECT invoices.id, invoices.customer_id, invoices.amount, invoices.status
        FROM invoices
        WHERE invoices.id = $1
        "#,
    )
    .bind(invoice_id)
    .fetch_optional(executor)
    .await
    .map_err(AppError::store("invoice"))
}

pub async fn get_invoice_count<'e, E: Executor<'e, Database = Postgres>>(executor: E) -> Res<i64> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM invoices")
        .fetch_one(executor)
        .await
        .map_err(AppError::store("invoices"))
}

/// Paid/pending sums in a single pass; empty table coalesces to zero.
pub async fn get_invoice_status_totals<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
) -> Res<InvoiceStatusTotals> {
    sqlx::query_as::<_, InvoiceStatusTotals>(
        r#"
        SELECT
            COALESCE(SUM(CASE WHEN status = 'paid' THEN amount ELSE 0 END), 0)::bigint AS paid,
            COALESCE(SUM(CASE WHEN status = 'pending' THEN amount ELSE 0 END), 0)::bigint AS pending
        FROM invoices
        "#,
    )
    .fetch_one(executor)
    .await
    .map_err(AppError::store("invoices"))
}
