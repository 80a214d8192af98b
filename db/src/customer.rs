use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};

use crate::models::customer::{CustomerField, FilteredCustomerRow};

pub async fn get_customer_fields<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
) -> Res<Vec<CustomerField>> {
    sqlx::query_as::<_, CustomerField>("SELECT id, name FROM customers ORDER BY name ASC")
        .fetch_all(executor)
        .await
        .map_err(AppError::store("customers"))
}

/// Customer table rows filtered on name/email, with per-customer invoice
/// count and pending/paid sums aggregated store-side.
pub async fn get_filtered_customers<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    query: &str,
) -> Res<Vec<FilteredCustomerRow>> {
    sqlx::query_as::<_, FilteredCustomerRow>(
        r#"
        SELECT
            customers.id,
            customers.name,
            customers.email,
            customers.image_url,
            COUNT(invoices.id) AS total_invoices,
            COALESCE(SUM(CASE WHEN invoices.status = 'pending' THEN invoices.amount ELSE 0 END), 0)::bigint AS total_pending,
            COALESCE(SUM(CASE WHEN invoices.status = 'paid' THEN invoices.amount ELSE 0 END), 0)::bigint AS total_paid
        FROM customers
        LEFT JOIN invoices ON customers.id = invoices.customer_id
        WHERE
            customers.name ILIKE $1 OR
            customers.email ILIKE $1
        GROUP BY customers.id, customers.name, customers.email, customers.image_url
        ORDER BY customers.name ASC
        "#,
    )
    .bind(format!("%{}%", query))
    .fetch_all(executor)
    .await
    .map_err(AppError::store("customers"))
}

pub async fn get_customer_count<'e, E: Executor<'e, Database = Postgres>>(executor: E) -> Res<i64> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM customers")
        .fetch_one(executor)
        .await
        .map_err(AppError::store("customers"))
}
