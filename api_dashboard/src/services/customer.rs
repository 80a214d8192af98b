use common::{error::Res, format::format_currency};
use db::models::customer::{CustomerField, FilteredCustomerRow};
use sqlx::PgPool;

use crate::dtos::customer::CustomersTableRow;

pub async fn get_customer_fields(pool: &PgPool) -> Res<Vec<CustomerField>> {
    db::customer::get_customer_fields(pool).await
}

pub async fn get_filtered_customers(pool: &PgPool, query: &str) -> Res<Vec<CustomersTableRow>> {
    let rows = db::customer::get_filtered_customers(pool, query).await?;
    Ok(rows.into_iter().map(to_table_row).collect())
}

fn to_table_row(row: FilteredCustomerRow) -> CustomersTableRow {
    CustomersTableRow {
        id: row.id,
        name: row.name,
        email: row.email,
        image_url: row.image_url,
        total_invoices: row.total_invoices,
        total_pending: format_currency(row.total_pending),
        total_paid: format_currency(row.total_paid),
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    #[test]
    fn customer_row_mapping_formats_aggregates() {
        let view = to_table_row(FilteredCustomerRow {
            id: Uuid::new_v4(),
            name: "Lee Robinson".to_string(),
            email: "lee@robinson.com".to_string(),
            image_url: "/customers/lee-robinson.png".to_string(),
            total_invoices: 3,
            total_pending: 0,
            total_paid: 250000,
        });

        assert_eq!(view.total_invoices, 3);
        assert_eq!(view.total_pending, "$0.00");
        assert_eq!(view.total_paid, "$2,500.00");
    }
}
