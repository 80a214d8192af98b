use common::{
    error::{AppError, Res},
    format::{format_currency, format_date_to_local},
};
use db::ITEMS_PER_PAGE;
use db::models::invoice::{FilteredInvoiceRow, InvoiceFormRow, LatestInvoiceRow};
use sqlx::PgPool;
use uuid::Uuid;

use crate::dtos::invoice::{InvoiceForm, InvoicesPage, InvoicesTableRow, LatestInvoice};

/// One page of the invoice search plus the page count for the pagination
/// control.
///
/// The page of rows and the total match count come back from a single
/// query (window aggregate). When the requested page lands past the match
/// set the window total is unavailable, so a dedicated count query restores
/// it; an empty first page means zero matches and reports 0 directly.
pub async fn get_filtered_invoices(pool: &PgPool, query: &str, page: u32) -> Res<InvoicesPage> {
    let offset = (i64::from(page) - 1) * ITEMS_PER_PAGE;
    let rows = db::invoice::get_filtered_invoices(pool, query, ITEMS_PER_PAGE, offset).await?;

    let total = match rows.first() {
        Some(row) => row.total_count,
        None if page > 1 => db::invoice::count_filtered_invoices(pool, query).await?,
        None => 0,
    };

    let items = rows
        .into_iter()
        .map(to_table_row)
        .collect::<Res<Vec<_>>>()?;

    Ok(InvoicesPage {
        items,
        total_pages: total_pages(total),
    })
}

pub async fn get_latest_invoices(pool: &PgPool) -> Res<Vec<LatestInvoice>> {
    let rows = db::invoice::get_latest_invoices(pool).await?;
    Ok(rows.into_iter().map(to_latest_invoice).collect())
}

pub async fn get_invoice_by_id(pool: &PgPool, invoice_id: Uuid) -> Res<Option<InvoiceForm>> {
    let row = db::invoice::get_invoice_by_id(pool, invoice_id).await?;
    row.map(to_invoice_form).transpose()
}

/// Explicit row -> view-model mapping: every field listed, the
/// `total_count` metadata deliberately dropped.
fn to_table_row(row: FilteredInvoiceRow) -> Res<InvoicesTableRow> {
    Ok(InvoicesTableRow {
        id: row.id,
        name: row.name,
        email: row.email,
        image_url: row.image_url,
        date: format_date_to_local(row.date),
        amount: format_currency(i64::from(row.amount)),
        status: row.status.parse().map_err(AppError::Internal)?,
    })
}

fn to_latest_invoice(row: LatestInvoiceRow) -> LatestInvoice {
    LatestInvoice {
        id: row.id,
        name: row.name,
        image_url: row.image_url,
        email: row.email,
        amount: format_currency(i64::from(row.amount)),
    }
}

fn to_invoice_form(row: InvoiceFormRow) -> Res<InvoiceForm> {
    Ok(InvoiceForm {
        id: row.id,
        customer_id: row.customer_id,
        // cents to major units for form editing
        amount: f64::from(row.amount) / 100.0,
        status: row.status.parse().map_err(AppError::Internal)?,
    })
}

pub(crate) fn total_pages(total: i64) -> i64 {
    (total + ITEMS_PER_PAGE - 1) / ITEMS_PER_PAGE
}
