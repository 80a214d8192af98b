use std::sync::Arc;

use actix_web::{Responder, get, web};
use common::error::{AppError, Res};
use common::http::Success;
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::services;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub query: Option<String>,
    pub page: Option<String>,
}

/// `page` arrives as free text from the URL; anything absent, non-numeric
/// or below 1 falls back to the first page rather than erroring.
fn parse_page(raw: Option<&str>) -> u32 {
    raw.and_then(|p| p.parse::<u32>().ok())
        .filter(|p| *p >= 1)
        .unwrap_or(1)
}

/// Paginated, searchable invoice listing.
///
/// # Input
/// - `query`: optional free-text search term (empty matches everything)
/// - `page`: optional 1-based page number
///
/// # Output
/// - Success: `{ items, total_pages }` with at most one page of rows
#[get("/invoices")]
pub async fn get_invoices(
    params: web::Query<ListParams>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let query = params.query.as_deref().unwrap_or("");
    let page = parse_page(params.page.as_deref());

    let page_data = services::invoice::get_filtered_invoices(&pool, query, page).await?;
    Success::ok(page_data)
}

/// Single invoice shaped for form editing; 404 when no row exists.
#[get("/invoices/{id}")]
pub async fn get_invoice(
    path: web::Path<Uuid>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let invoice_id = path.into_inner();
    let invoice = services::invoice::get_invoice_by_id(&pool, invoice_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("invoice {}", invoice_id)))?;
    Success::ok(invoice)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_defaults_to_one() {
        assert_eq!(parse_page(None), 1);
        assert_eq!(parse_page(Some("")), 1);
        assert_eq!(parse_page(Some("abc")), 1);
        assert_eq!(parse_page(Some("-2")), 1);
        assert_eq!(parse_page(Some("0")), 1);
    }

    #[test]
    fn numeric_pages_pass_through() {
        assert_eq!(parse_page(Some("1")), 1);
        assert_eq!(parse_page(Some("3")), 3);
        assert_eq!(parse_page(Some("42")), 42);
    }
}
