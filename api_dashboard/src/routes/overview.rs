use std::sync::Arc;

use actix_web::{Responder, get, web};
use common::error::Res;
use common::http::Success;
use sqlx::PgPool;

use crate::services;

/// Aggregate invoice/customer counts and paid/pending totals.
#[get("/overview/cards")]
pub async fn get_cards(pool: web::Data<Arc<PgPool>>) -> Res<impl Responder> {
    let cards = services::overview::get_card_data(&pool).await?;
    Success::ok(cards)
}

/// Precomputed monthly revenue series.
#[get("/overview/revenue")]
pub async fn get_revenue(pool: web::Data<Arc<PgPool>>) -> Res<impl Responder> {
    let revenue = services::overview::get_revenue(&pool).await?;
    Success::ok(revenue)
}

/// Five most recently issued invoices with customer details.
#[get("/overview/latest-invoices")]
pub async fn get_latest_invoices(pool: web::Data<Arc<PgPool>>) -> Res<impl Responder> {
    let invoices = services::invoice::get_latest_invoices(&pool).await?;
    Success::ok(invoices)
}
