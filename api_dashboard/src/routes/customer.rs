use std::sync::Arc;

use actix_web::{Responder, get, web};
use common::error::Res;
use common::http::Success;
use serde::Deserialize;
use sqlx::PgPool;

use crate::services;

#[derive(Debug, Deserialize)]
pub struct FilterParams {
    pub query: Option<String>,
}

/// Customer table with per-customer invoice aggregates, filtered on
/// name/email.
#[get("/customers")]
pub async fn get_customers(
    params: web::Query<FilterParams>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let query = params.query.as_deref().unwrap_or("");
    let customers = services::customer::get_filtered_customers(&pool, query).await?;
    Success::ok(customers)
}

/// All customers as id/name pairs, for select fields.
#[get("/customers/fields")]
pub async fn get_customer_fields(pool: web::Data<Arc<PgPool>>) -> Res<impl Responder> {
    let customers = services::customer::get_customer_fields(&pool).await?;
    Success::ok(customers)
}
