use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};

use crate::models::revenue::Revenue;

pub async fn get_revenue<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
) -> Res<Vec<Revenue>> {
    sqlx::query_as::<_, Revenue>("SELECT month, revenue FROM revenue")
        .fetch_all(executor)
        .await
        .map_err(AppError::store("revenue"))
}
