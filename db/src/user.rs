use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};

use crate::models::user::User;

/// Exact-email lookup. Absence is a valid empty result here; the auth
/// service decides how to reject.
pub async fn get_user_by_email<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    email: &str,
) -> Res<Option<User>> {
    sqlx::query_as::<_, User>("SELECT id, email, password_hash FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(executor)
        .await
        .map_err(AppError::store("user"))
}
