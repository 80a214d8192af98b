use uuid::Uuid;

/// Auth user row. Deliberately not `Serialize`: the password hash must
/// never leave the process.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
}
