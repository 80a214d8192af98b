use std::sync::Arc;

use actix_web::{Responder, post, web};
use common::env_config::Config;
use common::error::Res;
use common::http::Success;
use common::jwt::{self, ClaimsSpec, JwtClaims};
use sqlx::PgPool;

use crate::dtos::auth::{AuthResponse, LoginRequest};
use crate::services;

/// Authenticates a user with email and password.
///
/// # Input
/// - `login_data`: JSON payload containing email and password
/// - `config`: Application configuration for JWT generation
/// - `pool`: Database connection pool
///
/// # Output
/// - Success: Returns an auth response with JWT token and public user details
/// - Error: Returns 401 Unauthorized for invalid credentials
#[post("/login")]
pub async fn post_login(
    login_data: web::Json<LoginRequest>,
    config: web::Data<Arc<Config>>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let pg_pool: &PgPool = &pool;
    let user = services::auth::authenticate_user(pg_pool, &login_data.into_inner()).await?;
    let token = jwt::generate_jwt(
        ClaimsSpec {
            user_id: user.id,
            email: user.email.clone(),
        },
        &config.jwt_config,
    )?;
    Success::ok(AuthResponse {
        token,
        user: user.into(),
    })
}

/// Echoes the claims of the authenticated session.
pub async fn get_session(claims: web::ReqData<JwtClaims>) -> Res<impl Responder> {
    Success::ok(claims.into_inner())
}
