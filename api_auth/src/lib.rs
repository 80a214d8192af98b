use std::sync::Arc;

use actix_web::web;
use common::env_config::Config;
use middleware::auth::AuthMiddleware;

pub mod middleware {
    pub mod auth;
}
pub mod routes {
    pub mod auth;
}
pub mod services {
    pub mod auth;
}
pub mod dtos {
    pub mod auth;
}

pub fn mount_auth(config: Arc<Config>) -> actix_web::Scope {
    web::scope("/auth").service(routes::auth::post_login).service(
        web::resource("/session")
            .wrap(AuthMiddleware::new(config))
            .route(web::get().to(routes::auth::get_session)),
    )
}

/// Guard requiring a valid Bearer session token on every request in scope.
pub fn auth_middleware(config: Arc<Config>) -> AuthMiddleware {
    AuthMiddleware::new(config)
}
