use actix_web::HttpResponse;
use thiserror::Error;

pub type Res<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    // === CONVERSION ERRORS ===
    /// A failed read against the relational store. The low-level cause is
    /// kept for server-side logging only; callers and clients see the
    /// sanitized classification ("failed to fetch invoices", ...).
    #[error("failed to fetch {what}")]
    Store {
        what: &'static str,
        #[source]
        cause: sqlx::Error,
    },

    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    // === APPLICATION ERRORS ===
    #[error("Authorization error: {0}")]
    Unauthorized(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// Wraps a `sqlx::Error` as a store failure classified by the entity
    /// being fetched. Meant for `map_err(AppError::store("invoices"))`.
    pub fn store(what: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
        move |cause| AppError::Store { what, cause }
    }

    pub fn to_http_response(&self) -> HttpResponse {
        match self {
            // === CONVERSION ERRORS ===
            AppError::Store { what, cause } => {
                log::error!("Database error while fetching {}: {}", what, cause);
                HttpResponse::InternalServerError()
                    .json(serde_json::json!({ "error": self.to_string() }))
            }
            AppError::Jwt(error) => {
                log::error!("JWT error: {}", error);
                HttpResponse::Unauthorized()
                    .json(serde_json::json!({ "error": "Invalid session token" }))
            }

            // === APPLICATION ERRORS ===
            AppError::Unauthorized(_) => {
                HttpResponse::Unauthorized().json(serde_json::json!({ "error": self.to_string() }))
            }
            AppError::NotFound(_) => {
                HttpResponse::NotFound().json(serde_json::json!({ "error": self.to_string() }))
            }
            AppError::Internal(error) => {
                log::error!("Internal error: {}", error);
                HttpResponse::InternalServerError()
                    .json(serde_json::json!({ "error": "Internal server error" }))
            }
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        self.to_http_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_displays_classification_only() {
        let err = AppError::store("invoices")(sqlx::Error::PoolClosed);
        assert_eq!(err.to_string(), "failed to fetch invoices");
    }

    #[test]
    fn store_error_keeps_cause_as_source() {
        use std::error::Error;

        let err = AppError::store("customers")(sqlx::Error::RowNotFound);
        assert!(err.source().is_some());
    }
}
