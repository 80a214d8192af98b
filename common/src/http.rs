use actix_web::HttpResponse;
use serde::Serialize;

use crate::error::Res;

/// JSON response helpers shared by all route handlers.
pub struct Success;

impl Success {
    pub fn ok<T: Serialize>(data: T) -> Res<HttpResponse> {
        Ok(HttpResponse::Ok().json(data))
    }
}
