use rocket::serde::json::Json;
use rocket::{catch, Catcher};

use super::dto::ErrorResponse;

// Last-resort boundary: a fault that escapes a handler still answers with
// the API's JSON error envelope instead of Rocket's default error page.
#[catch(500)]
pub fn internal_error() -> Json<ErrorResponse> {
    Json(ErrorResponse {
        error: "Internal server error".to_string(),
        details: "unhandled fault while processing the request".to_string(),
    })
}

pub fn catchers() -> Vec<Catcher> {
    rocket::catchers![internal_error]
}
