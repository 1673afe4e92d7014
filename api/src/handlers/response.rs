//! Translation of controller outcomes into HTTP responses

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::app::ActionResult;
use crate::error::ErrorResponse;

impl<T> IntoResponse for ActionResult<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        match self {
            ActionResult::Ok(value) => (StatusCode::OK, Json(value)).into_response(),
            ActionResult::Created { value, location } => (
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(value),
            )
                .into_response(),
            ActionResult::NoContent => StatusCode::NO_CONTENT.into_response(),
            ActionResult::NotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("Not found", None)),
            )
                .into_response(),
            ActionResult::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("Bad request", Some(msg))),
            )
                .into_response(),
        }
    }
}
