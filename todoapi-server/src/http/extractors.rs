//! Custom Axum extractors

use axum::extract::{FromRequest, FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::ApiError;
use crate::models::ValidationError;

/// Extract and validate a todo id from path
pub struct ValidTodoId(pub i32);

impl<S> FromRequestParts<S> for ValidTodoId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                ApiError::Validation(ValidationError::InvalidFormat {
                    field: "id",
                    reason: rejection.body_text(),
                })
            })?;

        parse_todo_id(&raw).map(Self)
    }
}

fn parse_todo_id(raw: &str) -> Result<i32, ApiError> {
    match raw.parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ApiError::Validation(ValidationError::InvalidFormat {
            field: "id",
            reason: format!("'{}' is not a positive integer", raw),
        })),
    }
}

/// JSON body extractor whose rejection is an [`ApiError`]
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);
