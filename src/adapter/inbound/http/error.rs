//! JSON error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

use crate::domain::DomainError;
use crate::error::Error;

/// Body of every non-2xx API response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Handler failure, mapped to a status code and `{"error": ...}` body.
#[derive(Debug)]
pub enum ApiError {
    /// Client input was rejected before touching storage.
    BadRequest(DomainError),
    /// The addressed product does not exist.
    NotFound,
    /// Storage or runtime failure. Details are logged, not returned.
    Internal(Error),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::BadRequest(err)
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self::Internal(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::BadRequest(err) => err.to_string(),
            Self::NotFound => "not found".to_string(),
            Self::Internal(err) => {
                error!(error = %err, "request failed");
                "internal server error".to_string()
            }
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::{json, Value};

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn domain_errors_map_to_bad_request() {
        let err = ApiError::from(DomainError::NoFieldsToUpdate);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"error": "no fields to update"})
        );
    }

    #[tokio::test]
    async fn infrastructure_errors_do_not_leak_details() {
        let err = ApiError::from(Error::Database(
            "relation \"products\" does not exist".into(),
        ));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({"error": "internal server error"})
        );
    }

    #[tokio::test]
    async fn not_found_has_fixed_status_and_message() {
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);

        let response = ApiError::NotFound.into_response();
        assert_eq!(body_json(response).await, json!({"error": "not found"}));
    }
}
