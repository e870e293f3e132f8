//! HTTP error response mapping.

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use devhub_domain::error::DeviceHubError;

/// Maps [`DeviceHubError`] to a plain-text HTTP response.
///
/// The body is the error message followed by a newline.
#[derive(Debug)]
pub struct ApiError(DeviceHubError);

impl From<DeviceHubError> for ApiError {
    fn from(err: DeviceHubError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            DeviceHubError::Decode(err) => {
                tracing::debug!(error = %err, "rejecting request body");
                StatusCode::BAD_REQUEST
            }
            DeviceHubError::NotFound(err) => {
                tracing::debug!(id = %err.id, "unknown device");
                StatusCode::NOT_FOUND
            }
        };

        plain_text(status, &self.0.to_string())
    }
}

/// Build a `text/plain` response whose body is `message` plus a newline.
pub(crate) fn plain_text(status: StatusCode, message: &str) -> Response {
    (
        status,
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
        ],
        format!("{message}\n"),
    )
        .into_response()
}
