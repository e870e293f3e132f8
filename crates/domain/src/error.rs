//! Common error types used across the workspace.
//!
//! Each failure a request can hit maps to exactly one variant of
//! [`DeviceHubError`]; adapters translate variants into transport responses.

/// Top-level error returned by services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum DeviceHubError {
    /// The request body could not be decoded into a device.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// No record exists under the requested identifier.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}

/// Failure to turn a request body into a [`DevicePatch`](crate::device::DevicePatch).
///
/// The `Display` output is echoed verbatim to the client.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The body held no JSON value at all.
    #[error("request body is empty")]
    EmptyBody,

    /// The body is not valid JSON, or a field has the wrong type.
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    /// The body is valid JSON but neither an object nor `null`.
    #[error("cannot decode a JSON {0} into a device")]
    NotAnObject(&'static str),

    /// The transport failed to deliver the body (e.g. it exceeded the size limit).
    #[error("failed to read request body: {0}")]
    Body(Box<dyn std::error::Error + Send + Sync>),
}

/// A lookup by identifier found nothing.
#[derive(Debug, thiserror::Error)]
#[error("{entity} not found")]
pub struct NotFoundError {
    /// Kind of record that was looked up.
    pub entity: &'static str,
    /// Identifier that was requested.
    pub id: String,
}
