//! Error types for the API client.

/// Errors that can occur when fetching or normalizing API responses.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed (network error, timeout, or unexpected response).
    #[error("Request failed")]
    RequestFailed,
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The raw JSON does not match the shape this endpoint's parse mode
    /// expects. Missing optional nested fields are not errors; they resolve
    /// to null during extraction.
    #[error("Malformed response for {endpoint}: {detail}")]
    MalformedResponse {
        endpoint: &'static str,
        detail: String,
    },
    /// The caller supplied an option the endpoint does not accept. Signaled
    /// before any network work happens.
    #[error("Invalid option for {endpoint}: {detail}")]
    InvalidOption {
        endpoint: &'static str,
        detail: String,
    },
}
