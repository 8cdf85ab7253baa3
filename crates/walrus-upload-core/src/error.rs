//! Error types for the upload flow.
//!
//! Every upload failure surfaces to the user as one generic message; these
//! variants carry the diagnostic detail that goes to the log instead.

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Publisher returned status {status}: {detail}")]
    Http { status: u16, detail: String },

    #[error("Unexpected store response shape: {0}")]
    UnexpectedResponse(String),
}
