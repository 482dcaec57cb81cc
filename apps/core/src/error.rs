use thiserror::Error;

use crate::messages;

/// Failures surfaced by the dashboard. `Display` is the text shown to the user.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// A non-success status on one of the analytics endpoints.
    #[error("{}", messages::DATA_UNAVAILABLE)]
    Unavailable,

    /// The backend answered but reported a logical error (`error` / `detail`).
    #[error("{0}")]
    Backend(String),

    /// The request never produced a response.
    #[error("{0}")]
    Transport(String),

    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A form value that cannot be turned into a request.
    #[error("{0}")]
    InvalidInput(String),
}

pub type Result<T, E = DashboardError> = std::result::Result<T, E>;
