//! The errors returned by the operations

use std::path::PathBuf;

/// Failure of a single http round trip.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The request could not be sent or the response could not be read
    #[error("unable to reach the server")]
    Network(#[from] reqwest::Error),
    /// The server answered with a non success status
    #[error("server responded with status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

impl TransportError {
    /// The http status returned by the server, if any.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Network(inner) => inner.status(),
            Self::Status { status, .. } => Some(*status),
        }
    }
}

/// Errors when requesting a bearer token.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// The token response is not valid JSON
    #[error("unable to parse the token response")]
    Payload(#[from] serde_json::Error),
    /// The token response doesn't contain an `access_token`, or it's empty
    #[error("the server returned an empty bearer token")]
    EmptyToken,
}

/// Errors when resolving the home folder of the current user.
#[derive(Debug, thiserror::Error)]
pub enum FolderResolutionError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// The user response is not valid JSON
    #[error("unable to parse the user response")]
    Payload(#[from] serde_json::Error),
    #[error("the user response doesn't contain a home folder id")]
    MissingHomeFolder,
    #[error("invalid home folder id {0}")]
    InvalidHomeFolder(i64),
}

/// Errors when uploading a file.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("unable to open {path:?}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// All the possible errors returned by a session
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to get bearer token")]
    Auth(#[from] AuthError),
    #[error("failed to get home folder id")]
    FolderResolution(#[from] FolderResolutionError),
    #[error("failed to upload file")]
    Upload(#[from] UploadError),
}

fn is_denied(status: reqwest::StatusCode) -> bool {
    status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
}

impl Error {
    /// Whether the server refused the provided credentials or token.
    pub fn is_unauthorized(&self) -> bool {
        match self {
            Self::Auth(AuthError::EmptyToken) => true,
            // the token endpoint answers a wrong password with `400 invalid_grant`
            Self::Auth(AuthError::Transport(inner)) => inner
                .status()
                .map_or(false, |s| s == reqwest::StatusCode::BAD_REQUEST || is_denied(s)),
            Self::FolderResolution(FolderResolutionError::Transport(inner))
            | Self::Upload(UploadError::Transport(inner)) => {
                inner.status().map_or(false, is_denied)
            }
            _ => false,
        }
    }
}
