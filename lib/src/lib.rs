//! Blocking client for the [MOVEit Transfer REST API](https://docs.ipswitch.com/MOVEit/Transfer2021/API/rest/).
//!
//! The client covers the three calls needed to push a file to the home folder
//! of a user: getting a bearer token, resolving the home folder and uploading
//! the file.
//!
//! ```no_run
//! use moveit::{Client, Credentials};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new("https://testserver.moveitcloud.com")?;
//! let session = client.open_session(&Credentials::new("username", "password"))?;
//! session.upload("report.pdf")?;
//! # Ok(())
//! # }
//! ```

use std::borrow::Cow;

pub mod auth;
pub mod builder;
pub mod credentials;
pub mod error;
mod http;
pub mod session;
pub mod upload;
pub mod user;

pub use auth::Token;
pub use credentials::Credentials;
pub use error::{AuthError, Error, FolderResolutionError, TransportError, UploadError};
pub use session::Session;
pub use user::FolderId;

/// The default user agent for the http client
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// The default MOVEit server
pub const DEFAULT_BASE_URL: &str = "https://testserver.moveitcloud.com";

/// Result type returned by the high level operations of the client
pub type Result<T> = std::result::Result<T, Error>;

/// Client for the MOVEit REST API
///
/// Holds a single blocking http client for the whole run.
#[derive(Clone, Debug)]
pub struct Client {
    pub(crate) base_url: Cow<'static, str>,
    pub(crate) inner: reqwest::blocking::Client,
}

impl Client {
    /// Creates a client targeting the given base url, with the default settings.
    pub fn new(
        base_url: impl Into<Cow<'static, str>>,
    ) -> std::result::Result<Self, builder::Error> {
        builder::ClientBuilder::default()
            .with_base_url(base_url)
            .build()
    }

    /// The base url the requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
