use std::borrow::Cow;
use std::time::Duration;

/// Errors that may occur during client configuration and building.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when the underlying HTTP client could not be built.
    #[error("unable to build http client")]
    Reqwest(#[from] reqwest::Error),
    /// Returned when `MOVEIT_TIMEOUT` is not a number of milliseconds.
    #[error("invalid value {0:?} for MOVEIT_TIMEOUT, expected a number of milliseconds")]
    InvalidTimeout(String),
}

/// Builder for constructing a [`Client`](crate::Client) with custom configuration.
///
/// This allows specifying the base URL, a timeout and optionally
/// customizing the inner `reqwest::blocking::ClientBuilder`.
///
/// ```
/// use moveit::builder::ClientBuilder;
/// use std::time::Duration;
///
/// let _client = ClientBuilder::default()
///    .with_base_url("https://moveit.example.com")
///    .with_timeout(Duration::from_secs(30))
///    .build()
///    .expect("unable to build http client");
/// ```
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: Cow<'static, str>,
    client_builder: Option<reqwest::blocking::ClientBuilder>,
    timeout: Option<Duration>,
}

impl Default for ClientBuilder {
    /// Creates a new `ClientBuilder` with default settings:
    ///
    /// - Base URL is set to [`DEFAULT_BASE_URL`](crate::DEFAULT_BASE_URL).
    /// - No timeout.
    /// - No custom `reqwest::blocking::ClientBuilder` is used.
    fn default() -> Self {
        Self {
            base_url: Cow::Borrowed(crate::DEFAULT_BASE_URL),
            client_builder: None,
            timeout: None,
        }
    }
}

fn timeout_from_env() -> Result<Option<Duration>, Error> {
    match std::env::var("MOVEIT_TIMEOUT") {
        Ok(value) => value
            .parse::<u64>()
            .map(|millis| Some(Duration::from_millis(millis)))
            .map_err(|_| Error::InvalidTimeout(value)),
        Err(_) => Ok(None),
    }
}

impl ClientBuilder {
    /// Creates a builder pre-configured using environment variables.
    ///
    /// - Uses `MOVEIT_BASE_URL` for the endpoint.
    /// - Uses `MOVEIT_TIMEOUT`, in milliseconds, for the request timeout.
    ///
    /// Falls back to the default server if none is specified.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTimeout`] if `MOVEIT_TIMEOUT` is not a number.
    pub fn from_env() -> Result<Self, Error> {
        let base_url = std::env::var("MOVEIT_BASE_URL")
            .ok()
            .map(Cow::Owned)
            .unwrap_or(Cow::Borrowed(crate::DEFAULT_BASE_URL));

        Ok(Self {
            base_url,
            client_builder: None,
            timeout: timeout_from_env()?,
        })
    }
}

impl ClientBuilder {
    /// Sets a custom base URL.
    pub fn set_base_url(&mut self, base_url: impl Into<Cow<'static, str>>) {
        self.base_url = base_url.into();
    }

    /// Sets a custom base URL and returns the modified builder.
    pub fn with_base_url(mut self, base_url: impl Into<Cow<'static, str>>) -> Self {
        self.set_base_url(base_url);
        self
    }

    /// Sets a custom `reqwest::blocking::ClientBuilder`.
    pub fn set_client_builder(&mut self, client_builder: reqwest::blocking::ClientBuilder) {
        self.client_builder = Some(client_builder);
    }

    /// Sets a custom `reqwest::blocking::ClientBuilder` and returns the modified builder.
    pub fn with_client_builder(mut self, client_builder: reqwest::blocking::ClientBuilder) -> Self {
        self.set_client_builder(client_builder);
        self
    }

    /// Sets the timeout applied to every request.
    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = Some(timeout);
    }

    /// Sets the timeout applied to every request and returns the modified builder.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.set_timeout(timeout);
        self
    }

    /// Builds the [`Client`](crate::Client) with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Reqwest`] if the HTTP client could not be built.
    pub fn build(self) -> Result<crate::Client, Error> {
        let builder = self
            .client_builder
            .unwrap_or_default()
            .user_agent(crate::USER_AGENT);
        // reqwest::blocking applies a 30s timeout unless told otherwise
        let builder = builder.timeout(self.timeout);
        let base_url = match self.base_url {
            Cow::Borrowed(value) => Cow::Borrowed(value.trim_end_matches('/')),
            Cow::Owned(value) => Cow::Owned(value.trim_end_matches('/').to_string()),
        };
        Ok(crate::Client {
            base_url,
            inner: builder.build()?,
        })
    }
}
