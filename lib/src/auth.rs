//! Requesting a bearer token, as specified in [the documentation](https://docs.ipswitch.com/MOVEit/Transfer2021/API/rest/#_authentication).

use crate::credentials::Credentials;
use crate::error::AuthError;

/// A bearer token, never empty.
///
/// The value never shows up in the `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Token(********)")
    }
}

impl Token {
    /// Wraps an existing bearer token. Returns `None` when the value is empty.
    pub fn new<S: Into<String>>(value: S) -> Option<Self> {
        let value = value.into();
        if value.is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, serde::Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

impl crate::Client {
    /// Requests a bearer token using the `password` grant.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Transport`] if the server cannot be reached or doesn't respond with a success,
    /// [`AuthError::Payload`] if the response is not JSON and [`AuthError::EmptyToken`] if it
    /// doesn't contain a token.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # fn example(client: &moveit::Client) -> Result<(), moveit::AuthError> {
    /// let creds = moveit::Credentials::new("username", "password");
    /// let token = client.authenticate(&creds)?;
    /// # Ok(())
    /// # }
    /// ```
    #[tracing::instrument(skip_all)]
    pub fn authenticate(&self, credentials: &Credentials) -> Result<Token, AuthError> {
        let body = self.post_form("api/v1/token", &credentials.to_grant_params())?;
        let payload: TokenResponse = serde_json::from_str(&body)?;
        payload
            .access_token
            .and_then(Token::new)
            .ok_or(AuthError::EmptyToken)
    }
}
