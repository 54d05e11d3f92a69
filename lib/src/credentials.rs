//! The credentials used to request a bearer token with the `password` grant.

/// A username and a password.
///
/// The password never shows up in the `Debug` output.
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(stringify!(Credentials))
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}

impl Credentials {
    pub fn new<U: Into<String>, P: Into<String>>(username: U, password: P) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Form parameters of the token request.
    pub(crate) fn to_grant_params(&self) -> PasswordGrant<'_> {
        PasswordGrant {
            grant_type: "password",
            username: &self.username,
            password: &self.password,
        }
    }
}

#[derive(serde::Serialize)]
pub(crate) struct PasswordGrant<'a> {
    grant_type: &'static str,
    username: &'a str,
    password: &'a str,
}

#[cfg(test)]
mod tests {
    use super::Credentials;

    #[test]
    fn should_hide_password() {
        let creds = Credentials::new("alice", "secret");
        let output = format!("{creds:?}");
        assert!(output.contains("alice"));
        assert!(!output.contains("secret"));
    }
}
