//! An authenticated session, bound to the home folder of the user.

use crate::auth::Token;
use crate::credentials::Credentials;
use crate::user::FolderId;
use std::path::Path;

/// A token and the home folder it gives access to.
///
/// A session can only be obtained through [`Client::open_session`](crate::Client::open_session),
/// so both values are always valid.
#[derive(Debug)]
pub struct Session<'c> {
    client: &'c crate::Client,
    token: Token,
    home_folder: FolderId,
}

impl crate::Client {
    /// Authenticates and resolves the home folder of the user, in that order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Auth`](crate::Error::Auth) when no token could be obtained, nothing else is called then.
    /// Returns [`Error::FolderResolution`](crate::Error::FolderResolution) when the home folder cannot be resolved.
    #[tracing::instrument(skip_all)]
    pub fn open_session(&self, credentials: &Credentials) -> crate::Result<Session<'_>> {
        let token = self.authenticate(credentials)?;
        let home_folder = self.resolve_home_folder(&token)?;
        Ok(Session {
            client: self,
            token,
            home_folder,
        })
    }
}

impl Session<'_> {
    pub fn token(&self) -> &Token {
        &self.token
    }

    pub fn home_folder(&self) -> FolderId {
        self.home_folder
    }

    /// Uploads a local file in the home folder.
    pub fn upload<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        self.client
            .upload_file(&self.token, self.home_folder, path)
            .map_err(crate::Error::from)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Client, Credentials, Error, FolderId};

    #[test]
    fn should_stop_after_failed_authentication() {
        crate::tests::init();
        let mut server = mockito::Server::new();
        let m_token = server
            .mock("POST", "/api/v1/token")
            .with_status(200)
            .with_body(r#"{"token_type": "bearer"}"#)
            .create();
        let m_user = server.mock("GET", "/api/v1/users/self").expect(0).create();
        let client = Client::new(server.url()).unwrap();
        let error = client.open_session(&Credentials::new("u", "p")).unwrap_err();
        assert!(matches!(error, Error::Auth(_)));
        assert!(error.is_unauthorized());
        m_token.assert();
        m_user.assert();
    }

    #[test]
    fn should_not_open_without_home_folder() {
        crate::tests::init();
        let mut server = mockito::Server::new();
        let m_token = server
            .mock("POST", "/api/v1/token")
            .with_status(200)
            .with_body(r#"{"access_token": "the-token"}"#)
            .create();
        let m_user = server
            .mock("GET", "/api/v1/users/self")
            .match_header("authorization", "Bearer the-token")
            .with_status(200)
            .with_body(r#"{"username": "u"}"#)
            .create();
        let client = Client::new(server.url()).unwrap();
        let error = client.open_session(&Credentials::new("u", "p")).unwrap_err();
        assert!(matches!(error, Error::FolderResolution(_)));
        m_token.assert();
        m_user.assert();
    }

    #[test]
    fn should_open() {
        crate::tests::init();
        let mut server = mockito::Server::new();
        let m_token = server
            .mock("POST", "/api/v1/token")
            .with_status(200)
            .with_body(r#"{"access_token": "the-token"}"#)
            .create();
        let m_user = server
            .mock("GET", "/api/v1/users/self")
            .match_header("authorization", "Bearer the-token")
            .with_status(200)
            .with_body(r#"{"homeFolderID": 7}"#)
            .create();
        let client = Client::new(server.url()).unwrap();
        let session = client.open_session(&Credentials::new("u", "p")).unwrap();
        assert_eq!(session.token().as_str(), "the-token");
        assert_eq!(session.home_folder(), FolderId::new(7));
        m_token.assert();
        m_user.assert();
    }
}
