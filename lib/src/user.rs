//! Resolving the home folder of the authenticated user

use crate::auth::Token;
use crate::error::FolderResolutionError;

/// Identifier of a remote folder
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FolderId(u64);

impl FolderId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for FolderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl TryFrom<i64> for FolderId {
    type Error = FolderResolutionError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .map(Self)
            .map_err(|_| FolderResolutionError::InvalidHomeFolder(value))
    }
}

#[derive(Debug, serde::Deserialize)]
struct CurrentUser {
    #[serde(rename = "homeFolderID")]
    home_folder_id: Option<i64>,
}

impl crate::Client {
    /// Fetches the current user and returns the identifier of its home folder.
    ///
    /// # Errors
    ///
    /// Returns [`FolderResolutionError::Transport`] on a network failure or a non success response,
    /// [`FolderResolutionError::Payload`] when the response is not JSON, and
    /// [`FolderResolutionError::MissingHomeFolder`] or [`FolderResolutionError::InvalidHomeFolder`]
    /// when it doesn't carry a usable identifier.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # fn example(client: &moveit::Client, token: &moveit::Token) -> Result<(), moveit::FolderResolutionError> {
    /// let folder_id = client.resolve_home_folder(token)?;
    /// println!("home folder: {folder_id}");
    /// # Ok(())
    /// # }
    /// ```
    #[tracing::instrument(skip_all)]
    pub fn resolve_home_folder(&self, token: &Token) -> Result<FolderId, FolderResolutionError> {
        let body = self.get_request("api/v1/users/self", token)?;
        let user: CurrentUser = serde_json::from_str(&body)?;
        let folder_id = user
            .home_folder_id
            .ok_or(FolderResolutionError::MissingHomeFolder)
            .and_then(FolderId::try_from)?;
        tracing::debug!("home folder is {folder_id}");
        Ok(folder_id)
    }
}
