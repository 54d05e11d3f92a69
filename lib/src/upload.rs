//! Resources needed to upload a file

use crate::auth::Token;
use crate::error::UploadError;
use crate::user::FolderId;
use reqwest::blocking::multipart;
use std::path::Path;

/// Name of the multipart field holding the file
pub const FILE_FIELD: &str = "sendfile";

impl crate::Client {
    /// Uploads a local file in the given folder, keeping its file name.
    ///
    /// The file is streamed from disk in a single `multipart/form-data` request.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::Open`] if the file cannot be opened, nothing is sent in that case.
    /// Returns [`UploadError::Transport`] if the request fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # fn example(client: &moveit::Client, token: &moveit::Token) -> Result<(), moveit::UploadError> {
    /// client.upload_file(token, moveit::FolderId::new(42), "report.pdf")?;
    /// # Ok(())
    /// # }
    /// ```
    #[tracing::instrument(skip(self, token, path), fields(path = ?path.as_ref()))]
    pub fn upload_file<P: AsRef<Path>>(
        &self,
        token: &Token,
        folder_id: FolderId,
        path: P,
    ) -> Result<(), UploadError> {
        let path = path.as_ref();
        let form = multipart::Form::new()
            .file(FILE_FIELD, path)
            .map_err(|source| UploadError::Open {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::info!("uploading file...");
        let method = format!("api/v1/folders/{folder_id}/files");
        let body = self.post_request_multipart(&method, token, form)?;
        tracing::debug!("upload response: {body}");
        tracing::info!("finished uploading");
        Ok(())
    }
}
