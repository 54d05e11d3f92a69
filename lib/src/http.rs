//! The http round trips shared by the operations

use crate::auth::Token;
use crate::error::TransportError;

/// Reads the whole body, failing when the status is not a success.
fn read_response(res: reqwest::blocking::Response) -> Result<String, TransportError> {
    let status = res.status();
    tracing::debug!("responded with status {status:?}");
    let body = res.text()?;
    if status.is_success() {
        Ok(body)
    } else {
        tracing::warn!("request failed with status {status:?}: {body}");
        Err(TransportError::Status { status, body })
    }
}

impl crate::Client {
    fn build_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    #[tracing::instrument(name = "post", skip(self, params))]
    pub(crate) fn post_form<P: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        params: &P,
    ) -> Result<String, TransportError> {
        let uri = self.build_url(path);
        tracing::debug!("calling {uri}");
        let res = self.inner.post(uri).form(params).send()?;
        read_response(res)
    }

    #[tracing::instrument(name = "get", skip(self, token))]
    pub(crate) fn get_request(&self, path: &str, token: &Token) -> Result<String, TransportError> {
        let uri = self.build_url(path);
        tracing::debug!("calling {uri}");
        let res = self.inner.get(uri).bearer_auth(token.as_str()).send()?;
        read_response(res)
    }

    #[tracing::instrument(name = "post", skip(self, token, form))]
    pub(crate) fn post_request_multipart(
        &self,
        path: &str,
        token: &Token,
        form: reqwest::blocking::multipart::Form,
    ) -> Result<String, TransportError> {
        let uri = self.build_url(path);
        tracing::debug!("calling {uri}");
        let res = self
            .inner
            .post(uri)
            .bearer_auth(token.as_str())
            .multipart(form)
            .send()?;
        read_response(res)
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn should_join_paths_with_a_single_slash() {
        let client = crate::Client::new("http://localhost:1234/").unwrap();
        assert_eq!(
            client.build_url("/api/v1/users/self"),
            "http://localhost:1234/api/v1/users/self"
        );
        assert_eq!(
            client.build_url("api/v1/token"),
            "http://localhost:1234/api/v1/token"
        );
    }
}
