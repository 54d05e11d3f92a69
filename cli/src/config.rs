use moveit::builder::{ClientBuilder, Error as ClientBuilderError};
use moveit::Client;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    base_url: Option<String>,
    /// Request timeout, in seconds
    timeout: Option<u64>,
}

impl Config {
    pub fn from_path(path: &Path) -> Result<Self, String> {
        let reader = std::fs::File::open(path).map_err(|err| err.to_string())?;
        let result = serde_json::from_reader(reader).map_err(|err| err.to_string())?;
        Ok(result)
    }

    /// Builds the client, the `base_url` argument taking precedence over the file and the environment.
    pub fn build(self, base_url: Option<String>) -> Result<Client, ClientBuilderError> {
        let mut builder = ClientBuilder::from_env()?;
        if let Some(timeout) = self.timeout.map(Duration::from_secs) {
            builder.set_timeout(timeout);
        }
        if let Some(base_url) = base_url.or(self.base_url) {
            builder.set_base_url(base_url);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use temp_dir::TempDir;

    #[test]
    fn should_load_file() {
        let root = TempDir::new().unwrap();
        let path = root.path().join("moveit.json");
        std::fs::write(&path, r#"{"base_url": "https://moveit.example.com/", "timeout": 10}"#)
            .unwrap();
        let config = Config::from_path(&path).unwrap();
        assert_eq!(config.timeout, Some(10));
        let client = config.build(None).unwrap();
        assert_eq!(client.base_url(), "https://moveit.example.com");
    }

    #[test]
    fn should_prefer_argument() {
        let config = Config {
            base_url: Some("https://moveit.example.com".into()),
            timeout: None,
        };
        let client = config.build(Some("http://localhost:1234".into())).unwrap();
        assert_eq!(client.base_url(), "http://localhost:1234");
    }

    #[test]
    fn should_fail_with_invalid_file() {
        let root = TempDir::new().unwrap();
        let path = root.path().join("moveit.json");
        std::fs::write(&path, "base_url = nope").unwrap();
        assert!(Config::from_path(&path).is_err());
    }
}
