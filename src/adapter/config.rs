use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;

fn default_request_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub api_base_url: String,
    pub access_token: String,
    pub course_id: String,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let content = fs::read_to_string(expanded.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path))?;
        let config: Config =
            serde_json::from_str(&content).context("Failed to parse config JSON")?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_full_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
  "api_base_url": "https://canvas.example.com",
  "access_token": "token-123",
  "course_id": "8195723",
  "request_timeout_secs": 10
}}"#
        )
        .unwrap();

        let config = Config::load(file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.api_base_url, "https://canvas.example.com");
        assert_eq!(config.access_token, "token-123");
        assert_eq!(config.course_id, "8195723");
        assert_eq!(config.request_timeout_secs, 10);
    }

    #[test]
    fn test_load_defaults_timeout() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
  "api_base_url": "https://canvas.example.com",
  "access_token": "token-123",
  "course_id": "8195723"
}}"#
        )
        .unwrap();

        let config = Config::load(file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load("/nonexistent/gradepost-config.json");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let result = Config::load(file.path().to_str().unwrap());
        assert!(result.is_err());
    }
}
