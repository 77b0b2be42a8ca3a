//! Panel configuration

use issuedeck_client::DEFAULT_ISSUES_URL;

/// Panel configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Full URL of the issue list (e.g., "http://localhost:8080/api/issues")
    pub issues_url: String,
}

impl Config {
    pub fn new(issues_url: impl Into<String>) -> Self {
        Self {
            issues_url: issues_url.into(),
        }
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.issues_url.is_empty() {
            anyhow::bail!("issues_url cannot be empty");
        }

        if !self.issues_url.starts_with("http://") && !self.issues_url.starts_with("https://") {
            anyhow::bail!("issues_url must start with http:// or https://");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_ISSUES_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.issues_url, "http://localhost:8080/api/issues");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();

        config.issues_url = String::new();
        assert!(config.validate().is_err());

        config.issues_url = "localhost:8080/api/issues".to_string();
        assert!(config.validate().is_err());

        config.issues_url = "https://issues.internal/api/issues".to_string();
        assert!(config.validate().is_ok());
    }
}
