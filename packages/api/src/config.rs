//! Backend endpoint configuration.

/// Hosted backend used when no override is configured.
const DEFAULT_API_URL: &str = "https://api.afyalink.co.ke";

/// Base URL of the AfyaLink backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Read `AFYALINK_API_URL`, falling back to the hosted backend.
    pub fn from_env() -> Self {
        match std::env::var("AFYALINK_API_URL") {
            Ok(url) if !url.is_empty() => Self::new(url),
            _ => Self::new(DEFAULT_API_URL),
        }
    }

    /// Full URL for an endpoint path such as `/auth/login`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_path() {
        let config = ApiConfig::new("http://localhost:8000");
        assert_eq!(
            config.endpoint("/auth/login"),
            "http://localhost:8000/auth/login"
        );
    }

    #[test]
    fn test_trailing_slashes_are_trimmed() {
        let config = ApiConfig::new("http://localhost:8000//");
        assert_eq!(config.endpoint("/users"), "http://localhost:8000/users");
    }
}
