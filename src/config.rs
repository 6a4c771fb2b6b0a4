//! Client configuration

/// Configuration for the GraphQL client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Full URL of the GraphQL endpoint
    pub endpoint: String,
    /// Bearer token attached to every request, if any
    pub token: Option<String>,
}

impl ClientConfig {
    /// Create a configuration for the given endpoint
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: None,
        }
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::new("https://backend.example/graphql");
        assert_eq!(config.endpoint, "https://backend.example/graphql");
        assert!(config.token.is_none());
    }

    #[test]
    fn test_config_with_token() {
        let config = ClientConfig::new("https://backend.example/graphql").with_token("jwt-abc");
        assert_eq!(config.token, Some("jwt-abc".to_string()));
    }
}
