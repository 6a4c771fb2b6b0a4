//! GraphQL HTTP client
//!
//! Posts operation documents to the configured gateway endpoint and unwraps
//! the `{data, errors}` response envelope. One request per operation; failures
//! propagate to the caller without retry.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::Error;
use crate::Result;

#[derive(Serialize)]
struct GraphqlRequest<'a, V> {
    query: &'a str,
    variables: &'a V,
}

#[derive(Deserialize)]
struct GraphqlResponse<D> {
    data: Option<D>,
    errors: Option<Vec<GraphqlError>>,
}

#[derive(Deserialize)]
struct GraphqlError {
    message: String,
}

/// Client for executing GraphQL operations against the gateway
#[derive(Debug, Clone)]
pub struct GraphqlClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl GraphqlClient {
    /// Create a new client for the configured endpoint
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Execute a single operation and return its decoded `data` payload
    pub async fn execute<V, D>(&self, query: &str, variables: &V) -> Result<D>
    where
        V: Serialize,
        D: DeserializeOwned,
    {
        debug!(endpoint = %self.config.endpoint, "sending GraphQL request");

        let mut request = self
            .http
            .post(&self.config.endpoint)
            .json(&GraphqlRequest { query, variables });
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Backend(format!("HTTP {}", status)));
        }

        let envelope: GraphqlResponse<D> = response.json().await?;

        if let Some(errors) = envelope.errors {
            if !errors.is_empty() {
                let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
                return Err(Error::Backend(messages.join("; ")));
            }
        }

        envelope
            .data
            .ok_or_else(|| Error::Backend("response carried no data".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Echo {
        value: String,
    }

    fn client_for(server: &mockito::Server) -> GraphqlClient {
        GraphqlClient::new(ClientConfig::new(format!("{}/graphql", server.url())))
    }

    #[tokio::test]
    async fn test_execute_decodes_data() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/graphql")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({"data": {"value": "ok"}}).to_string())
            .create_async()
            .await;

        let echo: Echo = client_for(&server)
            .execute("query { value }", &json!({}))
            .await
            .unwrap();

        assert_eq!(echo.value, "ok");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_execute_sends_bearer_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/graphql")
            .match_header("authorization", "Bearer jwt-abc")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({"data": {"value": "ok"}}).to_string())
            .create_async()
            .await;

        let config =
            ClientConfig::new(format!("{}/graphql", server.url())).with_token("jwt-abc");
        let _: Echo = GraphqlClient::new(config)
            .execute("query { value }", &json!({}))
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_graphql_errors_map_to_backend_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/graphql")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({"errors": [{"message": "invalid session"}, {"message": "expired token"}]})
                    .to_string(),
            )
            .create_async()
            .await;

        let err = client_for(&server)
            .execute::<_, Echo>("query { value }", &json!({}))
            .await
            .unwrap_err();

        match err {
            Error::Backend(message) => {
                assert_eq!(message, "invalid session; expired token");
            }
            other => panic!("expected backend error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_http_failure_maps_to_backend_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/graphql")
            .with_status(502)
            .create_async()
            .await;

        let err = client_for(&server)
            .execute::<_, Echo>("query { value }", &json!({}))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Backend(_)));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        let client = GraphqlClient::new(ClientConfig::new("http://127.0.0.1:1/graphql"));

        let err = client
            .execute::<_, Echo>("query { value }", &json!({}))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Transport(_)));
    }
}
