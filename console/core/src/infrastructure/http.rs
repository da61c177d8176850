// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! HTTP Transport Adapter
//!
//! reqwest implementation of the domain `Transport` seam. Owns the base
//! URL; callers hand it server-relative paths from endpoint resolution.

use async_trait::async_trait;

use crate::domain::transport::{HttpMethod, Transport, TransportError, TransportResponse};

pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<TransportResponse, TransportError> {
        let url = self.url_for(path);

        let mut request = match method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(TransportResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_returns_status_and_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/agent/list")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"agents": []}"#)
            .create_async()
            .await;

        let transport = HttpTransport::new(server.url());
        let response = transport
            .request(HttpMethod::Get, "/api/agent/list", None)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(response.status, 200);
        assert_eq!(response.body, r#"{"agents": []}"#);
    }

    #[tokio::test]
    async fn test_delete_sends_json_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("DELETE", "/api/agent/delete")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "id": { "path": "/agent1", "trust_domain": "example.org" }
            })))
            .with_status(200)
            .with_body(r#"{}"#)
            .create_async()
            .await;

        let transport = HttpTransport::new(server.url());
        let body = serde_json::json!({
            "id": { "path": "/agent1", "trust_domain": "example.org" }
        });
        let response = transport
            .request(HttpMethod::Delete, "/api/agent/delete", Some(body))
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(response.is_success());
    }

    #[tokio::test]
    async fn test_non_2xx_is_returned_not_raised() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/agent/list")
            .with_status(500)
            .with_body("datastore unavailable")
            .create_async()
            .await;

        let transport = HttpTransport::new(server.url());
        let response = transport
            .request(HttpMethod::Get, "/api/agent/list", None)
            .await
            .unwrap();

        assert_eq!(response.status, 500);
        assert!(!response.is_success());
        assert_eq!(response.body, "datastore unavailable");
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        // Port 1 is never listening locally.
        let transport = HttpTransport::new("http://127.0.0.1:1");
        let err = transport
            .request(HttpMethod::Get, "/api/agent/list", None)
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Network(_)));
    }

    #[test]
    fn test_base_url_join_trims_trailing_slash() {
        let transport = HttpTransport::new("http://localhost:10000/");
        assert_eq!(
            transport.url_for("/api/agent/list"),
            "http://localhost:10000/api/agent/list"
        );
    }
}
