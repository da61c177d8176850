// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! In-memory transport stub for service tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::transport::{HttpMethod, Transport, TransportError, TransportResponse};

#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub method: HttpMethod,
    pub path: String,
    pub body: Option<serde_json::Value>,
}

enum Stub {
    Respond(u16, String),
    NetworkError(String),
}

struct Rule {
    path: Option<String>,
    body_contains: Option<String>,
    stub: Stub,
}

/// Programmable `Transport` double. Rules are matched in insertion
/// order against the request path and serialized body; unmatched
/// requests get an empty 200.
#[derive(Default)]
pub(crate) struct FakeTransport {
    rules: Mutex<Vec<Rule>>,
    pub requests: Mutex<Vec<RecordedRequest>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, path: &str, status: u16, body: &str) {
        self.rules.lock().unwrap().push(Rule {
            path: Some(path.to_string()),
            body_contains: None,
            stub: Stub::Respond(status, body.to_string()),
        });
    }

    pub fn respond_when_body_contains(&self, needle: &str, status: u16, body: &str) {
        self.rules.lock().unwrap().push(Rule {
            path: None,
            body_contains: Some(needle.to_string()),
            stub: Stub::Respond(status, body.to_string()),
        });
    }

    pub fn fail_when_body_contains(&self, needle: &str, error: &str) {
        self.rules.lock().unwrap().push(Rule {
            path: None,
            body_contains: Some(needle.to_string()),
            stub: Stub::NetworkError(error.to_string()),
        });
    }

    pub fn fail(&self, path: &str, error: &str) {
        self.rules.lock().unwrap().push(Rule {
            path: Some(path.to_string()),
            body_contains: None,
            stub: Stub::NetworkError(error.to_string()),
        });
    }

    pub fn recorded(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<TransportResponse, TransportError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            path: path.to_string(),
            body: body.clone(),
        });

        let serialized = body
            .as_ref()
            .map(|b| b.to_string())
            .unwrap_or_default();

        let rules = self.rules.lock().unwrap();
        for rule in rules.iter() {
            if let Some(expected) = &rule.path {
                if expected != path {
                    continue;
                }
            }
            if let Some(needle) = &rule.body_contains {
                if !serialized.contains(needle.as_str()) {
                    continue;
                }
            }
            return match &rule.stub {
                Stub::Respond(status, body) => Ok(TransportResponse {
                    status: *status,
                    body: body.clone(),
                }),
                Stub::NetworkError(error) => Err(TransportError::Network(error.clone())),
            };
        }

        Ok(TransportResponse {
            status: 200,
            body: "{}".to_string(),
        })
    }
}
