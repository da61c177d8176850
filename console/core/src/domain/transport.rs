// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Transport Seam
//!
//! Domain interface for the black-box request executor. The console core
//! never talks HTTP directly; it hands a method, path and optional JSON
//! body to a `Transport` and gets back a status plus raw body. The
//! reqwest adapter lives in `infrastructure::http`.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

/// Raw response from the request executor. Non-2xx statuses are returned
/// here, not raised — how a given status is treated depends on whether
/// the call is a list fetch or one row of a bulk operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Errors raised by the request executor itself (the request never
/// produced a status line).
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(String),
}

/// Black-box request executor.
///
/// `path` is the server-relative destination produced by endpoint
/// resolution; the adapter owns the base URL.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<TransportResponse, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_statuses() {
        let ok = TransportResponse { status: 204, body: String::new() };
        assert!(ok.is_success());
        let err = TransportResponse { status: 500, body: String::new() };
        assert!(!err.is_success());
    }
}
