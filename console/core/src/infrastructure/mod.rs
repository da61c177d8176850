// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Infrastructure Layer
//!
//! Endpoint table and the reqwest implementation of the transport seam.

pub mod endpoints;
pub mod http;

pub use endpoints::{resolve, Operation};
pub use http::HttpTransport;
