// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

use thiserror::Error;

/// Errors that can occur in the console data-sync layer.
///
/// Batch-level operations never abort on a single row's failure; scope
/// and fetch errors abort the whole operation.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Invalid scope/mode combination. A programming or deployment error,
    /// surfaced immediately and never retried.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// List retrieval failed (network error or non-2xx status). The next
    /// manual or periodic refresh is the recovery path; no automatic retry.
    #[error("Fetch failed: {0}")]
    Fetch(String),

    /// Required identity fields were absent in a fetched record. Fails the
    /// entire fetch; no partial list is admitted.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// A selected row's identifier could not be safely derived from its
    /// rendered strings. Fails only that row's outcome.
    #[error("Row reconstruction failed: {0}")]
    RowReconstruction(String),

    /// A remote delete/ban request failed for one row. Captured in that
    /// row's outcome; the batch continues.
    #[error("Operation on {spiffe_id} failed: {detail}")]
    Operation { spiffe_id: String, detail: String },
}
