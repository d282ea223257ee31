// SPDX-License-Identifier: PMPL-1.0-or-later
//
// VeriSimDB Native Client - Error value and write-outcome classification
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Every failure the client observes surfaces as exactly one ClientError
// carrying the classified result code, a human-readable message, and the
// in-doubt flag. For writes, the in-doubt flag records whether the operation
// may have been applied by the server even though the client saw a failure:
// once a write command has been transmitted, a client-side timeout or broken
// connection says nothing about whether the server applied it first.

use std::sync::LazyLock;

use thiserror::Error;
use tracing::debug;

use crate::result_code::ResultCode;

/// Typed error for one failed client operation.
///
/// Construction never fails. After construction the value is immutable to
/// outside code except through [`set_in_doubt`] and [`mark_in_doubt`], and
/// the in-doubt flag is monotonic: once `true`, it is never reset.
///
/// Applications branch on [`result_code`], never on error identity:
///
/// ```rust
/// use verisim_client_core::{ClientError, ResultCode};
///
/// let err = ClientError::new(ResultCode::ENTITY_NOT_FOUND);
/// assert!(err.matches(ResultCode::ENTITY_NOT_FOUND));
/// ```
///
/// [`set_in_doubt`]: ClientError::set_in_doubt
/// [`mark_in_doubt`]: ClientError::mark_in_doubt
/// [`result_code`]: ClientError::result_code
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ClientError {
    /// Human-readable detail. Defaults to the registry description.
    message: String,
    /// The classified cause of the failure.
    result_code: ResultCode,
    /// Whether a failed write may nevertheless have been applied server-side.
    in_doubt: bool,
}

impl ClientError {
    /// Create an error whose message is the registry description of `code`.
    pub fn new(code: ResultCode) -> Self {
        ClientError {
            message: code.describe(),
            result_code: code,
            in_doubt: false,
        }
    }

    /// Create an error with caller-supplied text, used verbatim.
    pub fn with_message(code: ResultCode, message: impl Into<String>) -> Self {
        ClientError {
            message: message.into(),
            result_code: code,
            in_doubt: false,
        }
    }

    /// Create an error from message fragments joined with a single space, in
    /// the order given. An empty slice falls back to the registry description.
    pub fn with_messages(code: ResultCode, parts: &[&str]) -> Self {
        if parts.is_empty() {
            Self::new(code)
        } else {
            Self::with_message(code, parts.join(" "))
        }
    }

    /// The classified cause of this failure.
    pub fn result_code(&self) -> ResultCode {
        self.result_code
    }

    /// Whether a failed write may have been applied by the server anyway.
    /// Always `false` for reads.
    pub fn in_doubt(&self) -> bool {
        self.in_doubt
    }

    /// The human-readable message. Equal to `Display` output.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether this error was classified with the given result code.
    pub fn matches(&self, code: ResultCode) -> bool {
        self.result_code == code
    }

    /// Decide whether a failed write's real-world effect is uncertain.
    ///
    /// `command_sent_counter` is the number of times the logical operation
    /// was actually transmitted on the wire, initial attempt plus retries,
    /// as tracked by the retry/transport layer.
    ///
    /// A write is in doubt when the command was transmitted more than once
    /// (an earlier attempt may already have landed), or when it was
    /// transmitted exactly once and the failure is a timeout or any
    /// client-local code at or below zero: a broken channel after the single
    /// send says nothing about whether the server applied the write first.
    /// A definitive server rejection on a single send proves the write did
    /// not apply and leaves the flag untouched. Reads are never in doubt.
    ///
    /// Idempotent: re-invocation on an already in-doubt error changes
    /// nothing, and the flag is never reset to `false`.
    pub fn set_in_doubt(&mut self, is_read: bool, command_sent_counter: usize) {
        if is_read {
            return;
        }
        let ambiguous = command_sent_counter > 1
            || (command_sent_counter == 1
                && (self.result_code == ResultCode::TIMEOUT
                    || self.result_code.is_client_local()));
        if ambiguous && !self.in_doubt {
            debug!(
                code = self.result_code.raw(),
                sent = command_sent_counter,
                "write outcome is in doubt"
            );
            self.in_doubt = true;
        }
    }

    /// Unconditionally mark this error as in doubt. Used by collaborators
    /// with independent evidence of ambiguity (e.g. a batch abort where
    /// partial completion is known to be possible). Idempotent.
    pub fn mark_in_doubt(&mut self) {
        if !self.in_doubt {
            debug!(code = self.result_code.raw(), "error force-marked in doubt");
            self.in_doubt = true;
        }
    }
}

/// Crate-level result alias using [`ClientError`].
pub type ClientResult<T> = Result<T, ClientError>;

// ---------------------------------------------------------------------------
// Sentinel errors
// ---------------------------------------------------------------------------
//
// Pre-built, process-wide errors for recurring conditions. Read-only
// singletons: compare an observed error's result code against a sentinel's
// result code, never sentinel identity.

/// The server or owning partition is not available.
pub static ERR_SERVER_NOT_AVAILABLE: LazyLock<ClientError> =
    LazyLock::new(|| ClientError::new(ResultCode::SERVER_NOT_AVAILABLE));

/// The requested entity does not exist.
pub static ERR_ENTITY_NOT_FOUND: LazyLock<ClientError> =
    LazyLock::new(|| ClientError::new(ResultCode::ENTITY_NOT_FOUND));

/// The result stream was already consumed or closed.
pub static ERR_RESULT_STREAM_CLOSED: LazyLock<ClientError> =
    LazyLock::new(|| ClientError::new(ResultCode::RESULT_STREAM_CLOSED));

/// Every pooled connection to the node is already in use.
pub static ERR_CONNECTION_POOL_EMPTY: LazyLock<ClientError> = LazyLock::new(|| {
    ClientError::with_message(
        ResultCode::NO_AVAILABLE_CONNECTIONS,
        "Connection pool is empty: all connections are in use or none were available",
    )
});

/// The per-node connection limit was reached.
pub static ERR_TOO_MANY_CONNECTIONS_FOR_NODE: LazyLock<ClientError> = LazyLock::new(|| {
    ClientError::with_message(
        ResultCode::NO_AVAILABLE_CONNECTIONS,
        "Connection limit reached for this node",
    )
});

/// Too many connections are being opened to the node at once.
pub static ERR_TOO_MANY_OPENING_CONNECTIONS: LazyLock<ClientError> = LazyLock::new(|| {
    ClientError::with_message(
        ResultCode::NO_AVAILABLE_CONNECTIONS,
        "Too many connections are trying to open at once",
    )
});

/// Command execution timed out on the client.
pub static ERR_TIMEOUT: LazyLock<ClientError> = LazyLock::new(|| {
    ClientError::with_message(
        ResultCode::TIMEOUT,
        "Command execution timed out on the client",
    )
});

/// A user-defined function returned a malformed response.
pub static ERR_UDF_BAD_RESPONSE: LazyLock<ClientError> = LazyLock::new(|| {
    ClientError::with_message(ResultCode::UDF_BAD_RESPONSE, "Invalid UDF return value")
});

/// A query-execute request carried no operations.
pub static ERR_NO_OPERATIONS_SPECIFIED: LazyLock<ClientError> = LazyLock::new(|| {
    ClientError::with_message(
        ResultCode::INVALID_COMMAND,
        "No operations were passed to query-execute",
    )
});

/// A query-execute request named modality fields, which it must not.
pub static ERR_FIELD_NAMES_NOT_ALLOWED_IN_QUERY_EXECUTE: LazyLock<ClientError> =
    LazyLock::new(|| {
        ClientError::with_message(
            ResultCode::INVALID_COMMAND,
            "Field names must be empty for query-execute",
        )
    });

/// The entity was filtered out by the request's filter expression.
pub static ERR_FILTERED_OUT: LazyLock<ClientError> =
    LazyLock::new(|| ClientError::new(ResultCode::FILTERED_OUT));

/// Not every node in the cluster supports partition scans and queries.
pub static ERR_PARTITION_SCAN_NOT_SUPPORTED: LazyLock<ClientError> = LazyLock::new(|| {
    ClientError::with_message(
        ResultCode::PARAMETER_ERROR,
        "Partition scans and queries are not supported by all nodes in this cluster",
    )
});

/// A scan was terminated by the user.
pub static ERR_SCAN_TERMINATED: LazyLock<ClientError> =
    LazyLock::new(|| ClientError::new(ResultCode::SCAN_TERMINATED));

/// A query was terminated by the user.
pub static ERR_QUERY_TERMINATED: LazyLock<ClientError> =
    LazyLock::new(|| ClientError::new(ResultCode::QUERY_TERMINATED));
