// SPDX-License-Identifier: PMPL-1.0-or-later
//
// VeriSimDB Native Client - Result code registry
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Maps every outcome code the client can observe — server-reported or
// client-local — to a canonical human-readable description. The registry is
// static read-only data and is itself used while constructing failures, so
// lookups are total and can never fail.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Machine-readable outcome code for one operation attempt.
///
/// Codes at or below zero are client-local conditions (connectivity,
/// serialization, pool exhaustion); positive codes are outcomes reported by
/// the server. The type is a transparent wrapper over the wire integer, so
/// codes the registry does not know about survive round-trips unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct ResultCode(i32);

impl ResultCode {
    // -- Client-local codes (<= 0) -------------------------------------------

    /// The result stream was consumed or closed before this operation.
    pub const RESULT_STREAM_CLOSED: ResultCode = ResultCode(-9);
    /// No connection to the target node could be checked out of the pool.
    pub const NO_AVAILABLE_CONNECTIONS: ResultCode = ResultCode(-8);
    /// A value type in the request is not representable in the wire protocol.
    pub const TYPE_NOT_SUPPORTED: ResultCode = ResultCode(-7);
    /// The client refused the command before transmitting it.
    pub const COMMAND_REJECTED: ResultCode = ResultCode(-6);
    /// The user terminated a running query.
    pub const QUERY_TERMINATED: ResultCode = ResultCode(-5);
    /// The user terminated a running scan.
    pub const SCAN_TERMINATED: ResultCode = ResultCode(-4);
    /// The chosen cluster node is invalid or unreachable.
    pub const INVALID_NODE: ResultCode = ResultCode(-3);
    /// The server response could not be parsed.
    pub const PARSE_ERROR: ResultCode = ResultCode(-2);
    /// The request payload could not be serialized.
    pub const SERIALIZE_ERROR: ResultCode = ResultCode(-1);
    /// Operation completed successfully.
    pub const OK: ResultCode = ResultCode(0);

    // -- Server-reported codes (> 0) -----------------------------------------

    /// Unclassified server-side failure.
    pub const SERVER_ERROR: ResultCode = ResultCode(1);
    /// The requested entity does not exist.
    pub const ENTITY_NOT_FOUND: ResultCode = ResultCode(2);
    /// The entity version on the server differs from the expected version.
    pub const VERSION_CONFLICT: ResultCode = ResultCode(3);
    /// A request parameter is invalid.
    pub const PARAMETER_ERROR: ResultCode = ResultCode(4);
    /// The entity already exists and create-only semantics were requested.
    pub const ENTITY_EXISTS: ResultCode = ResultCode(5);
    /// The modality field already exists and create-only semantics were requested.
    pub const MODALITY_EXISTS: ResultCode = ResultCode(6);
    /// The cluster key sent with the request no longer matches the cluster.
    pub const CLUSTER_KEY_MISMATCH: ResultCode = ResultCode(7);
    /// The server ran out of memory while executing the operation.
    pub const SERVER_OUT_OF_MEMORY: ResultCode = ResultCode(8);
    /// The operation timed out (client- or server-observed).
    pub const TIMEOUT: ResultCode = ResultCode(9);
    /// The operation is forbidden in the current server configuration.
    pub const ALWAYS_FORBIDDEN: ResultCode = ResultCode(10);
    /// The server or owning partition is not currently available.
    pub const SERVER_NOT_AVAILABLE: ResultCode = ResultCode(11);
    /// An operation was applied to a modality field of the wrong type.
    pub const MODALITY_TYPE_ERROR: ResultCode = ResultCode(12);
    /// The entity exceeds the configured maximum stored size.
    pub const ENTITY_TOO_BIG: ResultCode = ResultCode(13);
    /// The entity is locked by a concurrent transaction.
    pub const ENTITY_BUSY: ResultCode = ResultCode(14);
    /// The server aborted the scan.
    pub const SCAN_ABORT: ResultCode = ResultCode(15);
    /// The server build does not support the requested feature.
    pub const UNSUPPORTED_FEATURE: ResultCode = ResultCode(16);
    /// The addressed modality field does not exist on the entity.
    pub const MODALITY_NOT_FOUND: ResultCode = ResultCode(17);
    /// The storage device is overloaded and shedding load.
    pub const DEVICE_OVERLOAD: ResultCode = ResultCode(18);
    /// The stored key does not match the key sent with the request.
    pub const KEY_MISMATCH: ResultCode = ResultCode(19);
    /// The namespace in the request is not configured on the cluster.
    pub const INVALID_NAMESPACE: ResultCode = ResultCode(20);
    /// The operation is forbidden by current server policy.
    pub const FORBIDDEN: ResultCode = ResultCode(22);
    /// The addressed collection element does not exist.
    pub const ELEMENT_NOT_FOUND: ResultCode = ResultCode(23);
    /// The addressed collection element already exists.
    pub const ELEMENT_EXISTS: ResultCode = ResultCode(24);
    /// The operation is not applicable to the entity in its current state.
    pub const OP_NOT_APPLICABLE: ResultCode = ResultCode(26);
    /// The entity was filtered out by the request's filter expression.
    pub const FILTERED_OUT: ResultCode = ResultCode(27);
    /// The write lost a conflict-resolution race and was not applied.
    pub const LOST_CONFLICT: ResultCode = ResultCode(28);
    /// The command is malformed or not recognized by the server.
    pub const INVALID_COMMAND: ResultCode = ResultCode(54);
    /// A field in the command is malformed or not recognized.
    pub const INVALID_FIELD: ResultCode = ResultCode(55);
    /// The server is in an illegal state for the requested operation.
    pub const ILLEGAL_STATE: ResultCode = ResultCode(56);
    /// The connection is not authenticated.
    pub const NOT_AUTHENTICATED: ResultCode = ResultCode(80);
    /// The authenticated role does not permit the operation.
    pub const ROLE_VIOLATION: ResultCode = ResultCode(81);
    /// A user-defined function returned a malformed response.
    pub const UDF_BAD_RESPONSE: ResultCode = ResultCode(100);
    /// Batch operations are disabled on the server.
    pub const BATCH_DISABLED: ResultCode = ResultCode(150);
    /// The batch exceeds the server's maximum request count.
    pub const BATCH_MAX_REQUESTS_EXCEEDED: ResultCode = ResultCode(151);
    /// The secondary index does not exist.
    pub const INDEX_NOT_FOUND: ResultCode = ResultCode(201);
    /// The server aborted the query.
    pub const QUERY_ABORTED: ResultCode = ResultCode(210);
    /// The server's query queue is full.
    pub const QUERY_QUEUE_FULL: ResultCode = ResultCode(211);
    /// The query timed out on the server.
    pub const QUERY_TIMEOUT: ResultCode = ResultCode(212);

    /// Wrap a raw wire integer. Lossless: codes the registry does not name
    /// are preserved as-is and described generically.
    pub const fn from_raw(code: i32) -> Self {
        ResultCode(code)
    }

    /// The raw wire integer.
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Whether this code describes a client-local condition (at or below the
    /// zero boundary) rather than a definitive server-reported outcome.
    pub const fn is_client_local(self) -> bool {
        self.0 <= 0
    }

    /// Canonical description for this code.
    ///
    /// Total: unknown codes produce a generic message instead of failing,
    /// since this lookup runs while other failures are being constructed.
    pub fn describe(self) -> String {
        let canonical = match self.0 {
            -9 => "Result stream has already been closed",
            -8 => "No available connections to the node",
            -7 => "Value type not supported by the wire protocol",
            -6 => "Command rejected by the client before transmission",
            -5 => "Query terminated by the user",
            -4 => "Scan terminated by the user",
            -3 => "Invalid or unreachable cluster node",
            -2 => "Failed to parse the server response",
            -1 => "Failed to serialize the request payload",
            0 => "Operation completed successfully",
            1 => "Internal server error",
            2 => "Entity not found",
            3 => "Entity version conflict",
            4 => "Invalid request parameter",
            5 => "Entity already exists",
            6 => "Modality field already exists",
            7 => "Cluster key mismatch",
            8 => "Server out of memory",
            9 => "Operation timed out",
            10 => "Operation forbidden by server configuration",
            11 => "Server or partition not available",
            12 => "Operation applied to modality field of the wrong type",
            13 => "Entity exceeds the maximum stored size",
            14 => "Entity locked by a concurrent transaction",
            15 => "Scan aborted by the server",
            16 => "Feature not supported by this server build",
            17 => "Modality field not found on entity",
            18 => "Storage device overloaded",
            19 => "Stored key does not match request key",
            20 => "Namespace not configured on the cluster",
            22 => "Operation forbidden by server policy",
            23 => "Collection element not found",
            24 => "Collection element already exists",
            26 => "Operation not applicable to entity in its current state",
            27 => "Entity filtered out by the request's filter expression",
            28 => "Write lost a conflict-resolution race",
            54 => "Malformed or unknown command",
            55 => "Malformed or unknown command field",
            56 => "Server in illegal state for the requested operation",
            80 => "Connection not authenticated",
            81 => "Role violation",
            100 => "User-defined function returned a malformed response",
            150 => "Batch operations disabled on the server",
            151 => "Batch exceeds the maximum request count",
            201 => "Secondary index not found",
            210 => "Query aborted by the server",
            211 => "Server query queue is full",
            212 => "Query timed out on the server",
            other => {
                debug!(code = other, "describing unknown result code");
                return format!("Unknown result code {other}");
            }
        };
        canonical.to_string()
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}

impl From<i32> for ResultCode {
    fn from(code: i32) -> Self {
        ResultCode::from_raw(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_known_codes_are_non_empty() {
        let codes = [
            ResultCode::RESULT_STREAM_CLOSED,
            ResultCode::NO_AVAILABLE_CONNECTIONS,
            ResultCode::SERIALIZE_ERROR,
            ResultCode::OK,
            ResultCode::ENTITY_NOT_FOUND,
            ResultCode::TIMEOUT,
            ResultCode::UDF_BAD_RESPONSE,
            ResultCode::QUERY_TIMEOUT,
        ];
        for code in codes {
            assert!(!code.describe().is_empty(), "empty description for {code:?}");
        }
    }

    #[test]
    fn test_describe_unknown_code_is_generic_and_non_empty() {
        let description = ResultCode::from_raw(9999).describe();
        assert!(description.contains("9999"));
        assert!(!description.is_empty());

        let description = ResultCode::from_raw(-9999).describe();
        assert!(description.contains("-9999"));
    }

    #[test]
    fn test_from_raw_round_trips_unknown_codes() {
        for raw in [-12345, -1, 0, 1, 42, 12345] {
            assert_eq!(ResultCode::from_raw(raw).raw(), raw);
        }
    }

    #[test]
    fn test_client_local_boundary_is_at_zero() {
        assert!(ResultCode::from_raw(-1).is_client_local());
        assert!(ResultCode::from_raw(0).is_client_local());
        assert!(!ResultCode::from_raw(1).is_client_local());
        assert!(ResultCode::SERIALIZE_ERROR.is_client_local());
        assert!(!ResultCode::PARAMETER_ERROR.is_client_local());
    }

    #[test]
    fn test_display_matches_describe() {
        let code = ResultCode::ENTITY_NOT_FOUND;
        assert_eq!(format!("{code}"), code.describe());
    }

    #[test]
    fn test_serde_preserves_raw_value() {
        let code = ResultCode::from_raw(-8);
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "-8");
        let back: ResultCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, code);
    }
}
