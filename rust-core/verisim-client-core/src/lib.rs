// SPDX-License-Identifier: PMPL-1.0-or-later
//
// VeriSimDB Native Client - Core error model
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Result-code registry and write-outcome classification for the VeriSimDB
// native-protocol client. This crate owns the one piece of correctness logic
// the rest of the client stack must not get wrong: once a write command has
// been transmitted over the network, a client-observed failure (timeout,
// connection reset) does not imply server-side failure — the write may have
// landed. Retrying such a write blindly can apply it twice; reporting it as
// failed can mislead the application. Every failure therefore surfaces as a
// `ClientError` whose `in_doubt` flag records this ambiguity for writes.
//
// The crate performs no I/O and makes no retry decisions. The transport and
// retry layers are collaborators: the transport reports the failure, the
// applicable result code, and — for writes — how many times the command was
// actually transmitted; the retry layer reads `result_code()` and
// `in_doubt()` to decide whether another attempt is safe.
//
// ## Usage
//
// ```rust
// use verisim_client_core::{ClientError, ResultCode};
//
// // A write attempt timed out after the command was sent twice.
// let mut err = ClientError::new(ResultCode::TIMEOUT);
// err.set_in_doubt(false, 2);
// assert!(err.in_doubt()); // an earlier attempt may have landed
//
// // A single-send write the server explicitly rejected is not in doubt.
// let mut err = ClientError::new(ResultCode::PARAMETER_ERROR);
// err.set_in_doubt(false, 1);
// assert!(!err.in_doubt());
// ```

pub mod error;
pub mod result_code;

// Re-export the primary public API for ergonomic imports.
pub use error::{ClientError, ClientResult};
pub use result_code::ResultCode;
