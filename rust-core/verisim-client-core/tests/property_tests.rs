// SPDX-License-Identifier: PMPL-1.0-or-later
//! Property-based tests for the result-code registry and the
//! write-outcome uncertainty rule

use proptest::prelude::*;
use verisim_client_core::{ClientError, ResultCode};

proptest! {
    #[test]
    fn test_describe_is_total_and_non_empty(raw in any::<i32>()) {
        let description = ResultCode::from_raw(raw).describe();
        prop_assert!(!description.is_empty());
    }

    #[test]
    fn test_raw_codes_round_trip(raw in any::<i32>()) {
        prop_assert_eq!(ResultCode::from_raw(raw).raw(), raw);
    }

    #[test]
    fn test_serde_round_trip_preserves_code(raw in any::<i32>()) {
        let code = ResultCode::from_raw(raw);
        let json = serde_json::to_string(&code).unwrap();
        let back: ResultCode = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, code);
    }

    #[test]
    fn test_default_message_equals_description(raw in any::<i32>()) {
        let code = ResultCode::from_raw(raw);
        let err = ClientError::new(code);
        prop_assert_eq!(err.message(), code.describe());
    }

    #[test]
    fn test_writes_sent_more_than_once_are_always_in_doubt(
        raw in any::<i32>(),
        sent in 2usize..100
    ) {
        let mut err = ClientError::new(ResultCode::from_raw(raw));
        err.set_in_doubt(false, sent);
        prop_assert!(err.in_doubt());
    }

    #[test]
    fn test_reads_are_never_in_doubt(
        raw in any::<i32>(),
        sent in 0usize..100
    ) {
        let mut err = ClientError::new(ResultCode::from_raw(raw));
        err.set_in_doubt(true, sent);
        prop_assert!(!err.in_doubt());
    }

    #[test]
    fn test_single_send_boundary_is_timeout_or_at_most_zero(raw in any::<i32>()) {
        let code = ResultCode::from_raw(raw);
        let mut err = ClientError::new(code);
        err.set_in_doubt(false, 1);
        let expected = code == ResultCode::TIMEOUT || code.is_client_local();
        prop_assert_eq!(err.in_doubt(), expected);
    }

    #[test]
    fn test_in_doubt_is_monotonic_under_re_evaluation(
        raw in any::<i32>(),
        first_sent in 0usize..10,
        second_sent in 0usize..10,
        second_is_read in any::<bool>()
    ) {
        let mut err = ClientError::new(ResultCode::from_raw(raw));
        err.set_in_doubt(false, first_sent);
        let was_in_doubt = err.in_doubt();
        err.set_in_doubt(second_is_read, second_sent);
        // Re-evaluation may add doubt, never remove it.
        prop_assert!(!was_in_doubt || err.in_doubt());
    }

    #[test]
    fn test_mark_in_doubt_always_sets_and_is_idempotent(raw in any::<i32>()) {
        let mut err = ClientError::new(ResultCode::from_raw(raw));
        err.mark_in_doubt();
        prop_assert!(err.in_doubt());
        err.mark_in_doubt();
        prop_assert!(err.in_doubt());
    }
}
