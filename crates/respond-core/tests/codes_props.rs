// Rust guideline compliant 2026-10-16

//! Property-based tests for the status classifier.

use proptest::prelude::*;
use respond_core::{classify, Code, Status};

proptest! {
    /// Every code in the success range classifies as OK.
    #[test]
    fn prop_success_range_is_ok(code in 200_i64..300) {
        prop_assert_eq!(classify(code), Status::Ok);
    }

    /// Every code from 500 upwards classifies as FAILED.
    #[test]
    fn prop_server_range_is_failed(code in 500_i64..=i64::MAX) {
        prop_assert_eq!(classify(code), Status::Failed);
    }

    /// Everything else classifies as ERROR.
    #[test]
    fn prop_other_codes_are_error(
        code in prop_oneof![i64::MIN..200_i64, 300_i64..500],
    ) {
        prop_assert_eq!(classify(code), Status::Error);
    }

    /// Conversion either yields a code with the same value or rejects it.
    #[test]
    fn prop_try_from_never_coerces(value in any::<u16>()) {
        match Code::try_from(value) {
            Ok(code) => prop_assert_eq!(code.as_u16(), value),
            Err(err) => {
                prop_assert_eq!(err.0, i64::from(value));
                prop_assert!(Code::all().all(|code| code.as_u16() != value));
            }
        }
    }
}
