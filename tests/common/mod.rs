//! Common test utilities for schema manager testing.
//!
//! Provides fixtures and assertion macros shared by the validation and
//! integration tests.


/// Initialise `env_logger` once for the test binary.
///
/// Log output is captured by the test harness; run with `RUST_LOG=debug` and
/// `--nocapture` to see it.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Assert that the manager accepts an object.
#[macro_export]
macro_rules! assert_accepted {
    ($manager:expr, $object:expr) => {
        if !$manager.add($object) {
            panic!(
                "Expected the object to be accepted, got {:?}",
                $manager.errors()
            );
        }
    };
}

/// Assert that the manager rejects an object with exactly one matching violation.
#[macro_export]
macro_rules! assert_rejected {
    ($manager:expr, $object:expr, $violation:pat) => {
        if $manager.add($object) {
            panic!(
                "Expected {} but the object was accepted",
                stringify!($violation)
            );
        }
        match $manager.errors() {
            [$violation] => {
                // Rejected for the expected reason
            }
            other => panic!("Expected {}, got {:?}", stringify!($violation), other),
        }
    };
}

/// Assert that a manager operation failed with a specific hard error.
#[macro_export]
macro_rules! assert_schema_error {
    ($result:expr, $error:pat) => {
        match $result {
            Err($error) => {
                // Failed as expected
            }
            Ok(value) => panic!(
                "Expected {} but the operation returned Ok({:?})",
                stringify!($error),
                value
            ),
            Err(other) => panic!("Expected {}, got {:?}", stringify!($error), other),
        }
    };
}

/// Custom assertion macro for specific error messages
#[macro_export]
macro_rules! assert_error_message_contains {
    ($result:expr, $substring:expr) => {
        match $result {
            Err(err) => assert!(
                err.to_string().contains($substring),
                "Error message '{}' does not contain '{}'",
                err.to_string(),
                $substring
            ),
            Ok(_) => panic!(
                "Expected error containing '{}', but the operation succeeded",
                $substring
            ),
        }
    };
}
