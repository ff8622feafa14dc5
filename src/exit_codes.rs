//! Exit code constants for the taskdoc CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, missing input files, invalid config)
//! - 2: Validation failure (one or more schema conformance checks failed)
//! - 3: Generation failure (one or more documents could not be rendered or written)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, missing files, or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// Validation failure: the config schema or its examples did not conform.
pub const VALIDATION_FAILURE: i32 = 2;

/// Generation failure: at least one stub or refined document was not produced.
pub const GENERATION_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, VALIDATION_FAILURE, GENERATION_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(USER_ERROR, 1);
    }
}
