//! Helpers for controlling embedded test cluster behaviour.
//!
//! Repository suites need a running embedded PostgreSQL. A cluster that fails
//! to start fails the suite unless `SKIP_TEST_CLUSTER` opts out, so the SQL
//! paths are never silently reported as passing.

const SKIP_VAR: &str = "SKIP_TEST_CLUSTER";

/// Returns true when `SKIP_TEST_CLUSTER` is set to "1", "true", or "yes"
/// (case-insensitive).
pub fn should_skip_test_cluster() -> bool {
    std::env::var(SKIP_VAR)
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Handles embedded cluster setup failures consistently across integration tests.
///
/// Returns `None` with a skip marker when skipping was requested; panics
/// otherwise.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if !should_skip_test_cluster() {
        panic!("Test cluster setup failed: {reason}. Set {SKIP_VAR}=1 to skip.");
    }
    eprintln!("SKIP-TEST-CLUSTER: {reason}");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use env_lock::lock_env;
    use rstest::rstest;

    #[rstest]
    #[should_panic(expected = "Test cluster setup failed: no initdb")]
    fn setup_failure_fails_the_test_by_default() {
        let _guard = lock_env([(SKIP_VAR, None::<&str>)]);
        let _: Option<()> = handle_cluster_setup_failure("no initdb");
    }

    #[rstest]
    #[case("1")]
    #[case("TRUE")]
    #[case("yes")]
    fn setup_failure_skips_when_opted_out(#[case] value: &str) {
        let _guard = lock_env([(SKIP_VAR, Some(value))]);
        assert_eq!(handle_cluster_setup_failure::<()>("no initdb"), None);
    }
}
