//! Shared helpers for unit and property tests.

pub fn env_u32(name: &str) -> Option<u32> {
    std::env::var(name)
        .ok()
        .and_then(|value| value.parse().ok())
}

fn is_ci() -> bool {
    std::env::var_os("CI").is_some()
}

/// Number of proptest cases: `PROPTEST_CASES` wins, CI runs `default`, local
/// runs are capped at 4 to keep `cargo test` fast.
pub fn proptest_cases(default: u32) -> u32 {
    if let Some(value) = env_u32("PROPTEST_CASES") {
        return value.max(1);
    }
    if is_ci() {
        return default.max(1);
    }
    default.clamp(1, 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proptest_cases_is_never_zero() {
        assert!(proptest_cases(0) >= 1);
        assert!(proptest_cases(64) >= 1);
    }

    #[test]
    fn env_u32_rejects_missing_and_garbage() {
        assert_eq!(env_u32("QUEUE_RS_TEST_UTILS_SURELY_UNSET"), None);
    }
}
