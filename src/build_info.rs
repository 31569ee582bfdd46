//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `labelx 0.1.0 (2026-10-17 abc1234)`
pub fn version_line() -> String {
    format!("labelx {} ({} {})", VERSION, BUILD_DATE, BUILD_COMMIT)
}

/// Short tag shown on the loading splash.
pub fn system_tag() -> String {
    format!("System v{}", VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_commit_format() {
        // Seven hex chars from git, "unknown" outside a checkout, or CI-provided.
        assert!(!BUILD_COMMIT.is_empty());
        assert!(BUILD_COMMIT == "unknown" || BUILD_COMMIT.len() >= 7);
    }

    #[test]
    fn test_version_line_mentions_everything() {
        let line = version_line();
        assert!(line.starts_with("labelx "));
        assert!(line.contains(VERSION));
        assert!(line.contains(BUILD_DATE));
        assert!(line.contains(BUILD_COMMIT));
    }

    #[test]
    fn test_system_tag() {
        assert_eq!(system_tag(), format!("System v{}", VERSION));
    }
}
