/// Build identity reported by `--version` and attached to the logging context.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_COMMIT_HASH: &str = env!("BIKE_LANES_GIT_COMMIT_HASH");
pub const VERSION_WITH_COMMIT: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "+",
    env!("BIKE_LANES_GIT_COMMIT_HASH")
);

/// First 12 characters of the commit hash, or `"unknown"` when the build had no git metadata.
pub fn short_commit_hash() -> &'static str {
    GIT_COMMIT_HASH.get(..12).unwrap_or(GIT_COMMIT_HASH)
}

#[cfg(test)]
mod tests {
    use super::{short_commit_hash, GIT_COMMIT_HASH, VERSION, VERSION_WITH_COMMIT};

    #[test]
    fn version_with_commit_is_semver_plus_hash() {
        assert_eq!(VERSION_WITH_COMMIT, format!("{VERSION}+{GIT_COMMIT_HASH}"));
    }

    #[test]
    fn short_hash_is_a_prefix_of_the_full_hash() {
        let short = short_commit_hash();
        assert!(!short.is_empty(), "commit hash should never be empty");
        assert!(short.len() <= 12);
        assert!(GIT_COMMIT_HASH.starts_with(short));
    }
}
