//! Version string.

/// The current version of bizcard, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Line printed by `--version`.
pub fn version_line() -> String {
    format!("bizcard {}", VERSION)
}
