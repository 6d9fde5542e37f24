// Package identity baked in at build time

/// Crate version, reported at startup.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// `name vX.Y.Z`, for log lines.
pub fn banner() -> String {
    format!("{} v{}", NAME, VERSION)
}
