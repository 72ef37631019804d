// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Runtime environment introspection for the `/info` endpoint
//!
//! Compiler version and build time are recorded by `build.rs`. Anything that
//! cannot be determined is reported as [`UNKNOWN`].

/// Placeholder for values that cannot be determined
pub const UNKNOWN: &str = "unknown";

const RUSTC_VERSION: &str = match option_env!("RUSTC_VERSION") {
    Some(v) => v,
    None => UNKNOWN,
};

const BUILD_DATE: &str = match option_env!("BUILD_DATE") {
    Some(v) => v,
    None => UNKNOWN,
};

fn or_unknown(value: &'static str) -> &'static str {
    if value.trim().is_empty() {
        UNKNOWN
    } else {
        value
    }
}

/// Version of the compiler the binary was built with
pub fn rust_version() -> &'static str {
    or_unknown(RUSTC_VERSION)
}

/// Target operating system name
pub fn os_name() -> &'static str {
    or_unknown(std::env::consts::OS)
}

/// Target CPU architecture
pub fn os_arch() -> &'static str {
    or_unknown(std::env::consts::ARCH)
}

/// Build timestamp (RFC 3339)
pub fn build_time() -> &'static str {
    or_unknown(BUILD_DATE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_unknown() {
        assert_eq!(or_unknown(""), UNKNOWN);
        assert_eq!(or_unknown("  "), UNKNOWN);
        assert_eq!(or_unknown("linux"), "linux");
    }

    #[test]
    fn test_values_never_empty() {
        assert!(!rust_version().is_empty());
        assert!(!os_name().is_empty());
        assert!(!os_arch().is_empty());
        assert!(!build_time().is_empty());
    }

    #[test]
    fn test_os_name_matches_target() {
        assert_eq!(os_name(), std::env::consts::OS);
    }
}
