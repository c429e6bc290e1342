//! Compile-time build metadata shared by the `icondex` and `icondex-tui` binaries.

/// Build metadata stamped in by `build.rs`.
#[derive(Debug, Clone, Copy)]
pub struct BuildInfo {
    pub version: &'static str,
    pub git_sha: &'static str,
    pub timestamp: &'static str,
}

const fn env_or<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    match value {
        Some(v) => v,
        None => default,
    }
}

pub const BUILD_INFO: BuildInfo = BuildInfo {
    version: env!("CARGO_PKG_VERSION"),
    git_sha: env_or(option_env!("ICONDEX_BUILD_GIT_SHA"), "unknown"),
    timestamp: env_or(option_env!("ICONDEX_BUILD_TIMESTAMP"), "unknown"),
};

impl BuildInfo {
    /// Full line printed for `--version`.
    pub fn version_line(self, binary_name: &str) -> String {
        format!(
            "{binary_name} {} (rev {}, built {})",
            self.version, self.git_sha, self.timestamp
        )
    }

    /// Compact `v0.1.0@abc1234` form for the TUI header.
    pub fn short(self) -> String {
        let mut out = format!("v{}", self.version);
        if self.git_sha != "unknown" {
            out.push('@');
            out.extend(self.git_sha.chars().take(7));
        }
        out
    }
}
