//! Build metadata embedded by `build.rs`.

use std::fmt;

use serde::Serialize;

/// Package version from Cargo.toml.
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

const UNKNOWN: &str = "unknown";

/// Where and when this binary was built.
///
/// Git fields read "unknown" outside a checkout (e.g. a crates.io build).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BuildInfo {
    pub version: &'static str,
    pub git_branch: &'static str,
    pub git_sha: &'static str,
    pub git_dirty: bool,
    pub build_timestamp: &'static str,
}

impl BuildInfo {
    /// Metadata of the running build.
    pub fn current() -> Self {
        Self {
            version: PKG_VERSION,
            git_branch: or_unknown(option_env!("VERGEN_GIT_BRANCH")),
            git_sha: or_unknown(option_env!("VERGEN_GIT_SHA")),
            git_dirty: option_env!("VERGEN_GIT_DIRTY") == Some("true"),
            build_timestamp: or_unknown(option_env!("VERGEN_BUILD_TIMESTAMP")),
        }
    }

    pub fn short_sha(&self) -> &'static str {
        let end = self
            .git_sha
            .char_indices()
            .nth(7)
            .map_or(self.git_sha.len(), |(i, _)| i);
        &self.git_sha[..end]
    }
}

const fn or_unknown(value: Option<&'static str>) -> &'static str {
    match value {
        Some(v) => v,
        None => UNKNOWN,
    }
}

/// `{version}+{branch}.{sha}`, with `.dirty` for modified trees.
impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}.{}", self.version, self.git_branch, self.short_sha())?;
        if self.git_dirty {
            f.write_str(".dirty")?;
        }
        Ok(())
    }
}

/// Full version string of the running build.
pub fn version_string() -> String {
    BuildInfo::current().to_string()
}
