//! Resolution options.
//!
//! Options can be built in code or read from the `[resolve]` table of a
//! TOML document:
//!
//! ```toml
//! [resolve]
//! max_passes = 16
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Default bound on fixpoint passes.
pub const DEFAULT_MAX_PASSES: usize = 64;

/// Tuning for [`crate::resolve_with`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveOptions {
    /// Upper bound on resolution passes. Each pass substitutes one level of
    /// anchors that were themselves bound to trees containing aliases.
    pub max_passes: usize,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        ResolveOptions {
            max_passes: DEFAULT_MAX_PASSES,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct OptionsFile {
    #[serde(default)]
    resolve: ResolveOptions,
}

impl ResolveOptions {
    /// Parse options from TOML text. A missing `[resolve]` table or missing
    /// keys fall back to defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, String> {
        let file: OptionsFile =
            toml::from_str(content).map_err(|e| format!("could not parse options: {}", e))?;
        if file.resolve.max_passes == 0 {
            return Err("resolve.max_passes must be at least 1".to_string());
        }
        Ok(file.resolve)
    }
}

/// Read and parse a TOML options file from `path`.
///
/// Returns a human-readable error string on failure.
pub fn read_resolve_options(path: &Path) -> Result<ResolveOptions, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("could not read '{}': {}", path.display(), e))?;
    ResolveOptions::from_toml_str(&content).map_err(|e| format!("{}: {}", path.display(), e))
}
