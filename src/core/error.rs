use std::path::PathBuf;
use thiserror::Error;

/// Construction-time configuration failures. The only fatal errors in the
/// crate; everything after construction is accumulated per file instead.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("project root path is required")]
    MissingRoot,

    #[error("alias prefix must not be empty")]
    EmptyAliasPrefix,
}

/// Per-build failures carried on the [`BuildReport`](crate::core::BuildReport).
///
/// None of these abort a build: the offending file contributes zero
/// specifiers and the rest of the graph is assembled normally.
#[derive(Debug, Error)]
pub enum BuildError {
    /// File enumeration under the root failed, fully or partially.
    #[error("discovery failed under {root}: {message}")]
    Discovery { root: PathBuf, message: String },

    /// A discovered file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A discovered file could not be parsed as a module.
    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Non-fatal observations recorded during a build.
#[derive(Debug, Error)]
pub enum BuildWarning {
    /// The same canonical path was discovered twice; the first node wins.
    #[error("duplicate file entry ignored: {path}")]
    DuplicateFile { path: PathBuf },
}
