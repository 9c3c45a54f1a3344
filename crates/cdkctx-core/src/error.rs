use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for context loading and the CLI.
#[derive(Error, Debug)]
pub enum CdkCtxError {
    // ── Configuration errors ───────────────────────────────────
    #[error("Could not find file `{file}`. It is mandatory for a CDK application. (looked in {})", .path.display())]
    ConfigurationMissing { file: String, path: PathBuf },

    #[error("{0}")]
    ConfigurationParse(#[from] serde_json::Error),

    #[error("`context` in cdk.json must be an object, found {found}")]
    InvalidContext { found: String },

    // ── Lookup errors ──────────────────────────────────────────
    #[error("context key not found: {0}")]
    ContextKeyNotFound(String),

    // ── Generic wrappers ───────────────────────────────────────
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, CdkCtxError>;
