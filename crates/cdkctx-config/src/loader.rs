use std::io::Write;
use std::path::{Path, PathBuf};

use cdkctx_core::{CDK_CONTEXT_JSON, CDK_JSON, CONTEXT_KEY, CdkCtxError, ContextMap, value_kind};
use serde_json::Value;
use tracing::{debug, info};

use crate::schema::{ContextWarning, LoadedContext};

/// Loads the context mapping of a CDK project rooted at one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextLoader {
    cdk_dir: PathBuf,
}

impl ContextLoader {
    pub fn new(cdk_dir: impl Into<PathBuf>) -> Self {
        Self {
            cdk_dir: cdk_dir.into(),
        }
    }

    /// Tests live one level below the project, so the project is the parent.
    pub fn from_test_dir(test_dir: &Path) -> Self {
        let cdk_dir = test_dir.parent().unwrap_or(test_dir);
        Self::new(cdk_dir)
    }

    /// Resolve the project directory: explicit path > CDKCTX_DIR env > current dir
    pub fn resolve_dir(explicit: Option<&Path>) -> PathBuf {
        if let Some(p) = explicit {
            return p.to_path_buf();
        }
        if let Ok(p) = std::env::var("CDKCTX_DIR") {
            return PathBuf::from(p);
        }
        PathBuf::from(".")
    }

    pub fn cdk_dir(&self) -> &Path {
        &self.cdk_dir
    }

    pub fn primary_path(&self) -> PathBuf {
        self.cdk_dir.join(CDK_JSON)
    }

    pub fn cache_path(&self) -> PathBuf {
        self.cdk_dir.join(CDK_CONTEXT_JSON)
    }

    /// Load the context, writing diagnostics to stderr.
    pub fn load(&self) -> cdkctx_core::Result<LoadedContext> {
        let stderr = std::io::stderr();
        let mut out = stderr.lock();
        self.load_with_diagnostics(&mut out)
    }

    /// Load the context, writing one line per warning to `out`.
    ///
    /// A missing `cdk.json` ([`CdkCtxError::ConfigurationMissing`]) or one that
    /// is not valid JSON ([`CdkCtxError::ConfigurationParse`]) is fatal, as is a
    /// `context` value that is neither an object nor null
    /// ([`CdkCtxError::InvalidContext`]). A missing `cdk.context.json` only
    /// produces a warning; its contents are never read.
    pub fn load_with_diagnostics<W: Write>(
        &self,
        out: &mut W,
    ) -> cdkctx_core::Result<LoadedContext> {
        let primary = self.primary_path();
        debug!(path = ?primary, "resolving cdk.json");
        if !primary.exists() {
            return Err(CdkCtxError::ConfigurationMissing {
                file: CDK_JSON.into(),
                path: primary,
            });
        }

        let raw = std::fs::read_to_string(&primary)?;
        let cdk_json: Value = serde_json::from_str(&raw)?;
        let context = extract_context(cdk_json)?;

        let mut warnings = Vec::new();
        let cache = self.cache_path();
        if !cache.exists() {
            let w = ContextWarning::missing_context_cache();
            debug!(path = ?cache, "cached context file not found");
            // Diagnostics are best-effort; a closed stderr must not fail the load.
            let _ = writeln!(out, "{}", w.message);
            warnings.push(w);
        }

        info!(path = ?primary, keys = context.len(), "loaded CDK context");
        Ok(LoadedContext { context, warnings })
    }
}

/// Load only the context mapping of the project at `cdk_dir`.
pub fn load_context(cdk_dir: &Path) -> cdkctx_core::Result<ContextMap> {
    ContextLoader::new(cdk_dir).load().map(LoadedContext::into_context)
}

fn extract_context(cdk_json: Value) -> cdkctx_core::Result<ContextMap> {
    let Value::Object(mut top) = cdk_json else {
        return Ok(ContextMap::new());
    };
    match top.remove(CONTEXT_KEY) {
        None | Some(Value::Null) => Ok(ContextMap::new()),
        Some(Value::Object(map)) => Ok(map),
        Some(other) => Err(CdkCtxError::InvalidContext {
            found: value_kind(&other).into(),
        }),
    }
}
