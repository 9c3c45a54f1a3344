use cdkctx_core::{CDK_CONTEXT_JSON, ContextMap};
use serde::Serialize;

/// Result of one load: the context mapping plus any non-fatal diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedContext {
    pub context: ContextMap,
    pub warnings: Vec<ContextWarning>,
}

impl LoadedContext {
    pub fn into_context(self) -> ContextMap {
        self.context
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextWarning {
    pub file: String,
    pub message: String,
    pub severity: WarningSeverity,
    pub hint: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningSeverity {
    Warning,
}

impl ContextWarning {
    /// Emitted when `cdk.context.json` is absent next to `cdk.json`.
    pub fn missing_context_cache() -> Self {
        Self {
            file: CDK_CONTEXT_JSON.into(),
            message: format!(
                "Could not find cached CDK context value file `{CDK_CONTEXT_JSON}`. CDK tests \
                 without cached context values could break for the lack of correct AWS \
                 credentials at runtime or be flaky."
            ),
            severity: WarningSeverity::Warning,
            hint: Some("Run `cdk synth` once with valid credentials to populate it".into()),
        }
    }
}

impl std::fmt::Display for ContextWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let icon = match self.severity {
            WarningSeverity::Warning => "⚠️ ",
        };
        write!(f, "{} {}: {}", icon, self.file, self.message)?;
        if let Some(ref h) = self.hint {
            write!(f, "\n   ↳ {}", h)?;
        }
        Ok(())
    }
}
