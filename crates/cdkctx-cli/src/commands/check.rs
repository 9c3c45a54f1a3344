use std::io::Write;

use cdkctx_config::{ContextLoader, ContextWarning};
use cdkctx_core::{CDK_CONTEXT_JSON, CdkCtxError};
use serde::Serialize;

#[derive(Serialize)]
struct CheckReport<'a> {
    cdk_dir: String,
    context_values: usize,
    cache_present: bool,
    warnings: &'a [ContextWarning],
}

/// Report on both project files. Fails only when `cdk.json` cannot be loaded.
pub(super) fn cmd_check<W: Write>(
    loader: &ContextLoader,
    json: bool,
    out: &mut W,
) -> cdkctx_core::Result<()> {
    // Warnings are printed below, so the raw diagnostic line is dropped.
    let loaded = loader.load_with_diagnostics(&mut std::io::sink())?;
    let cache_present = !loaded.warnings.iter().any(|w| w.file == CDK_CONTEXT_JSON);

    if json {
        let report = CheckReport {
            cdk_dir: loader.cdk_dir().display().to_string(),
            context_values: loaded.context.len(),
            cache_present,
            warnings: &loaded.warnings,
        };
        let rendered = serde_json::to_string_pretty(&report)
            .map_err(|e| CdkCtxError::Serialization(e.to_string()))?;
        writeln!(out, "{rendered}")?;
        return Ok(());
    }

    writeln!(out, "🩺 CDK context check — {}", loader.cdk_dir().display())?;
    writeln!(out)?;
    writeln!(
        out,
        "  ✅ {}: {} context values",
        loader.primary_path().display(),
        loaded.context.len()
    )?;

    if cache_present {
        writeln!(out, "  ✅ {}: present", loader.cache_path().display())?;
    }
    for w in &loaded.warnings {
        writeln!(out, "  {w}")?;
    }

    writeln!(out)?;
    writeln!(out, "  {} warnings", loaded.warnings.len())?;
    Ok(())
}
