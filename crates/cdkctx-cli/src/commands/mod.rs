use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use std::io::Write;
use std::path::PathBuf;

use cdkctx_config::ContextLoader;
use cdkctx_core::{CdkCtxError, ContextMap};
use serde_json::Value;

mod check;

/// Inspect the CDK context a test suite will be constructed with
#[derive(Parser, Debug)]
#[command(name = "cdkctx", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// CDK project directory containing cdk.json (defaults to the current directory)
    #[arg(short, long, global = true, env = "CDKCTX_DIR")]
    dir: Option<PathBuf>,

    /// Log level override (e.g. debug, info, warn, error)
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all log output (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the context mapping from cdk.json
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a single context value as JSON
    Get {
        /// Context key (e.g. "@aws-cdk/core:stackRelativeExports")
        key: String,
    },
    /// Check cdk.json and cdk.context.json and report warnings
    Check {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completions for bash, zsh, or fish
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    pub fn run(self) -> cdkctx_core::Result<()> {
        // Resolve log level: --verbose > --quiet > --log-level > default
        let log_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            // Loader diagnostics already reach stderr without a subscriber.
            self.log_level.as_deref().unwrap_or("error")
        };

        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
            )
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.execute(&mut out)
    }

    /// Dispatch the parsed command, writing its output to `out`.
    pub fn execute<W: Write>(self, out: &mut W) -> cdkctx_core::Result<()> {
        let loader = ContextLoader::new(ContextLoader::resolve_dir(self.dir.as_deref()));
        tracing::debug!(dir = ?loader.cdk_dir(), "resolved CDK project directory");

        match self.command {
            Commands::Show { json } => {
                let context = loader.load()?.into_context();
                Self::cmd_show(&context, json, out)
            }
            Commands::Get { key } => {
                let context = loader.load()?.into_context();
                Self::cmd_get(&context, &key, out)
            }
            Commands::Check { json } => check::cmd_check(&loader, json, out),
            Commands::Completions { shell } => {
                generate(shell, &mut Cli::command(), "cdkctx", out);
                Ok(())
            }
        }
    }

    fn cmd_show<W: Write>(context: &ContextMap, json: bool, out: &mut W) -> cdkctx_core::Result<()> {
        if json {
            let rendered = serde_json::to_string_pretty(context)
                .map_err(|e| CdkCtxError::Serialization(e.to_string()))?;
            writeln!(out, "{rendered}")?;
        } else if context.is_empty() {
            writeln!(out, "(no context values)")?;
        } else {
            for (key, value) in context {
                writeln!(out, "{key} = {}", display_value(value))?;
            }
        }
        Ok(())
    }

    fn cmd_get<W: Write>(context: &ContextMap, key: &str, out: &mut W) -> cdkctx_core::Result<()> {
        let value = context
            .get(key)
            .ok_or_else(|| CdkCtxError::ContextKeyNotFound(key.to_string()))?;
        let rendered = serde_json::to_string_pretty(value)
            .map_err(|e| CdkCtxError::Serialization(e.to_string()))?;
        writeln!(out, "{rendered}")?;
        Ok(())
    }
}

/// Strings print bare, everything else as compact JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(&json!("us-east-1")), "us-east-1");
        assert_eq!(display_value(&json!(true)), "true");
        assert_eq!(display_value(&json!({"a": [1, 2]})), r#"{"a":[1,2]}"#);
    }

    #[test]
    fn test_cli_parses_global_dir() {
        let cli = Cli::try_parse_from(["cdkctx", "show", "--dir", "/proj", "--json"]).unwrap();
        assert_eq!(cli.dir.as_deref(), Some(std::path::Path::new("/proj")));
        assert!(matches!(cli.command, Commands::Show { json: true }));
    }

    #[test]
    fn test_cli_dir_from_env() {
        // Only this test touches CDKCTX_DIR in this binary.
        unsafe { std::env::set_var("CDKCTX_DIR", "/env/proj") };
        let from_env = Cli::try_parse_from(["cdkctx", "check"]).unwrap();
        let explicit = Cli::try_parse_from(["cdkctx", "check", "--dir", "/flag"]).unwrap();
        unsafe { std::env::remove_var("CDKCTX_DIR") };

        assert_eq!(from_env.dir.as_deref(), Some(std::path::Path::new("/env/proj")));
        assert_eq!(explicit.dir.as_deref(), Some(std::path::Path::new("/flag")));
    }

    #[test]
    fn test_cli_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["cdkctx", "-v", "-q", "check"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }
}
