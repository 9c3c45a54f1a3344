//! # cdkctx-config
//!
//! Reads the `context` mapping out of a CDK project's `cdk.json` and builds the
//! application root that test suites synthesize stacks against. Warns, without
//! failing, when the cached lookups in `cdk.context.json` are absent.

pub mod app;
pub mod loader;
pub mod schema;

pub use app::{App, AppProps, init_test_app};
pub use loader::{ContextLoader, load_context};
pub use schema::{ContextWarning, LoadedContext, WarningSeverity};
