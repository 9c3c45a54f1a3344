//! # cdkctx-cli
//!
//! Command-line interface for inspecting the context a CDK test suite will see.
//!
//! ## Commands
//!
//! - `cdkctx show` — Print the context mapping
//! - `cdkctx get <key>` — Print one context value
//! - `cdkctx check` — Report on `cdk.json` and `cdk.context.json`
//! - `cdkctx completions <shell>` — Generate shell completions

pub mod commands;

pub use commands::Cli;
