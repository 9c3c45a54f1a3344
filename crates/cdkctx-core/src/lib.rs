//! # cdkctx-core
//!
//! Shared vocabulary for cdkctx: the error taxonomy, the context mapping type,
//! and the well-known CDK file names.

pub mod error;
pub mod types;

pub use error::{CdkCtxError, Result};
pub use types::*;
