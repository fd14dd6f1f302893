//! Embedded table loader
//!
//! The built-in English table is compiled into the binary and parsed on first
//! access.

use super::BrailleTables;
use crate::error::Result;
use std::sync::{Arc, OnceLock};

static EMBEDDED: OnceLock<Result<Arc<BrailleTables>>> = OnceLock::new();

const ENGLISH: &str = include_str!("../../configs/tables/english.toml");

/// Built-in English tables, shared process-wide
pub fn embedded() -> Result<Arc<BrailleTables>> {
    EMBEDDED
        .get_or_init(|| BrailleTables::from_toml_str("en", ENGLISH).map(Arc::new))
        .clone()
}
