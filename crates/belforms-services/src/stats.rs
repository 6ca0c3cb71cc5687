//! Aggregate counters over the database, with no list output.

use std::path::Path;

use belforms_core::Result;
use serde::Serialize;

use crate::pipeline::{parse_all, SOURCE_FILES};

/// Bumped when the JSON layout changes.
pub const STATS_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize)]
pub struct DbStats {
    pub schema_version: u32,
    pub files: usize,
    pub paradigms: usize,
    pub variants: usize,
    pub forms: usize,
    pub skipped_variants: usize,
    pub skipped_forms: usize,
    pub modern_lemmas: usize,
    pub all_lemmas: usize,
    pub alt_pairs: usize,
}

/// Runs the same full parse as the build, but only counts things.
pub fn collect_stats(data_dir: &Path) -> Result<DbStats> {
    let (builder, totals) = parse_all(data_dir)?;
    let lists = builder.finish();
    Ok(DbStats {
        schema_version: STATS_SCHEMA_VERSION,
        files: SOURCE_FILES.len(),
        paradigms: totals.paradigms,
        variants: totals.variants,
        forms: totals.forms,
        skipped_variants: totals.skipped_variants,
        skipped_forms: totals.skipped_forms,
        modern_lemmas: lists.modern.len(),
        all_lemmas: lists.all.len(),
        alt_pairs: lists.alt_pairs.len(),
    })
}
