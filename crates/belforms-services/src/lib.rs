//! High-level operations behind the CLI: the conversion pipeline,
//! database health checks and statistics.

pub mod health;
pub mod pipeline;
pub mod stats;

pub use belforms_core::Result;
pub use health::{check_database, HealthIssue, HealthReport};
pub use pipeline::{
    all_header, alt_pairs_header, build_wordlists, modern_header, plan_wordlists, BuildSummary,
    DryRunPlan, ALL_WORDFORMS_FILE, ALT_PAIRS_FILE, GRAMMAR_DB_TAG, MODERN_WORDFORMS_FILE,
    SOURCE_FILES,
};
pub use stats::{collect_stats, DbStats, STATS_SCHEMA_VERSION};
