//! Company FAQ catalogue stored in a single-table SQLite file.

mod catalogue;
pub mod data;

pub use catalogue::{CategoryCount, FaqCatalogue, FaqEntry, FaqError, render_report};
pub use data::{FAQ_SEED, FaqSeed};

/// Default database file, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "faq.db";
