use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags, params};
use thiserror::Error;

use super::data::FaqSeed;

#[derive(Error, Debug)]
pub enum FaqError {
    #[error("FAQ database {0} does not exist; run `faq-catalogue seed` first")]
    Missing(PathBuf),
    #[error("SQLite error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// One stored FAQ record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqEntry {
    pub id: i64,
    pub category: String,
    pub question: String,
    pub answer: String,
    pub keywords: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: String,
    pub count: i64,
}

/// SQLite-backed FAQ catalogue
pub struct FaqCatalogue {
    conn: Connection,
    path: PathBuf,
}

impl FaqCatalogue {
    /// Replace whatever is at `path` with a fresh catalogue holding `entries`.
    pub fn seed<P: AsRef<Path>>(path: P, entries: &[FaqSeed]) -> Result<Self, FaqError> {
        let path = path.as_ref();
        match std::fs::remove_file(path) {
            Ok(()) => tracing::info!(path = %path.display(), "removed existing FAQ database"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }

        let conn = Connection::open(path)?;
        conn.execute_batch(
            r#"
            CREATE TABLE faq (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                category TEXT NOT NULL,
                question TEXT NOT NULL,
                answer TEXT NOT NULL,
                keywords TEXT NOT NULL
            );
            "#,
        )?;

        let tx = conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO faq (category, question, answer, keywords) VALUES (?1, ?2, ?3, ?4)",
            )?;
            for (category, question, answer, keywords) in entries {
                stmt.execute(params![category, question, answer, keywords])?;
            }
        }
        tx.commit()?;

        tracing::info!(path = %path.display(), records = entries.len(), "seeded FAQ database");
        Ok(Self {
            conn,
            path: path.to_path_buf(),
        })
    }

    /// Open an existing catalogue read-only.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, FaqError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(FaqError::Missing(path.to_path_buf()));
        }
        let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
        Ok(Self {
            conn,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn count(&self) -> Result<i64, FaqError> {
        let n = self
            .conn
            .query_row("SELECT COUNT(*) FROM faq", [], |row| row.get(0))?;
        Ok(n)
    }

    /// Record counts per category, ordered by category.
    pub fn counts_by_category(&self) -> Result<Vec<CategoryCount>, FaqError> {
        let mut stmt = self
            .conn
            .prepare("SELECT category, COUNT(*) FROM faq GROUP BY category ORDER BY category")?;
        let rows = stmt.query_map([], |row| {
            Ok(CategoryCount {
                category: row.get(0)?,
                count: row.get(1)?,
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// All records ordered by category, then id.
    pub fn entries(&self) -> Result<Vec<FaqEntry>, FaqError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, category, question, answer, keywords FROM faq ORDER BY category, id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(FaqEntry {
                id: row.get(0)?,
                category: row.get(1)?,
                question: row.get(2)?,
                answer: row.get(3)?,
                keywords: row.get(4)?,
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }
}

/// Total, per-category counts, then every record.
pub fn render_report(catalogue: &FaqCatalogue) -> Result<String, FaqError> {
    let mut out = String::new();
    let _ = writeln!(out, "Total records: {}\n", catalogue.count()?);

    let _ = writeln!(out, "Categories:");
    for c in catalogue.counts_by_category()? {
        let _ = writeln!(out, "  {}: {} questions", c.category, c.count);
    }
    let _ = writeln!(out);

    let rule = "=".repeat(60);
    for e in catalogue.entries()? {
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out, "[{}] {}", e.id, e.category);
        let _ = writeln!(out, "Q: {}", e.question);
        let _ = writeln!(out, "A: {}", e.answer);
        let _ = writeln!(out, "Keywords: {}\n", e.keywords);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::faq::FAQ_SEED;
    use tempfile::TempDir;

    fn seeded() -> (TempDir, FaqCatalogue) {
        let dir = TempDir::new().unwrap();
        let cat = FaqCatalogue::seed(dir.path().join("faq.db"), FAQ_SEED).unwrap();
        (dir, cat)
    }

    #[test]
    fn seeding_writes_fifteen_records_in_four_categories() {
        let (_dir, cat) = seeded();
        assert_eq!(cat.count().unwrap(), 15);

        let counts = cat.counts_by_category().unwrap();
        let pairs: Vec<(&str, i64)> = counts
            .iter()
            .map(|c| (c.category.as_str(), c.count))
            .collect();
        assert_eq!(
            pairs,
            vec![("Finance", 3), ("General", 3), ("HR", 5), ("IT", 4)]
        );
    }

    #[test]
    fn entries_are_ordered_by_category_then_id() {
        let (_dir, cat) = seeded();
        let entries = cat.entries().unwrap();
        assert_eq!(entries.len(), 15);
        for pair in entries.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!((a.category.as_str(), a.id) < (b.category.as_str(), b.id));
        }
        // Finance rows were inserted after HR and IT
        assert_eq!(entries[0].category, "Finance");
        assert_eq!(entries[0].id, 10);
    }

    #[test]
    fn reseeding_replaces_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("faq.db");
        drop(FaqCatalogue::seed(&path, FAQ_SEED).unwrap());
        drop(FaqCatalogue::seed(&path, &FAQ_SEED[..2]).unwrap());

        let cat = FaqCatalogue::open(&path).unwrap();
        assert_eq!(cat.path(), path.as_path());
        assert_eq!(cat.count().unwrap(), 2);
        assert_eq!(cat.entries().unwrap()[0].id, 1);
    }

    #[test]
    fn opening_a_missing_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let err = FaqCatalogue::open(dir.path().join("nope.db"))
            .err()
            .unwrap();
        assert!(matches!(err, FaqError::Missing(_)));
        assert!(err.to_string().contains("faq-catalogue seed"));
    }

    #[test]
    fn report_lists_totals_categories_and_records() {
        let (_dir, cat) = seeded();
        let report = render_report(&cat).unwrap();
        assert!(report.starts_with("Total records: 15\n"));
        assert!(report.contains("  HR: 5 questions"));
        assert!(report.contains("  General: 3 questions"));
        assert!(report.contains("[1] HR\nQ: How many vacation days am I entitled to?"));
        assert_eq!(report.matches("Keywords: ").count(), 15);

        let finance = report.find("] Finance").unwrap();
        let it = report.find("] IT").unwrap();
        assert!(finance < it);
    }
}
