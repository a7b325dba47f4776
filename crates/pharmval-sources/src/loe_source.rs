//! Trait for patent / exclusivity record access.

use std::path::Path;

use pharmval_common::{PatentRecord, Result};
use tracing::debug;

/// Source of patent and regulatory exclusivity records.
///
/// Implementations can use:
/// - Orange Book style exports on disk
/// - A regulatory API (remote)
/// - Mock data (testing)
pub trait LoeSource: Send + Sync {
    /// All records for a product, matched by product name
    /// (case-insensitive) or application number.
    fn records_for(&self, product: &str) -> Vec<PatentRecord>;
}

fn matches(record: &PatentRecord, product: &str) -> bool {
    record
        .product_name
        .as_deref()
        .is_some_and(|n| n.eq_ignore_ascii_case(product))
        || record.application_number.as_deref() == Some(product)
}

/// Resolve the LOE year for `product` from `source`.
pub fn lookup_loe_year(source: &dyn LoeSource, product: &str) -> Option<i32> {
    let records = source.records_for(product);
    let year = pharmval_engine::loe::resolve(&records);
    debug!(product, n_records = records.len(), ?year, "LOE lookup");
    year
}

// ── Mock Implementation for Testing ────────────────────────────────────────

/// Mock source with hardcoded records for unit tests.
#[derive(Debug, Default)]
pub struct MockLoeSource {
    records: Vec<PatentRecord>,
}

impl MockLoeSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record for a product.
    pub fn with(
        mut self,
        product: &str,
        patent_expiry: Option<&str>,
        exclusivity_expiry: Option<&str>,
    ) -> Self {
        self.records.push(PatentRecord {
            application_number: None,
            product_name: Some(product.to_string()),
            patent_expiry: patent_expiry.map(String::from),
            exclusivity_expiry: exclusivity_expiry.map(String::from),
        });
        self
    }

    pub fn with_records(mut self, records: Vec<PatentRecord>) -> Self {
        self.records.extend(records);
        self
    }
}

impl LoeSource for MockLoeSource {
    fn records_for(&self, product: &str) -> Vec<PatentRecord> {
        self.records.iter().filter(|r| matches(r, product)).cloned().collect()
    }
}

// ── JSON file ──────────────────────────────────────────────────────────────

/// Records loaded once from a JSON array on disk.
#[derive(Debug)]
pub struct JsonFileLoeSource {
    records: Vec<PatentRecord>,
}

impl JsonFileLoeSource {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let records: Vec<PatentRecord> = serde_json::from_str(&content)?;
        debug!(path = %path.display(), n = records.len(), "Loaded LOE records");
        Ok(Self { records })
    }
}

impl LoeSource for JsonFileLoeSource {
    fn records_for(&self, product: &str) -> Vec<PatentRecord> {
        self.records.iter().filter(|r| matches(r, product)).cloned().collect()
    }
}
