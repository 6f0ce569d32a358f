// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The two collaborators the pipeline depends on but does not
// implement itself:
//
//   EntityExtractor — turns a description into tagged phrases
//   CatalogSource   — hands over the three catalog tables
//
// Implementations:
//   - CommandExtractor / LexiconExtractor (Layer 6)
//   - CsvCatalogLoader                    (Layer 4)
//   - in-memory stubs in the unit tests

use crate::domain::catalog::CatalogTables;
use crate::domain::entity::ExtractedEntity;
use crate::domain::error::Result;

// ─── EntityExtractor ──────────────────────────────────────────────────────────
/// Anything that can tag phrases in free text.
pub trait EntityExtractor {
    /// Extract every tagged phrase from `text`, in the order found.
    /// An empty Vec is a valid answer; the caller decides what it means.
    fn extract(&self, text: &str) -> Result<Vec<ExtractedEntity>>;
}

// ─── CatalogSource ────────────────────────────────────────────────────────────
/// Anything that can provide the label, overview and ingredient tables.
pub trait CatalogSource {
    /// Load all three tables, partitions already concatenated.
    fn load_tables(&self) -> Result<CatalogTables>;
}
