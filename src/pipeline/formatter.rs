// ============================================================
// Layer 5 — Result Formatter
// ============================================================
// Keeps the first MAX_RECOMMENDATIONS rows and turns them into
// owned Recommendation records for the response envelope.
// Anything past the cap is dropped; there is no paging.

use crate::domain::catalog::CatalogRow;
use crate::domain::response::Recommendation;

pub const MAX_RECOMMENDATIONS: usize = 20;

pub fn format_results(rows: &[&CatalogRow]) -> Vec<Recommendation> {
    if rows.len() > MAX_RECOMMENDATIONS {
        tracing::debug!("Truncating {} rows to {}", rows.len(), MAX_RECOMMENDATIONS);
    }
    rows.iter()
        .take(MAX_RECOMMENDATIONS)
        .map(|row| Recommendation::from((*row).clone()))
        .collect()
}
