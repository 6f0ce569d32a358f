// ============================================================
// Layer 5 — Selection and Ranking Pipeline
// ============================================================
// The core of the advisor. Each stage takes the previous
// stage's ordered rows and returns a new ordered Vec; none of
// them mutate the catalog.
//
//   entities ─► entity_filter ─┐
//                              ├─► matcher ─► reorder (age, brand)
//   catalog  ──────────────────┘      │
//                                     ▼
//                    reorder (market status gate)
//                                     │
//                                     ▼
//                    allergens ─► formatter ─► response
//
// Row order is priority: earlier rows are recommended first.

/// Keeps only diagnostic-procedure and biological-structure entities
pub mod entity_filter;

/// Finds catalog statements that mention each entity
pub mod matcher;

/// Stable partition passes for age, brand and market status
pub mod reorder;

/// Allergy synonym dictionary and ingredient exclusion
pub mod allergens;

/// Caps the result and wraps it for output
pub mod formatter;

/// Case-insensitive substring test; a missing haystack never matches.
pub fn contains_ignore_case(haystack: Option<&str>, needle: &str) -> bool {
    match haystack {
        Some(h) => h.to_lowercase().contains(&needle.to_lowercase()),
        None    => false,
    }
}
