// ============================================================
// Layer 4 — Catalog Data
// ============================================================
// Everything between the DSLD CSV exports on disk and the one
// denormalised table the pipeline searches:
//
//   LabelStatements_1.csv ┐
//   LabelStatements_2.csv ┴─► CsvCatalogLoader ─┐
//   ProductOverview_N.csv ───► CsvCatalogLoader ─┼─► merge_catalog ─► Vec<CatalogRow>
//   OtherIngredients_N.csv ──► CsvCatalogLoader ─┘
//
// The loader owns all file I/O. The merger is pure and works
// on tables that are already in memory.

/// Reads and concatenates numbered CSV partitions
pub mod loader;

/// Joins label statements, overviews and ingredients
pub mod merger;
