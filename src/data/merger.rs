// ============================================================
// Layer 4 — Catalog Merger
// ============================================================
// Builds the denormalised catalog from the three tables:
//
//   Step 1: keep label statements whose type is exactly "Other"
//   Step 2: right join ProductOverview onto them
//             every kept statement survives, overview columns
//             are None when its product has no overview row
//   Step 3: right join OtherIngredients onto the result
//             rows follow the ingredient table's order; products
//             without an ingredient row are dropped
//
// All joins use the key (URL, DSLD ID, Product Name). A key
// that repeats on one side yields one output row per pairing.

use std::collections::HashMap;

use crate::domain::catalog::{
    CatalogRow, CatalogTables, Keyed, LabelStatement, ProductKey, ProductOverview,
    STATEMENT_TYPE_OTHER,
};

/// Group rows by join key, keeping each group in table order.
fn index_by_key<T: Keyed>(rows: &[T]) -> HashMap<ProductKey, Vec<&T>> {
    let mut index: HashMap<ProductKey, Vec<&T>> = HashMap::new();
    for row in rows {
        index.entry(row.key()).or_default().push(row);
    }
    index
}

/// Join the three catalog tables into one row per label statement.
pub fn merge_catalog(tables: &CatalogTables) -> Vec<CatalogRow> {
    // ── Step 1: restrict statements ─────────────────────────────────────────
    let statements: Vec<&LabelStatement> = tables
        .label_statements
        .iter()
        .filter(|s| s.statement_type.as_deref() == Some(STATEMENT_TYPE_OTHER))
        .collect();

    // ── Step 2: statements ⟕ overview (statements drive) ─────────────────────
    let overviews = index_by_key(&tables.product_overview);
    let mut described: HashMap<ProductKey, Vec<(&LabelStatement, Option<&ProductOverview>)>> =
        HashMap::new();

    for statement in &statements {
        let key   = statement.key();
        let group = described.entry(key.clone()).or_default();
        match overviews.get(&key) {
            Some(matches) => group.extend(matches.iter().map(|o| (*statement, Some(*o)))),
            None          => group.push((*statement, None)),
        }
    }

    // ── Step 3: (statements + overview) ⟕ ingredients (ingredients drive) ────
    let mut merged = Vec::new();
    for ingredients in &tables.other_ingredients {
        // No "Other" statement for this key: nothing to match, so no row
        if let Some(group) = described.get(&ingredients.key()) {
            merged.extend(
                group
                    .iter()
                    .map(|(statement, overview)| CatalogRow::join(statement, *overview, ingredients)),
            );
        }
    }

    tracing::info!(
        "Merged catalog: {} 'Other' statements -> {} rows",
        statements.len(),
        merged.len()
    );
    merged
}
