// ============================================================
// Layer 5 — Priority Reorderer
// ============================================================
// Three passes refine the matched rows, strictly in order:
//
//   1. Age    (age <= 6)      child-friendly forms move to the front
//   2. Brand  (brand given)   the preferred brand moves to the front
//   3. Market (flag set)      rows not "On Market" are dropped
//
// Passes 1 and 2 are stable partitions: matching rows first,
// the rest after, relative order kept inside each group.
// Pass 3 is a gate, not a ranking.
//
// The age pass collects matches form by form. A row whose form
// mentions two child forms lands in the front group twice.

use crate::domain::catalog::CatalogRow;
use crate::domain::request::RecommendationRequest;
use crate::pipeline::contains_ignore_case;

/// Supplement forms preferred for young children.
pub const CHILD_FORMS: [&str; 3] = ["Powder", "Liquid", "Gummy or Jelly"];

/// Market status text a row needs when the market flag is set.
pub const ON_MARKET: &str = "On Market";

/// Matching rows first, the rest after; both groups keep their order.
pub fn stable_partition<T, P>(rows: Vec<T>, predicate: P) -> Vec<T>
where
    P: Fn(&T) -> bool,
{
    let (mut matched, unmatched): (Vec<T>, Vec<T>) =
        rows.into_iter().partition(|row| predicate(row));
    matched.extend(unmatched);
    matched
}

/// Front group is the concatenation of each predicate's matches,
/// taken one predicate at a time; the back group is every row no
/// predicate matched. With a single predicate this is exactly
/// `stable_partition`.
pub fn prioritize_each<T, P>(rows: &[T], predicates: &[P]) -> Vec<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    let mut ordered: Vec<T> = predicates
        .iter()
        .flat_map(|p| rows.iter().filter(move |row| p(*row)).cloned())
        .collect();
    ordered.extend(
        rows.iter()
            .filter(|row| !predicates.iter().any(|p| p(*row)))
            .cloned(),
    );
    ordered
}

/// `stable_partition` when `active`, identity otherwise.
pub fn reorder<T, P>(rows: Vec<T>, predicate: P, active: bool) -> Vec<T>
where
    P: Fn(&T) -> bool,
{
    if active {
        stable_partition(rows, predicate)
    } else {
        rows
    }
}

// ─── Passes ───────────────────────────────────────────────────────────────────

pub fn age_pass<'a>(rows: Vec<&'a CatalogRow>, request: &RecommendationRequest) -> Vec<&'a CatalogRow> {
    if !request.wants_child_forms() {
        return rows;
    }
    let predicates: Vec<_> = CHILD_FORMS
        .iter()
        .map(|form| move |row: &&CatalogRow| contains_ignore_case(row.supplement_form.as_deref(), form))
        .collect();
    let ordered = prioritize_each(&rows, &predicates);
    tracing::debug!("Age pass: {} rows -> {} rows", rows.len(), ordered.len());
    ordered
}

pub fn brand_pass<'a>(rows: Vec<&'a CatalogRow>, request: &RecommendationRequest) -> Vec<&'a CatalogRow> {
    let brand = request.preferred_brand().unwrap_or_default();
    reorder(
        rows,
        |row| contains_ignore_case(row.brand_name.as_deref(), brand),
        request.preferred_brand().is_some(),
    )
}

pub fn market_pass<'a>(rows: Vec<&'a CatalogRow>, request: &RecommendationRequest) -> Vec<&'a CatalogRow> {
    if !request.market_status {
        return rows;
    }
    let before = rows.len();
    let kept: Vec<&CatalogRow> = rows
        .into_iter()
        .filter(|row| contains_ignore_case(row.market_status.as_deref(), ON_MARKET))
        .collect();
    tracing::debug!("Market pass: kept {} of {} rows", kept.len(), before);
    kept
}

/// Age, then brand, then market status.
pub fn apply_passes<'a>(rows: Vec<&'a CatalogRow>, request: &RecommendationRequest) -> Vec<&'a CatalogRow> {
    let rows = age_pass(rows, request);
    let rows = brand_pass(rows, request);
    market_pass(rows, request)
}
