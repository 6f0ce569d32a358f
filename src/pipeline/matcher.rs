// ============================================================
// Layer 5 — Entity Matcher
// ============================================================
// For each entity, in order, every catalog row whose Statement
// contains the entity text is appended to the result.
//
// Matching is a literal, case-sensitive substring test:
//   "liver" matches "Supports liver health"
//   "Liver" does not
// A row mentioning two entities is appended twice.

use crate::domain::catalog::CatalogRow;
use crate::domain::entity::ExtractedEntity;
use crate::domain::error::{AdvisorError, Result};

/// True when the row's statement contains `text` verbatim.
fn mentions(row: &CatalogRow, text: &str) -> bool {
    match row.statement.as_deref() {
        Some(statement) if !statement.is_empty() => statement.contains(text),
        _ => false,
    }
}

/// Collect matching rows for every entity. Fails with NoMatches
/// if nothing matched at all.
pub fn match_entities<'a>(
    entities: &[ExtractedEntity],
    catalog:  &'a [CatalogRow],
) -> Result<Vec<&'a CatalogRow>> {
    let mut matched = Vec::new();

    for entity in entities {
        // An empty phrase would be "contained" in every statement
        if entity.text.is_empty() {
            tracing::debug!("Skipping empty entity text ({})", entity.category);
            continue;
        }
        let before = matched.len();
        matched.extend(catalog.iter().filter(|row| mentions(row, &entity.text)));
        tracing::debug!("'{}' matched {} rows", entity.text, matched.len() - before);
    }

    tracing::info!("Matched {} rows for {} entities", matched.len(), entities.len());

    if matched.is_empty() {
        return Err(AdvisorError::NoMatches);
    }
    Ok(matched)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, statement: Option<&str>) -> CatalogRow {
        CatalogRow {
            url:               format!("u{id}"),
            dsld_id:           id.into(),
            product_name:      format!("P{id}"),
            brand_name:        None,
            statement_type:    Some("Other".into()),
            statement:         statement.map(String::from),
            supplement_form:   None,
            market_status:     None,
            other_ingredients: None,
        }
    }

    fn ids(rows: &[&CatalogRow]) -> Vec<String> {
        rows.iter().map(|r| r.dsld_id.clone()).collect()
    }

    #[test]
    fn test_appends_per_entity_with_duplicates() {
        let catalog = vec![
            row("1", Some("Supports liver and kidney health")),
            row("2", Some("Promotes kidney function")),
            row("3", Some("Eye health")),
        ];
        let entities = vec![
            ExtractedEntity::new("liver", "Biological_structure"),
            ExtractedEntity::new("kidney", "Biological_structure"),
        ];
        let matched = match_entities(&entities, &catalog).unwrap();
        assert_eq!(ids(&matched), vec!["1", "1", "2"]);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let catalog  = vec![row("1", Some("Liver support"))];
        let entities = vec![ExtractedEntity::new("liver", "Biological_structure")];
        assert!(matches!(match_entities(&entities, &catalog), Err(AdvisorError::NoMatches)));
    }

    #[test]
    fn test_missing_statement_never_matches() {
        let catalog  = vec![row("1", None), row("2", Some(""))];
        let entities = vec![ExtractedEntity::new("", "Biological_structure")];
        assert!(matches!(match_entities(&entities, &catalog), Err(AdvisorError::NoMatches)));
    }
}
