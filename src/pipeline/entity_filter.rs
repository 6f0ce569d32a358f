// ============================================================
// Layer 5 — Entity Filter
// ============================================================
// The extractor tags many categories (Sign_symptom, Age,
// Medication, ...). Only diagnostic procedures and biological
// structures are used to search the catalog.

use crate::domain::entity::ExtractedEntity;
use crate::domain::error::{AdvisorError, Result};

/// Keep the entities of interest, in their original order.
pub fn filter_entities(entities: &[ExtractedEntity]) -> Vec<ExtractedEntity> {
    let kept: Vec<ExtractedEntity> = entities
        .iter()
        .filter(|e| e.is_of_interest())
        .cloned()
        .collect();

    tracing::info!("Entities: {} extracted, {} of interest", entities.len(), kept.len());
    kept
}

/// Like `filter_entities`, but an empty extraction or an empty
/// result is an error.
pub fn require_entities(entities: &[ExtractedEntity]) -> Result<Vec<ExtractedEntity>> {
    if entities.is_empty() {
        return Err(AdvisorError::ExtractionFailure(
            "extractor returned no entities".into(),
        ));
    }
    let kept = filter_entities(entities);
    if kept.is_empty() {
        return Err(AdvisorError::NoEntitiesOfInterest);
    }
    Ok(kept)
}
