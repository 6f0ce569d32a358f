// ============================================================
// Layer 3 — Extracted Entity
// ============================================================
// One phrase pulled out of a case description by the entity
// extractor, tagged with the extractor's category label.
//
// The wire names (`value`, `entity_group`) are the ones the
// external NER tool emits, so the struct deserialises its
// output directly.

use serde::{Deserialize, Serialize};

/// Category label for diagnostic procedures ("biopsy", "MRI").
pub const DIAGNOSTIC_PROCEDURE: &str = "Diagnostic_procedure";

/// Category label for anatomy ("liver", "eyes").
pub const BIOLOGICAL_STRUCTURE: &str = "Biological_structure";

/// A text span tagged with a semantic category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedEntity {
    /// The phrase as it appears in the description
    #[serde(rename = "value")]
    pub text: String,

    /// Category drawn from the extractor's fixed vocabulary
    #[serde(rename = "entity_group")]
    pub category: String,
}

impl ExtractedEntity {
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            text:     text.into(),
            category: category.into(),
        }
    }

    /// True for the two categories the catalog is searched by.
    /// The comparison is exact; `"biological_structure"` does not count.
    pub fn is_of_interest(&self) -> bool {
        self.category == DIAGNOSTIC_PROCEDURE || self.category == BIOLOGICAL_STRUCTURE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialises_ner_wire_format() {
        let json = r#"{"value": "liver", "entity_group": "Biological_structure", "score": 0.93}"#;
        let e: ExtractedEntity = serde_json::from_str(json).unwrap();
        assert_eq!(e, ExtractedEntity::new("liver", BIOLOGICAL_STRUCTURE));
    }

    #[test]
    fn test_category_match_is_case_sensitive() {
        assert!(ExtractedEntity::new("MRI", "Diagnostic_procedure").is_of_interest());
        assert!(!ExtractedEntity::new("MRI", "diagnostic_procedure").is_of_interest());
        assert!(!ExtractedEntity::new("fatigue", "Sign_symptom").is_of_interest());
    }
}
