// ============================================================
// Layer 6 — Lexicon Extractor
// ============================================================
// Dictionary-based tagging for running without a NER model.
//
// Lexicon file (CSV):
//   term,entity_group
//   liver,Biological_structure
//   blood test,Diagnostic_procedure
//
// Each term becomes a case-insensitive whole-word regex. The
// entity value is the span exactly as written in the text, so
// the downstream case-sensitive statement match sees what the
// user typed. Overlapping hits keep the earliest, then longest.

use regex::Regex;
use serde::Deserialize;
use std::{fs::File, io::Read, path::Path};

use crate::domain::entity::ExtractedEntity;
use crate::domain::error::{AdvisorError, Result};
use crate::domain::traits::EntityExtractor;

/// One row of the lexicon CSV
#[derive(Debug, Clone, Deserialize)]
pub struct LexiconEntry {
    pub term:         String,
    pub entity_group: String,
}

#[derive(Debug)]
pub struct LexiconExtractor {
    patterns: Vec<(Regex, String)>,
}

impl LexiconExtractor {
    pub fn new(entries: Vec<LexiconEntry>) -> Result<Self> {
        let mut patterns = Vec::with_capacity(entries.len());
        for entry in entries {
            let term = entry.term.trim();
            if term.is_empty() {
                continue;
            }
            let re = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(term))).map_err(|e| {
                AdvisorError::ExtractionFailure(format!("bad lexicon term '{term}': {e}"))
            })?;
            patterns.push((re, entry.entity_group));
        }
        tracing::debug!("Lexicon ready with {} terms", patterns.len());
        Ok(Self { patterns })
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let entries = csv::Reader::from_reader(reader)
            .deserialize()
            .collect::<std::result::Result<Vec<LexiconEntry>, _>>()
            .map_err(|e| AdvisorError::ExtractionFailure(format!("cannot parse lexicon: {e}")))?;
        Self::new(entries)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            AdvisorError::ExtractionFailure(format!("cannot open lexicon '{}': {e}", path.display()))
        })?;
        Self::from_reader(file)
    }
}

impl EntityExtractor for LexiconExtractor {
    fn extract(&self, text: &str) -> Result<Vec<ExtractedEntity>> {
        // (start, end, category)
        let mut hits: Vec<(usize, usize, &str)> = self
            .patterns
            .iter()
            .flat_map(|(re, group)| re.find_iter(text).map(move |m| (m.start(), m.end(), group.as_str())))
            .collect();

        // Earliest first; on ties the longer span wins
        hits.sort_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)));

        let mut entities = Vec::new();
        let mut covered_to = 0;
        for (start, end, group) in hits {
            if start < covered_to {
                continue;
            }
            entities.push(ExtractedEntity::new(&text[start..end], group));
            covered_to = end;
        }
        Ok(entities)
    }
}
