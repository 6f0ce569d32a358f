// ============================================================
// Layer 3 — Recommendation Request
// ============================================================
// One validated request: who the user is and what they want
// excluded. Built from raw CLI text so that a bad age becomes
// an InvalidArgument response instead of a clap usage error.

use crate::domain::error::{AdvisorError, Result};

/// Users at or below this age get child-friendly forms first.
pub const CHILD_AGE_LIMIT: u32 = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationRequest {
    pub age:           u32,
    pub description:   String,
    pub brand:         String,
    pub market_status: bool,
    /// Lower-cased, trimmed allergy words
    pub allergies:     Vec<String>,
}

impl RecommendationRequest {
    /// Validate raw request fields.
    pub fn parse(
        age:           &str,
        description:   &str,
        brand:         &str,
        market_status: bool,
        allergies:     &str,
    ) -> Result<Self> {
        let age = age.trim().parse::<u32>().map_err(|_| {
            AdvisorError::InvalidArgument(format!("age must be a non-negative integer, got '{age}'"))
        })?;

        if description.trim().is_empty() {
            return Err(AdvisorError::InvalidArgument("description must not be empty".into()));
        }

        Ok(Self {
            age,
            description: description.to_string(),
            brand:       brand.to_string(),
            market_status,
            allergies:   parse_allergies(allergies),
        })
    }

    pub fn wants_child_forms(&self) -> bool {
        self.age <= CHILD_AGE_LIMIT
    }

    /// The brand to prioritise, if any. Empty and the literal
    /// `"nan"` (a blank spreadsheet cell upstream) mean "no preference".
    /// Anything else, whitespace included, is searched for as given.
    pub fn preferred_brand(&self) -> Option<&str> {
        if self.brand.is_empty() || self.brand.eq_ignore_ascii_case("nan") {
            None
        } else {
            Some(&self.brand)
        }
    }
}

/// Split a comma-separated allergy list into trimmed, lower-cased words.
pub fn parse_allergies(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|a| a.trim().to_lowercase())
        .filter(|a| !a.is_empty())
        .collect()
}
