// ============================================================
// Layer 2 — RecommendUseCase
// ============================================================
// Runs the full recommendation pipeline in order:
//
//   Step 1: Validate the request               (Layer 3 - domain)
//   Step 2: Extract + filter entities          (Layers 6, 5)
//   Step 3: Load and merge the catalog         (Layer 4 - data)
//   Step 4: Match statements against entities  (Layer 5)
//   Step 5: Age, brand and market passes       (Layer 5)
//   Step 6: Exclude allergens                  (Layer 5)
//   Step 7: Cap and format                     (Layer 5)
//
// Entities are extracted before the catalog is read, so a vague
// description fails without touching the CSV files.
//
// `respond` turns every recoverable error into a failure
// response; only a catalog schema mismatch escapes as Err.

use std::path::PathBuf;

use crate::data::{loader::CsvCatalogLoader, merger::merge_catalog};
use crate::domain::entity::ExtractedEntity;
use crate::domain::error::Result;
use crate::domain::request::RecommendationRequest;
use crate::domain::response::{Recommendation, RecommendationResponse};
use crate::domain::traits::{CatalogSource, EntityExtractor};
use crate::infra::{command_extractor::CommandExtractor, lexicon_extractor::LexiconExtractor};
use crate::pipeline::{
    allergens::exclude_allergens,
    entity_filter::require_entities,
    formatter::format_results,
    matcher::match_entities,
    reorder::apply_passes,
};

/// Prefix the NER model was tuned on.
pub const CASE_PREFIX: &str = "CASE: ";

// ─── Advisor Configuration ────────────────────────────────────────────────────
// Where the catalog lives and which extractor to use.
#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    pub data_dir:    PathBuf,
    pub lexicon:     PathBuf,
    pub ner_command: Option<String>,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            data_dir:    PathBuf::from("data"),
            lexicon:     PathBuf::from("data/entity_lexicon.csv"),
            ner_command: None,
        }
    }
}

// ─── Request Parameters ───────────────────────────────────────────────────────
// Raw request fields as typed by the user. Validation happens
// inside the use case so a bad value becomes a failure response.
#[derive(Debug, Clone, Default)]
pub struct RecommendParams {
    pub age:           String,
    pub description:   String,
    pub brand:         String,
    pub market_status: bool,
    pub allergies:     String,
}

// ─── RecommendUseCase ─────────────────────────────────────────────────────────
pub struct RecommendUseCase {
    extractor: Box<dyn EntityExtractor>,
    catalog:   Box<dyn CatalogSource>,
}

impl RecommendUseCase {
    pub fn new(extractor: Box<dyn EntityExtractor>, catalog: Box<dyn CatalogSource>) -> Self {
        Self { extractor, catalog }
    }

    /// Wire the CSV catalog and the configured extractor.
    /// An explicit NER command wins over the lexicon.
    pub fn from_config(config: &AdvisorConfig) -> Result<Self> {
        let extractor: Box<dyn EntityExtractor> = match &config.ner_command {
            Some(cmd) => {
                tracing::info!("Using NER command: {}", cmd);
                Box::new(CommandExtractor::from_command_line(cmd)?)
            }
            None => {
                tracing::info!("Using lexicon: {}", config.lexicon.display());
                Box::new(LexiconExtractor::from_path(&config.lexicon)?)
            }
        };
        let catalog = Box::new(CsvCatalogLoader::new(&config.data_dir));
        Ok(Self::new(extractor, catalog))
    }

    /// Extract entities from a description and keep those of interest.
    pub fn entities(&self, description: &str) -> Result<Vec<ExtractedEntity>> {
        let extracted = self.extractor.extract(&format!("{CASE_PREFIX}{description}"))?;
        require_entities(&extracted)
    }

    /// Run the whole pipeline; any failure is returned as Err.
    pub fn recommend(&self, params: &RecommendParams) -> Result<Vec<Recommendation>> {
        let request = RecommendationRequest::parse(
            &params.age,
            &params.description,
            &params.brand,
            params.market_status,
            &params.allergies,
        )?;

        let entities = self.entities(&request.description)?;

        let tables  = self.catalog.load_tables()?;
        let catalog = merge_catalog(&tables);

        let matched = match_entities(&entities, &catalog)?;
        let ranked  = apply_passes(matched, &request);
        let safe    = exclude_allergens(ranked, &request.allergies);

        tracing::info!("{} rows after ranking and allergen exclusion", safe.len());
        Ok(format_results(&safe))
    }

    /// Run the pipeline and wrap the outcome in a response envelope.
    pub fn respond(&self, params: &RecommendParams) -> Result<RecommendationResponse> {
        match self.recommend(params) {
            Ok(recommendations) => Ok(RecommendationResponse::success(recommendations)),
            Err(e) if e.is_fatal() => Err(e),
            Err(e) => {
                tracing::warn!("Request failed: {}", e);
                Ok(RecommendationResponse::failure(e.user_message()))
            }
        }
    }
}
