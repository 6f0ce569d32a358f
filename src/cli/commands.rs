// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands, `recommend` and `entities`,
// and their flags. Catalog and extractor locations can also
// come from the environment (SUPPLEMENT_* variables).
//
// `--age` stays a String; the application layer validates it
// and reports a bad age in the JSON response.

use clap::{builder::BoolishValueParser, ArgAction, Args, Subcommand};
use std::path::PathBuf;

use crate::application::recommend_use_case::{AdvisorConfig, RecommendParams};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Recommend supplements for a case description
    Recommend(RecommendArgs),

    /// Show the entities the extractor finds in a description
    Entities(EntitiesArgs),
}

/// Where the catalog and the entity extractor live.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Directory holding LabelStatements_N.csv, ProductOverview_N.csv
    /// and OtherIngredients_N.csv
    #[arg(long, env = "SUPPLEMENT_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// term,entity_group CSV used when no NER command is given
    #[arg(long, env = "SUPPLEMENT_LEXICON", default_value = "data/entity_lexicon.csv")]
    pub lexicon: PathBuf,

    /// External NER program; reads text on stdin, writes
    /// [{"value", "entity_group"}] JSON on stdout
    #[arg(long, env = "SUPPLEMENT_NER_COMMAND")]
    pub ner_command: Option<String>,
}

impl From<&SourceArgs> for AdvisorConfig {
    fn from(a: &SourceArgs) -> Self {
        AdvisorConfig {
            data_dir:    a.data_dir.clone(),
            lexicon:     a.lexicon.clone(),
            ner_command: a.ner_command.clone(),
        }
    }
}

/// All arguments for the `recommend` command
#[derive(Args, Debug)]
pub struct RecommendArgs {
    /// Age of the user in years
    #[arg(long, allow_hyphen_values = true)]
    pub age: String,

    /// Free-text description of the medical or dietary case
    #[arg(long)]
    pub description: String,

    /// Preferred brand (substring, case-insensitive)
    #[arg(long, default_value = "")]
    pub brand: String,

    /// Only recommend products currently on the market
    #[arg(
        long,
        default_value = "false",
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    pub market_status: bool,

    /// Comma-separated food allergies, e.g. "nuts, milk"
    #[arg(long, default_value = "")]
    pub allergies: String,

    #[command(flatten)]
    pub source: SourceArgs,
}

impl From<&RecommendArgs> for RecommendParams {
    fn from(a: &RecommendArgs) -> Self {
        RecommendParams {
            age:           a.age.clone(),
            description:   a.description.clone(),
            brand:         a.brand.clone(),
            market_status: a.market_status,
            allergies:     a.allergies.clone(),
        }
    }
}

/// All arguments for the `entities` command
#[derive(Args, Debug)]
pub struct EntitiesArgs {
    /// Free-text description to analyse
    #[arg(long)]
    pub description: String,

    #[command(flatten)]
    pub source: SourceArgs,
}
