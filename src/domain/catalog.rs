// ============================================================
// Layer 3 — Catalog Types
// ============================================================
// The supplement catalog comes from three DSLD exports:
//
//   LabelStatements   — free-text claims printed on the label
//   ProductOverview   — brand, form and market status
//   OtherIngredients  — the non-active ingredient list
//
// All three share the key (URL, DSLD ID, Product Name).
// The merger in Layer 4 joins them into one CatalogRow per
// label statement.
//
// serde renames map each field to its CSV header so the csv
// crate can deserialise records by column name, and so the
// JSON output carries the same column names back out.

use serde::{Deserialize, Serialize};

pub const COL_URL:               &str = "URL";
pub const COL_DSLD_ID:           &str = "DSLD ID";
pub const COL_PRODUCT_NAME:      &str = "Product Name";
pub const COL_STATEMENT_TYPE:    &str = "Statement Type";
pub const COL_STATEMENT:         &str = "Statement";
pub const COL_BRAND_NAME:        &str = "Brand Name";
pub const COL_SUPPLEMENT_FORM:   &str = "Supplement Form [LanguaL]";
pub const COL_SUPPLEMENT_FORM_PLAIN: &str = "Supplement Form";
pub const COL_MARKET_STATUS:     &str = "Market Status";
pub const COL_OTHER_INGREDIENTS: &str = "Other Ingredients";

/// Only label statements of this type take part in matching.
pub const STATEMENT_TYPE_OTHER: &str = "Other";

/// Join key shared by all three tables.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductKey {
    pub url:          String,
    pub dsld_id:      String,
    pub product_name: String,
}

/// Anything that carries the three join columns.
pub trait Keyed {
    fn key(&self) -> ProductKey;
}

/// One row of LabelStatements_N.csv
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LabelStatement {
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "DSLD ID")]
    pub dsld_id: String,
    #[serde(rename = "Product Name")]
    pub product_name: String,
    #[serde(rename = "Statement Type")]
    pub statement_type: Option<String>,
    #[serde(rename = "Statement")]
    pub statement: Option<String>,
}

/// One row of ProductOverview_N.csv
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductOverview {
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "DSLD ID")]
    pub dsld_id: String,
    #[serde(rename = "Product Name")]
    pub product_name: String,
    #[serde(rename = "Brand Name")]
    pub brand_name: Option<String>,
    #[serde(rename = "Supplement Form [LanguaL]", alias = "Supplement Form")]
    pub supplement_form: Option<String>,
    #[serde(rename = "Market Status")]
    pub market_status: Option<String>,
}

/// One row of OtherIngredients_N.csv
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OtherIngredient {
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "DSLD ID")]
    pub dsld_id: String,
    #[serde(rename = "Product Name")]
    pub product_name: String,
    #[serde(rename = "Other Ingredients")]
    pub other_ingredients: Option<String>,
}

macro_rules! impl_keyed {
    ($($ty:ty),*) => {
        $(impl Keyed for $ty {
            fn key(&self) -> ProductKey {
                ProductKey {
                    url:          self.url.clone(),
                    dsld_id:      self.dsld_id.clone(),
                    product_name: self.product_name.clone(),
                }
            }
        })*
    };
}

impl_keyed!(LabelStatement, ProductOverview, OtherIngredient, CatalogRow);

/// A denormalised supplement record: one label statement joined
/// with its product overview and ingredient list.
///
/// Overview fields are `None` when the statement's product had no
/// overview entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogRow {
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "DSLD ID")]
    pub dsld_id: String,
    #[serde(rename = "Product Name")]
    pub product_name: String,
    #[serde(rename = "Brand Name")]
    pub brand_name: Option<String>,
    #[serde(rename = "Statement Type")]
    pub statement_type: Option<String>,
    #[serde(rename = "Statement")]
    pub statement: Option<String>,
    #[serde(rename = "Supplement Form [LanguaL]")]
    pub supplement_form: Option<String>,
    #[serde(rename = "Market Status")]
    pub market_status: Option<String>,
    #[serde(rename = "Other Ingredients")]
    pub other_ingredients: Option<String>,
}

impl CatalogRow {
    /// Combine a label statement with an optional overview and the
    /// ingredient entry for the same product.
    pub fn join(
        label:       &LabelStatement,
        overview:    Option<&ProductOverview>,
        ingredients: &OtherIngredient,
    ) -> Self {
        Self {
            url:               label.url.clone(),
            dsld_id:           label.dsld_id.clone(),
            product_name:      label.product_name.clone(),
            brand_name:        overview.and_then(|o| o.brand_name.clone()),
            statement_type:    label.statement_type.clone(),
            statement:         label.statement.clone(),
            supplement_form:   overview.and_then(|o| o.supplement_form.clone()),
            market_status:     overview.and_then(|o| o.market_status.clone()),
            other_ingredients: ingredients.other_ingredients.clone(),
        }
    }
}

/// The three source tables, each already the concatenation of its
/// partitions (first partition first, no de-duplication).
#[derive(Debug, Clone, Default)]
pub struct CatalogTables {
    pub label_statements:  Vec<LabelStatement>,
    pub product_overview:  Vec<ProductOverview>,
    pub other_ingredients: Vec<OtherIngredient>,
}
