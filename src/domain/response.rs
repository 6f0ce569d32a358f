// ============================================================
// Layer 3 — Response Envelope
// ============================================================
// What the advisor prints on stdout:
//
//   {"success": true,  "recommendations": [ {...}, ... ]}
//   {"success": false, "error": "..."}
//
// Each recommendation is a CatalogRow flattened into the
// object, plus a direct link to the label PDF.

use serde::Serialize;

use crate::domain::catalog::CatalogRow;

const LABEL_PAGE_PREFIX: &str = "https://dsld.od.nih.gov/label/";
const LABEL_PDF_PREFIX:  &str = "https://api.ods.od.nih.gov/dsld/s3/pdf/";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    #[serde(flatten)]
    pub row: CatalogRow,

    #[serde(rename = "Label PDF")]
    pub label_pdf: Option<String>,
}

impl From<CatalogRow> for Recommendation {
    fn from(row: CatalogRow) -> Self {
        let label_pdf = label_pdf_url(&row.url);
        Self { row, label_pdf }
    }
}

/// Map a DSLD label page URL to the downloadable PDF of the same label.
pub fn label_pdf_url(label_url: &str) -> Option<String> {
    let id = label_url.trim().strip_prefix(LABEL_PAGE_PREFIX)?;
    if id.is_empty() {
        return None;
    }
    Some(format!("{LABEL_PDF_PREFIX}{id}.pdf"))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationResponse {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<Recommendation>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RecommendationResponse {
    pub fn success(recommendations: Vec<Recommendation>) -> Self {
        Self {
            success:         true,
            recommendations: Some(recommendations),
            error:           None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success:         false,
            recommendations: None,
            error:           Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(url: &str) -> CatalogRow {
        CatalogRow {
            url:               url.into(),
            dsld_id:           "1234".into(),
            product_name:      "Liver Support".into(),
            brand_name:        Some("Vega".into()),
            statement_type:    Some("Other".into()),
            statement:         Some("Supports liver function".into()),
            supplement_form:   None,
            market_status:     Some("On Market".into()),
            other_ingredients: None,
        }
    }

    #[test]
    fn test_label_pdf_url() {
        assert_eq!(
            label_pdf_url("https://dsld.od.nih.gov/label/1234").as_deref(),
            Some("https://api.ods.od.nih.gov/dsld/s3/pdf/1234.pdf")
        );
        assert_eq!(label_pdf_url("https://example.com/1234"), None);
        assert_eq!(label_pdf_url("https://dsld.od.nih.gov/label/"), None);
    }

    #[test]
    fn test_success_serialises_column_names() {
        let resp  = RecommendationResponse::success(vec![row("https://dsld.od.nih.gov/label/1234").into()]);
        let value = serde_json::to_value(&resp).unwrap();

        assert_eq!(value["success"], true);
        assert!(value.get("error").is_none());
        let first = &value["recommendations"][0];
        assert_eq!(first["DSLD ID"], "1234");
        assert_eq!(first["Brand Name"], "Vega");
        assert!(first["Supplement Form [LanguaL]"].is_null());
        assert_eq!(first["Label PDF"], "https://api.ods.od.nih.gov/dsld/s3/pdf/1234.pdf");
    }

    #[test]
    fn test_failure_has_no_recommendations() {
        let value = serde_json::to_value(RecommendationResponse::failure("nope")).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "nope");
        assert!(value.get("recommendations").is_none());
    }
}
