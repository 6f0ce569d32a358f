// ============================================================
// Layer 4 — Catalog Loader
// ============================================================
// Loads the three DSLD tables from a data directory using the
// csv crate.
//
// Each table is split across numbered partitions:
//   data/
//     LabelStatements_1.csv
//     LabelStatements_2.csv
//     ProductOverview_1.csv
//     ...
//
// Partitions are read from _1 upward until the first gap and
// appended in that order, without de-duplication.
//
// Headers are checked before any record is deserialised. A
// missing column is a SchemaMismatch (fatal); an unreadable
// file or a malformed record is a DataLoadFailure.

use csv::ReaderBuilder;
use serde::de::DeserializeOwned;
use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

use crate::domain::catalog::{
    CatalogTables, LabelStatement, OtherIngredient, ProductOverview,
    COL_BRAND_NAME, COL_DSLD_ID, COL_MARKET_STATUS, COL_OTHER_INGREDIENTS,
    COL_PRODUCT_NAME, COL_STATEMENT, COL_STATEMENT_TYPE, COL_SUPPLEMENT_FORM,
    COL_SUPPLEMENT_FORM_PLAIN, COL_URL,
};
use crate::domain::error::{AdvisorError, Result};
use crate::domain::traits::CatalogSource;

/// File stem and required columns of one catalog table.
/// Each required column lists the header names accepted for it.
#[derive(Debug, Clone, Copy)]
pub struct TableSpec {
    pub stem:     &'static str,
    pub required: &'static [&'static [&'static str]],
}

pub const LABEL_STATEMENTS: TableSpec = TableSpec {
    stem: "LabelStatements",
    required: &[
        &[COL_URL],
        &[COL_DSLD_ID],
        &[COL_PRODUCT_NAME],
        &[COL_STATEMENT_TYPE],
        &[COL_STATEMENT],
    ],
};

pub const PRODUCT_OVERVIEW: TableSpec = TableSpec {
    stem: "ProductOverview",
    required: &[
        &[COL_URL],
        &[COL_DSLD_ID],
        &[COL_PRODUCT_NAME],
        &[COL_BRAND_NAME],
        &[COL_SUPPLEMENT_FORM, COL_SUPPLEMENT_FORM_PLAIN],
        &[COL_MARKET_STATUS],
    ],
};

pub const OTHER_INGREDIENTS: TableSpec = TableSpec {
    stem: "OtherIngredients",
    required: &[
        &[COL_URL],
        &[COL_DSLD_ID],
        &[COL_PRODUCT_NAME],
        &[COL_OTHER_INGREDIENTS],
    ],
};

/// Loads the catalog from a directory of partitioned CSV files.
/// Implements the CatalogSource trait from Layer 3.
pub struct CsvCatalogLoader {
    dir: PathBuf,
}

impl CsvCatalogLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Read every partition of one table and append them in order.
    pub fn load_table<T: DeserializeOwned>(&self, spec: &TableSpec) -> Result<Vec<T>> {
        let paths = partition_paths(&self.dir, spec.stem);
        if paths.is_empty() {
            return Err(AdvisorError::DataLoadFailure(format!(
                "no '{}_1.csv' found in '{}'",
                spec.stem,
                self.dir.display()
            )));
        }

        let mut rows = Vec::new();
        for path in &paths {
            let file = File::open(path).map_err(|e| {
                AdvisorError::DataLoadFailure(format!("cannot open '{}': {e}", path.display()))
            })?;
            let mut part: Vec<T> = read_table(file, spec, &path.display().to_string())?;
            tracing::debug!("Loaded {} rows from {}", part.len(), path.display());
            rows.append(&mut part);
        }

        tracing::info!("{}: {} rows from {} partition(s)", spec.stem, rows.len(), paths.len());
        Ok(rows)
    }
}

impl CatalogSource for CsvCatalogLoader {
    fn load_tables(&self) -> Result<CatalogTables> {
        Ok(CatalogTables {
            label_statements:  self.load_table::<LabelStatement>(&LABEL_STATEMENTS)?,
            product_overview:  self.load_table::<ProductOverview>(&PRODUCT_OVERVIEW)?,
            other_ingredients: self.load_table::<OtherIngredient>(&OTHER_INGREDIENTS)?,
        })
    }
}

/// `{dir}/{stem}_1.csv`, `{dir}/{stem}_2.csv`, ... up to the first missing number.
pub fn partition_paths(dir: &Path, stem: &str) -> Vec<PathBuf> {
    (1..)
        .map(|n| dir.join(format!("{stem}_{n}.csv")))
        .take_while(|p| p.is_file())
        .collect()
}

/// Parse one CSV partition into typed rows after validating its header.
/// `source` names the partition in error messages.
pub fn read_table<T, R>(reader: R, spec: &TableSpec, source: &str) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| AdvisorError::DataLoadFailure(format!("cannot read header of '{source}': {e}")))?
        .clone();

    for accepted in spec.required {
        if !accepted.iter().any(|name| headers.iter().any(|h| h == *name)) {
            return Err(AdvisorError::SchemaMismatch {
                table:  spec.stem.to_string(),
                column: accepted[0].to_string(),
            });
        }
    }

    rdr.deserialize()
        .enumerate()
        .map(|(i, record)| {
            // +2: one for the header, one for 1-based line numbers
            record.map_err(|e| {
                AdvisorError::DataLoadFailure(format!("'{source}' record {}: {e}", i + 2))
            })
        })
        .collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_label_statements() {
        let csv = "\
URL,DSLD ID,Product Name,Statement Type,Statement,Extra
https://dsld.od.nih.gov/label/1,1,Liver Aid,Other,Supports healthy liver function,x
https://dsld.od.nih.gov/label/2,2,Eye Aid,Precautions,,y
";
        let rows: Vec<LabelStatement> = read_table(csv.as_bytes(), &LABEL_STATEMENTS, "test").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].statement.as_deref(), Some("Supports healthy liver function"));
        assert_eq!(rows[1].statement_type.as_deref(), Some("Precautions"));
        assert_eq!(rows[1].statement, None);
    }

    #[test]
    fn test_accepts_plain_supplement_form_header() {
        let csv = "\
URL,DSLD ID,Product Name,Brand Name,Supplement Form,Market Status
u,1,Kids Drops,Tiny Co,Liquid,On Market
";
        let rows: Vec<ProductOverview> = read_table(csv.as_bytes(), &PRODUCT_OVERVIEW, "test").unwrap();
        assert_eq!(rows[0].supplement_form.as_deref(), Some("Liquid"));
    }

    #[test]
    fn test_missing_column_is_schema_mismatch() {
        let csv = "URL,DSLD ID,Product Name\nu,1,Thing\n";
        let err = read_table::<OtherIngredient, _>(csv.as_bytes(), &OTHER_INGREDIENTS, "test").unwrap_err();
        match err {
            AdvisorError::SchemaMismatch { table, column } => {
                assert_eq!(table, "OtherIngredients");
                assert_eq!(column, "Other Ingredients");
            }
            other => panic!("expected SchemaMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_ragged_record_is_load_failure() {
        let csv = "URL,DSLD ID,Product Name,Other Ingredients\nu,1\n";
        let err = read_table::<OtherIngredient, _>(csv.as_bytes(), &OTHER_INGREDIENTS, "test").unwrap_err();
        assert!(matches!(err, AdvisorError::DataLoadFailure(_)));
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_missing_directory_is_load_failure() {
        let loader = CsvCatalogLoader::new("definitely/not/a/real/dir");
        let err = loader.load_tables().unwrap_err();
        assert!(matches!(err, AdvisorError::DataLoadFailure(_)));
    }

    #[test]
    fn test_partitions_load_in_order_until_first_gap() {
        let dir = tempfile::TempDir::new().unwrap();
        let header = "URL,DSLD ID,Product Name,Other Ingredients\n";
        for (n, id) in [(1, "1"), (2, "2"), (4, "4")] {
            let body = format!("{header}u{id},{id},P{id},Gelatin\nu{id},{id},P{id},Gelatin\n");
            std::fs::write(dir.path().join(format!("OtherIngredients_{n}.csv")), body).unwrap();
        }

        assert_eq!(partition_paths(dir.path(), "OtherIngredients").len(), 2);

        let loader = CsvCatalogLoader::new(dir.path());
        let rows: Vec<OtherIngredient> = loader.load_table(&OTHER_INGREDIENTS).unwrap();
        let ids: Vec<&str> = rows.iter().map(|r| r.dsld_id.as_str()).collect();
        // Repeated rows are kept; _4 is past the gap at _3
        assert_eq!(ids, vec!["1", "1", "2", "2"]);
    }
}
