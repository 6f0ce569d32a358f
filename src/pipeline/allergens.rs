// ============================================================
// Layer 5 — Allergen Excluder
// ============================================================
// Users describe allergies in their own words ("almonds",
// "yogurt"). Each word is resolved to a canonical allergen key
// through a fixed synonym dictionary, then every row whose
// Other Ingredients text contains the KEY is removed.
//
//   "almonds" ─► key "nuts" ─► drop rows mentioning "nuts"
//
// Resolution is a case-insensitive exact match against the
// synonyms: "peanut butter" resolves to nothing. Unknown words
// are ignored.
//
// The exclusion searches for the key, not the synonym the user
// typed, so a row listing "almonds" but never "nuts" survives
// an "almonds" allergy.

use std::collections::BTreeSet;

use crate::domain::catalog::CatalogRow;
use crate::pipeline::contains_ignore_case;

/// Canonical allergen key and the words that resolve to it.
pub type AllergyRule = (&'static str, &'static [&'static str]);

pub const ALLERGY_RULES: &[AllergyRule] = &[
    ("peanuts",      &["peanuts"]),
    ("nuts",         &["nuts", "walnuts", "almonds", "cashews", "pistachios", "pecans", "hazelnuts"]),
    ("milk",         &["cheese", "butter", "yogurt", "milk", "dairy"]),
    ("eggs",         &["chicken", "egg", "eggs"]),
    ("fish",         &["fish", "salmon", "tuna", "halibut"]),
    ("shellfish",    &["shellfish", "shrimp", "crab", "lobster", "mussel"]),
    ("wheat",        &["bread", "wheat", "pasta", "baked"]),
    ("soy",          &["soy", "tofu"]),
    ("mustard",      &["mustard", "mustard seed"]),
    ("sesame",       &["sesame", "sesame oil", "sesame seed"]),
    ("celery",       &["celery"]),
    ("sulfites",     &["sulfite"]),
    ("lupin",        &["lupin"]),
    ("mollusks",     &["octopus", "squid", "cuttlefish"]),
    ("kiwi",         &["kiwi"]),
    ("pineapple",    &["pineapple"]),
    ("avocado",      &["avocado", "guacamole"]),
    ("banana",       &["banana"]),
    ("strawberries", &["strawberry"]),
    ("tomato",       &["tomato"]),
];

/// Every allergen key whose synonym list contains one of `allergies`.
/// Keys come back sorted and de-duplicated.
pub fn resolve_allergen_keys(allergies: &[String]) -> BTreeSet<&'static str> {
    let mut keys = BTreeSet::new();
    for allergy in allergies {
        let resolved: Vec<&str> = ALLERGY_RULES
            .iter()
            .filter(|(_, synonyms)| synonyms.iter().any(|s| s.eq_ignore_ascii_case(allergy)))
            .map(|(key, _)| *key)
            .collect();
        if resolved.is_empty() {
            tracing::debug!("Allergy '{}' is not in the dictionary; ignoring", allergy);
        }
        keys.extend(resolved);
    }
    keys
}

/// Drop rows whose ingredient list mentions any resolved allergen key.
pub fn exclude_allergens<'a>(rows: Vec<&'a CatalogRow>, allergies: &[String]) -> Vec<&'a CatalogRow> {
    let keys = resolve_allergen_keys(allergies);
    if keys.is_empty() {
        return rows;
    }
    tracing::info!("Excluding allergen keys: {:?}", keys);

    let before = rows.len();
    let kept: Vec<&CatalogRow> = rows
        .into_iter()
        .filter(|row| {
            !keys
                .iter()
                .any(|key| contains_ignore_case(row.other_ingredients.as_deref(), key))
        })
        .collect();

    tracing::debug!("Allergen pass: kept {} of {} rows", kept.len(), before);
    kept
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, ingredients: Option<&str>) -> CatalogRow {
        CatalogRow {
            url:               format!("u{id}"),
            dsld_id:           id.into(),
            product_name:      format!("P{id}"),
            brand_name:        None,
            statement_type:    Some("Other".into()),
            statement:         Some("liver".into()),
            supplement_form:   None,
            market_status:     None,
            other_ingredients: ingredients.map(String::from),
        }
    }

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_resolves_synonyms_to_keys() {
        let keys = resolve_allergen_keys(&words(&["almonds", "yogurt", "walnuts"]));
        assert_eq!(keys.into_iter().collect::<Vec<_>>(), vec!["milk", "nuts"]);
    }

    #[test]
    fn test_resolution_is_exact_not_substring() {
        assert!(resolve_allergen_keys(&words(&["peanut butter", "nut"])).is_empty());
        assert_eq!(
            resolve_allergen_keys(&words(&["mustard seed"])).into_iter().collect::<Vec<_>>(),
            vec!["mustard"]
        );
    }

    #[test]
    fn test_excludes_rows_containing_key() {
        let catalog = vec![
            row("1", Some("Gelatin, Tree NUTS (almonds)")),
            row("2", Some("Cellulose, Magnesium Stearate")),
            row("3", None),
        ];
        let rows: Vec<&CatalogRow> = catalog.iter().collect();
        let kept = exclude_allergens(rows, &words(&["almonds"]));
        let ids: Vec<&str> = kept.iter().map(|r| r.dsld_id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3"]);
    }

    #[test]
    fn test_matches_key_not_typed_synonym() {
        let catalog = vec![row("1", Some("Almonds, Rice Flour"))];
        let rows: Vec<&CatalogRow> = catalog.iter().collect();
        assert_eq!(exclude_allergens(rows, &words(&["almonds"])).len(), 1);
    }

    #[test]
    fn test_unknown_allergy_is_noop() {
        let catalog = vec![row("1", Some("Pollen")), row("2", Some("Gelatin"))];
        let rows: Vec<&CatalogRow> = catalog.iter().collect();
        assert_eq!(exclude_allergens(rows, &words(&["pollen"])).len(), 2);
    }

    #[test]
    fn test_never_grows() {
        let catalog = vec![row("1", Some("milk")), row("2", Some("soy lecithin")), row("3", Some("water"))];
        let rows: Vec<&CatalogRow> = catalog.iter().collect();
        let before = rows.len();
        assert!(exclude_allergens(rows, &words(&["dairy", "tofu"])).len() <= before);
    }
}
