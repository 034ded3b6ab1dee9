use std::sync::Arc;

use proptest::prelude::*;

use provider_catalog::Catalog;
use provider_catalog::config::SearchConfig;
use provider_catalog::record::{Attribute, FacetCriteria, Record};

use super::strategies::{criteria, records};

fn ids(records: &[Arc<Record>]) -> Vec<String> {
    records.iter().map(|r| r.id().to_string()).collect()
}

fn catalog(records: Vec<Record>) -> Catalog {
    Catalog::from_records(records, SearchConfig::default()).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_facet_is_ordered_subset(records in records(), criteria in criteria()) {
        let mut catalog = catalog(records);
        let all = ids(catalog.records());
        let filtered = ids(catalog.facet(&criteria));
        let mut positions = filtered.iter().map(|id| all.iter().position(|a| a == id));
        let mut last = None;
        for position in &mut positions {
            prop_assert!(position.is_some());
            prop_assert!(position > last);
            last = position;
        }
    }

    #[test]
    fn test_empty_facet_and_reset_restore_everything(records in records(), criteria in criteria()) {
        let mut catalog = catalog(records);
        let all = ids(catalog.records());
        catalog.facet(&criteria);
        prop_assert_eq!(ids(catalog.facet(&FacetCriteria::new())), all.clone());
        catalog.facet(&criteria);
        prop_assert_eq!(ids(catalog.reset_filters()), all.clone());
        catalog.facet(&criteria);
        prop_assert_eq!(ids(catalog.search("").unwrap()), all);
    }

    #[test]
    fn test_options_come_from_filtered_set(records in records(), criteria in criteria()) {
        let mut catalog = catalog(records);
        let filtered: Vec<Arc<Record>> = catalog.facet(&criteria).to_vec();
        let options = catalog.facet_options(Attribute::Specialties);
        for option in options.iter() {
            let held = filtered.iter().any(|record| {
                record
                    .get(Attribute::Specialties)
                    .is_some_and(|value| value.option_values().any(|v| v == option.as_str()))
            });
            prop_assert!(held, "option {} not held by any filtered record", option);
        }
        let again = catalog.facet_options(Attribute::Specialties);
        prop_assert!(Arc::ptr_eq(&options, &again));
    }

    #[test]
    fn test_short_search_changes_nothing(records in records(), criteria in criteria(), term in "[a-z]{1,2}") {
        let mut catalog = catalog(records);
        let before = ids(catalog.facet(&criteria));
        let after = ids(catalog.search(&term).unwrap());
        prop_assert_eq!(before, after);
    }
}
