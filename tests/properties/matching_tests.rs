use proptest::prelude::*;

use provider_catalog::record::{Attribute, AttributeValue, FacetCriteria, Record};

use super::strategies::{criteria, record, text_set, word};

proptest! {
    #[test]
    fn test_empty_criteria_matches_everything(record in record(0)) {
        prop_assert!(record.matches(&FacetCriteria::new()));
    }

    #[test]
    fn test_scalar_equality(value in word(), other in word()) {
        let record = Record::new("r").with(Attribute::Type, value.clone());
        prop_assert!(record.matches(&FacetCriteria::new().with(Attribute::Type, value.clone())));
        prop_assert_eq!(
            record.matches(&FacetCriteria::new().with(Attribute::Type, other.clone())),
            value == other
        );
    }

    #[test]
    fn test_set_matches_on_intersection(held in text_set(), wanted in text_set()) {
        let record = Record::new("r").with(Attribute::Languages, AttributeValue::set(held.clone()));
        let criteria = FacetCriteria::new().with(Attribute::Languages, AttributeValue::set(wanted.clone()));
        let overlaps = wanted.iter().any(|w| held.contains(w));
        prop_assert_eq!(record.matches(&criteria), overlaps);
    }

    #[test]
    fn test_missing_attribute_never_matches(criteria in criteria()) {
        let bare = Record::new("r");
        prop_assert_eq!(bare.matches(&criteria), criteria.is_empty());
    }

    #[test]
    fn test_conjunction_of_single_constraints(record in record(0), criteria in criteria()) {
        let each = criteria
            .iter()
            .all(|(attribute, value)| record.matches(&FacetCriteria::new().with(attribute, value.clone())));
        prop_assert_eq!(record.matches(&criteria), each);
    }

    #[test]
    fn test_unknown_attribute_matches_nothing(record in record(0), name in "[x-z]{3,8}") {
        let mut criteria = FacetCriteria::new();
        criteria.insert_named(&name, "anything");
        prop_assert!(!record.matches(&criteria));
    }
}
