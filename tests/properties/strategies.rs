use proptest::prelude::*;

use provider_catalog::record::{Attribute, AttributeValue, FacetCriteria, Record};

const WORDS: &[&str] = &["alpha", "beta", "gamma", "delta", "trans", "youth"];

pub fn word() -> impl Strategy<Value = String> {
    prop::sample::select(WORDS).prop_map(str::to_string)
}

pub fn text_set() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word(), 0..4)
}

/// A record with every value kind, drawn from a small vocabulary so that
/// constraints hit often.
pub fn record(id: usize) -> impl Strategy<Value = Record> {
    (word(), word(), text_set(), text_set(), any::<bool>()).prop_map(
        move |(name, kind, specialties, languages, low_income)| {
            Record::new(id.to_string())
                .with(Attribute::ProviderName, format!("{name} provider"))
                .with(Attribute::Type, kind)
                .with(Attribute::Specialties, AttributeValue::set(specialties))
                .with(Attribute::Languages, AttributeValue::set(languages))
                .with(Attribute::LowIncome, low_income)
        },
    )
}

pub fn records() -> impl Strategy<Value = Vec<Record>> {
    (0usize..12).prop_flat_map(|len| (0..len).map(record).collect::<Vec<_>>())
}

pub fn criteria() -> impl Strategy<Value = FacetCriteria> {
    (
        prop::option::of(word()),
        prop::option::of(text_set()),
        prop::option::of(any::<bool>()),
    )
        .prop_map(|(kind, specialties, low_income)| {
            let mut criteria = FacetCriteria::new();
            if let Some(kind) = kind {
                criteria.insert(Attribute::Type, kind);
            }
            if let Some(specialties) = specialties {
                criteria.insert(Attribute::Specialties, AttributeValue::set(specialties));
            }
            if let Some(low_income) = low_income {
                criteria.insert(Attribute::LowIncome, low_income);
            }
            criteria
        })
}
