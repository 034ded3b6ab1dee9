//! Provider records and the facet-match predicate.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

pub mod attribute;
pub mod criteria;
pub mod value;

pub use attribute::{Attribute, ControlKind, UnknownAttribute, ValueKind};
pub use criteria::FacetCriteria;
pub use value::{AttributeValue, Scalar};

/// Stable record identifier. Numeric ids from the dataset are kept as their
/// decimal text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<u64> for RecordId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

/// One provider. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    id: RecordId,
    #[serde(flatten)]
    attributes: BTreeMap<Attribute, AttributeValue>,
}

impl Record {
    pub fn new(id: impl Into<RecordId>) -> Self {
        Self {
            id: id.into(),
            attributes: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with(mut self, attribute: Attribute, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(attribute, value.into());
        self
    }

    #[must_use]
    pub const fn id(&self) -> &RecordId {
        &self.id
    }

    #[must_use]
    pub fn get(&self, attribute: Attribute) -> Option<&AttributeValue> {
        self.attributes.get(&attribute)
    }

    /// The provider name, the field the search index covers.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self.get(Attribute::ProviderName)? {
            AttributeValue::Scalar(Scalar::Text(name)) => Some(name.as_str()),
            AttributeValue::Set(names) => names.first().map(String::as_str),
            AttributeValue::Scalar(Scalar::Flag(_)) => None,
        }
    }

    pub fn attributes(&self) -> impl Iterator<Item = (Attribute, &AttributeValue)> {
        self.attributes.iter().map(|(attr, value)| (*attr, value))
    }

    /// Whether this record satisfies every constraint in `criteria`.
    ///
    /// Empty criteria match everything; an absent attribute fails any
    /// constraint on it, as does any name outside the schema.
    #[must_use]
    pub fn matches(&self, criteria: &FacetCriteria) -> bool {
        if criteria.has_unknown() {
            return false;
        }
        criteria.iter().all(|(attribute, required)| {
            self.get(attribute)
                .is_some_and(|have| have.satisfies(required))
        })
    }
}
