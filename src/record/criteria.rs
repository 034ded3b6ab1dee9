//! Facet criteria: the snapshot of active constraints for one facet call.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::debug;

use super::attribute::Attribute;
use super::value::AttributeValue;

/// Active facet constraints, ANDed across attributes.
///
/// A missing attribute means "no constraint". Names that are not part of the
/// schema are kept aside; a criteria holding any of them matches no record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FacetCriteria {
    constraints: BTreeMap<Attribute, AttributeValue>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    unknown: BTreeSet<String>,
}

impl FacetCriteria {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, attribute: Attribute, value: impl Into<AttributeValue>) -> Self {
        self.insert(attribute, value);
        self
    }

    pub fn insert(&mut self, attribute: Attribute, value: impl Into<AttributeValue>) {
        self.constraints.insert(attribute, value.into());
    }

    /// Inserts a constraint keyed by a raw attribute name.
    pub fn insert_named(&mut self, name: &str, value: impl Into<AttributeValue>) {
        match name.parse::<Attribute>() {
            Ok(attribute) => self.insert(attribute, value),
            Err(_) => {
                debug!(target: "criteria", attribute = name, "unknown facet attribute");
                self.unknown.insert(name.to_string());
            }
        }
    }

    pub fn remove(&mut self, attribute: Attribute) -> Option<AttributeValue> {
        self.constraints.remove(&attribute)
    }

    #[must_use]
    pub fn get(&self, attribute: Attribute) -> Option<&AttributeValue> {
        self.constraints.get(&attribute)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Attribute, &AttributeValue)> {
        self.constraints.iter().map(|(attr, value)| (*attr, value))
    }

    /// Names given to [`Self::insert_named`] that are not in the schema.
    pub fn unknown_attributes(&self) -> impl Iterator<Item = &str> {
        self.unknown.iter().map(String::as_str)
    }

    #[must_use]
    pub fn has_unknown(&self) -> bool {
        !self.unknown.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.constraints.len() + self.unknown.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty() && self.unknown.is_empty()
    }
}

impl FromIterator<(Attribute, AttributeValue)> for FacetCriteria {
    fn from_iter<I: IntoIterator<Item = (Attribute, AttributeValue)>>(iter: I) -> Self {
        let mut criteria = Self::new();
        for (attribute, value) in iter {
            criteria.insert(attribute, value);
        }
        criteria
    }
}
