//! Attribute values: a scalar or an ordered set of strings.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Flag(bool),
    Text(String),
}

/// Value of one attribute on a record, or one constraint in a criteria.
///
/// Matching dispatches on the tag: two scalars compare by equality (a text
/// never equals a flag), anything involving a set compares by intersection
/// with scalar text promoted to a singleton set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Scalar(Scalar),
    Set(Vec<String>),
}

impl AttributeValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Scalar(Scalar::Text(value.into()))
    }

    #[must_use]
    pub const fn flag(value: bool) -> Self {
        Self::Scalar(Scalar::Flag(value))
    }

    /// Builds a set value, dropping repeated entries but keeping first-seen order.
    pub fn set<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for value in values {
            let value = value.into();
            if !out.contains(&value) {
                out.push(value);
            }
        }
        Self::Set(out)
    }

    /// True for an empty string or an empty set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Scalar(Scalar::Text(text)) => text.is_empty(),
            Self::Scalar(Scalar::Flag(_)) => false,
            Self::Set(values) => values.is_empty(),
        }
    }

    /// Whether a record holding `self` satisfies the constraint `required`.
    #[must_use]
    pub fn satisfies(&self, required: &Self) -> bool {
        match (self, required) {
            (Self::Scalar(have), Self::Scalar(want)) => have == want,
            (have, want) => {
                let mut have = have.set_members();
                let want: Vec<&str> = want.set_members().collect();
                have.any(|value| want.contains(&value))
            }
        }
    }

    /// Values this attribute contributes to a facet option list.
    pub fn option_values(&self) -> impl Iterator<Item = Cow<'_, str>> {
        let (single, many): (Option<Cow<'_, str>>, &[String]) = match self {
            Self::Scalar(Scalar::Text(text)) => (Some(Cow::Borrowed(text.as_str())), &[]),
            Self::Scalar(Scalar::Flag(flag)) => (Some(Cow::Owned(flag.to_string())), &[]),
            Self::Set(values) => (None, values.as_slice()),
        };
        single
            .into_iter()
            .chain(many.iter().map(|value| Cow::Borrowed(value.as_str())))
    }

    /// Members when treated as a set of strings; flags have none.
    fn set_members(&self) -> impl Iterator<Item = &str> {
        let (single, many): (Option<&str>, &[String]) = match self {
            Self::Scalar(Scalar::Text(text)) => (Some(text.as_str()), &[]),
            Self::Scalar(Scalar::Flag(_)) => (None, &[]),
            Self::Set(values) => (None, values.as_slice()),
        };
        single.into_iter().chain(many.iter().map(String::as_str))
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::text(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::flag(value)
    }
}

impl From<Vec<String>> for AttributeValue {
    fn from(values: Vec<String>) -> Self {
        Self::set(values)
    }
}

impl From<Vec<&str>> for AttributeValue {
    fn from(values: Vec<&str>) -> Self {
        Self::set(values)
    }
}
