//! The closed attribute schema for provider records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of value an attribute carries in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// Single string value.
    Text,
    /// Ordered set of strings.
    TextSet,
    /// Boolean flag.
    Flag,
}

/// How a facet control presents an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlKind {
    /// Multi-select list of observed options.
    Select,
    /// Single checkbox; checked means "must be true".
    Checkbox,
}

/// Every attribute a provider record may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    ProviderName,
    Type,
    Specialties,
    County,
    Orientation,
    SexGenderIdentity,
    Race,
    Languages,
    NearBus,
    CompletedCulturalCompetencyTraining,
    LowIncome,
}

impl Attribute {
    /// All attributes, in schema order.
    pub const ALL: [Self; 11] = [
        Self::ProviderName,
        Self::Type,
        Self::Specialties,
        Self::County,
        Self::Orientation,
        Self::SexGenderIdentity,
        Self::Race,
        Self::Languages,
        Self::NearBus,
        Self::CompletedCulturalCompetencyTraining,
        Self::LowIncome,
    ];

    /// Attributes exposed as facet controls, in presentation order.
    pub const FACETS: [Self; 10] = [
        Self::Type,
        Self::Specialties,
        Self::County,
        Self::Orientation,
        Self::SexGenderIdentity,
        Self::Race,
        Self::Languages,
        Self::NearBus,
        Self::CompletedCulturalCompetencyTraining,
        Self::LowIncome,
    ];

    /// Field name as it appears in the dataset.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ProviderName => "providername",
            Self::Type => "type",
            Self::Specialties => "specialties",
            Self::County => "county",
            Self::Orientation => "orientation",
            Self::SexGenderIdentity => "sexgenderidentity",
            Self::Race => "race",
            Self::Languages => "languages",
            Self::NearBus => "nearbus",
            Self::CompletedCulturalCompetencyTraining => "completedculturalcompetencytraining",
            Self::LowIncome => "lowincome",
        }
    }

    #[must_use]
    pub const fn kind(self) -> ValueKind {
        match self {
            Self::ProviderName | Self::Type | Self::County => ValueKind::Text,
            Self::Specialties
            | Self::Orientation
            | Self::SexGenderIdentity
            | Self::Race
            | Self::Languages => ValueKind::TextSet,
            Self::NearBus | Self::CompletedCulturalCompetencyTraining | Self::LowIncome => {
                ValueKind::Flag
            }
        }
    }

    /// Control used to present this attribute, `None` for non-facet fields.
    #[must_use]
    pub const fn control(self) -> Option<ControlKind> {
        if matches!(self, Self::ProviderName) {
            return None;
        }
        match self.kind() {
            ValueKind::Flag => Some(ControlKind::Checkbox),
            ValueKind::Text | ValueKind::TextSet => Some(ControlKind::Select),
        }
    }

    /// Human label shown next to the facet control.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ProviderName => "Provider name",
            Self::Type => "Provider type",
            Self::Specialties => "Other specialties and sensitivities",
            Self::County => "County",
            Self::Orientation => "Sexual/attractional orientation of provider",
            Self::SexGenderIdentity => "Sex/gender identity of provider",
            Self::Race => "Race/ethnicity identity of provider",
            Self::Languages => "Languages spoken",
            Self::NearBus => "Near a bus line",
            Self::CompletedCulturalCompetencyTraining => {
                "Has completed Affirmations' cultural competency training(s) for health providers"
            }
            Self::LowIncome => "Offers low-income accomodations",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a name is not part of the schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAttribute(pub String);

impl fmt::Display for UnknownAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown attribute {:?}", self.0)
    }
}

impl std::error::Error for UnknownAttribute {}

impl FromStr for Attribute {
    type Err = UnknownAttribute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|attr| attr.as_str() == s)
            .ok_or_else(|| UnknownAttribute(s.to_string()))
    }
}
