//! pcat facet - Narrow providers by facet constraints

use clap::Args;
use tracing::debug;

use crate::app::AppContext;
use crate::cli::formatters::ProviderResults;
use crate::error::{CatalogError, Result};
use crate::record::{Attribute, AttributeValue, FacetCriteria, ValueKind};
use crate::views::ResultCounter;

/// Facet constraints shared by commands that scope the catalog.
#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Constraint as attr=value[,value...]; repeat for more attributes
    #[arg(long = "filter", short = 'f', value_name = "ATTR=VALUES")]
    pub filters: Vec<String>,

    /// Require a flag attribute to be true (e.g. --flag lowincome)
    #[arg(long = "flag", value_name = "ATTR")]
    pub flags: Vec<String>,
}

impl FilterArgs {
    /// Build criteria from the raw arguments.
    ///
    /// Names outside the schema are kept so the facet matches nothing,
    /// the same as the form would do with a stale control.
    pub fn criteria(&self) -> Result<FacetCriteria> {
        let mut criteria = FacetCriteria::new();
        for raw in &self.filters {
            let (name, values) = raw.split_once('=').ok_or_else(|| {
                CatalogError::InvalidFilter(format!("expected ATTR=VALUES, got `{raw}`"))
            })?;
            let name = name.trim();
            let values: Vec<&str> = values
                .split(',')
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .collect();
            if values.is_empty() {
                return Err(CatalogError::InvalidFilter(format!(
                    "no values given for `{name}`"
                )));
            }
            match name.parse::<Attribute>() {
                Ok(attribute) => criteria.insert(attribute, constraint(attribute, &values)?),
                Err(_) => criteria.insert_named(name, AttributeValue::set(values)),
            }
        }
        for name in &self.flags {
            let name = name.trim();
            let not_flag = name
                .parse::<Attribute>()
                .is_ok_and(|attribute| attribute.kind() != ValueKind::Flag);
            if not_flag {
                return Err(CatalogError::InvalidFilter(format!(
                    "`{name}` is not a flag attribute"
                )));
            }
            criteria.insert_named(name, true);
        }
        Ok(criteria)
    }
}

fn constraint(attribute: Attribute, values: &[&str]) -> Result<AttributeValue> {
    match attribute.kind() {
        ValueKind::Flag => match values {
            [single] => parse_flag(single)
                .map(AttributeValue::flag)
                .ok_or_else(|| {
                    CatalogError::InvalidFilter(format!(
                        "`{attribute}` expects true or false, got `{single}`"
                    ))
                }),
            _ => Err(CatalogError::InvalidFilter(format!(
                "`{attribute}` takes a single true/false value"
            ))),
        },
        ValueKind::Text => match values {
            [single] => Ok(AttributeValue::text(*single)),
            _ => Ok(AttributeValue::set(values.iter().copied())),
        },
        ValueKind::TextSet => Ok(AttributeValue::set(values.iter().copied())),
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Some(true),
        "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

#[derive(Args, Debug)]
pub struct FacetArgs {
    #[command(flatten)]
    pub filter: FilterArgs,
}

pub fn run(ctx: &mut AppContext, args: &FacetArgs) -> Result<()> {
    let criteria = args.filter.criteria()?;
    debug!(target: "facet", constraints = criteria.len(), unknown = criteria.has_unknown(), "applying facet");

    let mut warnings = ctx.load_warnings();
    warnings.extend(
        criteria
            .unknown_attributes()
            .map(|name| format!("unknown attribute `{name}` matches no provider")),
    );

    let counter = ResultCounter::attach(&mut ctx.catalog, &ctx.config.display);
    let records = ctx.catalog.facet(&criteria);
    let label = counter.borrow().label();
    ProviderResults {
        heading: describe(&criteria),
        records,
        label,
        warnings,
    }
    .emit(ctx.output_format)
}

fn describe(criteria: &FacetCriteria) -> String {
    if criteria.is_empty() {
        return "All providers".to_string();
    }
    let mut parts: Vec<String> = criteria
        .iter()
        .map(|(attribute, value)| {
            let values: Vec<_> = value.option_values().collect();
            format!("{attribute}={}", values.join(","))
        })
        .collect();
    parts.extend(criteria.unknown_attributes().map(|name| format!("{name}=?")));
    format!("Providers where {}", parts.join(" and "))
}
