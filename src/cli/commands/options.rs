//! pcat options - Facet options within the current scope

use clap::Args;
use serde::Serialize;
use tracing::debug;

use crate::app::AppContext;
use crate::cli::commands::facet::FilterArgs;
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_robot, robot_ok};
use crate::error::{CatalogError, Result};
use crate::record::Attribute;

#[derive(Args, Debug)]
pub struct OptionsArgs {
    /// Attribute to list options for (e.g. languages)
    pub attribute: String,

    #[command(flatten)]
    pub filter: FilterArgs,
}

#[derive(Serialize)]
struct OptionsJson<'a> {
    attribute: Attribute,
    label: &'static str,
    scope: usize,
    options: &'a [String],
}

pub fn run(ctx: &mut AppContext, args: &OptionsArgs) -> Result<()> {
    let attribute: Attribute = args
        .attribute
        .parse()
        .map_err(|err| CatalogError::InvalidFilter(format!("{err}")))?;
    let criteria = args.filter.criteria()?;

    let scope = if criteria.is_empty() {
        ctx.catalog.reset_filters().len()
    } else {
        ctx.catalog.facet(&criteria).len()
    };
    let options = ctx.catalog.facet_options(attribute);
    debug!(target: "options", %attribute, scope, options = options.len(), "facet options");

    match ctx.output_format {
        OutputFormat::Json => emit_robot(&robot_ok(OptionsJson {
            attribute,
            label: attribute.label(),
            scope,
            options: &options,
        })),
        OutputFormat::Human => {
            let mut layout = HumanLayout::new();
            layout.title(attribute.label());
            layout.kv("Providers in scope", &scope.to_string());
            layout.blank();
            if options.is_empty() {
                layout.push_line("(no options)");
            }
            for option in options.iter() {
                layout.bullet(option);
            }
            emit_human(layout);
            Ok(())
        }
    }
}
