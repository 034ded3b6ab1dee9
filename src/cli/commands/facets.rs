//! pcat facets - Describe the attribute schema

use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_robot, robot_ok};
use crate::error::Result;
use crate::record::{Attribute, ControlKind, ValueKind};

#[derive(Args, Debug)]
pub struct FacetsArgs {
    /// Include attributes without a facet control
    #[arg(long)]
    pub all: bool,
}

#[derive(Serialize)]
struct FacetJson {
    attribute: Attribute,
    kind: ValueKind,
    control: Option<ControlKind>,
    label: &'static str,
}

pub fn run(ctx: &mut AppContext, args: &FacetsArgs) -> Result<()> {
    let attributes: &[Attribute] = if args.all {
        &Attribute::ALL
    } else {
        &Attribute::FACETS
    };

    match ctx.output_format {
        OutputFormat::Json => {
            let facets: Vec<FacetJson> = attributes
                .iter()
                .map(|&attribute| FacetJson {
                    attribute,
                    kind: attribute.kind(),
                    control: attribute.control(),
                    label: attribute.label(),
                })
                .collect();
            emit_robot(&robot_ok(facets))
        }
        OutputFormat::Human => {
            let mut layout = HumanLayout::new();
            layout.title("Facets");
            for attribute in attributes {
                let control = match attribute.control() {
                    Some(ControlKind::Select) => "select",
                    Some(ControlKind::Checkbox) => "checkbox",
                    None => "-",
                };
                layout.kv(
                    attribute.as_str(),
                    &format!("{control:<9} {}", attribute.label()),
                );
            }
            emit_human(layout);
            Ok(())
        }
    }
}
