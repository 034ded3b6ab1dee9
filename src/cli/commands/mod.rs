//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - run() function to execute the command

use clap::Subcommand;

pub mod facet;
pub mod facets;
pub mod list;
pub mod options;
pub mod search;

use crate::app::AppContext;
use crate::error::Result;

pub fn run(ctx: &mut AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::List(args) => list::run(ctx, args),
        Commands::Facet(args) => facet::run(ctx, args),
        Commands::Search(args) => search::run(ctx, args),
        Commands::Options(args) => options::run(ctx, args),
        Commands::Facets(args) => facets::run(ctx, args),
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every provider
    List(list::ListArgs),

    /// Narrow providers by facet constraints
    Facet(facet::FacetArgs),

    /// Full-text search over provider names
    Search(search::SearchArgs),

    /// Show the options a facet offers within the current scope
    Options(options::OptionsArgs),

    /// Describe the attribute schema
    Facets(facets::FacetsArgs),
}
