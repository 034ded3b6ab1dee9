//! pcat search - Full-text search over provider names

use clap::Args;
use tracing::debug;

use crate::app::AppContext;
use crate::cli::formatters::ProviderResults;
use crate::error::Result;
use crate::views::{ResultCounter, SearchAction, SearchBox};

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search term; empty resets to the full collection
    #[arg(default_value = "")]
    pub term: String,
}

pub fn run(ctx: &mut AppContext, args: &SearchArgs) -> Result<()> {
    let counter = ResultCounter::attach(&mut ctx.catalog, &ctx.config.display);
    let search_box = SearchBox::attach(&mut ctx.catalog);
    let action = search_box.borrow_mut().submit(&args.term);
    debug!(target: "search", action = ?action, "search box submitted");

    let mut warnings = ctx.load_warnings();
    let heading = match &action {
        SearchAction::Reset => "All providers".to_string(),
        SearchAction::Search(term) => format!("Providers matching \"{term}\""),
        SearchAction::Ignore => {
            warnings.push(format!(
                "search term shorter than {} characters; ignored",
                ctx.catalog.settings().min_term_length
            ));
            "All providers".to_string()
        }
    };

    let applied = SearchBox::apply(&action, &mut ctx.catalog)?.is_some();
    debug!(target: "search", applied, "search finished");
    let records = ctx.catalog.filtered();
    let label = counter.borrow().label();
    ProviderResults {
        heading,
        records,
        label,
        warnings,
    }
    .emit(ctx.output_format)
}
