//! pcat list - List all providers

use clap::Args;
use tracing::debug;

use crate::app::AppContext;
use crate::cli::formatters::ProviderResults;
use crate::error::Result;
use crate::views::ResultCounter;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Maximum number of providers to print (0 = all)
    #[arg(long, short = 'n', default_value = "0")]
    pub limit: usize,
}

pub fn run(ctx: &mut AppContext, args: &ListArgs) -> Result<()> {
    debug!(target: "list", mode = ?ctx.output_format, "output mode selected");

    let warnings = ctx.load_warnings();
    let counter = ResultCounter::attach(&mut ctx.catalog, &ctx.config.display);
    let records = ctx.catalog.reset_filters();
    let shown = if args.limit == 0 {
        records
    } else {
        &records[..args.limit.min(records.len())]
    };

    let label = counter.borrow().label();
    ProviderResults {
        heading: "All providers".to_string(),
        records: shown,
        label,
        warnings,
    }
    .emit(ctx.output_format)
}
