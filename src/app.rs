use tracing::debug;

use crate::catalog::Catalog;
use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::Result;
use crate::load::{self, LoadReport};

pub struct AppContext {
    pub config: Config,
    pub catalog: Catalog,
    pub load_report: LoadReport,
    pub output_format: OutputFormat,
}

impl AppContext {
    pub fn from_cli(cli: &crate::cli::Cli) -> Result<Self> {
        let project_root = std::env::current_dir()?;
        let config = Config::load(cli.config.as_deref(), &project_root)?;
        let data_path = cli
            .data
            .clone()
            .unwrap_or_else(|| project_root.join(&config.data.path));
        debug!(
            target: "app",
            data = %data_path.display(),
            verbosity = cli.verbose,
            "resolved dataset path"
        );

        let dataset = load::from_path(&data_path)?;
        let catalog = Catalog::from_records(dataset.records, config.search.clone())?;

        Ok(Self {
            config,
            catalog,
            load_report: dataset.report,
            output_format: cli.output_format(),
        })
    }

    /// Notes about entries the loader or the catalog dropped.
    #[must_use]
    pub fn load_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.load_report.skipped_without_id > 0 {
            warnings.push(format!(
                "{} entries without an id were skipped",
                self.load_report.skipped_without_id
            ));
        }
        let duplicates = self.load_report.records.saturating_sub(self.catalog.len());
        if duplicates > 0 {
            warnings.push(format!("{duplicates} entries with a repeated id were skipped"));
        }
        warnings
    }
}
