//! Provider list formatter
//!
//! Human mode prints one line per provider followed by the counter label;
//! JSON mode wraps the flat provider objects in a robot response.

use std::sync::Arc;

use serde::Serialize;

use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_robot, robot_ok};
use crate::error::Result;
use crate::record::{Attribute, AttributeValue, Record, Scalar};

/// A filtered set ready for display.
#[derive(Debug, Clone)]
pub struct ProviderResults<'a> {
    /// What produced the set, e.g. `facet type=clinic`.
    pub heading: String,
    pub records: &'a [Arc<Record>],
    /// Counter label, e.g. `View 2 Providers »`.
    pub label: String,
    pub warnings: Vec<String>,
}

#[derive(Serialize)]
struct ProviderResultsJson<'a> {
    heading: &'a str,
    count: usize,
    label: &'a str,
    providers: Vec<&'a Record>,
}

impl ProviderResults<'_> {
    pub fn emit(&self, format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Json => {
                let mut response = robot_ok(ProviderResultsJson {
                    heading: &self.heading,
                    count: self.records.len(),
                    label: &self.label,
                    providers: self.records.iter().map(|record| &**record).collect(),
                });
                response.warnings.clone_from(&self.warnings);
                emit_robot(&response)
            }
            OutputFormat::Human => {
                emit_human(self.layout());
                Ok(())
            }
        }
    }

    fn layout(&self) -> HumanLayout {
        let mut layout = HumanLayout::new();
        layout.title(&self.heading);
        for record in self.records {
            layout.bullet(&summary_line(record));
        }
        if !self.records.is_empty() {
            layout.blank();
        }
        for warning in &self.warnings {
            layout.push_line(format!("warning: {warning}"));
        }
        layout.push_line(self.label.clone());
        layout
    }
}

fn summary_line(record: &Record) -> String {
    let name = record.name().unwrap_or("(unnamed)");
    match record.get(Attribute::Type) {
        Some(AttributeValue::Scalar(Scalar::Text(kind))) if !kind.is_empty() => {
            format!("[{}] {name} ({kind})", record.id())
        }
        _ => format!("[{}] {name}", record.id()),
    }
}
