//! Dataset loading.
//!
//! The dataset is a JSON array of flat objects. Keys are attribute names;
//! values are strings, booleans, numbers, or arrays of strings. Keys outside
//! the schema are ignored and counted.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::error::{CatalogError, Result};
use crate::record::{Attribute, AttributeValue, Record, RecordId, ValueKind};

const ID_KEY: &str = "id";

/// What happened while turning raw entries into records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub records: usize,
    /// Entries dropped for lacking a usable id.
    pub skipped_without_id: usize,
    /// Ignored key -> number of entries carrying it.
    pub unknown_keys: BTreeMap<String, usize>,
}

#[derive(Debug, Clone)]
pub struct Dataset {
    pub records: Vec<Record>,
    pub report: LoadReport,
}

pub fn from_path(path: &Path) -> Result<Dataset> {
    let file = std::fs::File::open(path).map_err(|source| CatalogError::DatasetRead {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = from_reader(std::io::BufReader::new(file))?;
    info!(
        target: "load",
        path = %path.display(),
        records = dataset.report.records,
        "dataset loaded"
    );
    Ok(dataset)
}

pub fn from_reader<R: Read>(reader: R) -> Result<Dataset> {
    let value: Value = serde_json::from_reader(reader)?;
    from_value(value)
}

pub fn from_json(raw: &str) -> Result<Dataset> {
    let value: Value = serde_json::from_str(raw)?;
    from_value(value)
}

pub fn from_value(value: Value) -> Result<Dataset> {
    let Value::Array(entries) = value else {
        return Err(CatalogError::Dataset(
            "expected a JSON array of providers at the top level".to_string(),
        ));
    };

    let mut report = LoadReport::default();
    let mut records = Vec::with_capacity(entries.len());
    for (position, entry) in entries.into_iter().enumerate() {
        let Value::Object(fields) = entry else {
            return Err(CatalogError::Dataset(format!(
                "entry {position} is not a JSON object"
            )));
        };
        match parse_record(fields, &mut report) {
            Some(record) => records.push(record),
            None => {
                warn!(target: "load", position, "provider without id skipped");
                report.skipped_without_id += 1;
            }
        }
    }

    report.records = records.len();
    if !report.unknown_keys.is_empty() {
        debug!(target: "load", keys = ?report.unknown_keys, "ignored keys outside the schema");
    }
    Ok(Dataset { records, report })
}

fn parse_record(mut fields: Map<String, Value>, report: &mut LoadReport) -> Option<Record> {
    let id = match fields.remove(ID_KEY)? {
        Value::String(id) if !id.is_empty() => RecordId::from(id),
        Value::Number(id) => RecordId::from(id.to_string()),
        _ => return None,
    };

    let mut record = Record::new(id);
    for (key, raw) in fields {
        let Ok(attribute) = key.parse::<Attribute>() else {
            *report.unknown_keys.entry(key).or_default() += 1;
            continue;
        };
        if let Some(value) = convert(attribute.kind(), raw) {
            record = record.with(attribute, value);
        }
    }
    Some(record)
}

/// Shape-driven conversion; a set-kind attribute given a single string
/// becomes a one-element set.
fn convert(kind: ValueKind, raw: Value) -> Option<AttributeValue> {
    match raw {
        Value::Null | Value::Object(_) => None,
        Value::Bool(flag) => Some(AttributeValue::flag(flag)),
        Value::Number(number) => Some(AttributeValue::text(number.to_string())),
        Value::String(text) if kind == ValueKind::TextSet => Some(if text.is_empty() {
            AttributeValue::Set(Vec::new())
        } else {
            AttributeValue::set([text])
        }),
        Value::String(text) => Some(AttributeValue::text(text)),
        Value::Array(items) => Some(AttributeValue::set(items.into_iter().filter_map(
            |item| match item {
                Value::String(text) => Some(text),
                Value::Number(number) => Some(number.to_string()),
                Value::Bool(flag) => Some(flag.to_string()),
                Value::Null | Value::Array(_) | Value::Object(_) => None,
            },
        ))),
    }
}
