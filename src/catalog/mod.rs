//! The catalog: full provider collection, search index, and the current
//! filtered set.
//!
//! Every state-changing operation replaces the filtered set wholesale,
//! clears the facet option cache, and emits [`CatalogEvent::Filtered`].
//! Facets always filter the full collection, never the previous result, so
//! relaxing a constraint widens results again.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::SearchConfig;
use crate::error::Result;
use crate::events::{CatalogEvent, EventBus, EventKind, SubscriptionId};
use crate::record::{Attribute, FacetCriteria, Record, RecordId};
use crate::search::SearchIndex;

pub mod cache;

pub use cache::{CacheStats, FacetOptionCache};

/// Catalog state that listeners may read while an event is delivered.
#[derive(Debug, Default)]
struct CatalogState {
    records: Vec<Arc<Record>>,
    positions: HashMap<RecordId, usize>,
    /// `None` until the first load, facet, search, or reset.
    filtered: Option<Vec<Arc<Record>>>,
    options: FacetOptionCache,
}

impl CatalogState {
    fn replace_filtered(&mut self, records: Vec<Arc<Record>>) {
        self.filtered = Some(records);
        self.options.clear();
    }
}

/// Read-only view of a catalog, handed to event listeners.
#[derive(Clone, Copy)]
pub struct CatalogView<'a> {
    state: &'a CatalogState,
}

impl<'a> CatalogView<'a> {
    /// Full collection in load order.
    #[must_use]
    pub fn records(&self) -> &'a [Arc<Record>] {
        &self.state.records
    }

    /// Current filtered set, or the full collection when nothing has set it.
    #[must_use]
    pub fn filtered(&self) -> &'a [Arc<Record>] {
        self.state
            .filtered
            .as_deref()
            .unwrap_or(&self.state.records)
    }

    /// The filtered set exactly as stored; `None` before any operation.
    #[must_use]
    pub fn filtered_set(&self) -> Option<&'a [Arc<Record>]> {
        self.state.filtered.as_deref()
    }

    #[must_use]
    pub fn get(&self, id: &RecordId) -> Option<&'a Arc<Record>> {
        self.state
            .positions
            .get(id)
            .map(|&position| &self.state.records[position])
    }

    /// Distinct values of `attribute` within the current filtered set.
    ///
    /// Set attributes are expanded, empty strings skipped, and values kept in
    /// first-seen order. The result is cached until the filtered set changes.
    #[must_use]
    pub fn facet_options(&self, attribute: Attribute) -> Arc<[String]> {
        let scope = self.filtered();
        self.state
            .options
            .get_or_compute(attribute, || collect_options(scope, attribute))
    }

    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.state.options.stats()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.state.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.records.is_empty()
    }
}

fn collect_options(records: &[Arc<Record>], attribute: Attribute) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut options = Vec::new();
    for record in records {
        let Some(value) = record.get(attribute) else {
            continue;
        };
        for option in value.option_values() {
            if option.is_empty() || seen.contains(option.as_ref()) {
                continue;
            }
            seen.insert(option.to_string());
            options.push(option.into_owned());
        }
    }
    options
}

/// Owns the provider collection and everything derived from it.
pub struct Catalog {
    state: CatalogState,
    index: SearchIndex,
    events: EventBus,
    settings: SearchConfig,
}

impl Catalog {
    /// An empty catalog. Operations are valid before [`Self::load`] and act
    /// on the empty collection.
    pub fn new(settings: SearchConfig) -> Result<Self> {
        let index = SearchIndex::build(std::iter::empty(), settings.name_boost)?;
        Ok(Self {
            state: CatalogState::default(),
            index,
            events: EventBus::new(),
            settings,
        })
    }

    pub fn from_records(records: Vec<Record>, settings: SearchConfig) -> Result<Self> {
        let mut catalog = Self::new(settings)?;
        catalog.load(records)?;
        Ok(catalog)
    }

    /// Replace the full collection, rebuild the search index, and reset the
    /// filtered set to everything.
    ///
    /// Records repeating an earlier id are skipped.
    pub fn load(&mut self, records: Vec<Record>) -> Result<&[Arc<Record>]> {
        let mut positions = HashMap::with_capacity(records.len());
        let mut kept = Vec::with_capacity(records.len());
        for record in records {
            if positions.contains_key(record.id()) {
                warn!(target: "catalog", id = %record.id(), "duplicate record id skipped");
                continue;
            }
            positions.insert(record.id().clone(), kept.len());
            kept.push(Arc::new(record));
        }

        let index = SearchIndex::build(kept.iter().map(|record| &**record), self.settings.name_boost)?;
        let documents = index.num_docs();
        let count = kept.len();
        self.index = index;
        self.state.records = kept;
        self.state.positions = positions;
        let all = self.state.records.clone();
        self.state.replace_filtered(all);
        info!(target: "catalog", records = count, "catalog loaded");

        self.emit(|_| CatalogEvent::Loaded { records: count });
        self.emit(|_| CatalogEvent::Indexed { documents });
        self.emit(|view| CatalogEvent::Filtered {
            records: view.filtered(),
        });
        Ok(self.filtered())
    }

    /// Records of the full collection matching `criteria`, in load order.
    pub fn facet(&mut self, criteria: &FacetCriteria) -> &[Arc<Record>] {
        let matched: Vec<Arc<Record>> = self
            .state
            .records
            .iter()
            .filter(|record| record.matches(criteria))
            .cloned()
            .collect();
        debug!(
            target: "catalog",
            constraints = criteria.len(),
            matched = matched.len(),
            "facet applied"
        );

        self.state.replace_filtered(matched);
        self.emit(|view| CatalogEvent::Filtered {
            records: view.filtered(),
        });
        self.emit(|view| CatalogEvent::Facet {
            criteria,
            records: view.filtered(),
        });
        self.filtered()
    }

    /// Records whose name matches `term`, best match first.
    ///
    /// The term is trimmed first. An empty term resets the filters. A term
    /// shorter than the configured minimum changes nothing and emits nothing.
    /// Terms longer than the configured maximum are truncated; a term that
    /// truncates to nothing resets like an empty one.
    pub fn search(&mut self, term: &str) -> Result<&[Arc<Record>]> {
        let term = term.trim();
        if term.is_empty() {
            return Ok(self.reset_filters());
        }
        if term.chars().count() < self.settings.min_term_length {
            debug!(target: "catalog", term, "search term below minimum length ignored");
            return Ok(self.filtered());
        }
        let term = truncate_chars(term, self.settings.max_term_length).trim_end();
        if term.is_empty() {
            return Ok(self.reset_filters());
        }

        let ids = self.index.search(term)?;
        let view = self.view();
        let matched: Vec<Arc<Record>> = ids.iter().filter_map(|id| view.get(id)).cloned().collect();
        debug!(target: "catalog", term, matched = matched.len(), "search applied");

        self.state.replace_filtered(matched);
        self.emit(|view| CatalogEvent::Filtered {
            records: view.filtered(),
        });
        self.emit(|view| CatalogEvent::Search {
            term,
            records: view.filtered(),
        });
        Ok(self.filtered())
    }

    /// Drop every constraint: the filtered set becomes the full collection.
    pub fn reset_filters(&mut self) -> &[Arc<Record>] {
        let all = self.state.records.clone();
        self.state.replace_filtered(all);
        debug!(target: "catalog", records = self.state.records.len(), "filters reset");
        self.emit(|view| CatalogEvent::Filtered {
            records: view.filtered(),
        });
        self.filtered()
    }

    /// See [`CatalogView::facet_options`].
    #[must_use]
    pub fn facet_options(&self, attribute: Attribute) -> Arc<[String]> {
        self.view().facet_options(attribute)
    }

    pub fn subscribe<F>(&mut self, kind: EventKind, listener: F) -> SubscriptionId
    where
        F: FnMut(&CatalogEvent<'_>, &CatalogView<'_>) + 'static,
    {
        self.events.subscribe(kind, listener)
    }

    pub fn subscribe_all<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&CatalogEvent<'_>, &CatalogView<'_>) + 'static,
    {
        self.events.subscribe_all(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    #[must_use]
    pub const fn view(&self) -> CatalogView<'_> {
        CatalogView { state: &self.state }
    }

    #[must_use]
    pub fn records(&self) -> &[Arc<Record>] {
        &self.state.records
    }

    /// See [`CatalogView::filtered`].
    #[must_use]
    pub fn filtered(&self) -> &[Arc<Record>] {
        self.view().filtered()
    }

    /// See [`CatalogView::filtered_set`].
    #[must_use]
    pub fn filtered_set(&self) -> Option<&[Arc<Record>]> {
        self.view().filtered_set()
    }

    #[must_use]
    pub fn get(&self, id: &RecordId) -> Option<&Arc<Record>> {
        self.view().get(id)
    }

    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.state.options.stats()
    }

    #[must_use]
    pub const fn search_index(&self) -> &SearchIndex {
        &self.index
    }

    #[must_use]
    pub const fn settings(&self) -> &SearchConfig {
        &self.settings
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.state.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.records.is_empty()
    }

    fn emit<'s, F>(&'s mut self, make: F)
    where
        F: FnOnce(CatalogView<'s>) -> CatalogEvent<'s>,
    {
        let view = CatalogView { state: &self.state };
        let event = make(view);
        self.events.emit(&event, &view);
    }
}

fn truncate_chars(term: &str, max_chars: usize) -> &str {
    match term.char_indices().nth(max_chars) {
        Some((end, _)) => &term[..end],
        None => term,
    }
}
