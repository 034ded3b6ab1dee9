//! Typed publish/subscribe for catalog changes.
//!
//! Every change to the filtered set emits [`CatalogEvent::Filtered`]; facet
//! and search calls follow it with their own event so listeners can react
//! differently (e.g. clearing a search box when a facet changes).

use std::fmt;
use std::sync::Arc;

use crate::catalog::CatalogView;
use crate::record::{FacetCriteria, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Loaded,
    Indexed,
    Filtered,
    Facet,
    Search,
}

impl EventKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Loaded => "loaded",
            Self::Indexed => "indexed",
            Self::Filtered => "filtered",
            Self::Facet => "facet",
            Self::Search => "search",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy)]
pub enum CatalogEvent<'a> {
    /// The full collection was replaced.
    Loaded { records: usize },
    /// The search index was rebuilt.
    Indexed { documents: usize },
    /// The filtered set changed, for any reason.
    Filtered { records: &'a [Arc<Record>] },
    /// A facet call produced the filtered set.
    Facet {
        criteria: &'a FacetCriteria,
        records: &'a [Arc<Record>],
    },
    /// A search call produced the filtered set.
    Search {
        term: &'a str,
        records: &'a [Arc<Record>],
    },
}

impl<'a> CatalogEvent<'a> {
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::Loaded { .. } => EventKind::Loaded,
            Self::Indexed { .. } => EventKind::Indexed,
            Self::Filtered { .. } => EventKind::Filtered,
            Self::Facet { .. } => EventKind::Facet,
            Self::Search { .. } => EventKind::Search,
        }
    }

    /// The filtered set carried by this event, if any.
    #[must_use]
    pub const fn records(&self) -> Option<&'a [Arc<Record>]> {
        match self {
            Self::Filtered { records }
            | Self::Facet { records, .. }
            | Self::Search { records, .. } => Some(*records),
            Self::Loaded { .. } | Self::Indexed { .. } => None,
        }
    }
}

/// Callback invoked with the event and a read-only view of the catalog.
pub type Listener = Box<dyn FnMut(&CatalogEvent<'_>, &CatalogView<'_>)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Subscription {
    id: SubscriptionId,
    kind: Option<EventKind>,
    listener: Listener,
}

/// Listeners per event kind, delivered synchronously in subscription order.
#[derive(Default)]
pub struct EventBus {
    next_id: u64,
    subscriptions: Vec<Subscription>,
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscriptions", &self.subscriptions.len())
            .finish()
    }
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Listen for one kind of event.
    pub fn subscribe<F>(&mut self, kind: EventKind, listener: F) -> SubscriptionId
    where
        F: FnMut(&CatalogEvent<'_>, &CatalogView<'_>) + 'static,
    {
        self.push(Some(kind), Box::new(listener))
    }

    /// Listen for every event.
    pub fn subscribe_all<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&CatalogEvent<'_>, &CatalogView<'_>) + 'static,
    {
        self.push(None, Box::new(listener))
    }

    /// Returns false if the id was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|sub| sub.id != id);
        self.subscriptions.len() != before
    }

    pub fn emit(&mut self, event: &CatalogEvent<'_>, view: &CatalogView<'_>) {
        let kind = event.kind();
        for sub in &mut self.subscriptions {
            if sub.kind.is_none_or(|wanted| wanted == kind) {
                (sub.listener)(event, view);
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    fn push(&mut self, kind: Option<EventKind>, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscriptions.push(Subscription { id, kind, listener });
        id
    }
}
