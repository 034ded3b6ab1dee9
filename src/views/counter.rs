use std::cell::RefCell;
use std::rc::Rc;

use crate::catalog::Catalog;
use crate::config::DisplayConfig;
use crate::events::{CatalogEvent, EventKind};

/// Button label for a result count, e.g. `View 2 Providers »`.
#[must_use]
pub fn counter_label(count: usize, singular: &str, plural: &str) -> String {
    let noun = if count == 1 { singular } else { plural };
    format!("View {count} {noun} \u{bb}")
}

/// Tracks how many records the current filtered set holds.
#[derive(Debug, Clone)]
pub struct ResultCounter {
    length: usize,
    singular: String,
    plural: String,
}

impl ResultCounter {
    #[must_use]
    pub fn new(length: usize, display: &DisplayConfig) -> Self {
        Self {
            length,
            singular: display.singular.clone(),
            plural: display.plural.clone(),
        }
    }

    /// Start at the catalog's size and follow every filtered-set change.
    pub fn attach(catalog: &mut Catalog, display: &DisplayConfig) -> Rc<RefCell<Self>> {
        let counter = Rc::new(RefCell::new(Self::new(catalog.len(), display)));
        let handle = Rc::clone(&counter);
        catalog.subscribe(EventKind::Filtered, move |event, _| {
            if let CatalogEvent::Filtered { records } = event {
                handle.borrow_mut().length = records.len();
            }
        });
        counter
    }

    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    #[must_use]
    pub fn label(&self) -> String {
        counter_label(self.length, &self.singular, &self.plural)
    }
}
