use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::catalog::Catalog;
use crate::events::CatalogEvent;
use crate::record::RecordId;

/// Visibility of every record in the full collection.
#[derive(Debug, Clone, Default)]
pub struct ResultList {
    ids: Vec<RecordId>,
    visible: HashSet<RecordId>,
}

impl ResultList {
    pub fn attach(catalog: &mut Catalog) -> Rc<RefCell<Self>> {
        let list = Rc::new(RefCell::new(Self {
            ids: catalog.records().iter().map(|r| r.id().clone()).collect(),
            visible: catalog.filtered().iter().map(|r| r.id().clone()).collect(),
        }));
        let handle = Rc::clone(&list);
        catalog.subscribe_all(move |event, view| {
            let mut list = handle.borrow_mut();
            match event {
                CatalogEvent::Loaded { .. } => {
                    list.ids = view.records().iter().map(|r| r.id().clone()).collect();
                }
                CatalogEvent::Filtered { records } => {
                    list.visible = records.iter().map(|r| r.id().clone()).collect();
                }
                CatalogEvent::Indexed { .. }
                | CatalogEvent::Facet { .. }
                | CatalogEvent::Search { .. } => {}
            }
        });
        list
    }

    #[must_use]
    pub fn is_visible(&self, id: &RecordId) -> bool {
        self.visible.contains(id)
    }

    /// `(id, visible)` for every record, in load order.
    #[must_use]
    pub fn visibility(&self) -> Vec<(RecordId, bool)> {
        self.ids
            .iter()
            .map(|id| (id.clone(), self.visible.contains(id)))
            .collect()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.ids.iter().filter(|id| self.visible.contains(id)).count()
    }
}
