use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::events::EventKind;
use crate::record::Record;

/// What submitting the search box asks of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchAction {
    /// Empty input: drop all constraints.
    Reset,
    Search(String),
    /// Too short to search; nothing is forwarded.
    Ignore,
}

/// Free-text search input.
#[derive(Debug, Clone)]
pub struct SearchBox {
    min_length: usize,
    value: String,
}

impl SearchBox {
    #[must_use]
    pub const fn new(min_length: usize) -> Self {
        Self {
            min_length,
            value: String::new(),
        }
    }

    /// Shares the catalog's minimum term length and clears itself whenever a
    /// facet is applied.
    pub fn attach(catalog: &mut Catalog) -> Rc<RefCell<Self>> {
        let search_box = Rc::new(RefCell::new(Self::new(catalog.settings().min_term_length)));
        let handle = Rc::clone(&search_box);
        catalog.subscribe(EventKind::Facet, move |_, _| handle.borrow_mut().value.clear());
        search_box
    }

    pub fn submit(&mut self, input: &str) -> SearchAction {
        self.value = input.to_string();
        let term = input.trim();
        if term.is_empty() {
            SearchAction::Reset
        } else if term.chars().count() >= self.min_length {
            SearchAction::Search(term.to_string())
        } else {
            SearchAction::Ignore
        }
    }

    /// Forward an action; `None` when it was ignored.
    pub fn apply<'c>(
        action: &SearchAction,
        catalog: &'c mut Catalog,
    ) -> Result<Option<&'c [Arc<Record>]>> {
        match action {
            SearchAction::Reset => Ok(Some(catalog.reset_filters())),
            SearchAction::Search(term) => catalog.search(term).map(Some),
            SearchAction::Ignore => Ok(None),
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::config::SearchConfig;
    use crate::record::{Attribute, FacetCriteria};

    fn catalog() -> Catalog {
        let records = vec![
            Record::new(1u64)
                .with(Attribute::ProviderName, "Harbor Health")
                .with(Attribute::Type, "clinic"),
            Record::new(2u64)
                .with(Attribute::ProviderName, "Summit Therapy")
                .with(Attribute::Type, "therapist"),
        ];
        Catalog::from_records(records, SearchConfig::default()).unwrap()
    }

    #[test]
    fn test_submit_classifies_input() {
        let mut search_box = SearchBox::new(3);
        assert_eq!(search_box.submit(""), SearchAction::Reset);
        assert_eq!(search_box.submit("   "), SearchAction::Reset);
        assert_eq!(search_box.submit("ab"), SearchAction::Ignore);
        assert_eq!(search_box.submit("abc"), SearchAction::Search("abc".to_string()));
        assert_eq!(search_box.submit(" harbor "), SearchAction::Search("harbor".to_string()));
    }

    #[test]
    fn test_ignored_input_emits_nothing() {
        let mut catalog = catalog();
        let fired = Rc::new(Cell::new(0));
        let sink = Rc::clone(&fired);
        catalog.subscribe_all(move |_, _| sink.set(sink.get() + 1));

        let action = SearchBox::new(3).submit("su");
        assert!(SearchBox::apply(&action, &mut catalog).unwrap().is_none());
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn test_apply_searches_and_resets() {
        let mut catalog = catalog();
        let search_box = SearchBox::attach(&mut catalog);

        let action = search_box.borrow_mut().submit("summit");
        let found = SearchBox::apply(&action, &mut catalog).unwrap().unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id().as_str(), "2");

        let action = search_box.borrow_mut().submit("");
        let all = SearchBox::apply(&action, &mut catalog).unwrap().unwrap();
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_facet_clears_search_box() {
        let mut catalog = catalog();
        let search_box = SearchBox::attach(&mut catalog);
        let _ = search_box.borrow_mut().submit("harbor");

        catalog.search("harbor").unwrap();
        assert_eq!(search_box.borrow().value(), "harbor");

        catalog.facet(&FacetCriteria::new().with(Attribute::Type, "clinic"));
        assert_eq!(search_box.borrow().value(), "");
    }
}
