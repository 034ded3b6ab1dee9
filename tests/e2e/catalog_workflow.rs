//! E2E Scenario: a page of views driven by one catalog
//!
//! Loads the dataset from disk, attaches every view, then walks through the
//! interactions a visitor would make: pick facets, search, clear.

use std::cell::RefCell;
use std::rc::Rc;

use provider_catalog::Catalog;
use provider_catalog::config::{Config, SearchConfig};
use provider_catalog::events::{CatalogEvent, EventKind};
use provider_catalog::load;
use provider_catalog::record::{Attribute, RecordId};
use provider_catalog::views::{ControlValue, FilterForm, ResultCounter, ResultList, SearchBox};

use super::common::DatasetFixture;

fn visible(list: &Rc<RefCell<ResultList>>) -> Vec<String> {
    list.borrow()
        .visibility()
        .into_iter()
        .filter(|(_, shown)| *shown)
        .map(|(id, _)| id.to_string())
        .collect()
}

#[test]
fn test_views_follow_catalog() {
    let fixture = DatasetFixture::new();
    let config = Config::default();
    let dataset = load::from_path(&fixture.data_path).unwrap();
    assert_eq!(dataset.report.unknown_keys.get("phone"), Some(&1));

    let mut catalog = Catalog::new(config.search.clone()).unwrap();
    let counter = ResultCounter::attach(&mut catalog, &config.display);
    let list = ResultList::attach(&mut catalog);
    let form = FilterForm::attach(&mut catalog);
    let search_box = SearchBox::attach(&mut catalog);

    let kinds = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&kinds);
    catalog.subscribe_all(move |event, _| sink.borrow_mut().push(event.kind()));

    catalog.load(dataset.records).unwrap();
    assert_eq!(
        *kinds.borrow(),
        vec![EventKind::Loaded, EventKind::Indexed, EventKind::Filtered]
    );
    assert_eq!(counter.borrow().label(), "View 3 Providers \u{bb}");
    assert_eq!(visible(&list), vec!["1", "2", "3"]);
    assert_eq!(
        &*form.borrow().control(Attribute::County).unwrap().options,
        &["King".to_string(), "Pierce".to_string()]
    );

    // Pick a specialty.
    FilterForm::apply(
        &form,
        &mut catalog,
        Attribute::Specialties,
        ControlValue::Selected(vec!["youth".to_string()]),
    );
    assert_eq!(visible(&list), vec!["1"]);
    assert_eq!(counter.borrow().label(), "View 1 Provider \u{bb}");
    assert_eq!(
        &*form.borrow().control(Attribute::County).unwrap().options,
        &["King".to_string()]
    );

    // Swap it for a provider type.
    FilterForm::apply(
        &form,
        &mut catalog,
        Attribute::Specialties,
        ControlValue::Selected(Vec::new()),
    );
    FilterForm::apply(
        &form,
        &mut catalog,
        Attribute::Type,
        ControlValue::Selected(vec!["therapist".to_string()]),
    );
    assert_eq!(visible(&list), vec!["2"]);

    // Searching replaces the facet scope with the whole collection.
    let action = search_box.borrow_mut().submit("cascade");
    SearchBox::apply(&action, &mut catalog).unwrap();
    assert_eq!(visible(&list), vec!["3"]);
    assert_eq!(search_box.borrow().value(), "cascade");

    // A facet change clears the search box.
    FilterForm::apply(&form, &mut catalog, Attribute::NearBus, ControlValue::Checked(true));
    assert_eq!(search_box.borrow().value(), "");
    assert!(visible(&list).is_empty());
    assert_eq!(counter.borrow().label(), "View 0 Providers \u{bb}");

    let action = search_box.borrow_mut().submit("");
    SearchBox::apply(&action, &mut catalog).unwrap();
    assert_eq!(visible(&list), vec!["1", "2", "3"]);
}

#[test]
fn test_facet_event_carries_criteria() {
    let fixture = DatasetFixture::new();
    let dataset = load::from_path(&fixture.data_path).unwrap();
    let mut catalog = Catalog::from_records(dataset.records, SearchConfig::default()).unwrap();

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    catalog.subscribe(EventKind::Facet, move |event, _| {
        if let CatalogEvent::Facet { criteria, records } = event {
            sink.borrow_mut().push((criteria.len(), records.len()));
        }
    });

    let form = FilterForm::attach(&mut catalog);
    FilterForm::apply(&form, &mut catalog, Attribute::LowIncome, ControlValue::Checked(true));
    assert_eq!(*seen.borrow(), vec![(1, 1)]);
    assert!(catalog.get(&RecordId::from(1u64)).is_some());
}
