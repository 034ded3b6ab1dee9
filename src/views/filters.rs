use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;
use std::sync::Arc;

use crate::catalog::{Catalog, CatalogView};
use crate::events::EventKind;
use crate::record::{Attribute, AttributeValue, ControlKind, FacetCriteria, Record};

/// What a control reports when the user changes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlValue {
    Selected(Vec<String>),
    Checked(bool),
}

impl ControlValue {
    /// The constraint this value adds, or `None` when it clears the facet.
    fn constraint(&self) -> Option<AttributeValue> {
        match self {
            Self::Selected(values) if values.is_empty() => None,
            Self::Selected(values) => Some(AttributeValue::set(values.iter().cloned())),
            Self::Checked(true) => Some(AttributeValue::flag(true)),
            Self::Checked(false) => None,
        }
    }
}

/// One facet picker.
#[derive(Debug, Clone)]
pub struct FacetControl {
    pub attribute: Attribute,
    pub kind: ControlKind,
    pub label: &'static str,
    /// Options currently offered; refreshed on every filtered-set change.
    pub options: Arc<[String]>,
    selected: BTreeSet<String>,
    value: Option<ControlValue>,
}

impl FacetControl {
    fn new(attribute: Attribute, kind: ControlKind) -> Self {
        Self {
            attribute,
            kind,
            label: attribute.label(),
            options: Arc::from(Vec::new()),
            selected: BTreeSet::new(),
            value: None,
        }
    }

    #[must_use]
    pub fn is_selected(&self, option: &str) -> bool {
        self.selected.contains(option)
    }

    #[must_use]
    pub const fn value(&self) -> Option<&ControlValue> {
        self.value.as_ref()
    }
}

/// The facet form: one control per facet attribute, in schema order.
///
/// Criteria are rebuilt from the controls on every change, never patched.
#[derive(Debug, Clone)]
pub struct FilterForm {
    controls: Vec<FacetControl>,
}

impl Default for FilterForm {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterForm {
    #[must_use]
    pub fn new() -> Self {
        let controls = Attribute::FACETS
            .into_iter()
            .filter_map(|attribute| {
                attribute
                    .control()
                    .map(|kind| FacetControl::new(attribute, kind))
            })
            .collect();
        Self { controls }
    }

    /// Build the form, fill select options from the catalog, and keep them in
    /// step with every filtered-set change.
    pub fn attach(catalog: &mut Catalog) -> Rc<RefCell<Self>> {
        let mut form = Self::new();
        form.refresh_options(&catalog.view());
        let form = Rc::new(RefCell::new(form));
        let handle = Rc::clone(&form);
        catalog.subscribe(EventKind::Filtered, move |_, view| {
            handle.borrow_mut().refresh_options(view);
        });
        form
    }

    /// Record a control change and return the resulting criteria.
    ///
    /// `Checked(false)` or an empty selection removes the attribute.
    pub fn change(&mut self, attribute: Attribute, value: ControlValue) -> FacetCriteria {
        if let Some(control) = self.control_mut(attribute) {
            control.selected = match &value {
                ControlValue::Selected(values) => values.iter().cloned().collect(),
                ControlValue::Checked(_) => BTreeSet::new(),
            };
            control.value = value.constraint().map(|_| value);
        }
        self.criteria()
    }

    /// Apply a change on a shared form to the catalog.
    ///
    /// The form borrow is released before faceting so its own listener can
    /// refresh options.
    pub fn apply<'c>(
        form: &Rc<RefCell<Self>>,
        catalog: &'c mut Catalog,
        attribute: Attribute,
        value: ControlValue,
    ) -> &'c [Arc<Record>] {
        let criteria = form.borrow_mut().change(attribute, value);
        catalog.facet(&criteria)
    }

    /// Fresh criteria from the current control values.
    #[must_use]
    pub fn criteria(&self) -> FacetCriteria {
        self.controls
            .iter()
            .filter_map(|control| {
                let constraint = control.value.as_ref()?.constraint()?;
                Some((control.attribute, constraint))
            })
            .collect()
    }

    /// Re-read select options from the current scope.
    pub fn refresh_options(&mut self, view: &CatalogView<'_>) {
        for control in &mut self.controls {
            if control.kind == ControlKind::Select {
                control.options = view.facet_options(control.attribute);
            }
        }
    }

    #[must_use]
    pub fn controls(&self) -> &[FacetControl] {
        &self.controls
    }

    #[must_use]
    pub fn control(&self, attribute: Attribute) -> Option<&FacetControl> {
        self.controls.iter().find(|c| c.attribute == attribute)
    }

    fn control_mut(&mut self, attribute: Attribute) -> Option<&mut FacetControl> {
        self.controls.iter_mut().find(|c| c.attribute == attribute)
    }
}
