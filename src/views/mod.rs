//! Consumers of catalog events.
//!
//! Presentation-neutral models of the pieces a UI wires to the catalog: the
//! result list, the result counter, the facet filter form and the search
//! box. Each `attach` subscribes the consumer and hands back a shared handle
//! the caller reads from.

pub mod counter;
pub mod filters;
pub mod result_list;
pub mod search_box;

pub use counter::{ResultCounter, counter_label};
pub use filters::{ControlValue, FacetControl, FilterForm};
pub use result_list::ResultList;
pub use search_box::{SearchAction, SearchBox};
