//! UI Components
//!
//! Reusable Leptos components, generic over the managed entity.

mod entity_form;
mod entity_list;
mod modal;
mod status_tabs;
mod toaster;
mod transition_confirm;

pub use entity_form::{EntityForm, FormMode};
pub use entity_list::EntityList;
pub use status_tabs::StatusTabs;
pub use toaster::Toaster;
