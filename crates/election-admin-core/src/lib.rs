//! Election Admin Core
//!
//! Layered the same way for every managed record:
//! - domain: records, status filter and the schema each record describes
//! - form: field rules and the pure `validate` function
//! - list: the derived, filtered table view
//! - dialog: submit state machine and notification channel
//! - service: the REST contract, URL building and response decoding
//!
//! Nothing in here touches the DOM, so every rule the dashboard applies can be
//! exercised with plain `cargo test`.

pub mod config;
pub mod dialog;
pub mod domain;
pub mod error;
pub mod form;
pub mod format;
pub mod list;
pub mod notify;
pub mod service;

#[cfg(test)]
mod tests;

pub use config::AdminConfig;
pub use dialog::{submit, DialogHost, DialogState, SubmitBlocked, SubmitOutcome};
pub use domain::{
    AdminEntity, CrossLink, ElectionParty, ElectorateDistrict, Entity, EntityId, Node,
    StatusFilter,
};
pub use error::{AdminError, Result};
pub use form::{validate, FieldErrors, FieldSpec, FormValues, Rule};
pub use format::format_created_at;
pub use list::{Badge, ListBody, ListView, Row, RowActions};
pub use notify::{Level, Notification, NotificationLog, Notify};
pub use service::{load_all, EntityService, Transition};
