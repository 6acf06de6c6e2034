//! Domain Layer - Core Entity Traits
//!
//! `Entity` is the contract every managed record satisfies. `AdminEntity`
//! is the schema descriptor the generic list, form and confirm dialogs are
//! driven by, so one implementation serves districts, parties and nodes.

use std::fmt::Debug;

use serde::{de::DeserializeOwned, Serialize};

use crate::form::{FieldSpec, FormValues};

/// Backend-assigned record identifier
pub type EntityId = u32;

/// Core trait for all managed records
///
/// Records are soft-deleted: `is_active` flips, nothing is ever removed.
pub trait Entity: Sized + Clone + Send + Sync + 'static {
    /// Returns the record's unique identifier
    fn id(&self) -> EntityId;

    /// Display name
    fn name(&self) -> &str;

    /// Whether the record is active (not suspended)
    fn is_active(&self) -> bool;

    /// Creation timestamp exactly as the backend sent it
    fn created_at(&self) -> &str;
}

/// A link from a row to a related listing route
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossLink {
    /// Button text
    pub label: &'static str,
    /// Router path including the query string
    pub href: String,
}

/// Schema descriptor for a record type managed through the dashboard
pub trait AdminEntity: Entity + Serialize + DeserializeOwned + PartialEq + Debug {
    /// Payload sent when creating a record
    type Draft: Serialize + Clone + Debug + Send + Sync + 'static;

    /// REST collection path segment, e.g. `nodes`
    const RESOURCE: &'static str;
    /// Lowercase singular label, e.g. `node`
    const SINGULAR: &'static str;
    /// Lowercase plural label, e.g. `nodes`
    const PLURAL: &'static str;
    /// Editable fields, in display order
    const FORM: &'static [FieldSpec];
    /// Column headers for the values returned by `extra_cells`
    const EXTRA_COLUMNS: &'static [&'static str] = &[];

    /// Cells rendered between the name and the status badge
    fn extra_cells(&self) -> Vec<String> {
        Vec::new()
    }

    /// Optional navigation to a related listing
    fn cross_link(&self) -> Option<CrossLink> {
        None
    }

    /// Current values of the editable fields, used to prefill the edit form
    fn form_values(&self) -> FormValues;

    /// Build a create payload from validated form values
    fn draft(values: &FormValues) -> Self::Draft;

    /// The full record with edited fields applied, sent as the update payload
    fn with_edits(&self, values: &FormValues) -> Self;

    /// Flip the soft-delete flag
    fn set_active(&mut self, active: bool);

    /// The record a backend returns for a freshly created draft
    fn from_draft(id: EntityId, draft: Self::Draft, created_at: String) -> Self;
}
