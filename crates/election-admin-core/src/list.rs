//! List View Model
//!
//! Derives what one status tab shows from the page's fetched collection.
//! Pure: the list never mutates records, it only decides which rows exist
//! and which controls each row offers.

use chrono::FixedOffset;

use crate::domain::{AdminEntity, CrossLink, StatusFilter};
use crate::format::format_created_at;

/// Active/inactive badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Active,
    Inactive,
}

impl Badge {
    pub fn for_flag(is_active: bool) -> Self {
        if is_active {
            Badge::Active
        } else {
            Badge::Inactive
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Badge::Active => "Active",
            Badge::Inactive => "Inactive",
        }
    }

    /// CSS modifier (outline for active, secondary for inactive)
    pub fn class(&self) -> &'static str {
        match self {
            Badge::Active => "badge badge-outline",
            Badge::Inactive => "badge badge-secondary",
        }
    }
}

/// Controls rendered on one row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowActions {
    pub edit: bool,
    pub cross_link: bool,
    pub suspend: bool,
    pub recover: bool,
}

impl RowActions {
    /// Inactive records can't be edited, only recovered; the archived tab
    /// hides edit and navigation entirely. Exactly one of suspend/recover.
    pub fn for_row(status: StatusFilter, is_active: bool) -> Self {
        let editable_tab = status != StatusFilter::Inactive;
        Self {
            edit: editable_tab,
            cross_link: editable_tab,
            suspend: is_active,
            recover: !is_active,
        }
    }
}

/// One table row, ready to render
#[derive(Debug, Clone, PartialEq)]
pub struct Row<E> {
    pub record: E,
    pub created: String,
    pub badge: Badge,
    pub extra: Vec<String>,
    pub actions: RowActions,
    /// Present only when the tab allows navigation and the entity has a link
    pub cross_link: Option<CrossLink>,
}

/// What a tab body shows
#[derive(Debug, Clone, PartialEq)]
pub enum ListBody<E> {
    /// At least one record matches
    Table { rows: Vec<Row<E>>, footer: String },
    /// Nothing matches yet and a fetch is in flight
    Loading,
    /// Nothing matches; `offer_create` is false on the archived tab
    Empty { offer_create: bool },
}

impl<E> ListBody<E> {
    /// Number of rendered rows
    pub fn row_count(&self) -> usize {
        match self {
            ListBody::Table { rows, .. } => rows.len(),
            _ => 0,
        }
    }
}

/// Builder for a tab body
pub struct ListView;

impl ListView {
    /// Filter `items` by `status` and lay out the tab
    pub fn build<E: AdminEntity>(
        items: &[E],
        status: StatusFilter,
        loading: bool,
        offset: FixedOffset,
    ) -> ListBody<E> {
        let rows: Vec<Row<E>> = status
            .apply(items)
            .map(|record| {
                let actions = RowActions::for_row(status, record.is_active());
                Row {
                    created: format_created_at(record.created_at(), offset),
                    badge: Badge::for_flag(record.is_active()),
                    extra: record.extra_cells(),
                    cross_link: record.cross_link().filter(|_| actions.cross_link),
                    actions,
                    record: record.clone(),
                }
            })
            .collect();

        if !rows.is_empty() {
            let footer = Self::footer::<E>(rows.len());
            return ListBody::Table { rows, footer };
        }
        if loading {
            ListBody::Loading
        } else {
            ListBody::Empty {
                offer_create: status != StatusFilter::Inactive,
            }
        }
    }

    /// "Showing 3 nodes" / "Showing 1 node"
    pub fn footer<E: AdminEntity>(count: usize) -> String {
        let noun = if count > 1 { E::PLURAL } else { E::SINGULAR };
        format!("Showing {count} {noun}")
    }
}
