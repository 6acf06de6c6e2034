//! Status Filter
//!
//! The three tabs every entity page shows over one fetched collection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Client-side filter over the `is_active` flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    /// Every record
    All,
    /// Records with `is_active == true`
    #[default]
    Active,
    /// Suspended records
    Inactive,
}

impl StatusFilter {
    /// Tab order
    pub const TABS: [StatusFilter; 3] = [StatusFilter::All, StatusFilter::Active, StatusFilter::Inactive];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Inactive => "inactive",
        }
    }

    /// Label shown on the tab trigger
    pub fn tab_label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Active => "Active",
            StatusFilter::Inactive => "Archived",
        }
    }

    /// Whether a record with the given flag belongs to this view
    pub fn matches(&self, is_active: bool) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => is_active,
            StatusFilter::Inactive => !is_active,
        }
    }

    /// Records visible under this filter, in backend order
    pub fn apply<'a, E: Entity>(self, items: &'a [E]) -> impl Iterator<Item = &'a E> + 'a {
        items.iter().filter(move |item| self.matches(item.is_active()))
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "active" => Ok(StatusFilter::Active),
            "inactive" | "archived" => Ok(StatusFilter::Inactive),
            other => Err(format!("unknown status filter '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_and_inactive_partition_all() {
        for flag in [true, false] {
            assert!(StatusFilter::All.matches(flag));
            assert_ne!(StatusFilter::Active.matches(flag), StatusFilter::Inactive.matches(flag));
        }
    }

    #[test]
    fn parses_tab_names() {
        assert_eq!("Active".parse::<StatusFilter>(), Ok(StatusFilter::Active));
        assert_eq!("archived".parse::<StatusFilter>(), Ok(StatusFilter::Inactive));
        assert!("deleted".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn inactive_tab_is_labelled_archived() {
        assert_eq!(StatusFilter::Inactive.tab_label(), "Archived");
        assert_eq!(StatusFilter::default(), StatusFilter::Active);
    }
}
