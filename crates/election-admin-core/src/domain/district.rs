//! Electorate District Entity
//!
//! An electoral district with a running voter count. Districts link to the
//! polling divisions listing through query parameters.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use super::entity::{AdminEntity, CrossLink, Entity, EntityId};
use crate::form::{FieldSpec, FormValues, Rule};

/// Rules shared by every `name` input
pub(crate) const NAME_FIELD: FieldSpec = FieldSpec {
    key: "name",
    label: "Name",
    rules: &[Rule::Required, Rule::MinLength(2), Rule::MaxLength(100)],
};

/// An electoral district (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectorateDistrict {
    pub id: EntityId,
    pub name: String,
    /// Registered voters, maintained by the backend
    #[serde(default)]
    pub current_voters: u64,
    pub is_active: bool,
    pub created_at: String,
}

/// Create payload for a district
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistrictDraft {
    pub name: String,
}

impl Entity for ElectorateDistrict {
    fn id(&self) -> EntityId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn created_at(&self) -> &str {
        &self.created_at
    }
}

impl AdminEntity for ElectorateDistrict {
    type Draft = DistrictDraft;

    const RESOURCE: &'static str = "electorate-districts";
    const SINGULAR: &'static str = "electoral district";
    const PLURAL: &'static str = "electoral districts";
    const FORM: &'static [FieldSpec] = &[NAME_FIELD];
    const EXTRA_COLUMNS: &'static [&'static str] = &["Voters"];

    fn extra_cells(&self) -> Vec<String> {
        vec![self.current_voters.to_string()]
    }

    fn cross_link(&self) -> Option<CrossLink> {
        let name = utf8_percent_encode(&self.name, NON_ALPHANUMERIC);
        Some(CrossLink {
            label: "Polling Divisions",
            href: format!("/electorates?district={}&name={}", self.id, name),
        })
    }

    fn form_values(&self) -> FormValues {
        FormValues::default().with("name", self.name.clone())
    }

    fn draft(values: &FormValues) -> DistrictDraft {
        DistrictDraft {
            name: values.get("name").trim().to_string(),
        }
    }

    fn with_edits(&self, values: &FormValues) -> Self {
        Self {
            name: values.get("name").trim().to_string(),
            ..self.clone()
        }
    }

    fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }

    fn from_draft(id: EntityId, draft: DistrictDraft, created_at: String) -> Self {
        Self {
            id,
            name: draft.name,
            current_voters: 0,
            is_active: true,
            created_at,
        }
    }
}
