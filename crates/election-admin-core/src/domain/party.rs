//! Election Party Entity

use serde::{Deserialize, Serialize};

use super::district::NAME_FIELD;
use super::entity::{AdminEntity, Entity, EntityId};
use crate::form::{FieldSpec, FormValues};

/// An election party (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectionParty {
    pub id: EntityId,
    pub name: String,
    pub is_active: bool,
    pub created_at: String,
}

/// Create payload for a party
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartyDraft {
    pub name: String,
}

impl Entity for ElectionParty {
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

impl AdminEntity for ElectionParty {
    type Draft = PartyDraft;

    const RESOURCE: &'static str = "election-parties";
    const SINGULAR: &'static str = "election party";
    const PLURAL: &'static str = "election parties";
    const FORM: &'static [FieldSpec] = &[NAME_FIELD];

    fn form_values(&self) -> FormValues {
        FormValues::default().with("name", self.name.clone())
    }

    fn draft(values: &FormValues) -> PartyDraft {
        PartyDraft {
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

    fn from_draft(id: EntityId, draft: PartyDraft, created_at: String) -> Self {
        Self {
            id,
            name: draft.name,
            is_active: true,
            created_at,
        }
    }
}
