//! Node Entity
//!
//! A polling node reachable at a URL. The URL is optional in the form but
//! must be 4–255 characters when given.

use serde::{Deserialize, Serialize};

use super::district::NAME_FIELD;
use super::entity::{AdminEntity, Entity, EntityId};
use crate::form::{FieldSpec, FormValues, Rule};

/// A polling node (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub url: String,
    pub is_active: bool,
    pub created_at: String,
}

/// Create payload for a node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeDraft {
    pub name: String,
    pub url: String,
}

impl Entity for Node {
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

impl AdminEntity for Node {
    type Draft = NodeDraft;

    const RESOURCE: &'static str = "nodes";
    const SINGULAR: &'static str = "node";
    const PLURAL: &'static str = "nodes";
    const FORM: &'static [FieldSpec] = &[
        NAME_FIELD,
        FieldSpec {
            key: "url",
            label: "URL",
            rules: &[Rule::MinLength(4), Rule::MaxLength(255)],
        },
    ];
    const EXTRA_COLUMNS: &'static [&'static str] = &["URL"];

    fn extra_cells(&self) -> Vec<String> {
        vec![self.url.clone()]
    }

    fn form_values(&self) -> FormValues {
        FormValues::default()
            .with("name", self.name.clone())
            .with("url", self.url.clone())
    }

    fn draft(values: &FormValues) -> NodeDraft {
        NodeDraft {
            name: values.get("name").trim().to_string(),
            url: values.get("url").trim().to_string(),
        }
    }

    fn with_edits(&self, values: &FormValues) -> Self {
        Self {
            name: values.get("name").trim().to_string(),
            url: values.get("url").trim().to_string(),
            ..self.clone()
        }
    }

    fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }

    fn from_draft(id: EntityId, draft: NodeDraft, created_at: String) -> Self {
        Self {
            id,
            name: draft.name,
            url: draft.url,
            is_active: true,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::validate;

    #[test]
    fn update_payload_keeps_flag_and_timestamp() {
        let node = Node {
            id: 4,
            name: "Node 4".into(),
            url: "http://old".into(),
            is_active: true,
            created_at: "2024-01-01T10:00:00Z".into(),
        };
        let values = node.form_values().with("url", "http://new");
        let payload = serde_json::to_value(node.with_edits(&values)).unwrap();
        assert_eq!(
            payload,
            serde_json::json!({
                "id": 4,
                "name": "Node 4",
                "url": "http://new",
                "isActive": true,
                "createdAt": "2024-01-01T10:00:00Z"
            })
        );
    }

    #[test]
    fn form_checks_both_fields() {
        let values = FormValues::blank(Node::FORM).with("name", "N").with("url", "x");
        let errors = validate(Node::FORM, &values);
        assert_eq!(errors.len(), 2);
    }
}
