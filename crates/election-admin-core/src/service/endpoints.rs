//! REST endpoint layout
//!
//! | call      | method | path                          |
//! |-----------|--------|-------------------------------|
//! | find_all  | GET    | `{base}/{resource}`           |
//! | create    | POST   | `{base}/{resource}`           |
//! | update    | PUT    | `{base}/{resource}/{id}`      |
//! | suspend   | PATCH  | `{base}/{resource}/{id}/suspend` |
//! | recover   | PATCH  | `{base}/{resource}/{id}/recover` |

use super::Transition;
use crate::domain::{AdminEntity, EntityId};

/// URL builder rooted at the configured API base
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(base: impl Into<String>) -> Self {
        let base: String = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn collection<E: AdminEntity>(&self) -> String {
        format!("{}/{}", self.base, E::RESOURCE)
    }

    pub fn record<E: AdminEntity>(&self, id: EntityId) -> String {
        format!("{}/{}/{}", self.base, E::RESOURCE, id)
    }

    pub fn transition<E: AdminEntity>(&self, id: EntityId, transition: Transition) -> String {
        format!("{}/{}", self.record::<E>(id), transition.action())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ElectionParty, Node};

    #[test]
    fn builds_paths_under_base() {
        let endpoints = Endpoints::new("https://admin.example/api/");
        assert_eq!(endpoints.collection::<Node>(), "https://admin.example/api/nodes");
        assert_eq!(endpoints.record::<Node>(9), "https://admin.example/api/nodes/9");
        assert_eq!(
            endpoints.transition::<ElectionParty>(2, Transition::Recover),
            "https://admin.example/api/election-parties/2/recover"
        );
    }

    #[test]
    fn relative_base_is_kept() {
        assert_eq!(Endpoints::new("/api").collection::<Node>(), "/api/nodes");
    }
}
