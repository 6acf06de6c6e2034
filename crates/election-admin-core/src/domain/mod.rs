//! Domain Layer
//!
//! Records the dashboard manages and the schema each one describes.
//! This layer knows nothing about HTTP or the DOM.

mod entity;
mod status;
mod district;
mod party;
mod node;

pub use entity::{AdminEntity, CrossLink, Entity, EntityId};
pub use status::StatusFilter;
pub use district::{DistrictDraft, ElectorateDistrict};
pub use party::{ElectionParty, PartyDraft};
pub use node::{Node, NodeDraft};
