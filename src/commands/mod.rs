//! REST Command Wrappers
//!
//! Frontend bindings to the backend's REST endpoints. One generic client
//! serves every entity; the entity's schema supplies the resource path.

mod rest;

pub use rest::RestService;
