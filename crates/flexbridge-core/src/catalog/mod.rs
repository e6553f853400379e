//! Relationship catalog.
//!
//! The catalog holds the service endpoints the hosting platform provisioned
//! for the application, keyed by relationship name.

mod catalog;
mod descriptor;

pub use catalog::RelationshipCatalog;
pub use descriptor::{EndpointQuery, RelationshipDescriptor, VersionSpec};
