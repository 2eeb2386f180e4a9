//! JSON:API resource documents.
//!
//! A [`Document`] is a flat list of [`Resource`]s. Resources reference each
//! other through [`Relationship`]s holding `{id, type}` [`Linkage`]s instead
//! of embedded objects.

mod document;
mod linkage;
mod relationship;
mod resource;

pub use document::{Document, Summary};
pub use linkage::{Linkage, ResourceType};
pub use relationship::{Relationship, RelationshipData};
pub use resource::Resource;
