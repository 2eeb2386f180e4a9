use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::linkage::{Linkage, ResourceType};
use crate::relationship::Relationship;

/// A resource object: `{id, type, attributes, relationships}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,

    #[serde(rename = "type")]
    pub kind: ResourceType,

    #[serde(default)]
    pub attributes: Map<String, Value>,

    /// Relationships keyed by name, in insertion order.
    #[serde(default)]
    pub relationships: IndexMap<String, Relationship>,
}

impl Resource {
    pub fn new(kind: ResourceType, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            attributes: Map::new(),
            relationships: IndexMap::new(),
        }
    }

    pub fn with_attributes(mut self, attributes: Map<String, Value>) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_relationship(
        mut self,
        name: impl Into<String>,
        relationship: Relationship,
    ) -> Self {
        self.relationships.insert(name.into(), relationship);
        self
    }

    /// The linkage pointing at this resource.
    pub fn linkage(&self) -> Linkage {
        Linkage::new(self.kind, self.id.clone())
    }

    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    pub fn relationship(&self, name: &str) -> Option<&Relationship> {
        self.relationships.get(name)
    }
}
