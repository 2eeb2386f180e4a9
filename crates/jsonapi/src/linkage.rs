use std::fmt;

use serde::{Deserialize, Serialize};

/// The `type` of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Class,
    Module,
    Method,
    Property,
    Event,
}

impl ResourceType {
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceType::Class => "class",
            ResourceType::Module => "module",
            ResourceType::Method => "method",
            ResourceType::Property => "property",
            ResourceType::Event => "event",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pointer to a resource: `{"id": ..., "type": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Linkage {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ResourceType,
}

impl Linkage {
    pub fn new(kind: ResourceType, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }
}

impl fmt::Display for Linkage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind, self.id)
    }
}
