use std::fmt;

use serde::{Deserialize, Serialize};

use crate::linkage::{Linkage, ResourceType};
use crate::resource::Resource;

/// A top-level document: `{"data": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub data: Vec<Resource>,
}

impl Document {
    pub fn new(data: Vec<Resource>) -> Self {
        Self { data }
    }

    /// Resources of the given type, in document order.
    pub fn resources_of(&self, kind: ResourceType) -> impl Iterator<Item = &Resource> {
        self.data.iter().filter(move |resource| resource.kind == kind)
    }

    /// Find the resource a linkage points at.
    pub fn get(&self, linkage: &Linkage) -> Option<&Resource> {
        self.find(linkage.kind, &linkage.id)
    }

    pub fn find(&self, kind: ResourceType, id: &str) -> Option<&Resource> {
        self.data
            .iter()
            .find(|resource| resource.kind == kind && resource.id == id)
    }

    pub fn count(&self, kind: ResourceType) -> usize {
        self.resources_of(kind).count()
    }

    pub fn summary(&self) -> Summary {
        Summary {
            classes: self.count(ResourceType::Class),
            modules: self.count(ResourceType::Module),
            methods: self.count(ResourceType::Method),
            properties: self.count(ResourceType::Property),
            events: self.count(ResourceType::Event),
        }
    }
}

/// Resource counts per type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub classes: usize,
    pub modules: usize,
    pub methods: usize,
    pub properties: usize,
    pub events: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} classes, {} modules, {} methods, {} properties, {} events",
            self.classes, self.modules, self.methods, self.properties, self.events
        )
    }
}
