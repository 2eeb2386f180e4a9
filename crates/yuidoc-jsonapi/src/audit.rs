use std::collections::HashSet;
use std::fmt;

use jsonapi::{Document, Linkage, ResourceType};

/// A linkage whose target resource is not part of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingLink {
    /// The resource holding the relationship.
    pub from: Linkage,
    pub relationship: String,
    pub target: Linkage,
}

impl fmt::Display for DanglingLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} -> {}", self.from, self.relationship, self.target)
    }
}

/// Find every linkage in `document` that points at a resource it does not
/// contain, in document order.
pub fn find_dangling(document: &Document) -> Vec<DanglingLink> {
    let known: HashSet<(ResourceType, &str)> = document
        .data
        .iter()
        .map(|resource| (resource.kind, resource.id.as_str()))
        .collect();

    let mut dangling = Vec::new();
    for resource in &document.data {
        for (name, relationship) in &resource.relationships {
            for target in relationship.linkages() {
                if !known.contains(&(target.kind, target.id.as_str())) {
                    dangling.push(DanglingLink {
                        from: resource.linkage(),
                        relationship: name.clone(),
                        target: target.clone(),
                    });
                }
            }
        }
    }
    dangling
}
