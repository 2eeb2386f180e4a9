use serde::{Deserialize, Serialize};

use crate::linkage::Linkage;

/// Resource linkage of a relationship: to-many, to-one, or empty (`null`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RelationshipData {
    ToMany(Vec<Linkage>),
    ToOne(Option<Linkage>),
}

/// A relationship object: `{"data": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    pub data: RelationshipData,
}

impl Relationship {
    pub fn to_one(linkage: Option<Linkage>) -> Self {
        Self {
            data: RelationshipData::ToOne(linkage),
        }
    }

    pub fn to_many(linkages: impl IntoIterator<Item = Linkage>) -> Self {
        Self {
            data: RelationshipData::ToMany(linkages.into_iter().collect()),
        }
    }

    /// The single linked resource, if this is a non-empty to-one relationship.
    pub fn one(&self) -> Option<&Linkage> {
        match &self.data {
            RelationshipData::ToOne(linkage) => linkage.as_ref(),
            RelationshipData::ToMany(_) => None,
        }
    }

    /// The linked resources of a to-many relationship; empty for to-one.
    pub fn many(&self) -> &[Linkage] {
        match &self.data {
            RelationshipData::ToMany(linkages) => linkages,
            RelationshipData::ToOne(_) => &[],
        }
    }

    /// Every linkage in this relationship, whatever its cardinality.
    pub fn linkages(&self) -> impl Iterator<Item = &Linkage> {
        self.one().into_iter().chain(self.many())
    }
}
