use jsonapi::{Linkage, Relationship, ResourceType};
use yuidoc::ItemType;

pub(crate) fn member_type(kind: ItemType) -> ResourceType {
    match kind {
        ItemType::Method => ResourceType::Method,
        ItemType::Property => ResourceType::Property,
        ItemType::Event => ResourceType::Event,
    }
}

/// Name of the class relationship (or embedded attribute) holding members of `kind`.
pub(crate) fn member_collection(kind: ItemType) -> &'static str {
    match kind {
        ItemType::Method => "methods",
        ItemType::Property => "properties",
        ItemType::Event => "events",
    }
}

/// `<class>#<name>`; unique per class as long as member names are.
pub(crate) fn member_id(class: Option<&str>, name: &str) -> String {
    format!("{}#{}", class.unwrap_or_default(), name)
}

/// To-one relationship, `null` when `id` is absent or empty.
pub(crate) fn belongs_to(kind: ResourceType, id: Option<&str>) -> Relationship {
    Relationship::to_one(
        id.filter(|id| !id.is_empty())
            .map(|id| Linkage::new(kind, id)),
    )
}

pub(crate) fn has_many<I>(kind: ResourceType, ids: I) -> Relationship
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    Relationship::to_many(ids.into_iter().map(|id| Linkage::new(kind, id)))
}
