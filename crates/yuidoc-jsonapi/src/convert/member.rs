use jsonapi::{Resource, ResourceType};
use yuidoc::{ClassItem, ItemType, YuiDoc};

use super::attributes::member_attributes;
use super::link::{belongs_to, member_id, member_type};

/// One resource per class item of the given kind, in `classitems` order.
pub(super) fn extract_members(doc: &YuiDoc, kind: ItemType) -> Vec<Resource> {
    doc.items_of_type(kind)
        .map(|item| extract_member(item, kind))
        .collect()
}

fn extract_member(item: &ClassItem, kind: ItemType) -> Resource {
    let class = item.class();

    Resource::new(
        member_type(kind),
        member_id(class, item.name().unwrap_or_default()),
    )
    .with_attributes(member_attributes(item))
    .with_relationship("class", belongs_to(ResourceType::Class, class))
}
