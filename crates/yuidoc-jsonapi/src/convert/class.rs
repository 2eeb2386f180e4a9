use jsonapi::{Resource, ResourceType};
use serde_json::Value;
use yuidoc::{Class, ItemType, YuiDoc};

use super::attributes::class_attributes;
use super::link::{belongs_to, has_many, member_collection, member_id, member_type};
use crate::options::MemberStyle;

/// One `class` resource per entry of `classes`, in source order.
pub(super) fn extract_classes(doc: &YuiDoc, members: MemberStyle) -> Vec<Resource> {
    doc.classes
        .values()
        .map(|class| extract_class(doc, class, members))
        .collect()
}

fn extract_class(doc: &YuiDoc, class: &Class, members: MemberStyle) -> Resource {
    let descendants = doc
        .subclasses_of(&class.name)
        .filter(|subclass| subclass.name != class.name)
        .map(|subclass| subclass.name.as_str());

    let mut attributes = class_attributes(class);
    let mut resource = Resource::new(ResourceType::Class, class.name.clone())
        .with_relationship("parentClass", belongs_to(ResourceType::Class, class.parent()))
        .with_relationship("descendants", has_many(ResourceType::Class, descendants))
        .with_relationship("module", belongs_to(ResourceType::Module, class.module_name()));

    for kind in ItemType::ALL {
        let items = doc.members_of(&class.name, kind);
        match members {
            MemberStyle::Linked => {
                let ids = items
                    .map(|item| member_id(Some(&class.name), item.name().unwrap_or_default()));
                resource = resource
                    .with_relationship(member_collection(kind), has_many(member_type(kind), ids));
            }
            MemberStyle::Embedded => {
                let embedded = items.map(|item| Value::Object(item.to_fields())).collect();
                attributes.insert(member_collection(kind).into(), Value::Array(embedded));
            }
        }
    }

    resource.with_attributes(attributes)
}
