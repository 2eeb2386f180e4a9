//! Attribute projections: each copies a fixed set of fields from a source
//! record into a resource's `attributes`.

use serde_json::{Map, Value};
use yuidoc::{Class, ClassItem, Module};

pub(crate) fn class_attributes(class: &Class) -> Map<String, Value> {
    let mut attributes = Map::new();
    attributes.insert("name".into(), class.name.clone().into());
    insert_some(&mut attributes, "shortname", &class.shortname);
    insert_some(&mut attributes, "file", &class.file);
    insert_some(&mut attributes, "line", &class.line);
    insert_some(&mut attributes, "description", &class.description);
    attributes
}

pub(crate) fn module_attributes(module: &Module) -> Map<String, Value> {
    let mut attributes = Map::new();
    insert_some(&mut attributes, "file", &module.file);
    insert_some(&mut attributes, "line", &module.line);
    insert_some(&mut attributes, "tag", &module.tag);
    insert_some(&mut attributes, "description", &module.description);
    insert_some(&mut attributes, "itemtype", &module.itemtype);
    attributes
}

/// Every field of the member except `class` and `module`, which become
/// relationships instead.
pub(crate) fn member_attributes(item: &ClassItem) -> Map<String, Value> {
    let mut attributes = item.to_fields();
    attributes.shift_remove("class");
    attributes.shift_remove("module");
    attributes
}

fn insert_some<T>(attributes: &mut Map<String, Value>, key: &str, value: &Option<T>)
where
    T: Clone + Into<Value>,
{
    if let Some(value) = value {
        attributes.insert(key.to_string(), value.clone().into());
    }
}
