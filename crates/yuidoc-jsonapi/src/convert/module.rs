use jsonapi::{Resource, ResourceType};
use yuidoc::{Module, YuiDoc};

use super::attributes::module_attributes;
use super::link::has_many;

/// One `module` resource per entry of `modules`, in source order.
pub(super) fn extract_modules(doc: &YuiDoc) -> Vec<Resource> {
    doc.modules.values().map(extract_module).collect()
}

fn extract_module(module: &Module) -> Resource {
    Resource::new(ResourceType::Module, module.name.clone())
        .with_attributes(module_attributes(module))
        .with_relationship(
            "classes",
            has_many(ResourceType::Class, module.class_names()),
        )
}
