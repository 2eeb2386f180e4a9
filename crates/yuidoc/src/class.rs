use serde::{Deserialize, Serialize};

/// A documented class.
///
/// Only the fields the converter reads are modelled; anything else YUIDoc
/// emits for a class (`submodule`, `namespace`, `is_constructor`, ...) is
/// ignored on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Name of the parent class.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,
    /// Name of the module the class belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
}

impl Class {
    /// The parent class name, if the class extends a non-empty name.
    pub fn parent(&self) -> Option<&str> {
        self.extends.as_deref().filter(|name| !name.is_empty())
    }

    /// The owning module name, if one is set.
    pub fn module_name(&self) -> Option<&str> {
        self.module.as_deref().filter(|name| !name.is_empty())
    }

    pub fn extends_class(&self, name: &str) -> bool {
        self.parent() == Some(name)
    }
}
