use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{class::Class, class_item::ClassItem, class_item::ItemType, module::Module};

/// A parsed YUIDoc `data.json` document.
///
/// Top-level sections other than `classes`, `modules` and `classitems`
/// (`project`, `files`, `warnings`, ...) are ignored. Missing sections are
/// treated as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YuiDoc {
    /// Classes keyed by name, in source order.
    #[serde(default)]
    pub classes: IndexMap<String, Class>,

    /// Modules keyed by name, in source order.
    #[serde(default)]
    pub modules: IndexMap<String, Module>,

    /// Methods, properties and events of all classes, in source order.
    #[serde(default)]
    pub classitems: Vec<ClassItem>,
}

impl YuiDoc {
    /// Parse a document from YUIDoc JSON text.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Classes that directly extend the class called `name`.
    pub fn subclasses_of<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Class> + 'a {
        self.classes
            .values()
            .filter(move |class| class.extends_class(name))
    }

    /// All class items of the given kind.
    pub fn items_of_type(&self, kind: ItemType) -> impl Iterator<Item = &ClassItem> {
        self.classitems
            .iter()
            .filter(move |item| item.item_type() == Some(kind))
    }

    /// Class items of the given kind owned by the class called `class`.
    pub fn members_of<'a>(
        &'a self,
        class: &'a str,
        kind: ItemType,
    ) -> impl Iterator<Item = &'a ClassItem> + 'a {
        self.classitems
            .iter()
            .filter(move |item| item.is_member_of(kind, class))
    }
}
