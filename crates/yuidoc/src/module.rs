use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A documented module.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub itemtype: Option<String>,
    /// Classes declared in this module, keyed by class name.
    ///
    /// YUIDoc stores a marker value (usually `1`) per class; only the keys
    /// and their order are meaningful. A missing or `null` mapping is empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub classes: IndexMap<String, Value>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<IndexMap<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<IndexMap<String, Value>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Module {
    /// Class names in declaration order.
    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_classes_is_empty() {
        let module: Module = serde_json::from_str(r#"{"name": "ember-data"}"#).unwrap();
        assert_eq!(module.class_names().count(), 0);
    }

    #[test]
    fn test_null_classes_is_empty() {
        let module: Module =
            serde_json::from_str(r#"{"name": "ember-data", "classes": null}"#).unwrap();
        assert_eq!(module.class_names().count(), 0);
    }

    #[test]
    fn test_classes_must_be_a_mapping() {
        assert!(serde_json::from_str::<Module>(r#"{"name": "M", "classes": [1]}"#).is_err());
    }

    #[test]
    fn test_class_names_keep_source_order() {
        let module: Module =
            serde_json::from_str(r#"{"name": "M", "classes": {"Zed": 1, "Alpha": 1, "Mid": {}}}"#)
                .unwrap();
        let names: Vec<_> = module.class_names().collect();
        assert_eq!(names, ["Zed", "Alpha", "Mid"]);
    }
}
