use std::fmt;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The kinds of class items the converter understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemType {
    Method,
    Property,
    Event,
}

impl ItemType {
    pub const ALL: [ItemType; 3] = [ItemType::Method, ItemType::Property, ItemType::Event];

    pub fn as_str(self) -> &'static str {
        match self {
            ItemType::Method => "method",
            ItemType::Property => "property",
            ItemType::Event => "event",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "method" => ItemType::Method,
            "property" => ItemType::Property,
            "event" => ItemType::Event,
            _ => return None,
        })
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A class member record: the fields shared by every item type plus the
/// itemtype-specific `details`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Member<D> {
    pub name: String,
    /// Owning class name.
    pub class: Option<String>,
    pub module: Option<String>,
    pub file: Option<String>,
    pub line: Option<u64>,
    pub description: Option<String>,
    #[serde(flatten)]
    pub details: D,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MethodDetails {
    pub params: Option<Value>,
    #[serde(rename = "return")]
    pub returns: Option<Value>,
    pub access: Option<String>,
    /// Fields YUIDoc emits that are not modelled (`static`, `chainable`, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PropertyDetails {
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    pub default: Option<Value>,
    pub access: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EventDetails {
    pub params: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Typed view of a recognised class item.
#[derive(Debug, Clone, PartialEq)]
pub enum MemberRecord {
    Method(Member<MethodDetails>),
    Property(Member<PropertyDetails>),
    Event(Member<EventDetails>),
}

impl MemberRecord {
    pub fn item_type(&self) -> ItemType {
        match self {
            MemberRecord::Method(_) => ItemType::Method,
            MemberRecord::Property(_) => ItemType::Property,
            MemberRecord::Event(_) => ItemType::Event,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            MemberRecord::Method(m) => &m.name,
            MemberRecord::Property(m) => &m.name,
            MemberRecord::Event(m) => &m.name,
        }
    }

    pub fn class(&self) -> Option<&str> {
        match self {
            MemberRecord::Method(m) => m.class.as_deref(),
            MemberRecord::Property(m) => m.class.as_deref(),
            MemberRecord::Event(m) => m.class.as_deref(),
        }
    }
}

/// One entry of the `classitems` list.
///
/// The source object is kept as read, key order and `null` values included.
/// Entries whose `itemtype` is `method`, `property` or `event` also carry a
/// typed [`MemberRecord`]; any other entry has none.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassItem {
    record: Option<MemberRecord>,
    fields: Map<String, Value>,
}

impl ClassItem {
    /// The typed record, if the `itemtype` is recognised.
    pub fn record(&self) -> Option<&MemberRecord> {
        self.record.as_ref()
    }

    pub fn item_type(&self) -> Option<ItemType> {
        self.record.as_ref().map(MemberRecord::item_type)
    }

    pub fn name(&self) -> Option<&str> {
        match &self.record {
            Some(record) => Some(record.name()),
            None => self.fields.get("name").and_then(Value::as_str),
        }
    }

    /// Name of the owning class.
    pub fn class(&self) -> Option<&str> {
        match &self.record {
            Some(record) => record.class(),
            None => self.fields.get("class").and_then(Value::as_str),
        }
    }

    /// Returns true if this is a `kind` item owned by `class`.
    pub fn is_member_of(&self, kind: ItemType, class: &str) -> bool {
        self.item_type() == Some(kind) && self.class() == Some(class)
    }

    /// The source object, `itemtype` included.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn to_fields(&self) -> Map<String, Value> {
        self.fields.clone()
    }
}

impl<'de> Deserialize<'de> for ClassItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = Map::<String, Value>::deserialize(deserializer)?;

        let Some(kind) = fields
            .get("itemtype")
            .and_then(Value::as_str)
            .and_then(ItemType::from_name)
        else {
            return Ok(ClassItem {
                record: None,
                fields,
            });
        };

        // The tag is implied by the variant; keep it out of the `extra` maps.
        let mut typed = fields.clone();
        typed.shift_remove("itemtype");
        let typed = Value::Object(typed);

        let record = match kind {
            ItemType::Method => serde_json::from_value(typed).map(MemberRecord::Method),
            ItemType::Property => serde_json::from_value(typed).map(MemberRecord::Property),
            ItemType::Event => serde_json::from_value(typed).map(MemberRecord::Event),
        }
        .map_err(de::Error::custom)?;

        Ok(ClassItem {
            record: Some(record),
            fields,
        })
    }
}

impl Serialize for ClassItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}
