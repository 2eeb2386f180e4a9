//! Typed model of a YUIDoc `data.json` document.
//!
//! This crate deserializes the output of the YUIDoc documentation parser
//! and provides structured access to its classes, modules and class items
//! (methods, properties and events).

mod class;
mod class_item;
mod module;
mod yuidoc;

pub use class::Class;
pub use class_item::{
    ClassItem, EventDetails, ItemType, Member, MemberRecord, MethodDetails, PropertyDetails,
};
pub use module::Module;
pub use yuidoc::YuiDoc;
