use jsonapi::Document;
use tracing::debug;
use yuidoc::{ItemType, YuiDoc};

use crate::options::{ConvertOptions, MemberStyle};

mod attributes;
mod class;
mod link;
mod member;
mod module;

/// Convert a YUIDoc document into a JSON:API document with linked members.
///
/// Same as [`convert_with`] with default options.
pub fn convert(doc: &YuiDoc) -> Document {
    convert_with(doc, &ConvertOptions::default())
}

/// Convert a YUIDoc document into a JSON:API document.
///
/// The output lists classes, then modules, then (with
/// [`MemberStyle::Linked`]) methods, properties and events, each in source
/// order. References to classes or modules missing from `doc` are linked
/// as-is; see [`find_dangling`](crate::find_dangling) to detect them.
pub fn convert_with(doc: &YuiDoc, options: &ConvertOptions) -> Document {
    let mut data = class::extract_classes(doc, options.members);
    debug!(count = data.len(), "extracted classes");

    let modules = module::extract_modules(doc);
    debug!(count = modules.len(), "extracted modules");
    data.extend(modules);

    if options.members == MemberStyle::Linked {
        for kind in ItemType::ALL {
            let members = member::extract_members(doc, kind);
            debug!(%kind, count = members.len(), "extracted members");
            data.extend(members);
        }
    }

    Document::new(data)
}
