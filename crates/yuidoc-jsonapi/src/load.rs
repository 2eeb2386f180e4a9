use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use jsonapi::Document;
use tracing::debug;
use yuidoc::YuiDoc;

/// Load a YUIDoc document from `input`, or from stdin when `input` is
/// absent or `-`.
pub fn load_yuidoc(input: Option<&Path>) -> Result<YuiDoc> {
    let json = match input {
        Some(path) if path != Path::new("-") => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read YUIDoc JSON at {}", path.display()))?;
            debug!(path = %path.display(), bytes = json.len(), "read YUIDoc JSON");
            json
        }
        _ => {
            let mut json = String::new();
            io::stdin()
                .read_to_string(&mut json)
                .context("Failed to read YUIDoc JSON from stdin")?;
            debug!(bytes = json.len(), "read YUIDoc JSON from stdin");
            json
        }
    };

    parse_yuidoc(&json)
}

pub fn parse_yuidoc(json: &str) -> Result<YuiDoc> {
    YuiDoc::from_json(json).context("Failed to parse YUIDoc JSON")
}

pub fn render_document(document: &Document, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(document)
    } else {
        serde_json::to_string(document)
    };
    json.context("Failed to serialize JSON:API document")
}

pub fn write_document(path: &Path, json: &str) -> Result<()> {
    fs::write(path, json)
        .with_context(|| format!("Failed to write JSON:API document to {}", path.display()))
}
