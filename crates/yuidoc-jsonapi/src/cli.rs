use std::path::PathBuf;

use clap::Parser;

use crate::color::Color;
use crate::options::MemberStyle;

/// Convert a YUIDoc data.json document into a JSON:API document
#[derive(Parser, Debug)]
#[command(name = "yuidoc-jsonapi", version)]
#[command(
    about = "Convert a YUIDoc data.json document into a JSON:API document",
    long_about = None
)]
#[command(after_help = "\
EXAMPLES:
  yuidoc-jsonapi data.json                       Print the JSON:API document
  yuidoc-jsonapi data.json --pretty -o api.json  Write an indented document
  yuidoc-jsonapi --members embedded < data.json  Embed members in classes
  yuidoc-jsonapi data.json --strict              Fail on dangling links")]
pub struct Cli {
    /// Path to a YUIDoc data.json file ("-" or omitted reads stdin)
    pub input: Option<PathBuf>,

    /// How methods, properties and events are represented: "linked" emits
    /// them as resources, "embedded" nests them in class attributes
    #[arg(long, value_name = "STYLE", default_value = "linked")]
    pub members: MemberStyle,

    /// Indent the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Write the JSON output to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Warn about relationships pointing at resources missing from the document
    #[arg(long)]
    pub check_links: bool,

    /// Fail if any relationship points at a resource missing from the document
    #[arg(long)]
    pub strict: bool,

    /// Print resource counts per type
    #[arg(long)]
    pub summary: bool,

    /// When to use colors in diagnostics.
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: Color,
}
