//! Convert YUIDoc documentation into JSON:API documents.
//!
//! Every class, module and class member of a [`YuiDoc`] becomes a flat
//! `{id, type, attributes, relationships}` resource, and references between
//! them become `{id, type}` linkages.

mod audit;
mod cli;
mod color;
mod convert;
mod load;
mod options;

use clap::Parser;
use cli::Cli;
use colored::Colorize;
use load::{load_yuidoc, render_document, write_document};

pub use audit::{DanglingLink, find_dangling};
pub use convert::{convert, convert_with};
pub use load::parse_yuidoc;
pub use options::{ConvertOptions, MemberStyle};

pub use jsonapi::{Document, Linkage, Relationship, RelationshipData, Resource, ResourceType};
pub use yuidoc::YuiDoc;

/// Run the CLI with the given arguments and return the output as a string.
///
/// # Arguments
/// * `args` - Command line arguments (excluding program name)
///
/// # Returns
/// * `Ok(String)` - Successful output (stdout)
/// * `Err(String)` - Error message (stderr)
pub fn run_cli(args: &[&str]) -> Result<String, String> {
    match run_cli_impl(args) {
        Ok(output) => Ok(output),
        Err(e) => Err(format!("{e:#}")),
    }
}

fn run_cli_impl(args: &[&str]) -> anyhow::Result<String> {
    let parsed_args =
        match Cli::try_parse_from(std::iter::once("yuidoc-jsonapi").chain(args.iter().copied())) {
            Ok(args) => args,
            Err(e) => {
                // Handle --help and --version as successful outputs
                if e.kind() == clap::error::ErrorKind::DisplayHelp
                    || e.kind() == clap::error::ErrorKind::DisplayVersion
                {
                    return Ok(e.to_string());
                }
                return Err(e.into());
            }
        };

    parsed_args.color.apply();

    let yuidoc = load_yuidoc(parsed_args.input.as_deref())?;
    let options = ConvertOptions::with_members(parsed_args.members);
    let document = convert_with(&yuidoc, &options);

    if parsed_args.summary {
        eprintln!("{} {}", "Converted".green().bold(), document.summary());
    }

    if parsed_args.check_links || parsed_args.strict {
        let dangling = find_dangling(&document);
        if parsed_args.strict && !dangling.is_empty() {
            let list: Vec<String> = dangling.iter().map(|link| format!("  {link}")).collect();
            anyhow::bail!(
                "Found {} dangling links:\n{}",
                dangling.len(),
                list.join("\n")
            );
        }
        for link in &dangling {
            eprintln!("{} dangling link {}", "Warning:".yellow().bold(), link);
        }
    }

    let json = render_document(&document, parsed_args.pretty)?;

    match parsed_args.output {
        Some(path) => {
            write_document(&path, &json)?;
            Ok(format!(
                "Wrote {} resources to {}\n",
                document.data.len(),
                path.display()
            ))
        }
        None => Ok(json + "\n"),
    }
}
