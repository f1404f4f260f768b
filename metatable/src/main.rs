//! # metatable
//!
//! A CLI tool for rendering document metadata as a searchable table.
//!
//! ## Overview
//!
//! metatable is built on top of metatablelib. It reads a metadata mapping
//! (field key → `{ label, value, containsMarkdown, shouldHideLabel }`) from a
//! JSON or YAML file and prints one row per field, highlighting search matches.
//!
//! ## Usage
//!
//! ```bash
//! # Render a metadata file in the terminal
//! metatable note.json
//!
//! # Highlight fields matching a query
//! metatable note.yaml --query jane
//!
//! # Output the row descriptors as JSON, or as HTML markup
//! metatable note.json --output json
//! metatable note.json --output html --class-prefix my-plugin
//!
//! # Read from stdin
//! cat note.json | metatable -
//! ```

mod render;

use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use metatablelib::{item_metadata, Metadata, ViewOptions};
use render::OutputMode;
use tracing_subscriber::EnvFilter;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("metatable")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Render document metadata as a searchable table")
        .arg(
            Arg::new("file")
                .help("Metadata file (JSON or YAML); '-' or omitted reads stdin")
                .default_value("-"),
        )
        .arg(
            Arg::new("query")
                .short('q')
                .long("query")
                .help("Highlight fields matching this text (case-insensitive)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["table", "json", "html"])
                .default_value("table")
                .help("Output format"),
        )
        .arg(
            Arg::new("class-prefix")
                .long("class-prefix")
                .default_value("kanban-plugin")
                .help("Prefix for HTML class names"),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .action(ArgAction::SetTrue)
                .help("Disable terminal styling"),
        )
        .arg(
            Arg::new("settings-visible")
                .long("settings-visible")
                .action(ArgAction::SetTrue)
                .help("Behave as if the settings view were open (renders nothing)"),
        )
}

/// Parse metadata, choosing the format from the file extension when there is one.
fn parse_metadata(input: &str, path: Option<&Path>) -> anyhow::Result<Metadata> {
    let extension = path
        .and_then(|p| p.extension())
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let metadata = match extension.as_deref() {
        Some("json") => Metadata::from_json_str(input)?,
        Some("yml") | Some("yaml") => Metadata::from_yaml_str(input)?,
        _ => match Metadata::from_json_str(input) {
            Ok(metadata) => metadata,
            Err(json_err) => {
                tracing::debug!("not JSON ({json_err}), trying YAML");
                Metadata::from_yaml_str(input)?
            }
        },
    };
    Ok(metadata)
}

/// Read the metadata from a file or stdin
fn load_metadata(file: &str) -> anyhow::Result<Metadata> {
    if file == "-" {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("failed to read stdin")?;
        return parse_metadata(&input, None);
    }

    let path = Path::new(file);
    let input = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read file '{}'", path.display()))?;
    parse_metadata(&input, Some(path))
}

fn run(matches: &ArgMatches) -> anyhow::Result<String> {
    let file = matches
        .get_one::<String>("file")
        .map(|s| s.as_str())
        .unwrap_or("-");
    let query = matches
        .get_one::<String>("query")
        .map(|s| s.as_str())
        .unwrap_or("");
    let output = matches
        .get_one::<String>("output")
        .map(|s| s.as_str())
        .unwrap_or("table");

    let options = ViewOptions::new()
        .query(query)
        .settings_visible(matches.get_flag("settings-visible"));

    let metadata = load_metadata(file)?;
    let Some(table) = item_metadata(Some(&metadata), &options) else {
        return Ok(String::new());
    };
    tracing::debug!(rows = table.len(), output, "rendering metadata table");

    match output {
        "json" => Ok(render::render_json(&table)? + "\n"),
        "html" => {
            let prefix = matches
                .get_one::<String>("class-prefix")
                .map(|s| s.as_str())
                .unwrap_or("kanban-plugin");
            Ok(render::render_html(&table, &options.query, prefix) + "\n")
        }
        _ => {
            let mode = if matches.get_flag("no-color") {
                OutputMode::Text
            } else {
                OutputMode::Auto
            };
            Ok(render::render_table(&table, mode)?)
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
