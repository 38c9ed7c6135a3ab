//! Minimal CLI: convert the built-in sample model and pretty-print the
//! resulting JSON Schema document.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use crate::generator::SchemaGenerator;
use crate::sample;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// convert a type-descriptor tree into a draft-04 JSON Schema document
#[derive(Parser, Debug)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// generate the schema for the built-in sample data model
    Schema(SchemaOut),
}

#[derive(Args, Debug, Clone)]
struct SchemaOut {
    /// enforce the union-marker contract on sealed-union references
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// output .json file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn run(&self) -> anyhow::Result<()> {
        match &self.cmd {
            Command::Schema(target) => {
                let generator = if target.strict {
                    SchemaGenerator::strict()
                } else {
                    SchemaGenerator::new()
                };
                let document = generator
                    .accept(&sample::example_data())
                    .context("failed to convert the sample descriptor tree")?;
                let schema_src = pretty_print(&document.to_value())?;

                if let Some(out) = target.out.as_ref() {
                    if let Some(parent) = out.parent() {
                        std::fs::create_dir_all(parent)
                            .with_context(|| format!("creating {}", parent.display()))?;
                    }
                    std::fs::write(out, &schema_src)
                        .with_context(|| format!("writing {}", out.display()))?;
                } else {
                    println!("{schema_src}");
                }
                Ok(())
            }
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

// Three-space indentation, matching what downstream tooling diffs against.
fn pretty_print(value: &serde_json::Value) -> anyhow::Result<String> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"   ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value
        .serialize(&mut serializer)
        .context("failed to render the schema document")?;
    Ok(String::from_utf8(buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pretty_print_uses_three_space_indent() {
        let value = serde_json::json!({ "type": "string" });
        let rendered = pretty_print(&value).unwrap();
        assert_eq!(rendered, "{\n   \"type\": \"string\"\n}");
    }
}
