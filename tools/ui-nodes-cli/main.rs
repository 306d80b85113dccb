use clap::Parser;
use futures::executor::block_on;
use std::fs;
use std::io::{self, Read};
use ui_nodes::prelude::*;

const CLI_SCHEMA_REF: &str = "cli";

/// Decode, reorder and re-encode a collection of identity flow UI nodes
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a JSON array of nodes. Reads stdin when omitted.
    nodes_path: Option<String>,

    /// Group precedence, in order (repeatable)
    #[arg(short, long = "group", value_parser = parse_group)]
    groups: Vec<NodeGroup>,

    /// Explicit key order, in order (repeatable)
    #[arg(short, long = "key")]
    keys: Vec<String>,

    /// Keys appended after all other keys (repeatable)
    #[arg(long = "append-key")]
    append_keys: Vec<String>,

    /// JSON Schema file whose property order is used for sorting
    #[arg(short, long)]
    schema: Option<String>,

    /// Remove nodes with these identities before sorting (repeatable)
    #[arg(long = "remove")]
    remove: Vec<String>,

    /// Reset all nodes, clearing messages and submitted values
    #[arg(long)]
    reset: bool,

    /// Skip sorting
    #[arg(long)]
    no_sort: bool,

    /// Pretty-print the output
    #[arg(short, long)]
    pretty: bool,
}

fn main() {
    let cli = Cli::parse();

    let input = match &cli.nodes_path {
        Some(path) => fs::read_to_string(path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to read nodes file '{}': {}", path, e))
        }),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to read stdin: {}", e)));
            buffer
        }
    };

    let mut nodes = Nodes::from_json(&input)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to decode nodes: {}", e)));

    if !cli.remove.is_empty() {
        let ids: Vec<&str> = cli.remove.iter().map(String::as_str).collect();
        nodes.remove(&ids);
    }

    if cli.reset {
        nodes.reset(&[]);
    }

    if !cli.no_sort {
        sort_nodes(&cli, &mut nodes)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to sort nodes: {}", e)));
    }

    let output = if cli.pretty {
        nodes.to_json_pretty()
    } else {
        nodes.to_json()
    }
    .unwrap_or_else(|e| exit_with_error(&format!("Failed to encode nodes: {}", e)));

    println!("{}", output);
}

/// Builds the sort options from the command line. A schema file is referenced
/// as [`CLI_SCHEMA_REF`].
fn sort_options(cli: &Cli) -> SortOptions {
    let options = SortOptions::new()
        .with_groups(cli.groups.iter().copied())
        .with_keys(cli.keys.iter().cloned())
        .with_append_keys(cli.append_keys.iter().cloned());

    match &cli.schema {
        Some(_) => options.with_schema(CLI_SCHEMA_REF),
        None => options,
    }
}

/// Registers the schema file, if any, and sorts through the key order provider.
fn sort_nodes(cli: &Cli, nodes: &mut Nodes) -> Result<()> {
    let mut schemas = JsonSchemaKeyOrder::new();
    if let Some(path) = &cli.schema {
        schemas.load_file(CLI_SCHEMA_REF, path)?;
    }

    block_on(nodes.sort_by_schema(&schemas, &sort_options(cli)))?;
    Ok(())
}

fn parse_group(value: &str) -> Result<NodeGroup, String> {
    value
        .parse()
        .map_err(|unknown| format!("unknown node group '{}'", unknown))
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
