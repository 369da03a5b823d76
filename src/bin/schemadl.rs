//! Schema definition file checker and inspector.
//!
//! Usage:
//!   schemadl path/to/schema.sdl
//!   schemadl --json path/to/schema.sdl

use std::path::PathBuf;
use std::process;

use clap::Parser;

use schemadl::Declaration;

#[derive(Parser, Debug)]
#[command(name = "schemadl")]
#[command(about = "Parse and inspect a schema definition file")]
#[command(version)]
struct Args {
    /// Path to the schema definition file
    file: PathBuf,

    /// Emit the parsed schema as JSON
    #[cfg(feature = "serde")]
    #[arg(long)]
    json: bool,

    /// Print the full parsed tree
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let text = match std::fs::read_to_string(&args.file) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("error reading {}: {}", args.file.display(), e);
            process::exit(1);
        }
    };

    let schema = match schemadl::parse(&text) {
        Ok(schema) => schema,
        Err(e) => {
            eprintln!("{}: {}", args.file.display(), e);
            process::exit(1);
        }
    };

    log::info!("parsed {}", args.file.display());

    #[cfg(feature = "serde")]
    if args.json {
        match serde_json::to_string_pretty(&schema) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error serializing schema: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    println!("replication factor: {}", schema.replication_factor);
    for decl in &schema.declarations {
        match decl {
            Declaration::Namespace(ns) => println!("namespace {}", ns.name),
            Declaration::Table(t) => {
                println!("table {}.{} ({} columns)", t.namespace, t.name, t.columns.len())
            }
            Declaration::TransactionTable(t) => println!(
                "transaction table {}.{} ({} columns)",
                t.namespace,
                t.name,
                t.columns.len()
            ),
        }
    }

    if args.verbose {
        println!("{:#?}", schema);
    }
}
