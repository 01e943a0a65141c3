//! # Connector Schema Dump
//!
//! A command-line utility that synthesizes the connector schema and prints it,
//! either as pretty JSON or as a short summary.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin schema-dump
//! cargo run --bin schema-dump -- --summary
//! ```
//!
//! ## Output Example
//!
//! ```text
//! Object class: __ACCOUNT__
//!   Attributes: 44
//!   Required attributes: ...
//!   Multi-valued attributes: ...
//!   Non-writable attributes: ...
//!   Attribute types:
//!     - String: ...
//! ```
//!
//! ## Exit Codes
//!
//! - `0`: The schema was synthesized and printed
//! - `1`: Bad arguments or schema synthesis failed

use nop_connector::schema::{ObjectClassInfo, Schema, account_schema};
use std::collections::BTreeMap;
use std::env;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();
    let summary = match args.get(1).map(String::as_str) {
        None => false,
        Some("--summary") => true,
        Some(other) => {
            eprintln!("Unknown argument: {}", other);
            eprintln!("Usage: {} [--summary]", args[0]);
            process::exit(1);
        }
    };

    let schema = match account_schema() {
        Ok(schema) => schema,
        Err(e) => {
            eprintln!("❌ Schema synthesis failed: {}", e);
            process::exit(1);
        }
    };

    if summary {
        print_summary(&schema);
    } else {
        match serde_json::to_string_pretty(&schema) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("❌ Could not serialize schema: {}", e);
                process::exit(1);
            }
        }
    }
}

fn print_summary(schema: &Schema) {
    for info in &schema.object_classes {
        print_object_class_summary(info);
    }
}

fn print_object_class_summary(info: &ObjectClassInfo) {
    println!("Object class: {}", info.type_name);
    println!("  Attributes: {}", info.attributes.len());

    let required = info.attributes.iter().filter(|a| a.required).count();
    let multi_valued = info.attributes.iter().filter(|a| a.multi_valued).count();
    println!("  Required attributes: {}", required);
    println!("  Multi-valued attributes: {}", multi_valued);
    println!(
        "  Non-writable attributes: {}",
        info.non_writable_attributes().count()
    );

    let mut type_counts = BTreeMap::new();
    for attr in &info.attributes {
        *type_counts.entry(attr.value_type.to_string()).or_insert(0) += 1;
    }
    println!("  Attribute types:");
    for (type_name, count) in type_counts {
        println!("    - {}: {}", type_name, count);
    }
}
