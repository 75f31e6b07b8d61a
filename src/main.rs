//! Niyama CLI - Declarative Field Validation
//!
//! This is a demonstration CLI for the Niyama library.

use anyhow::{bail, Context, Result};
use niyama::prelude::*;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    println!("🧾 Niyama - Declarative Field Validation v{}", niyama::VERSION);
    println!();

    // Parse command line args
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage(&args[0]);
        return ExitCode::from(2);
    }

    match args[1].as_str() {
        "list" => {
            list_rules();
            ExitCode::SUCCESS
        }
        "info" => {
            if args.len() < 3 {
                eprintln!("Error: Please specify a rule name");
                return ExitCode::from(2);
            }
            rule_info(&args[2])
        }
        "check" => {
            if args.len() < 4 {
                eprintln!("Error: Please specify data and rules files");
                eprintln!(
                    "Usage: {} check <data.json> <rules.json> [--messages <file>]",
                    args[0]
                );
                return ExitCode::from(2);
            }
            match check_record(&args[2..]) {
                Ok(true) => ExitCode::SUCCESS,
                Ok(false) => ExitCode::from(1),
                Err(e) => {
                    eprintln!("❌ Error: {:#}", e);
                    ExitCode::from(2)
                }
            }
        }
        "help" | "--help" | "-h" => {
            print_usage(&args[0]);
            ExitCode::SUCCESS
        }
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage(&args[0]);
            ExitCode::from(2)
        }
    }
}

fn print_usage(program: &str) {
    println!("Usage: {} <command> [options]", program);
    println!();
    println!("Commands:");
    println!("  check <data.json> <rules.json> [options]  Validate a record");
    println!("  list              List all available rules");
    println!("  info <rule>       Show detailed info about a rule");
    println!("  help              Show this help message");
    println!();
    println!("Check options:");
    println!("  --messages <file>   JSON object of message overrides");
    println!("                      (keys: \"rule\" or \"rule.field\")");
    println!();
    println!("Exit codes: 0 record valid, 1 record invalid, 2 error");
}

fn list_rules() {
    let registry = RuleRegistry::with_builtins();
    let grouped = registry.grouped_by_category();

    println!("Available rules ({} total):", registry.len());
    println!();

    for (category, descriptors) in grouped {
        println!("  📁 {}", category);
        for descriptor in descriptors {
            println!("      • {} - {}", descriptor.name, descriptor.description);
        }
        println!();
    }
}

fn rule_info(name: &str) -> ExitCode {
    let registry = RuleRegistry::with_builtins();

    match registry.descriptor(name) {
        Some(descriptor) => {
            println!("Rule: {}", descriptor.name);
            println!("Category: {}", descriptor.category);
            println!();
            println!("Default message:");
            println!("  {}", descriptor.message);

            if !descriptor.description.is_empty() {
                println!();
                println!("Description:");
                println!("  {}", descriptor.description);
            }
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("Rule not found: {}", name);
            eprintln!("Use 'list' to see available rules.");
            ExitCode::from(2)
        }
    }
}

fn check_record(args: &[String]) -> Result<bool> {
    let data_path = &args[0];
    let rules_path = &args[1];

    // Parse options
    let mut messages_path: Option<&String> = None;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--messages" if i + 1 < args.len() => {
                messages_path = Some(&args[i + 1]);
                i += 2;
            }
            other => bail!("Unknown option: {}", other),
        }
    }

    let data = load_data(data_path)?;
    let rules = load_rules(rules_path)?;
    let overrides = match messages_path {
        Some(path) => Some(load_messages(path)?),
        None => None,
    };

    println!(
        "🔍 Checking {} field(s) against {} rule set(s)",
        data.len(),
        rules.len()
    );

    let validator = Validator::new();
    let report = validator
        .validate(&data, &rules, overrides)
        .context("Validation aborted")?;

    println!();
    println!("{}", report.summary());
    for line in report.detailed_errors() {
        println!("   • {}", line);
    }

    Ok(report.is_valid())
}

fn load_data(path: &str) -> Result<DataRecord> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read data file: {}", path))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Data file is not a JSON object of scalar values: {}", path))
}

fn load_rules(path: &str) -> Result<RuleStrings> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read rules file: {}", path))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Rules file is not a JSON object of rule strings: {}", path))
}

fn load_messages(path: &str) -> Result<MessageOverrides> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read messages file: {}", path))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Messages file is not a JSON object of strings: {}", path))
}
