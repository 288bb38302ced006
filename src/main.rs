//! abcgen — generate a Python abstract-interface skeleton from a class.
//!
//! Scans a source file for a `class <name>` line by prefix and emits an
//! `ABCMeta` interface with `@abstractmethod` stubs for the class's public
//! methods, carrying over each method's leading docstring. One forward
//! pass, no real parsing.
//!
//! Usage: `abcgen -i <input> -o <output> -interfaceName <name> -className <name>`

mod generate;
mod scan;

use anyhow::{Context, Result};
use std::fs;

/// Required flag/value configuration for one run.
struct Config {
    input: String,
    output: String,
    interface_name: String,
    class_name: String,
}

/// Run outcome. Usage and NotFound both exit 0 like Success; they are
/// distinguished by printed message only.
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Usage,
    NotFound,
    Success,
}

fn usage() {
    println!(
        "abcgen searches for a python class in a file and generates the corresponding interface skeleton"
    );
    println!(
        "Right Parameter Format (in any order): -i <input file> -o <output file> -interfaceName <interface name> -className <class name>"
    );
}

/// Parse `-flag value` pairs in any order; repeated flags take the last
/// value. `None` means usage error: fewer than 8 arguments, an unknown
/// flag, a flag missing its value, or an empty required value.
fn parse_args(args: &[String]) -> Option<Config> {
    if args.len() < 8 {
        return None;
    }

    let mut input = String::new();
    let mut output = String::new();
    let mut interface_name = String::new();
    let mut class_name = String::new();

    let mut iter = args.iter();
    while let Some(flag) = iter.next() {
        let value = iter.next()?.clone();
        match flag.as_str() {
            "-i" => input = value,
            "-o" => output = value,
            "-interfaceName" => interface_name = value,
            "-className" => class_name = value,
            _ => return None,
        }
    }

    if input.is_empty() || output.is_empty() || interface_name.is_empty() || class_name.is_empty() {
        return None;
    }

    Some(Config {
        input,
        output,
        interface_name,
        class_name,
    })
}

/// Execute one run. An unreadable input path is reported the same way as a
/// missing class; only a failure writing the output is a real error. The
/// output file is written only on success, so the not-found path leaves no
/// file behind.
fn run(args: &[String]) -> Result<Outcome> {
    let Some(config) = parse_args(args) else {
        return Ok(Outcome::Usage);
    };

    let source = match fs::read_to_string(&config.input) {
        Ok(source) => source,
        Err(_) => return Ok(Outcome::NotFound),
    };

    match generate::generate(&source, &config.class_name, &config.interface_name) {
        Some(artifact) => {
            fs::write(&config.output, artifact)
                .with_context(|| format!("failed to write {}", config.output))?;
            Ok(Outcome::Success)
        }
        None => Ok(Outcome::NotFound),
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match run(&args)? {
        Outcome::Usage => usage(),
        Outcome::NotFound => println!("File or Class Not Found"),
        Outcome::Success => {}
    }
    Ok(())
}
