//! objh - Object Helpers CLI tool
//!
//! A command line tool for merging, diffing and reshaping YAML/JSON files.

use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, Level};

use object_helpers::value::{self, Map, Value};
use object_helpers::{
    diff_object, expand_object, filter_object, flatten_object, get_property, has_property,
    is_newer_version, merge_object_into, set_property, DiffOptions, FilterOptions, MergeOptions,
};

#[derive(Debug, Parser)]
#[command(name = "objh", version, about = "Structural helpers for YAML/JSON objects")]
struct Cli {
    /// Output location. Use '-' for stdout
    #[arg(short, long, global = true, default_value = "-")]
    output: String,

    /// Write YAML instead of JSON
    #[arg(long, global = true)]
    yaml: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Merge the RHS object into the LHS object
    Merge {
        #[arg(long)]
        lhs: PathBuf,
        #[arg(long)]
        rhs: PathBuf,
        /// YAML/JSON file holding merge options (camelCase keys)
        #[arg(long)]
        options: Option<PathBuf>,
        #[arg(long)]
        no_insert_keys: bool,
        #[arg(long)]
        no_insert_values: bool,
        #[arg(long)]
        no_overwrite: bool,
        #[arg(long)]
        no_recursive: bool,
        #[arg(long)]
        enforce_types: bool,
    },
    /// Report the keys and values of RHS which differ from LHS
    Diff {
        #[arg(long)]
        lhs: PathBuf,
        #[arg(long)]
        rhs: PathBuf,
        /// Only report keys which exist in LHS
        #[arg(long)]
        inner: bool,
    },
    /// Flatten an object to dotted keys
    Flatten { file: PathBuf },
    /// Expand dotted keys into nested objects
    Expand { file: PathBuf },
    /// Print the value at a dotted path
    Get { file: PathBuf, path: String },
    /// Print whether a dotted path exists
    Has { file: PathBuf, path: String },
    /// Assign a value (parsed as YAML) at a dotted path and print the object
    Set {
        file: PathBuf,
        path: String,
        value: String,
    },
    /// Keep only the keys of SOURCE which exist in TEMPLATE
    Filter {
        #[arg(long)]
        source: PathBuf,
        #[arg(long)]
        template: PathBuf,
        #[arg(long)]
        keep_special: bool,
        #[arg(long)]
        template_values: bool,
    },
    /// Print whether version V1 is newer than V0
    Newer { v1: String, v0: String },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut output: Box<dyn Write> = if cli.output == "-" {
        Box::new(io::stdout())
    } else {
        let file = fs::File::create(&cli.output)
            .map_err(|e| format!("Failed to create output file {:?}: {}", cli.output, e))?;
        Box::new(file)
    };
    let yaml = cli.yaml;

    match cli.command {
        Command::Merge {
            lhs,
            rhs,
            options,
            no_insert_keys,
            no_insert_values,
            no_overwrite,
            no_recursive,
            enforce_types,
        } => {
            let mut merge_options = match options {
                Some(file) => read_options(&file)?,
                None => MergeOptions::default(),
            };
            if no_insert_keys {
                merge_options.insert_keys = false;
            }
            if no_insert_values {
                merge_options.insert_values = false;
            }
            if no_overwrite {
                merge_options.overwrite = false;
            }
            if no_recursive {
                merge_options.recursive = false;
            }
            if enforce_types {
                merge_options.enforce_types = true;
            }
            debug!(?merge_options, "merging");

            let merged = merge_object_into(read_map(&lhs)?, &read_map(&rhs)?, &merge_options)
                .map_err(|e| format!("Merge failed: {}", e))?;
            write_value(&mut output, &Value::Map(merged), yaml)?;
        }
        Command::Diff { lhs, rhs, inner } => {
            let options = DiffOptions::new().inner(inner);
            let diff = diff_object(&read_map(&lhs)?, &read_map(&rhs)?, options);
            write_value(&mut output, &Value::Map(diff), yaml)?;
        }
        Command::Flatten { file } => {
            let flat = flatten_object(&read_map(&file)?)?;
            write_value(&mut output, &Value::Map(flat), yaml)?;
        }
        Command::Expand { file } => {
            let expanded = expand_object(&read_map(&file)?)?;
            write_value(&mut output, &Value::Map(expanded), yaml)?;
        }
        Command::Get { file, path } => {
            let object = read_map(&file)?;
            let found = get_property(&object, &path)
                .ok_or_else(|| format!("Property '{}' not found", path))?;
            write_value(&mut output, found, yaml)?;
        }
        Command::Has { file, path } => {
            writeln!(output, "{}", has_property(&read_map(&file)?, &path))?;
        }
        Command::Set { file, path, value: raw } => {
            let mut object = read_map(&file)?;
            let value = value::from_yaml(&raw)
                .map_err(|e| format!("Failed to parse value: {}", e))?;
            let changed = set_property(&mut object, &path, value)?;
            debug!(%path, changed, "property assigned");
            write_value(&mut output, &Value::Map(object), yaml)?;
        }
        Command::Filter {
            source,
            template,
            keep_special,
            template_values,
        } => {
            let options = FilterOptions::new()
                .keep_special(keep_special)
                .template_values(template_values);
            let filtered = filter_object(&read_map(&source)?, &read_map(&template)?, options);
            write_value(&mut output, &Value::Map(filtered), yaml)?;
        }
        Command::Newer { v1, v0 } => {
            writeln!(output, "{}", is_newer_version(v1.as_str(), v0.as_str()))?;
        }
    }

    Ok(())
}

/// Reads a YAML or JSON file whose top level must be an object.
fn read_map(file: &Path) -> Result<Map, Box<dyn Error>> {
    let content = fs::read_to_string(file)
        .map_err(|e| format!("Failed to read file {:?}: {}", file, e))?;
    match value::from_yaml(&content).map_err(|e| format!("Failed to parse {:?}: {}", file, e))? {
        Value::Map(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        other => Err(format!("{:?} holds {} instead of an object", file, other.kind()).into()),
    }
}

fn read_options(file: &Path) -> Result<MergeOptions, Box<dyn Error>> {
    let content = fs::read_to_string(file)
        .map_err(|e| format!("Failed to read options file {:?}: {}", file, e))?;
    let options = serde_yaml::from_str(&content)
        .map_err(|e| format!("Failed to parse options file {:?}: {}", file, e))?;
    Ok(options)
}

fn write_value(output: &mut dyn Write, value: &Value, yaml: bool) -> Result<(), Box<dyn Error>> {
    if yaml {
        let text = value::to_yaml(value)
            .map_err(|e| format!("Failed to serialize result: {}", e))?;
        write!(output, "{}", text)?;
    } else {
        let text = value::to_json_pretty(value)
            .map_err(|e| format!("Failed to serialize result: {}", e))?;
        writeln!(output, "{}", text)?;
    }
    Ok(())
}
