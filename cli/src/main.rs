//! sppages CLI - modern page control listing tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use sppages::{collect_controls, parse_file, sanitize_controls, ControlKind, JsonFormat, OutputMode};

#[derive(Parser)]
#[command(name = "sppages")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "List the client-side controls placed on a modern page", long_about = None)]
struct Cli {
    /// Input canvas content file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the controls on a page
    #[command(alias = "ls")]
    List {
        /// Input canvas content file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show page structure information
    Info {
        /// Input canvas content file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Tabular listing of id, type, and title
    Text,
    /// Full sanitized control records
    Json,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::List {
            input,
            format,
            compact,
            output,
        }) => cmd_list(&input, format, compact, output.as_deref()),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: list if input is provided
            if let Some(input) = cli.input {
                cmd_list(&input, Format::Text, false, None)
            } else {
                println!("{}", "Usage: sppages <FILE>".yellow());
                println!("       sppages --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_list(
    input: &Path,
    format: Format,
    compact: bool,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let page = parse_file(input)?;

    let mut controls = collect_controls(&page);
    sanitize_controls(&mut controls);

    let rendered = match format {
        Format::Json => {
            let json_format = if compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            };
            sppages::to_json(&controls, json_format)?
        }
        Format::Text => sppages::render(&controls, OutputMode::Text)?,
    };

    if let Some(path) = output {
        fs::write(path, &rendered)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else if rendered.is_empty() {
        println!("{}", "No controls found".dimmed());
    } else {
        println!("{}", rendered);
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let page = parse_file(input)?;

    println!("{}", "Page Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Sections".bold(), page.section_count());
    println!("{}: {}", "Columns".bold(), page.column_count());
    println!("{}: {}", "Controls".bold(), page.control_count());

    let breakdown = kind_breakdown(&page);
    if !breakdown.is_empty() {
        println!();
        println!("{}", "Controls by Type".cyan().bold());
        println!("{}", "─".repeat(40).dimmed());
        for (kind, count) in breakdown {
            println!("{}: {}", kind.bold(), count);
        }
    }

    Ok(())
}

/// Count controls per kind label, first-seen order.
fn kind_breakdown(page: &sppages::ClientSidePage) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for control in page.controls() {
        let label = ControlKind::from_code(control.control_type).to_string();
        match counts.iter_mut().find(|(kind, _)| *kind == label) {
            Some((_, count)) => *count += 1,
            None => counts.push((label, 1)),
        }
    }
    counts
}

fn cmd_version() {
    println!("{} {}", "sppages".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Modern page control listing tool");
    println!();
    println!(
        "Repository: {}",
        "https://github.com/iyulab/sppages".dimmed()
    );
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_cmd_list_json_to_file() {
        let canvas = r#"[
            {"position": {"zoneIndex": 1, "sectionIndex": 1, "controlIndex": 1},
             "controlType": 3, "id": "a", "webPartId": "wp",
             "webPartData": {"title": "Weather", "dynamicDataPaths": {}}}
        ]"#;
        let mut input = tempfile::NamedTempFile::new().unwrap();
        input.write_all(canvas.as_bytes()).unwrap();
        let output = tempfile::NamedTempFile::new().unwrap();

        cmd_list(input.path(), Format::Json, true, Some(output.path())).unwrap();

        let written = fs::read_to_string(output.path()).unwrap();
        let records: serde_json::Value = serde_json::from_str(&written).unwrap();
        let record = &records.as_array().unwrap()[0];
        assert_eq!(record["id"], "a");
        assert_eq!(record["title"], "Weather");
        // Structural noise and vacant bindings are gone.
        assert!(record.get("column").is_none());
        assert!(record.get("dynamicDataPaths").is_none());
    }

    #[test]
    fn test_kind_breakdown_counts() {
        let canvas = r#"[
            {"position": {"zoneIndex": 1, "sectionIndex": 1, "controlIndex": 1}, "controlType": 4, "id": "a"},
            {"position": {"zoneIndex": 1, "sectionIndex": 1, "controlIndex": 2}, "controlType": 4, "id": "b"},
            {"position": {"zoneIndex": 2, "sectionIndex": 1, "controlIndex": 1}, "controlType": 3, "id": "c"}
        ]"#;
        let mut input = tempfile::NamedTempFile::new().unwrap();
        input.write_all(canvas.as_bytes()).unwrap();

        let page = parse_file(input.path()).unwrap();
        let breakdown = kind_breakdown(&page);
        assert_eq!(
            breakdown,
            vec![
                ("Client-side text".to_string(), 2),
                ("Client-side web part".to_string(), 1)
            ]
        );
    }
}
