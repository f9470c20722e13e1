//! ieee-docx CLI - IEEE markdown paper to two-column DOCX

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use ieee_docx::detect::clean_prompt_path;
use ieee_docx::{check_input, output_path_for, Error, IeeeDocx, InputWarning, JsonFormat};

#[derive(Parser)]
#[command(name = "ieee-docx")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Lay out IEEE markdown papers as two-column DOCX", long_about = None)]
struct Cli {
    /// Input markdown file (prompted for if omitted)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file (default: <stem>_IEEE.docx next to the input)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Store package parts without compression
    #[arg(long)]
    stored: bool,

    /// Also write the layout stream as JSON next to the output
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a markdown paper to DOCX
    Convert {
        /// Input markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Store package parts without compression
        #[arg(long)]
        stored: bool,

        /// Reject a subsection that appears before any section
        #[arg(long)]
        strict: bool,

        /// Also write the layout stream as JSON next to the output
        #[arg(long)]
        json: bool,
    },

    /// Show a summary of the parsed paper
    Info {
        /// Input markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print the parsed paper as JSON
        #[arg(long)]
        json: bool,
    },

    /// Dump the layout stream as JSON
    Layout {
        /// Input markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show version information
    Version,
}

struct ConvertArgs<'a> {
    input: &'a Path,
    output: Option<&'a Path>,
    stored: bool,
    strict: bool,
    json: bool,
}

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let mut interactive = false;
    let result = match cli.command {
        Some(Commands::Convert {
            input,
            output,
            stored,
            strict,
            json,
        }) => cmd_convert(ConvertArgs {
            input: &input,
            output: output.as_deref(),
            stored,
            strict,
            json,
        }),
        Some(Commands::Info { input, json }) => cmd_info(&input, json),
        Some(Commands::Layout {
            input,
            output,
            compact,
        }) => cmd_layout(&input, output.as_deref(), compact),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            let input = match cli.input {
                Some(input) => Ok(input),
                None => {
                    interactive = true;
                    prompt_for_input()
                }
            };
            input.and_then(|input| {
                cmd_convert(ConvertArgs {
                    input: &input,
                    output: cli.output.as_deref(),
                    stored: cli.stored,
                    strict: false,
                    json: cli.json,
                })
            })
        }
    };

    let failed = match result {
        Ok(()) => false,
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            true
        }
    };

    if interactive {
        pause();
    }
    if failed {
        std::process::exit(1);
    }
}

fn prompt_for_input() -> CliResult<PathBuf> {
    print!("{} ", "Markdown file path:".cyan().bold());
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let path = clean_prompt_path(&line);
    if path.as_os_str().is_empty() {
        return Err(Error::Other("no input file given".into()).into());
    }
    Ok(path)
}

fn pause() {
    print!("\nPress Enter to exit...");
    let _ = io::stdout().flush();
    let mut line = String::new();
    let _ = io::stdin().lock().read_line(&mut line);
}

fn spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Validate the input path and print its warnings.
fn report_input(input: &Path) -> CliResult<Vec<InputWarning>> {
    let warnings = check_input(input)?;
    for warning in &warnings {
        eprintln!("{}: {}", "Warning".yellow().bold(), warning);
    }
    Ok(warnings)
}

fn cmd_convert(args: ConvertArgs<'_>) -> CliResult<()> {
    report_input(args.input)?;

    let output = args
        .output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| output_path_for(args.input));

    log::debug!("output path: {}", output.display());

    let mut builder = IeeeDocx::new();
    if args.strict {
        builder = builder.strict();
    }
    if args.stored {
        builder = builder.stored();
    }

    let pb = spinner();
    pb.set_message("Parsing and laying out...");
    let result = match builder.parse(args.input) {
        Ok(result) => result,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e.into());
        }
    };

    pb.set_message("Writing DOCX...");
    let stats = match result.write_docx(&output) {
        Ok(stats) => stats,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e.into());
        }
    };

    let json_path = if args.json {
        let path = output.with_extension("json");
        fs::write(&path, result.to_json(JsonFormat::Pretty)?)?;
        Some(path)
    } else {
        None
    };
    pb.finish_with_message("Done!");

    println!("\n{} {}", "Saved to".green().bold(), output.display());
    if let Some(path) = json_path {
        println!("{} {}", "Layout".green(), path.display());
    }
    println!(
        "  {} {} paragraphs, {} equations, {} references",
        "└─".dimmed(),
        stats.paragraph_count,
        stats.equation_count,
        stats.reference_count
    );

    Ok(())
}

fn cmd_info(input: &Path, json: bool) -> CliResult<()> {
    report_input(input)?;

    let result = IeeeDocx::new().parse(input)?;
    let paper = &result.paper;

    if json {
        println!("{}", serde_json::to_string_pretty(paper)?);
        return Ok(());
    }

    println!("{}", "Paper Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Title".bold(), paper.title);
    for author in &paper.authors {
        println!("{}: {}", "Author".bold(), author.name);
    }
    if !paper.keywords.is_empty() {
        println!("{}: {}", "Keywords".bold(), paper.keywords);
    }

    let sections = paper
        .sections
        .iter()
        .filter(|s| s.level.depth() == 1)
        .count();
    let subsections = paper.sections.len() - sections;

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let stats = result.stats();
    println!("{}: {}", "Sections".bold(), sections);
    println!("{}: {}", "Subsections".bold(), subsections);
    println!("{}: {}", "Equations".bold(), paper.equation_count());
    println!("{}: {}", "References".bold(), paper.references.len());
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "Author rows".bold(), stats.author_row_count);
    println!("{}: {}", "Words".bold(), stats.word_count);

    Ok(())
}

fn cmd_layout(input: &Path, output: Option<&Path>, compact: bool) -> CliResult<()> {
    report_input(input)?;

    let result = IeeeDocx::new().parse(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = result.to_json(format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "ieee-docx".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("IEEE markdown paper to two-column DOCX");
    println!();
    println!("License: MIT");
}
