//! annonce - Listing-title weak-labeling CLI
//!
//! Turns a real-estate listing feed (CSV) into NER training data (JSONL)
//! by rule: structured-attribute lookup, bilingual keyword matching, and
//! pattern families, resolved into non-overlapping labeled spans.
//!
//! # Usage
//!
//! ```bash
//! # Feed in, training data out (seed corpus appended)
//! annonce annotate -i house_price_bd.csv -o train_data.jsonl --progress
//!
//! # Inspect one title, with or without structured attributes
//! annonce preview "Villa avec piscine à vendre La Marsa" --city "La Marsa"
//!
//! # Re-check a produced file against the annotation invariants
//! annonce validate train_data.jsonl
//! ```

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;

use annonce::{export, ingest, seed, Annotator, ListingAttributes, Record};

// ============================================================================
// CLI structure
// ============================================================================

/// Weak-labeling for bilingual real-estate listing titles.
#[derive(Parser, Debug)]
#[command(name = "annonce", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Annotate a listing CSV into JSONL training data
    Annotate(AnnotateArgs),
    /// Annotate a single title and print its spans
    Preview(PreviewArgs),
    /// Check a JSONL file against the annotation invariants
    Validate(ValidateArgs),
}

#[derive(Parser, Debug)]
struct AnnotateArgs {
    /// Input listing CSV
    #[arg(short, long, value_name = "FILE")]
    input: String,

    /// Output JSONL file
    #[arg(short, long, value_name = "FILE")]
    output: String,

    /// Do not append the curated seed corpus
    #[arg(long)]
    no_seed: bool,

    /// Show a progress bar
    #[arg(long)]
    progress: bool,

    /// Suppress status messages
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// The listing title to annotate
    title: String,

    /// Bedroom count attribute
    #[arg(long)]
    beds: Option<String>,

    /// Bathroom count attribute
    #[arg(long)]
    baths: Option<String>,

    /// Surface area attribute
    #[arg(long)]
    area: Option<String>,

    /// City attribute
    #[arg(long)]
    city: Option<String>,

    /// Fine-grained location attribute
    #[arg(long)]
    location: Option<String>,

    /// Price attribute
    #[arg(long)]
    price: Option<String>,

    /// Print the raw JSONL record instead of the span table
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// JSONL file to check
    file: String,

    /// Only set the exit code, print nothing
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Annotate(args) => run_annotate(args),
        Commands::Preview(args) => run_preview(args),
        Commands::Validate(args) => run_validate(args),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// annotate
// ============================================================================

fn run_annotate(args: AnnotateArgs) -> annonce::Result<ExitCode> {
    let rows = ingest::read_listings_path(&args.input)?;
    if !args.quiet {
        eprintln!("annotating {} rows from {}", rows.len(), args.input);
    }

    let progress = if args.progress && !args.quiet {
        use indicatif::{ProgressBar, ProgressStyle};
        let bar = ProgressBar::new(rows.len() as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}")
            .expect("progress bar template should be valid");
        bar.set_style(style.progress_chars("#>-"));
        Some(bar)
    } else {
        None
    };

    let annotator = Annotator::new();
    let mut records: Vec<Record> = Vec::with_capacity(rows.len() + seed::seed_len());
    for row in &rows {
        records.push(annotator.annotate(&row.title, &row.attrs));
        if let Some(ref bar) = progress {
            bar.inc(1);
        }
    }
    if let Some(bar) = progress {
        bar.finish_and_clear();
    }

    let seed_count = if args.no_seed {
        0
    } else {
        let seed = seed::seed_corpus();
        let count = seed.len();
        records.extend(seed);
        count
    };

    export::write_jsonl_path(&args.output, &records)?;
    if !args.quiet {
        eprintln!(
            "wrote {} records to {} ({} generated, {} curated)",
            records.len(),
            args.output,
            records.len() - seed_count,
            seed_count,
        );
    }
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// preview
// ============================================================================

fn run_preview(args: PreviewArgs) -> annonce::Result<ExitCode> {
    let attrs = ListingAttributes {
        beds: args.beds,
        baths: args.baths,
        area: args.area,
        city: args.city,
        location: args.location,
        price: args.price,
    };
    let record = Annotator::new().annotate(&args.title, &attrs);

    if args.json {
        println!("{}", serde_json::to_string(&record)?);
        return Ok(ExitCode::SUCCESS);
    }

    if record.labels.is_empty() {
        println!("(no spans)");
        return Ok(ExitCode::SUCCESS);
    }

    let colorize = std::io::stdout().is_terminal();
    for span in &record.labels {
        let surface = annonce::slice_chars(&record.text, span.start, span.end);
        let label = if colorize {
            format!("\x1b[1;36m{}\x1b[0m", span.label)
        } else {
            span.label.to_string()
        };
        println!("[{:>3}, {:>3})  {label:<12} {surface:?}", span.start, span.end);
    }
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// validate
// ============================================================================

fn run_validate(args: ValidateArgs) -> annonce::Result<ExitCode> {
    let records = export::read_jsonl_path(&args.file)?;

    let mut bad_records = 0usize;
    let mut total_issues = 0usize;
    for (index, record) in records.iter().enumerate() {
        let issues = record.issues();
        if issues.is_empty() {
            continue;
        }
        bad_records += 1;
        total_issues += issues.len();
        if !args.quiet {
            eprintln!("record {} ({:?}):", index + 1, record.text);
            for issue in &issues {
                eprintln!("  {issue}");
            }
        }
    }

    if !args.quiet {
        println!(
            "{} records checked, {} with issues ({} issues total)",
            records.len(),
            bad_records,
            total_issues,
        );
    }
    Ok(if bad_records == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
