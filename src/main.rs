use std::{fs, path::PathBuf, process};

use clap::Parser;
use log::info;
use svmine::{
    cleaned_candidates,
    core::Pipeline,
    ingest,
    tagging::conll::PretaggedCorpus,
    FrequencyTable, SvmineError,
};

/// Mines subject-verb pairs from a SALT-coded child-speech transcript.
///
/// Workflow is two-pass around the external dependency tagger: first
/// `--emit-cleaned` to get the candidate sentences, run the tagger over
/// them, then rerun with `--tagged` pointing at its output.
#[derive(Parser)]
#[command(name = "svmine", version)]
struct Args {
    /// Transcript table (CSV export of the coded spreadsheet)
    transcript: PathBuf,

    /// Child id sentinel marking the start of the child's rows
    #[arg(long)]
    child_id: String,

    /// Print the cleaned candidate sentences and exit
    #[arg(long)]
    emit_cleaned: bool,

    /// Tagged corpus for the cleaned sentences (tab-separated token rows)
    #[arg(long)]
    tagged: Option<PathBuf>,

    /// Write the frequency table as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// List every rejected line with its reason
    #[arg(long)]
    show_rejected: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("{}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), SvmineError> {
    let lines = ingest::read_transcript(&args.transcript, &args.child_id)?;
    info!("loaded {} transcript lines for {}", lines.len(), args.child_id);

    if args.emit_cleaned {
        for sentence in cleaned_candidates(&lines) {
            println!("{}", sentence);
        }
        return Ok(());
    }

    let tagged = args.tagged.ok_or_else(|| {
        SvmineError::Custom("--tagged is required unless --emit-cleaned is set".to_string())
    })?;
    let corpus = PretaggedCorpus::from_file(&tagged)?;

    let report = Pipeline::new(&corpus).process(&lines)?;

    print_matrix(&report.table);

    if args.show_rejected {
        println!();
        for line in &report.rejected {
            println!("line {:>4} [{}] {}", line.utterance.id, line.reason, line.utterance.text);
        }
    }

    if let Some(path) = args.json {
        fs::write(&path, serde_json::to_string_pretty(&report.table)?)?;
        info!("wrote frequency table to {}", path.display());
    }

    Ok(())
}

/// Prints the subject x verb count matrix: subjects as columns, verbs as
/// rows, the same axes the study's heatmaps used.
fn print_matrix(table: &FrequencyTable) {
    if table.is_empty() {
        println!("No subject-verb pairs found.");
        return;
    }

    let subjects: Vec<&str> = table.subjects().collect();
    let verbs = table.verbs();

    let verb_width = verbs.iter().map(|v| v.len()).max().unwrap_or(0).max(4);
    let col_widths: Vec<usize> = subjects.iter().map(|s| s.len().max(3)).collect();

    print!("{:>verb_width$}", "");
    for (subject, width) in subjects.iter().zip(col_widths.iter().copied()) {
        print!("  {:>width$}", subject);
    }
    println!();

    for verb in &verbs {
        print!("{:>verb_width$}", verb);
        for (subject, width) in subjects.iter().zip(col_widths.iter().copied()) {
            print!("  {:>width$}", table.count(subject, verb));
        }
        println!();
    }
}
