//! rehearse CLI — evaluate interview answers from the command line.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use rehearse_core::ScoringCriteria;

mod commands;

#[derive(Parser)]
#[command(name = "rehearse", version, about = "Interview answer evaluator")]
struct Cli {
    /// Scoring criteria file (default: ./rehearse.toml if present)
    #[arg(long, global = true)]
    criteria: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a single answer
    Evaluate {
        /// File containing the reference answer
        #[arg(long, conflicts_with_all = ["bank", "question"])]
        reference: Option<PathBuf>,

        /// Question bank file or directory to take the reference answer from
        #[arg(long, requires = "question")]
        bank: Option<PathBuf>,

        /// Question ID inside the bank
        #[arg(long, requires = "bank")]
        question: Option<String>,

        /// File containing the candidate answer ("-" for stdin)
        #[arg(long)]
        answer: PathBuf,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Evaluate an answer sheet against a question bank
    Batch {
        /// Question bank file
        #[arg(long)]
        bank: PathBuf,

        /// Answer sheet TOML file
        #[arg(long)]
        answers: PathBuf,

        /// Output directory
        #[arg(long, default_value = "./rehearse-results")]
        output: PathBuf,

        /// Output format: json, markdown, all
        #[arg(long, default_value = "json")]
        format: String,
    },

    /// Validate question bank TOML files
    Validate {
        /// Path to bank file or directory
        #[arg(long)]
        bank: PathBuf,
    },

    /// Create starter criteria, question bank, and answer sheet
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rehearse=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let criteria_path = cli.criteria;
    let load_criteria = || ScoringCriteria::load_or_default(criteria_path.as_deref());

    let result = match cli.command {
        Commands::Evaluate {
            reference,
            bank,
            question,
            answer,
            format,
        } => load_criteria().and_then(|criteria| {
            commands::evaluate::execute(&criteria, reference, bank, question, answer, format)
        }),
        Commands::Batch {
            bank,
            answers,
            output,
            format,
        } => load_criteria().and_then(|criteria| {
            commands::batch::execute(&criteria, bank, answers, output, format)
        }),
        Commands::Validate { bank } => {
            load_criteria().and_then(|criteria| commands::validate::execute(&criteria, bank))
        }
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
