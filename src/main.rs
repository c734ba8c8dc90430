use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use dotenv::dotenv;
use log::debug;
use mcq_gen::config::ResourceConfig;
use mcq_gen::quiz::{
    resources, Difficulty, GeneratedQuestion, McqGenerator, QuestionRecord, RecordContext,
    DEFAULT_QUESTION_COUNT,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(
    name = "mcq-gen",
    version,
    about = "Generate fill-in-the-blank multiple-choice questions from text"
)]
struct Cli {
    /// Text file to read; stdin when omitted
    input: Option<PathBuf>,

    /// Number of leading sentences to turn into questions
    #[arg(short = 'n', long, env = "MCQ_QUESTION_COUNT", default_value_t = DEFAULT_QUESTION_COUNT)]
    count: usize,

    /// Seed for reproducible output
    #[arg(long, env = "MCQ_SEED")]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Subject attached to question-bank records
    #[arg(long)]
    subject: Option<String>,

    /// Difficulty attached to question-bank records
    #[arg(long, value_enum, default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,

    /// CoNLL-U treebank that extends the tagger's lexicon
    #[arg(long, env = "MCQ_TREEBANK")]
    treebank: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Records,
}

fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) => {
            fs::read(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut buffer = Vec::new();
            io::stdin()
                .read_to_end(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}

const LETTERS: [char; 4] = ['A', 'B', 'C', 'D'];

fn write_text(out: &mut impl Write, questions: &[GeneratedQuestion]) -> Result<()> {
    if questions.is_empty() {
        writeln!(out, "No questions could be generated from the input.")?;
        return Ok(());
    }
    for (number, question) in questions.iter().enumerate() {
        writeln!(out, "Question {}: {}", number + 1, question.stem)?;
        for (letter, option) in LETTERS.iter().zip(&question.options) {
            writeln!(out, "  {}) {}", letter, option)?;
        }
        if let Some(index) = question.correct_index() {
            writeln!(
                out,
                "Answer: {}) {}",
                LETTERS[index], question.correct_answer
            )?;
        }
        writeln!(out, "{}\n", question.explanation)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    dotenv().ok();
    pretty_env_logger::init();

    let cli = Cli::parse();
    resources::init(&ResourceConfig {
        treebank: cli.treebank.clone(),
    });

    let input = read_input(cli.input.as_deref())?;
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    debug!("generating up to {} questions", cli.count);
    let questions = McqGenerator::new().generate_bytes(&input, cli.count, &mut rng);

    let mut stdout = io::stdout().lock();
    match cli.format {
        OutputFormat::Text => write_text(&mut stdout, &questions)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut stdout, &questions)
                .context("failed to write questions as JSON")?;
            writeln!(stdout)?;
        }
        OutputFormat::Records => {
            let context = RecordContext {
                subject: cli.subject.clone(),
                difficulty: cli.difficulty,
            };
            let records = questions
                .iter()
                .map(|question| QuestionRecord::from_question(question, &context))
                .collect::<Result<Vec<_>, _>>()?;
            serde_json::to_writer_pretty(&mut stdout, &records)
                .context("failed to write question records as JSON")?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}
