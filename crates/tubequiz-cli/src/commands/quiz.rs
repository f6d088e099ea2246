//! The `tubequiz quiz` command.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use tubequiz_core::grader::{grade, QuizScore};
use tubequiz_core::progress::{ProgressReporter, Stage};
use tubequiz_core::question::Question;
use tubequiz_core::quiz::{QuizConfig, QuizGenerator};
use tubequiz_core::summarizer::{Summarizer, SummarizerConfig};
use tubequiz_core::video::VideoId;
use tubequiz_providers::{create_client, load_config_from};

use crate::reporter::ConsoleReporter;
use crate::session::{QuizSession, QuizSource};

/// Arguments of `tubequiz quiz`.
pub struct QuizArgs {
    pub url: Option<String>,
    pub text_file: Option<PathBuf>,
    pub from_summary: bool,
    pub num_questions: Option<usize>,
    pub answers: Option<Vec<usize>>,
    pub output: Option<PathBuf>,
}

pub async fn execute(args: QuizArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let client = create_client(&config)?;
    let reporter = ConsoleReporter;

    let num_questions = args.num_questions.unwrap_or(config.num_questions);
    anyhow::ensure!(num_questions >= 1, "num-questions must be at least 1");

    let mut video_id: Option<VideoId> = None;
    let mut summary: Option<String> = None;
    let (text, source) = match (&args.url, &args.text_file) {
        (_, Some(path)) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read text file: {}", path.display()))?;
            (text, QuizSource::TextFile { path: path.clone() })
        }
        (Some(url), None) => {
            let transcript = super::fetch_transcript(url, &config, &reporter).await?;
            video_id = Some(transcript.video_id.clone());

            if args.from_summary {
                let summarizer = Summarizer::new(client.clone(), SummarizerConfig::default());
                let text = summarizer
                    .summarize(
                        &transcript.text,
                        &config.language_code,
                        &config.summary_model,
                        &reporter,
                    )
                    .await
                    .context("summarization failed")?;
                println!("Summary:\n{text}\n");
                summary = Some(text.clone());
                (text, QuizSource::Summary)
            } else {
                (transcript.text, QuizSource::Transcript)
            }
        }
        (None, None) => anyhow::bail!("either --url or --text-file is required"),
    };

    let generator = QuizGenerator::new(
        client,
        QuizConfig {
            model: config.quiz_model.clone(),
            ..QuizConfig::default()
        },
    );
    let questions = generator
        .generate_questions(&text, num_questions, &reporter)
        .await;
    anyhow::ensure!(!questions.is_empty(), "no quiz questions could be generated");

    let selections = match &args.answers {
        Some(answers) => {
            print_questions(&questions);
            selections_from_numbers(&questions, answers)?
        }
        None => {
            let stdin = std::io::stdin();
            ask_interactively(&questions, &mut stdin.lock())?
        }
    };

    let score = grade(&questions, &selections);
    reporter.on_stage(Stage::Done);
    print_results(&questions, &score);

    if let Some(dir) = &args.output {
        let session = QuizSession::new(video_id, source, summary, questions, selections, score);
        let path = session.save(dir)?;
        eprintln!("Session saved to: {}", path.display());
    }

    Ok(())
}

fn print_question(number: usize, question: &Question) {
    println!("\n{number}. {}", question.text);
    for (i, option) in question.options.iter().enumerate() {
        println!("   {}) {option}", i + 1);
    }
}

fn print_questions(questions: &[Question]) {
    for (i, question) in questions.iter().enumerate() {
        print_question(i + 1, question);
    }
}

/// Map 1-based option numbers onto option texts.
fn selections_from_numbers(questions: &[Question], answers: &[usize]) -> Result<Vec<String>> {
    if answers.len() > questions.len() {
        tracing::warn!(
            answers = answers.len(),
            questions = questions.len(),
            "ignoring extra answers"
        );
    }

    questions
        .iter()
        .zip(answers)
        .enumerate()
        .map(|(i, (question, &n))| {
            option_for_number(question, n).with_context(|| {
                format!("answer {n} for question {} must be between 1 and 4", i + 1)
            })
        })
        .collect()
}

fn option_for_number(question: &Question, n: usize) -> Option<String> {
    n.checked_sub(1)
        .and_then(|i| question.options.get(i))
        .cloned()
}

/// Prompt for each answer on stdout, reading choices from `input`.
///
/// Invalid lines are re-asked; end of input leaves the rest unanswered.
fn ask_interactively(questions: &[Question], input: &mut impl BufRead) -> Result<Vec<String>> {
    let mut selections = Vec::with_capacity(questions.len());
    let mut stdout = std::io::stdout();

    'questions: for (i, question) in questions.iter().enumerate() {
        print_question(i + 1, question);
        loop {
            print!("Your answer (1-4): ");
            stdout.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                println!();
                break 'questions;
            }

            match line
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(|n| option_for_number(question, n))
            {
                Some(option) => {
                    selections.push(option);
                    break;
                }
                None => println!("Please enter a number from 1 to 4."),
            }
        }
    }

    Ok(selections)
}

fn print_results(questions: &[Question], score: &QuizScore) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["#", "Question", "Your answer", "Correct answer", "Result"]);

    for (i, (question, answer)) in questions.iter().zip(&score.answers).enumerate() {
        let result = if answer.is_correct {
            "correct"
        } else if answer.selected.is_none() {
            "unanswered"
        } else {
            "wrong"
        };
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&question.text),
            Cell::new(answer.selected.as_deref().unwrap_or("-")),
            Cell::new(answer.correct.as_deref().unwrap_or("(unknown)")),
            Cell::new(result),
        ]);
    }

    println!("\n{table}");
    println!("{}", score_line(score));
}

fn score_line(score: &QuizScore) -> String {
    format!(
        "Your score: {} / {} ({:.0}%)",
        score.score,
        score.total,
        score.ratio() * 100.0
    )
}
