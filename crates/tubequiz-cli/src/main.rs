//! tubequiz CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod reporter;
mod session;

#[derive(Parser)]
#[command(
    name = "tubequiz",
    version,
    about = "Summarize YouTube videos and quiz yourself on them"
)]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a video's transcript and print a short summary
    Summarize {
        /// YouTube URL or bare video ID
        #[arg(long)]
        url: String,

        /// Language code for the summary (default from config)
        #[arg(long)]
        language: Option<String>,

        /// Model for the summary calls (default from config)
        #[arg(long)]
        model: Option<String>,
    },

    /// Generate a multiple-choice quiz and grade your answers
    Quiz {
        /// YouTube URL or bare video ID
        #[arg(long, required_unless_present = "text_file", conflicts_with = "text_file")]
        url: Option<String>,

        /// Quiz a local text file instead of a video
        #[arg(long)]
        text_file: Option<PathBuf>,

        /// Summarize the transcript first and quiz the summary
        #[arg(long, requires = "url")]
        from_summary: bool,

        /// Maximum number of questions (default from config)
        #[arg(long)]
        num_questions: Option<usize>,

        /// Answers as 1-based option numbers (e.g. "1,3,2"); skips the prompt
        #[arg(long, value_delimiter = ',')]
        answers: Option<Vec<usize>>,

        /// Directory to write the quiz session JSON to
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Print the video ID extracted from a URL
    VideoId {
        /// YouTube URL or bare video ID
        url: String,
    },

    /// Create a starter tubequiz.toml
    Init,
}

#[tokio::main]
async fn main() {
    // A missing .env is normal.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tubequiz=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config;

    let result = match cli.command {
        Commands::Summarize {
            url,
            language,
            model,
        } => commands::summarize::execute(url, language, model, config).await,
        Commands::Quiz {
            url,
            text_file,
            from_summary,
            num_questions,
            answers,
            output,
        } => {
            commands::quiz::execute(
                commands::quiz::QuizArgs {
                    url,
                    text_file,
                    from_summary,
                    num_questions,
                    answers,
                    output,
                },
                config,
            )
            .await
        }
        Commands::VideoId { url } => commands::video_id::execute(&url),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
