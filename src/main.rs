//! Wordle Scores - CLI
//!
//! Lists, records and checks daily Wordle results against the scores service.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use wordle_scores::{
    backend::{Backend, HttpBackend, MemoryBackend},
    commands::{add_score, check_guesses, compute_statistics, list_scores, puzzle_number},
    config::BackendConfig,
    core::DayDate,
    scores::latest_by_id,
    logging::init_tracing,
    output::{
        formatters::share_text, print_added_score, print_check_result, print_list_result,
        print_puzzle_number, print_statistics,
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_scores",
    about = "Track daily Wordle results and replay their colored feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Scores service base URL
    #[arg(long, global = true, env = "WORDLE_SCORES_URL")]
    url: Option<String>,

    /// Access token sent as X-Authorization
    #[arg(long, global = true, env = "WORDLE_SCORES_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Use the embedded sample scores instead of the service
    #[arg(long, global = true)]
    offline: bool,

    /// Log debug output to stderr (WORDLE_SCORES_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List recorded results (default)
    List,

    /// Record today's result
    Add {
        /// The secret word
        word: String,

        /// Guesses in order, comma-separated (e.g. "stair,peony,lapse")
        tries: String,
    },

    /// Show feedback for guesses against a word without recording anything
    Check {
        /// The secret word
        word: String,

        /// Guesses in order
        #[arg(required = true)]
        guesses: Vec<String>,
    },

    /// Show the puzzle number for a day
    Number {
        /// Day as YYYY-MM-DD (default: today, UTC)
        date: Option<String>,
    },

    /// Show statistics over all recorded results
    Stats,

    /// Print the shareable emoji grid for a puzzle
    Share {
        /// Puzzle number
        id: i64,
    },
}

/// Connection options shared by the commands that talk to the service
struct BackendArgs {
    url: Option<String>,
    token: Option<String>,
    offline: bool,
}

impl BackendArgs {
    fn open(&self) -> Result<Box<dyn Backend>> {
        if self.offline {
            return Ok(Box::new(MemoryBackend::with_samples()));
        }

        let config = BackendConfig::resolve(self.url.as_deref(), self.token.as_deref())?;
        tracing::debug!(?config, "using scores service");
        let backend = HttpBackend::new(&config).context("could not set up scores service client")?;
        Ok(Box::new(backend))
    }
}

fn main() -> Result<()> {
    let Cli {
        command,
        url,
        token,
        offline,
        verbose,
    } = Cli::parse();

    init_tracing(verbose)?;

    let backend_args = BackendArgs {
        url,
        token,
        offline,
    };

    // Default to List if no command given
    match command.unwrap_or(Commands::List) {
        Commands::List => run_list_command(&backend_args),
        Commands::Add { word, tries } => run_add_command(&backend_args, &word, &tries),
        Commands::Check { word, guesses } => run_check_command(&word, &guesses),
        Commands::Number { date } => run_number_command(date.as_deref()),
        Commands::Stats => run_stats_command(&backend_args),
        Commands::Share { id } => run_share_command(&backend_args, id),
    }
}

fn run_list_command(backend_args: &BackendArgs) -> Result<()> {
    let backend = backend_args.open()?;
    // Nothing is stored locally, so a failed fetch lists nothing
    let result = list_scores(backend.as_ref(), Vec::new());
    print_list_result(&result);
    Ok(())
}

fn run_add_command(backend_args: &BackendArgs, word: &str, tries: &str) -> Result<()> {
    let backend = backend_args.open()?;
    let score = add_score(backend.as_ref(), word, tries, DayDate::today())
        .context("could not add score")?;
    print_added_score(&score);
    Ok(())
}

fn run_check_command(word: &str, guesses: &[String]) -> Result<()> {
    let result = check_guesses(word, guesses)?;
    print_check_result(&result);
    Ok(())
}

fn run_number_command(date: Option<&str>) -> Result<()> {
    let result = puzzle_number(date, DayDate::today())?;
    print_puzzle_number(&result);
    Ok(())
}

fn run_stats_command(backend_args: &BackendArgs) -> Result<()> {
    let backend = backend_args.open()?;
    let scores = backend
        .get_all_scores()
        .context("could not fetch scores")?;
    print_statistics(&compute_statistics(&scores));
    Ok(())
}

fn run_share_command(backend_args: &BackendArgs, id: i64) -> Result<()> {
    let backend = backend_args.open()?;
    let scores = backend
        .get_all_scores()
        .context("could not fetch scores")?;

    let Some(score) = latest_by_id(&scores, id) else {
        bail!("No score recorded for Wordle {id}");
    };

    println!("{}", share_text(score)?);
    Ok(())
}
