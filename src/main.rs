//! Daily word game - CLI
//!
//! Shows today's puzzle, checks guesses, plays the game in the terminal and
//! audits the daily schedule.

use anyhow::{Context, Result};
use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordle_mole::{
    commands::{CheckConfig, check_word, run_audit, run_play, today_report},
    config::GameConfig,
    daily::{Clock, MAX_INDEX_OFFSET, SystemClock, day_index},
    game::Game,
    output::{print_audit_statistics, print_check_result, print_today},
    wordlists::WordList,
};

#[derive(Parser)]
#[command(
    name = "wordle-mole",
    about = "Daily word game with a mole letter and hard mode",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Locale tag used for case folding (e.g. en, tr-TR)
    #[arg(short, long, global = true, env = "WORDLE_LOCALE")]
    locale: Option<String>,

    /// Days to shift the puzzle index by
    #[arg(
        short,
        long,
        global = true,
        env = "WORDLE_INDEX_OFFSET",
        default_value_t = 0,
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(i64).range(-MAX_INDEX_OFFSET..=MAX_INDEX_OFFSET)
    )]
    offset: i64,

    /// Answer list file (one word per line) instead of the built-in list
    #[arg(long, global = true)]
    answers: Option<PathBuf>,

    /// Extra accepted guesses file instead of the built-in list
    #[arg(long, global = true)]
    guesses: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play today's puzzle in the terminal (default)
    Play {
        /// Revealed letters must be reused in later guesses
        #[arg(long)]
        hard: bool,
    },

    /// Show today's puzzle number, mole and time until the next one
    Today {
        /// Also print the solution
        #[arg(long)]
        reveal: bool,
    },

    /// Check a guess against today's puzzle
    Check {
        /// The guess to check
        word: String,

        /// Earlier guesses, comma separated, oldest first
        #[arg(long, value_delimiter = ',')]
        history: Vec<String>,

        /// Apply hard-mode rules using the last guess in the history
        #[arg(long)]
        hard: bool,
    },

    /// Verify the daily invariants over a range of days
    Audit {
        /// Number of days to check
        #[arg(
            short = 'n',
            long,
            default_value = "365",
            value_parser = RangedU64ValueParser::<usize>::new().range(1..)
        )]
        days: usize,

        /// First day index (default: today)
        #[arg(
            short,
            long,
            allow_hyphen_values = true,
            value_parser = clap::value_parser!(i64).range(-MAX_INDEX_OFFSET..=MAX_INDEX_OFFSET)
        )]
        start: Option<i64>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = GameConfig::new(cli.locale.as_deref(), cli.offset)
        .with_word_lists(cli.answers, cli.guesses);
    let words = config
        .load_word_list()
        .context("Failed to load word lists")?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { hard: false });

    match command {
        Commands::Play { hard } => run_play_command(&config, words, hard),
        Commands::Today { reveal } => run_today_command(&config, words, reveal),
        Commands::Check {
            word,
            history,
            hard,
        } => run_check_command(&config, words, word, history, hard),
        Commands::Audit { days, start } => {
            run_audit_command(&config, &words, days, start);
            Ok(())
        }
    }
}

fn run_today_command(config: &GameConfig, words: WordList, reveal: bool) -> Result<()> {
    let mut cache = config.daily_cache(words, SystemClock);
    let report = today_report(&mut cache, SystemClock.now_ms())?;
    print_today(&report, reveal);
    Ok(())
}

fn run_check_command(
    config: &GameConfig,
    words: WordList,
    word: String,
    history: Vec<String>,
    hard_mode: bool,
) -> Result<()> {
    let mut cache = config.daily_cache(words, SystemClock);
    let puzzle = cache.current()?.clone();

    let check = CheckConfig {
        word,
        history,
        hard_mode,
    };
    let result = check_word(&check, &puzzle, cache.words(), config.locale);
    print_check_result(&result);
    Ok(())
}

fn run_play_command(config: &GameConfig, words: WordList, hard: bool) -> Result<()> {
    let mut cache = config.daily_cache(words, SystemClock);
    let puzzle = cache.current()?.clone();
    info!(index = puzzle.solution_index, "starting game");

    let mut game = Game::new(puzzle, cache.words(), config.locale);
    game.set_hard_mode(hard)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_play(&mut game, stdin.lock(), &mut stdout)?;
    Ok(())
}

fn run_audit_command(config: &GameConfig, words: &WordList, days: usize, start: Option<i64>) {
    let first_index =
        start.unwrap_or_else(|| day_index(SystemClock.now_ms(), config.index_offset));

    println!("\n🎯 Auditing {days} days from index {first_index}...");
    let stats = run_audit(words, config.locale, first_index, days, true);
    print_audit_statistics(&stats);
}
