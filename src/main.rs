//! Number Baseball - CLI
//!
//! Play the three-digit guessing game in a TUI or on plain stdin, or let the
//! solver play, analyze openings and benchmark strategies.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use number_baseball::{
    commands::{SolveConfig, analyze_guess, run_benchmark, run_simple, select_secrets, solve_secret},
    core::{GameEngine, Guess},
    logging,
    output::{Language, print_analysis_result, print_benchmark_result, print_solve_result},
    solver::{Solver, Strategy, StrategyType},
};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "number_baseball",
    about = "Number baseball: find three distinct digits from strikes and balls",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Language: en (default) or ko
    #[arg(short, long, global = true, default_value = "en")]
    lang: Language,

    /// Seed for reproducible secrets
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Strategy for hints and auto-play: hybrid (default), entropy, minimax, random
    #[arg(short, long, global = true, default_value = "hybrid")]
    strategy: String,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Let the solver find a given secret
    Solve {
        /// The secret to solve, three distinct digits
        secret: String,

        /// Show candidate counts and entropy for each step
        #[arg(long)]
        details: bool,
    },

    /// Analyze how well a guess splits all possible secrets
    Analyze {
        /// Guess to analyze
        guess: String,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of random secrets to test (default: all 720)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Override the first guess
        #[arg(short = 'f', long)]
        first_guess: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    logging::init(cli.verbose, matches!(command, Commands::Play));

    let strategy = StrategyType::from_name(&cli.strategy);
    info!(strategy = strategy.name(), lang = %cli.lang, seed = ?cli.seed, "starting");
    let solver = Solver::new(strategy);

    match command {
        Commands::Play => run_play_command(solver, cli.lang, cli.seed),
        Commands::Simple => run_simple_command(&solver, cli.lang, cli.seed),
        Commands::Solve { secret, details } => {
            solve_command(&secret, details, &solver, cli.lang)
        }
        Commands::Analyze { guess } => {
            let result = analyze_guess(&guess)?;
            print_analysis_result(&result, cli.lang);
            Ok(())
        }
        Commands::Benchmark { count, first_guess } => {
            benchmark_command(count, first_guess.as_deref(), cli.seed, &solver)
        }
    }
}

fn solve_command<S: Strategy>(
    secret: &str,
    details: bool,
    solver: &Solver<S>,
    lang: Language,
) -> Result<()> {
    let config = SolveConfig::new(secret.to_string());
    let result = solve_secret(config, solver)?;

    print_solve_result(&result, lang, details);
    Ok(())
}

fn benchmark_command<S: Strategy>(
    count: Option<usize>,
    first_guess: Option<&str>,
    seed: Option<u64>,
    solver: &Solver<S>,
) -> Result<()> {
    let forced_first = first_guess
        .map(|raw| Guess::parse(raw).with_context(|| format!("invalid first guess '{raw}'")))
        .transpose()?;

    let secrets = select_secrets(count, seed);
    match forced_first {
        Some(guess) => println!(
            "Running benchmark on {} secrets with forced first guess: {guess}...",
            secrets.len()
        ),
        None => println!("Running benchmark on {} secrets...", secrets.len()),
    }

    let result = run_benchmark(solver, &secrets, forced_first, true);
    print_benchmark_result(&result);
    Ok(())
}

fn run_simple_command<S: Strategy>(
    solver: &Solver<S>,
    lang: Language,
    seed: Option<u64>,
) -> Result<()> {
    let mut engine = GameEngine::from_optional_seed(seed);
    let stdin = std::io::stdin();
    let summary = run_simple(&mut engine, solver, lang, stdin.lock(), std::io::stdout())?;

    info!(
        started = summary.games_started,
        won = summary.games_won,
        "session finished"
    );
    Ok(())
}

fn run_play_command(solver: Solver<StrategyType>, lang: Language, seed: Option<u64>) -> Result<()> {
    use number_baseball::interactive::{App, run_tui};

    let app = App::new(GameEngine::from_optional_seed(seed), solver, lang);
    run_tui(app)
}
