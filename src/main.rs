//! ConvoCoach CLI
//!
//! Usage:
//!   convocoach --text "your reply here"        # Single evaluation
//!   convocoach --practice                      # Walk through a scenario
//!   convocoach --serve                         # HTTP API server
//!   convocoach --text "reply" --json           # JSON output

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use convocoach::config::CoachConfig;
use convocoach::core::{run_server, AppState, Coach, PracticeSession, SessionStore};
use convocoach::types::{paint_average, Dimension, Feedback, SpecificitySource};
use convocoach::VERSION;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Strategy {
    /// Capitalized words (cap 6)
    Caps,
    /// Heuristic named entities (cap 4)
    Entities,
}

impl From<Strategy> for SpecificitySource {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Caps => SpecificitySource::CapitalizedChunks,
            Strategy::Entities => SpecificitySource::NamedEntities,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "convocoach",
    version = VERSION,
    about = "ConvoCoach - practice networking and workplace small talk",
    long_about = "ConvoCoach scores each reply on four dimensions and suggests one\n\
                  concrete improvement for the weakest.\n\n\
                  Modes:\n  \
                  --text      Score a single reply\n  \
                  --practice  Walk through a scripted scenario\n  \
                  --serve     HTTP API server mode\n\n\
                  Dimensions:\n  \
                  Confidence   - length and structure, no hedging\n  \
                  Engagement   - asking back, saying enough\n  \
                  Friendliness - warm tone and gratitude\n  \
                  Specificity  - numbers, tools, names"
)]
struct Args {
    /// Reply to evaluate (single mode)
    #[arg(short, long)]
    text: Option<String>,

    /// Practice a scenario interactively on stdin
    #[arg(short, long)]
    practice: bool,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Config file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Server address
    #[arg(long)]
    addr: Option<String>,

    /// Scenario file (JSON); bundled recruiter scenario by default
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// File that saved sessions are appended to
    #[arg(long)]
    sessions: Option<PathBuf>,

    /// Specificity signal strategy
    #[arg(long, value_enum)]
    strategy: Option<Strategy>,

    /// Custom sentiment lexicon (word<TAB>valence)
    #[arg(long)]
    lexicon: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show feature breakdown
    #[arg(long)]
    verbose: bool,
}

impl Args {
    /// Config file values with flags layered on top
    fn resolve_config(&self) -> Result<CoachConfig> {
        let mut config = CoachConfig::load_or_default(self.config.as_deref())?;
        if let Some(addr) = &self.addr {
            config.addr = addr.clone();
        }
        if let Some(path) = &self.scenario {
            config.scenario_path = Some(path.clone());
        }
        if let Some(path) = &self.sessions {
            config.sessions_path = path.clone();
        }
        if let Some(strategy) = self.strategy {
            config.strategy = strategy.into();
        }
        if let Some(path) = &self.lexicon {
            config.lexicon_path = Some(path.clone());
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if args.no_color {
        colored::control::set_override(false);
    }

    let config = args.resolve_config()?;
    let coach = config
        .build_coach()
        .context("Failed to initialise the sentiment model")?;

    if args.serve {
        run_serve(&config, coach).await
    } else if args.practice {
        run_practice(&config, &coach, &args)
    } else if let Some(ref text) = args.text {
        run_single(text, &coach, &args)
    } else {
        // Default to practice if no mode specified
        run_practice(&config, &coach, &args)
    }
}

/// Run single reply evaluation
fn run_single(text: &str, coach: &Coach, args: &Args) -> Result<()> {
    let feedback = coach.evaluate(text);
    print_feedback(&feedback, args, true)
}

/// Walk through the scenario, one prompt per line of input
fn run_practice(config: &CoachConfig, coach: &Coach, args: &Args) -> Result<()> {
    let scenario = config.scenario().context("Failed to load scenario")?;
    let store = SessionStore::new(&config.sessions_path);
    let mut session = PracticeSession::new(scenario);

    print_header(&session.scenario().scenario);
    println!("Reply to each prompt and press Enter.");
    println!("Commands: 'restart', 'save', 'quit'.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        let Some(prompt) = session.current_prompt().map(str::to_string) else {
            finish(&session);
            break;
        };

        println!("{} {}", "Bot:".bold(), prompt);
        print!("{} ", "You:".bold());
        stdout.flush()?;

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            println!("\nSession ended. Turns: {}", session.log().len());
            break;
        }
        if line.eq_ignore_ascii_case("restart") {
            session.restart();
            println!("{}\n", "Scenario restarted.".cyan());
            continue;
        }
        if line.eq_ignore_ascii_case("save") {
            save(&store, &session);
            continue;
        }
        if line.is_empty() {
            println!("{}", "Type a reply first (empty replies score zero).".yellow());
            continue;
        }

        let feedback = session.submit(line, coach)?;
        print_feedback(&feedback, args, false)?;
        println!();
    }

    if !session.log().is_empty() {
        print_summary(&session);
    }
    Ok(())
}

fn finish(session: &PracticeSession) {
    println!("{}", "End of scenario. Nice work!".green().bold());
    if let Some(note) = &session.scenario().end_note {
        println!("{}", note);
    }
    println!();
}

fn save(store: &SessionStore, session: &PracticeSession) {
    match store.append(session.log()) {
        Ok(total) => println!(
            "{}",
            format!("Saved to {} ({} sessions)", store.path().display(), total).cyan()
        ),
        Err(e) => println!("{}", format!("Save failed: {}", e).red()),
    }
}

fn print_feedback(feedback: &Feedback, args: &Args, pretty_json: bool) -> Result<()> {
    if args.json {
        let json = if pretty_json {
            serde_json::to_string_pretty(feedback)?
        } else {
            serde_json::to_string(feedback)?
        };
        println!("{}", json);
    } else if args.verbose {
        println!("{}", feedback.to_verbose_string());
    } else if args.no_color {
        println!("{}", feedback.to_parseable_string());
    } else {
        println!("{}", feedback.to_terminal_string());
    }
    Ok(())
}

/// Per-dimension averages over the session
fn print_summary(session: &PracticeSession) {
    let Some(summary) = session.summary() else {
        return;
    };
    println!("{}", "Session Summary".bold().underline());
    for dimension in Dimension::ALL {
        println!("  {}", paint_average(dimension, summary.get(dimension)));
    }
    println!("  ({} turns)", summary.turns);
}

fn print_header(title: &str) {
    println!("{}", "========================================".bold());
    println!("  ConvoCoach v{} - {}", VERSION, title);
    println!("{}", "========================================".bold());
    println!();
}

/// Run HTTP API server
async fn run_serve(config: &CoachConfig, coach: Coach) -> Result<()> {
    let scenario = config.scenario().context("Failed to load scenario")?;
    let store = SessionStore::new(&config.sessions_path);
    let state = AppState::new(coach, scenario, store);

    run_server(&config.addr, state)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
