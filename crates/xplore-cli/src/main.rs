//! Xplore'25 CLI
//!
//! Thin wrapper around xplore-core for browsing and checking the event
//! catalog from a terminal.
//!
//! ## Usage
//!
//! ```bash
//! # Fest summary
//! xplore info
//!
//! # List events / show one event with its rules
//! xplore events list
//! xplore events show 5
//!
//! # Registration links
//! xplore links
//!
//! # Validate or export a catalog file
//! xplore catalog validate my-catalog.json
//! xplore catalog export > my-catalog.json
//!
//! # Drive the card-reveal engine step by step
//! xplore play tap:3 tap:3 close wait:5000
//! ```

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use xplore_core::{
    badge, Activation, CardRevealCarousel, Catalog, ExpiryPolicy, ItemId, RenderState, RuleSection,
    SilentCue, XploreConfig,
};

/// Xplore'25 - tech fest event catalog
#[derive(Parser)]
#[command(name = "xplore")]
#[command(version = "0.1.0")]
#[command(about = "Xplore'25 - browse and validate the tech fest event catalog")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file (default: <config dir>/xplore/config.json when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Event catalog JSON replacing the built-in lineup
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// How long revealed cards stay face up, in milliseconds
    #[arg(long, global = true)]
    reveal_delay_ms: Option<u64>,

    /// When the reveal countdown starts: first | latest
    #[arg(long, global = true)]
    expiry_policy: Option<ExpiryPolicy>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show fest information
    Info,

    /// Browse events
    Events {
        #[command(subcommand)]
        action: EventsAction,
    },

    /// List registration links
    Links,

    /// Catalog file tools
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },

    /// Run a sequence of interactions through the card-reveal engine
    Play {
        /// Steps: tap:<id> open:<id> close next prev go:<index> clear wait:<ms>
        #[arg(required = true)]
        steps: Vec<Step>,
    },
}

#[derive(Subcommand)]
enum EventsAction {
    /// List all events
    List,
    /// Show one event with its rules
    Show {
        /// Event id
        id: ItemId,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// Check a catalog file
    Validate {
        /// Catalog JSON file
        file: PathBuf,
    },
    /// Print the active catalog as JSON
    Export,
}

/// One scripted interaction for `play`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Tap(ItemId),
    Open(ItemId),
    Close,
    Next,
    Prev,
    GoTo(usize),
    Clear,
    Wait(u64),
}

impl FromStr for Step {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (s, None),
        };

        fn num<T: FromStr>(step: &str, arg: Option<&str>) -> std::result::Result<T, String> {
            let arg = arg.ok_or_else(|| format!("{} needs a number, e.g. {}:1", step, step))?;
            arg.parse()
                .map_err(|_| format!("{}: '{}' is not a valid number", step, arg))
        }

        match name {
            "tap" => Ok(Step::Tap(num(name, arg)?)),
            "open" => Ok(Step::Open(num(name, arg)?)),
            "go" => Ok(Step::GoTo(num(name, arg)?)),
            "wait" => Ok(Step::Wait(num(name, arg)?)),
            "close" => Ok(Step::Close),
            "next" => Ok(Step::Next),
            "prev" => Ok(Step::Prev),
            "clear" => Ok(Step::Clear),
            other => Err(format!("unknown step: {}", other)),
        }
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Config file with command line overrides applied
fn resolve_config(cli: &Cli) -> Result<XploreConfig> {
    let mut config =
        XploreConfig::load_or_default(cli.config.as_deref()).context("Failed to load config")?;

    if let Some(catalog) = &cli.catalog {
        config.catalog = Some(catalog.clone());
    }
    if let Some(ms) = cli.reveal_delay_ms {
        config.reveal_delay_ms = ms;
    }
    if let Some(policy) = cli.expiry_policy {
        config.expiry_policy = policy;
    }
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn print_rules(sections: &[RuleSection]) {
    for section in sections {
        println!();
        println!("  {}:", section.heading);
        for point in &section.points {
            println!("    - {}", point);
        }
    }
}

/// One-line summary of a render snapshot
fn describe(state: &RenderState) -> String {
    let revealed: Vec<String> = state.revealed.iter().map(|id| id.to_string()).collect();
    let selection = state
        .selection
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string());
    format!(
        "revealed=[{}] slide={} selection={} countdown={}",
        revealed.join(","),
        state.active_index,
        selection,
        if state.expiry_pending { "running" } else { "idle" }
    )
}

async fn play(engine: &CardRevealCarousel, steps: &[Step]) {
    for step in steps {
        let note = match *step {
            Step::Tap(id) => match engine.on_item_activate(id) {
                Activation::Revealed { .. } => "revealed",
                Activation::Opened => "opened",
                Activation::Ignored => "ignored",
            },
            Step::Open(id) => {
                if engine.open_detail(id) {
                    "opened"
                } else {
                    "ignored"
                }
            }
            Step::Close => {
                engine.on_detail_close();
                "closed"
            }
            Step::Next => {
                engine.on_next();
                "next"
            }
            Step::Prev => {
                engine.on_prev();
                "prev"
            }
            Step::GoTo(index) => {
                engine.on_go_to(index);
                "go"
            }
            Step::Clear => {
                engine.clear_reveals();
                "cleared"
            }
            Step::Wait(ms) => {
                tokio::time::sleep(Duration::from_millis(ms)).await;
                "waited"
            }
        };
        println!("{:<10} {:<8} {}", step_label(step), note, describe(&engine.snapshot()));
    }
}

fn step_label(step: &Step) -> String {
    match step {
        Step::Tap(id) => format!("tap:{}", id),
        Step::Open(id) => format!("open:{}", id),
        Step::Close => "close".to_string(),
        Step::Next => "next".to_string(),
        Step::Prev => "prev".to_string(),
        Step::GoTo(index) => format!("go:{}", index),
        Step::Clear => "clear".to_string(),
        Step::Wait(ms) => format!("wait:{}", ms),
    }
}

fn validate_file(path: &Path) -> Result<Catalog> {
    Catalog::load(path).with_context(|| format!("Invalid catalog {}", path.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = resolve_config(&cli)?;
    let catalog = config.load_catalog().context("Failed to load event catalog")?;
    tracing::debug!(events = catalog.len(), "Catalog ready");

    match cli.command {
        Commands::Info => {
            println!("{}", catalog.name());
            println!();
            println!("Events: {}", catalog.len());
            println!("Reveal delay: {} ms", config.reveal_delay_ms);
            println!("Expiry policy: {:?}", config.expiry_policy);
            match &config.catalog {
                Some(path) => println!("Catalog: {}", path.display()),
                None => println!("Catalog: built-in"),
            }
            if !catalog.coordinators().is_empty() {
                println!();
                println!("Coordinators:");
                for c in catalog.coordinators() {
                    println!("  {} ({})", c.name, c.phone);
                }
            }
        }

        Commands::Events { action } => match action {
            EventsAction::List => {
                if catalog.is_empty() {
                    println!("No events.");
                }
                for item in catalog.items() {
                    println!("{}  {}  [{}]", badge(item.id), item.title, item.category);
                }
            }
            EventsAction::Show { id } => {
                let Some(item) = catalog.get(id) else {
                    bail!("Event not found: {}", id);
                };

                println!("{} {}", badge(item.id), item.title);
                println!("  Category: {}", item.category);
                println!("  {}", item.description);
                println!();
                println!("  Poster: {}", catalog.poster_ref(id));
                match catalog.registration_url(id) {
                    Some(url) => println!("  Register: {}", url),
                    None => println!("  Register: (no form)"),
                }
                print_rules(catalog.rules(id));
                print_rules(catalog.general_rules());
            }
        },

        Commands::Links => {
            for item in catalog.items() {
                match catalog.registration_url(item.id) {
                    Some(url) => println!("{} {} -> {}", badge(item.id), item.title, url),
                    None => println!("{} {} -> (no form)", badge(item.id), item.title),
                }
            }
        }

        Commands::Catalog { action } => match action {
            CatalogAction::Validate { file } => {
                let checked = validate_file(&file)?;
                println!("Catalog OK: {} events", checked.len());
            }
            CatalogAction::Export => {
                println!("{}", catalog.to_json_pretty()?);
            }
        },

        Commands::Play { steps } => {
            let engine = CardRevealCarousel::new(
                Arc::new(catalog),
                config.engine_options(Arc::new(SilentCue)),
            );
            println!("{:<10} {:<8} {}", "start", "", describe(&engine.snapshot()));
            play(&engine, &steps).await;
            engine.teardown();
        }
    }

    Ok(())
}
