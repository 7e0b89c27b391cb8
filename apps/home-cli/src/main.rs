//! Home Harmony console
//!
//! Feeds transcribed utterances through the intent parser and shows the
//! resulting device state: Transcript → Intent → Device Update → Feedback

mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use device_registry::{self as devreg, Device, DeviceRegistry, MetricsHub};
use intent_parser::{CommandParser, SessionError, TurnOutcome, VoiceSession};
use std::io::{self, BufRead, Write};
use std::time::Instant;
use tracing::{error, info};

use config::Config;

#[derive(Parser, Debug)]
#[command(
    name = "hh",
    version,
    about = "Home Harmony voice command console",
    disable_help_subcommand = true
)]
struct Cli {
    /// Config file path (created with defaults when missing)
    #[arg(long, global = true, default_value = "hh.json")]
    config: String,

    /// YAML device registry, overriding the config file
    #[arg(long, global = true)]
    registry: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List devices, optionally for one location
    Devices {
        #[arg(long)]
        location: Option<String>,
    },
    /// List locations in registry order
    Locations,
    /// Parse one utterance without executing it
    Parse {
        text: String,
        /// Print the command as JSON
        #[arg(long)]
        json: bool,
    },
    /// Execute utterances in order and print the final device state
    Run {
        #[arg(required = true)]
        texts: Vec<String>,
        /// Print Prometheus metrics afterwards
        #[arg(long)]
        metrics: bool,
    },
    /// Read utterances from stdin, one per line
    Interactive,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;
    setup_tracing(&config.log_filter);

    let registry_path = cli.registry.clone().or_else(|| config.registry_path.clone());
    let registry = load_registry(registry_path.as_deref())?;

    match cli.command {
        Commands::Devices { location } => {
            let devices: Vec<&Device> = match location.as_deref() {
                Some(loc) => registry.by_location(loc).collect(),
                None => registry.iter().collect(),
            };
            for d in devices {
                println!("{}", device_line(d, false));
            }
        }
        Commands::Locations => {
            for loc in registry.locations() {
                println!("{loc}");
            }
        }
        Commands::Parse { text, json } => {
            let parser = CommandParser::new(registry);
            let command = parser.parse(&text);
            if json {
                println!("{}", serde_json::to_string_pretty(&command)?);
            } else {
                println!("{command:?}");
            }
            println!("{}", intent_parser::feedback(&command, parser.registry()));
        }
        Commands::Run { texts, metrics } => {
            let hub = MetricsHub::new().map_err(|e| anyhow::anyhow!(e))?;
            let mut session = VoiceSession::new(registry, config.session()).with_metrics(hub);
            for text in &texts {
                handle(&mut session, text);
            }
            print_devices(&session);
            print_history(&session);
            if metrics {
                if let Some(hub) = session.metrics() {
                    print!("{}", hub.encode_text());
                }
            }
        }
        Commands::Interactive => {
            let session = VoiceSession::new(registry, config.session());
            run_interactive(session)?;
        }
    }
    Ok(())
}

fn load_registry(path: Option<&str>) -> Result<DeviceRegistry> {
    match path {
        Some(p) => devreg::load_registry_file(p).context("loading device registry"),
        None => {
            let reg = devreg::default_home();
            info!(devices = reg.len(), "using built-in home registry");
            Ok(reg)
        }
    }
}

fn handle(session: &mut VoiceSession, text: &str) {
    match session.handle_transcript(text) {
        Ok(report) => {
            let marker = match report.outcome {
                TurnOutcome::Executed { .. } => "✓",
                TurnOutcome::NoMatchingDevices => "✗",
                TurnOutcome::NotExecuted => "?",
            };
            println!("{marker} '{text}' -> {}", report.feedback);
        }
        Err(SessionError::EmptyTranscript) => {}
        Err(e) => error!("'{}' rejected: {}", text, e),
    }
}

fn run_interactive(mut session: VoiceSession) -> Result<()> {
    println!("{}", session.feedback());
    println!("Commands: :devices  :history  :quit");
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        match line.trim() {
            ":quit" | ":q" => break,
            ":devices" => print_devices(&session),
            ":history" => print_history(&session),
            text => {
                handle(&mut session, text);
                let lit = session.highlighted(Instant::now());
                if !lit.is_empty() {
                    println!("  highlighted: {}", lit.join(", "));
                }
            }
        }
    }
    Ok(())
}

fn print_devices(session: &VoiceSession) {
    let lit = session.highlighted(Instant::now());
    println!("\nDevices:");
    for d in session.devices() {
        println!("{}", device_line(d, lit.contains(&d.id.as_str())));
    }
}

fn print_history(session: &VoiceSession) {
    println!("\nHistory:");
    if session.history().is_empty() {
        println!("  No commands yet. Try saying \"Turn on the lights\"");
        return;
    }
    for entry in session.history().iter() {
        let stamp = entry.timestamp().unwrap_or_default();
        for (i, line) in entry.summary().iter().enumerate() {
            if i == 0 {
                println!("  {line} {stamp}");
            } else {
                println!("    {line}");
            }
        }
    }
}

fn device_line(d: &Device, highlighted: bool) -> String {
    let state = if d.active { "on " } else { "off" };
    let mark = if highlighted { "*" } else { " " };
    let level = match (d.active, d.intensity_label()) {
        (true, Some(label)) => format!("  {label}"),
        _ => String::new(),
    };
    format!(
        "{mark}[{state}] {:<20} {:<12} {}{level}",
        d.name, d.location, d.id
    )
}

fn setup_tracing(default_filter: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
