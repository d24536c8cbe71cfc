//! hgn: huginn command-line front end
//!
//! Analyze single texts or batches of posts with the sentiment engine.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use huginn::{Config, HuginnBuilder, Post, PostAnalyzer, Summary};

/// Huginn sentiment CLI
#[derive(Parser)]
#[command(name = "hgn")]
#[command(version = huginn::PKG_VERSION)]
#[command(about = "Heuristic sentiment, emotion-dimension and tone analysis")]
struct Args {
    /// Config file (default: ~/.huginn/config.toml, then /etc/huginn/config.toml)
    #[arg(short, long, env = "HUGINN_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze one text
    Analyze {
        /// Text to analyze (or omit to read from stdin)
        text: Option<String>,
        /// Skip the calibration layer
        #[arg(long)]
        base: bool,
        /// Pretty-print the JSON result
        #[arg(long)]
        pretty: bool,
    },

    /// Analyze posts from a JSON array or JSON lines of {"post", "date"}
    Batch {
        /// Input file (or omit to read from stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Print an aggregate summary instead of per-post records
        #[arg(long)]
        summary: bool,
    },

    /// Show detailed build information
    Version,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialise tracing (default: warn for CLI; override with RUST_LOG).
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    if let Command::Version = args.command {
        let info = huginn::version::BuildInfo::current();
        println!("hgn {info}");
        println!("built {}", info.build_timestamp);
        return Ok(());
    }

    let config = Config::load(args.config.as_deref())?;
    let engine = Arc::new(HuginnBuilder::from_config(&config).build()?);

    match args.command {
        Command::Analyze { text, base, pretty } => {
            let text = resolve_text(text, "analyze")?;
            let result = if base {
                engine.analyze(&text)
            } else {
                engine.analyze_calibrated(&text)
            };
            if pretty {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", serde_json::to_string(&result)?);
            }
        }

        Command::Batch { input, summary } => {
            let raw = match input {
                Some(path) => fs::read_to_string(&path)?,
                None => {
                    let mut buf = String::new();
                    io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            let posts = Post::parse_many(&raw)?;
            let analyzer = PostAnalyzer::new(engine).with_config(&config.pipeline);
            let records = analyzer.analyze_posts(posts).await;

            if summary {
                let summary = Summary::from_records(&records, &config.assessment);
                println!("{}", serde_json::to_string_pretty(&summary)?);
                eprintln!("{} (advisory only, not a diagnosis)", summary.assessment);
            } else {
                for record in &records {
                    println!("{}", serde_json::to_string(record)?);
                }
            }
        }

        Command::Version => unreachable!("handled above"),
    }

    Ok(())
}

/// Text from the argument, or from piped stdin when the argument is absent.
fn resolve_text(arg: Option<String>, command: &str) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(text) = arg {
        return Ok(text);
    }
    if io::stdin().is_terminal() {
        return Err(format!("{command}: no input provided (pass text as argument or via stdin)").into());
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf.trim_end_matches(['\n', '\r']).to_string())
}
