//! Autolisting command line
//!
//! `fetch` extracts a listing and prepares its auto-fill script; `script`
//! renders the script from a saved record without calling the API.

use anyhow::{Context, bail};
use autolisting::session::Phase;
use autolisting::vehicle::FORCED_SPECS;
use autolisting::{ExtractorConfig, GeminiExtractor, ListingSession, RequestStatus, VehicleRecord};
use autolisting::{generate_script, normalize};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "autolisting",
    version,
    about = "Vehicle listing extraction and marketplace auto-fill scripts"
)]
struct Cli {
    #[arg(short, long, global = true, help = "Enable debug logging")]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Extract a listing with Gemini and prepare its auto-fill script
    Fetch {
        /// Listing URL
        url: String,
        #[arg(
            long,
            env = "API_KEY",
            hide_env_values = true,
            help = "Gemini API key (falls back to GEMINI_API_KEY)"
        )]
        api_key: Option<String>,
        #[arg(long, help = "Gemini model")]
        model: Option<String>,
        #[arg(long, help = "Override the Gemini API base URL")]
        base_url: Option<String>,
        #[arg(long, help = "Request timeout in seconds (default: none)")]
        timeout_secs: Option<u64>,
        #[command(flatten)]
        output: ScriptOutput,
        #[arg(long, help = "Print the request status as JSON")]
        json: bool,
    },
    /// Render the auto-fill script for a saved vehicle record (JSON)
    Script {
        /// Path to a vehicle record JSON file
        record: PathBuf,
        #[command(flatten)]
        output: ScriptOutput,
    },
}

#[derive(clap::Args, Debug)]
struct ScriptOutput {
    #[arg(long, value_name = "FILE", help = "Write the script to FILE")]
    out: Option<PathBuf>,
    #[arg(long, help = "Copy the script to the system clipboard")]
    copy: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(err) = run(cli).await {
        eprintln!("error: {:#}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Fetch {
            url,
            api_key,
            model,
            base_url,
            timeout_secs,
            output,
            json,
        } => {
            let mut config = ExtractorConfig::from_env();
            if let Some(key) = api_key.filter(|key| !key.trim().is_empty()) {
                config = config.api_key(key);
            }
            if let Some(model) = model {
                config = config.model(model);
            }
            if let Some(base_url) = base_url {
                config = config.base_url(base_url);
            }
            if let Some(secs) = timeout_secs {
                config = config.timeout(Duration::from_secs(secs));
            }

            let mut session = ListingSession::new(GeminiExtractor::new(config)?);
            eprintln!("Extracting...");
            session.analyze(&url).await?;

            let status = session.status();
            let script = session.script();
            if json {
                let report = FetchReport {
                    status,
                    script: script.as_deref(),
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_status(status);
            }

            if status.phase() == Phase::Failed {
                bail!("extraction failed");
            }
            if let Some(script) = script {
                deliver(&script, &output, json)?;
            }
            Ok(())
        }
        Commands::Script { record, output } => {
            let record = VehicleRecord::from_json_file(&record)
                .with_context(|| format!("loading vehicle record {}", record.display()))?;
            let script = generate_script(&normalize(record));
            deliver(&script, &output, false)
        }
    }
}

/// `fetch --json` output: the request status plus the rendered script
#[derive(Serialize)]
struct FetchReport<'a> {
    #[serde(flatten)]
    status: &'a RequestStatus,
    script: Option<&'a str>,
}

fn print_status(status: &RequestStatus) {
    if let Some(error) = &status.error {
        eprintln!("{}", error);
    }
    let Some(data) = &status.data else {
        return;
    };

    println!("{}", data.title);
    println!();
    for (label, value) in data.display_fields() {
        if label == "Fixed Description" {
            println!("{}:\n{}", label, value);
        } else {
            println!("{:<12} {}", format!("{}:", label), value);
        }
    }
    println!();
    for (label, value) in FORCED_SPECS {
        println!("{:<12} {} (automatic)", format!("{}:", label), value);
    }
}

/// Hand the script over: file, clipboard, or stdout when neither was asked for
fn deliver(script: &str, output: &ScriptOutput, quiet: bool) -> anyhow::Result<()> {
    if let Some(path) = &output.out {
        std::fs::write(path, script).with_context(|| format!("writing {}", path.display()))?;
        eprintln!("Script written to {}", path.display());
    }

    if output.copy {
        let mut clipboard = arboard::Clipboard::new().context("opening clipboard")?;
        clipboard.set_text(script).context("copying script to clipboard")?;
        eprintln!(
            "Script copied to clipboard. Paste it into the browser console on the listing form."
        );
    }

    if output.out.is_none() && !output.copy && !quiet {
        println!();
        println!("{}", script);
    }
    Ok(())
}
