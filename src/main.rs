use clap::Parser;
use language_patrol::{
    AuditPolicy, Finding, LanguagePatrolError, ProgressEvent, SonarrProvider, audit_library,
    parse_wanted_languages, render_console,
};
use std::fs;
use std::path::PathBuf;
use std::process;

/// Check seasons and series in a Sonarr library for audio-language
/// discrepancies (compatible with Sonarr v4 only).
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Sonarr API key (can also be set via API_KEY in the environment or .env)
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    apikey: String,

    /// Base URL of the Sonarr instance (can also be set via SONARR_URL)
    #[arg(long, env = "SONARR_URL")]
    url: String,

    /// Write the findings as JSON to this file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print the findings as JSON instead of the console report
    #[arg(long)]
    json: bool,

    /// Also report single-language seasons and series
    #[arg(long)]
    show_all: bool,

    /// Exclude undetermined audio languages from the evaluation
    #[arg(long)]
    ignore_unknown: bool,

    /// Comma-separated list of wanted audio languages; when set, seasons are
    /// checked for coverage of these languages instead of plain mixing
    #[arg(long)]
    wanted_languages: Option<String>,
}

/// Handles progress events and prints formatted output to stdout
fn handle_progress_event(event: ProgressEvent) {
    match event {
        ProgressEvent::FetchingSeries => {}
        ProgressEvent::SeriesFetched { count } => {
            println!("📦 Analyzing episodes of {} series...", count);
        }
        ProgressEvent::ProcessingSeries { .. } => {}
        ProgressEvent::SeriesFailed { title, error } => {
            println!("⚠️  Error while processing series '{}': {}", title, error);
        }
        ProgressEvent::Complete { .. } => {}
    }
}

/// Writes the findings to the destination selected on the command line:
/// a JSON file, JSON on stdout, or the console report.
fn write_output(cli: &Cli, findings: &[Finding]) -> Result<(), LanguagePatrolError> {
    if let Some(path) = &cli.output {
        let json = serde_json::to_string_pretty(findings)?;
        fs::write(path, json)?;
        println!("💾 Findings saved to: {}", path.display());
    } else if cli.json {
        println!("{}", serde_json::to_string_pretty(findings)?);
    } else {
        print!("{}", render_console(findings));
    }

    Ok(())
}

fn main() {
    // Load .env if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let policy = AuditPolicy {
        show_all: cli.show_all,
        ignore_unknown: cli.ignore_unknown,
        wanted_languages: parse_wanted_languages(
            cli.wanted_languages.as_deref().unwrap_or_default(),
        ),
    };

    let provider = SonarrProvider::new(&cli.url, &cli.apikey);
    println!("📡 Fetching data from Sonarr @ {} ...", provider.base_url());

    let findings = match audit_library(&provider, &policy, handle_progress_event) {
        Ok(findings) => findings,
        Err(e) => {
            eprintln!("❌ Error while contacting Sonarr: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = write_output(&cli, &findings) {
        eprintln!("❌ {}", e);
        process::exit(1);
    }
}
