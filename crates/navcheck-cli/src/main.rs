//! navcheck CLI - browser-based home page verification
//!
//! Usage:
//!   navcheck run                    Run every verification scenario
//!   navcheck run --scenario text    Run selected scenarios only
//!   navcheck list                   Print the element registry
//!
//! Exit codes: 0 when every step passed, 1 when any step failed,
//! 2 on setup failure (browser launch, configuration).

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use navcheck_browser::runner::{run_all, Scenario};
use navcheck_core::descriptor::{home_page_elements, ElementDescriptor};
use navcheck_core::report::{FailureKind, RunReport, StepStatus};
use navcheck_core::CheckConfig;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "navcheck")]
#[command(author, version, about = "Browser-based home page verification")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run verification scenarios against the live page
    Run {
        /// Override the base URL
        #[arg(long)]
        url: Option<String>,

        /// Run with a visible browser window
        #[arg(long)]
        headed: bool,

        /// Expectation timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// Run only the named scenarios (visibility, text, links, theme, hero)
        #[arg(long = "scenario")]
        scenarios: Vec<Scenario>,

        /// Emit the run report as JSON
        #[arg(long)]
        json: bool,

        /// Configuration file (TOML)
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Print the element registry
    List {
        /// Emit the registry as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Warning: failed to initialize logging");
    }

    match execute(cli.command).await {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            std::process::exit(2);
        }
    }
}

async fn execute(command: Commands) -> Result<i32> {
    match command {
        Commands::Run {
            url,
            headed,
            timeout,
            scenarios,
            json,
            config,
        } => {
            let mut check_config = match config {
                Some(path) => CheckConfig::load_or_default(&path)
                    .with_context(|| format!("Failed to load config from {}", path.display()))?,
                None => CheckConfig::default(),
            };
            if let Some(url) = url {
                check_config.base_url = url;
            }
            if headed {
                check_config.headless = false;
            }
            if let Some(seconds) = timeout {
                check_config.timeout_seconds = seconds;
            }

            let selected: Vec<Scenario> = if scenarios.is_empty() {
                Scenario::ALL.to_vec()
            } else {
                scenarios
            };

            info!(
                "Running {} scenario(s) against {}",
                selected.len(),
                check_config.base_url
            );

            let report = run_all(&selected, &check_config)
                .await
                .context("Verification run failed")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", render_run_report(&report));
            }

            Ok(if report.passed() { 0 } else { 1 })
        }

        Commands::List { json } => {
            let elements = home_page_elements();
            if json {
                println!("{}", serde_json::to_string_pretty(&elements)?);
            } else {
                print!("{}", render_registry(&elements));
            }
            Ok(0)
        }
    }
}

/// Human-readable run report: per-scenario step lines plus a summary
fn render_run_report(report: &RunReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("Verifying {}\n", report.base_url));

    for scenario in &report.scenarios {
        let title = Scenario::ALL
            .iter()
            .find(|s| s.name() == scenario.scenario)
            .map(|s| s.title())
            .unwrap_or(scenario.scenario.as_str());
        out.push_str(&format!("\n{}\n", title));

        for step in &scenario.steps {
            match &step.status {
                StepStatus::Passed => {
                    out.push_str(&format!("  PASS  {}\n", step.step));
                }
                StepStatus::Failed {
                    kind,
                    expected,
                    actual,
                } => {
                    out.push_str(&format!("  FAIL  {}: {}\n", step.step, describe(*kind)));
                    if let Some(expected) = expected {
                        out.push_str(&format!("        expected: {}\n", expected));
                    }
                    if let Some(actual) = actual {
                        out.push_str(&format!("        observed: {}\n", actual));
                    }
                }
            }
        }
    }

    let total = report.total_steps();
    let failed = report.failed_steps();
    out.push_str(&format!(
        "\nSummary: {}/{} steps passed, {} failed\n",
        total - failed,
        total,
        failed
    ));
    out
}

fn describe(kind: FailureKind) -> &'static str {
    match kind {
        FailureKind::ElementNotFound => "element not found",
        FailureKind::AmbiguousLocator => "locator matched multiple elements",
        FailureKind::NotVisible => "element is not visible",
        FailureKind::TextMismatch => "text mismatch",
        FailureKind::AttributeMismatch => "attribute mismatch",
        FailureKind::Navigation => "page load failed",
        FailureKind::Browser => "browser error",
    }
}

/// Registry table: name, locator, expected text/href
fn render_registry(elements: &[ElementDescriptor]) -> String {
    let mut out = String::new();
    for descriptor in elements {
        out.push_str(&format!("{}\n", descriptor.name));
        out.push_str(&format!("  locator: {}\n", descriptor.locator));
        if let Some(text) = &descriptor.expected_text {
            out.push_str(&format!("  text:    {}\n", text));
        }
        if let Some(href) = &descriptor.expected_href {
            out.push_str(&format!("  href:    {}\n", href));
        }
    }
    out
}
