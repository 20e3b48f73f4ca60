//! Calculator acceptance suite runner
//!
//! Launches one browser, runs every scenario against the calculator page and
//! writes an HTML (and optionally JSON) report. Exits non-zero when a
//! scenario fails.

use anyhow::Context;
use calculator_e2e::{BrowserSession, LaunchOptions, SuiteConfig, SuiteRunner, page::page_url};
use clap::Parser;
use std::{path::PathBuf, time::Duration};

#[derive(Parser, Debug)]
#[command(name = "calculator-e2e", version, about = "Run the calculator acceptance suite")]
struct Cli {
    /// Calculator page: file path or URL (default: $CALCULATOR_PAGE, then the bundled fixture).
    /// Installed binaries no longer see the bundled fixture and need one of the two.
    #[arg(long)]
    page: Option<String>,

    /// Force headless mode (headless is also implied by $CI)
    #[arg(long, conflicts_with = "headed")]
    headless: bool,

    /// Force a visible browser window
    #[arg(long)]
    headed: bool,

    /// Path to the Chrome/Chromium binary
    #[arg(long)]
    chrome: Option<PathBuf>,

    /// Only run scenarios whose name contains this text
    #[arg(long)]
    scenario: Option<String>,

    /// Seconds to wait for a calculation result
    #[arg(long)]
    result_timeout_secs: Option<u64>,

    /// HTML report path
    #[arg(long, default_value = "report.html")]
    html: PathBuf,

    /// Also write a JSON report here
    #[arg(long)]
    json: Option<PathBuf>,

    /// List scenarios and exit
    #[arg(long)]
    list: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = SuiteConfig::from_env();
    if let Some(page) = cli.page {
        config = config.page(page);
    }
    if let Some(secs) = cli.result_timeout_secs {
        config = config.result_timeout(Duration::from_secs(secs));
    }

    // Fail on a missing page before paying for a browser launch
    if !cli.list {
        page_url(&config.page)?;
    }

    let mut runner = SuiteRunner::new(config);
    if let Some(pattern) = &cli.scenario {
        runner = runner.filter(pattern);
    }

    if cli.list {
        for scenario in runner.scenarios() {
            println!("{:<24} {}", scenario.name, scenario.description);
        }
        return Ok(());
    }

    if runner.scenarios().is_empty() {
        anyhow::bail!("No scenario matches '{}'", cli.scenario.unwrap_or_default());
    }

    let mut options = LaunchOptions::from_env();
    if cli.headless {
        options = options.headless(true);
    }
    if cli.headed {
        options = options.headless(false);
    }
    if let Some(path) = cli.chrome {
        options = options.chrome_path(path);
    }

    let session = BrowserSession::launch(options).context("Failed to start browser")?;
    let report = runner.run(&session);
    // Release the browser before reporting, whatever the outcome
    session.close()?;
    let report = report.context("Suite could not start")?;

    report
        .write_html(&cli.html)
        .with_context(|| format!("Failed to write {}", cli.html.display()))?;
    log::info!("HTML report written to {}", cli.html.display());

    if let Some(path) = &cli.json {
        report
            .write_json(path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        log::info!("JSON report written to {}", path.display());
    }

    for scenario in &report.scenarios {
        let status = if scenario.passed() { "PASSED" } else { "FAILED" };
        println!("{:<24} {} ({} ms)", scenario.name, status, scenario.duration_ms);
    }
    println!("{} passed, {} failed", report.passed(), report.failed());

    if !report.is_success() {
        std::process::exit(1);
    }
    Ok(())
}
