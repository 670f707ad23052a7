//! bbc-e2e - End-to-end browser checks for the BBC news site
//!
//! Main entry point for the CLI runner.

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use bbc_e2e::browser::Session;
use bbc_e2e::{checks, Config, SuiteReport};

/// Which suite(s) to run
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Suite {
    /// News front page content checks
    News,
    /// Feedback form validation checks
    Feedback,
    /// Both suites, news first
    All,
}

/// End-to-end browser checks for the BBC news site
#[derive(Parser, Debug)]
#[command(name = "bbc-e2e")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Suite to run
    #[arg(long, short = 's', value_enum, default_value = "all")]
    suite: Suite,

    /// Run in headed browser mode (visible window)
    #[arg(long)]
    headed: bool,

    /// Chrome/Chromium executable path
    #[arg(long)]
    chrome: Option<String>,

    /// Navigation settle bound in seconds
    #[arg(long, short = 't')]
    timeout_secs: Option<u64>,

    /// Override the homepage URL (e.g. a recorded snapshot server)
    #[arg(long)]
    home_url: Option<String>,

    /// Override the feedback article URL
    #[arg(long)]
    feedback_url: Option<String>,

    /// Skip the HTTP reachability preflight
    #[arg(long)]
    no_preflight: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    // Build configuration
    let mut config = Config::load();

    // Apply CLI overrides
    if args.headed {
        config.browser.headed = true;
    }
    if let Some(ref chrome) = args.chrome {
        config.browser.chrome_path = Some(chrome.clone());
    }
    if let Some(timeout) = args.timeout_secs {
        config.wait.navigation_timeout_secs = timeout;
    }
    if let Some(ref url) = args.home_url {
        config.site.home_url = url.clone();
    }
    if let Some(ref url) = args.feedback_url {
        config.site.feedback_url = url.clone();
    }
    config.validate()?;

    if !args.no_preflight {
        let probe_url = match args.suite {
            Suite::Feedback => config.site.feedback_url.clone(),
            Suite::News | Suite::All => config.site.home_url.clone(),
        };
        Session::probe(&probe_url).await?;
    }

    let session = Session::launch(config).await?;

    let mut reports: Vec<SuiteReport> = Vec::new();
    if args.suite == Suite::News || args.suite == Suite::All {
        reports.push(checks::news::run(&session).await);
    }
    if args.suite == Suite::Feedback || args.suite == Suite::All {
        reports.push(checks::feedback::run(&session).await);
    }

    session.close().await?;

    let mut failed = 0;
    for report in &reports {
        print!("{}", report.format_summary());
        failed += report.failed();
    }

    if failed > 0 {
        anyhow::bail!("{} check(s) failed", failed);
    }
    Ok(())
}
