//! Spamscope - a terminal client for an email spam classifier
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use clap::Parser;

use spamscope_core::logging;
use spamscope_core::prelude::*;

/// Spamscope - classify emails as spam or ham from your terminal
#[derive(Parser, Debug)]
#[command(name = "spamscope")]
#[command(about = "A terminal client for an email spam classifier", long_about = None)]
struct Args {
    /// Base URL of the prediction service (overrides config)
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Section to open at startup: home, classifier, or about
    #[arg(long, value_name = "SECTION")]
    section: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    logging::init()?;

    let mut settings = spamscope_app::config::load_default_settings()?;
    if let Some(endpoint) = args.endpoint {
        info!(%endpoint, "endpoint override from command line");
        settings.server.base_url = endpoint;
    }

    spamscope_tui::run(settings, args.section.as_deref()).await
}
