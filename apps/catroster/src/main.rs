use std::sync::Arc;

use anyhow::{bail, Result};
use clap::Parser;
use widget_core::{RenderState, RenderTarget, RosterWidget};

mod config;

use config::load_settings;

#[derive(Parser, Debug)]
struct Args {
    /// Roster feed URL; overrides the configured endpoint.
    #[arg(long)]
    url: Option<String>,
}

struct StdoutTarget;

impl RenderTarget for StdoutTarget {
    fn replace_content(&self, markup: &str) {
        println!("{markup}");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(url) = args.url {
        settings.api_url = url;
    }

    let widget = RosterWidget::new(settings.widget_config(), Arc::new(StdoutTarget));
    widget.start().await;

    match widget.state().await {
        RenderState::Error(message) => bail!("roster fetch failed: {message}"),
        _ => Ok(()),
    }
}
