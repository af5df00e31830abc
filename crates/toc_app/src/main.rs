mod cli;
mod config;
mod effects;
mod output;

use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser as _;
use log::LevelFilter;
use toc_logging::toc_debug;
use toc_session::{AppState, Msg};

use crate::cli::{Cli, Command};
use crate::effects::EffectRunner;

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(err) = try_main().await {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn try_main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    toc_logging::initialize(cli.log.into(), level);
    toc_debug!("parsed cli: {:?}", cli);

    let config = config::load(cli.config.as_deref()).context("load configuration")?;
    let runner = EffectRunner::new(config.fetch.to_settings());

    let msg = match &cli.command {
        Command::Toc(args) => Msg::TocRequested {
            url: args.url.clone(),
            item_class: args.item_class.clone().unwrap_or(config.item_class.clone()),
        },
        Command::Page(args) => Msg::PageRequested {
            url: args.url.clone(),
            title_class: args.title_class.clone().unwrap_or(config.title_class.clone()),
            content_id: args.content_id.clone().unwrap_or(config.content_id.clone()),
        },
    };

    let (_, view) = runner.drive(AppState::new(), msg).await;
    let fetched_at = chrono::Utc::now().to_rfc3339();
    let rendered = match cli.command {
        Command::Toc(_) => output::render_toc(&view, &fetched_at).context("fetch toc")?,
        Command::Page(_) => output::render_page(&view, &fetched_at).context("fetch page")?,
    };
    println!("{rendered}");

    Ok(())
}
