//! Lectio CLI Application
//!
//! Command-line interface for the lectio reading plan tracker.

mod args;
mod cli;
mod display;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use jiff::Zoned;
use lectio_core::PlannerBuilder;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        today,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::for_stdout(!no_color);
    let today = today.unwrap_or_else(|| Zoned::now().date());

    info!("Lectio started for {today}");

    let cli = Cli::new(planner, renderer, today);
    match command {
        Some(Plan { command }) => cli.handle_plan_command(command).await,
        Some(Read(args)) => cli.set_read(args, true).await,
        Some(Unread(args)) => cli.set_read(args, false).await,
        Some(Status(args)) => cli.show_status(args).await,
        Some(Progress) => cli.show_progress().await,
        Some(Reset(args)) => cli.reset(args).await,
        Some(Today) | None => cli.show_today().await,
    }
}
