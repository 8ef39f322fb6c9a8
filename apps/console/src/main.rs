use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use client_core::HttpStudentLookup;
use navigation::{Controller, Event, PanelView};
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    runtime::Handle,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod render;

use commands::{parse_line, Command, USAGE};
use config::{load_settings, parse_timeout_ms, Overrides};

#[derive(Parser, Debug)]
#[command(name = "gradebook", about = "Look up a student and drill down to class grades")]
struct Args {
    /// Optional TOML settings file.
    #[arg(long, default_value = "gradebook.toml")]
    config: PathBuf,
    #[arg(long)]
    api_base_url: Option<String>,
    #[arg(long, value_parser = parse_timeout_ms)]
    timeout_ms: Option<u64>,
    /// Search for this name before reading commands.
    #[arg(long)]
    name: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let settings = load_settings(
        &args.config,
        &Overrides {
            api_base_url: args.api_base_url,
            request_timeout_ms: args.timeout_ms,
        },
    );
    let lookup = HttpStudentLookup::new(&settings.api_base_url, settings.request_timeout())
        .with_context(|| format!("invalid api base url '{}'", settings.api_base_url))?;
    info!(
        students_url = %lookup.students_url(),
        timeout_ms = settings.request_timeout_ms,
        "gradebook: starting"
    );

    let mut controller = Controller::new(Arc::new(lookup), Handle::current());
    show(&controller.view());

    if let Some(name) = args.name {
        show(&controller.handle(Event::Submit { name }));
        show(&controller.settle().await);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read stdin")? else {
                    break;
                };
                match parse_line(&line) {
                    Command::Apply(event) => show(&controller.handle(event)),
                    Command::Help => println!("{USAGE}"),
                    Command::Quit => break,
                    Command::Invalid(input) => println!("unrecognized command '{input}'\n{USAGE}"),
                }
            }
            Some(event) = controller.next_resolution() => {
                show(&controller.handle(event));
            }
        }
    }

    info!("gradebook: bye");
    Ok(())
}

fn show(view: &PanelView) {
    println!("{}", render::render(view));
}
