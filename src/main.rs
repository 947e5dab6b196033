#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use velcross_core::catalogue;

const WINDOW_TITLE: &str = "Velcross Chronicles";

/// Velcross Chronicles - character and lore guide
#[derive(Parser, Debug)]
#[command(name = "velcross-desktop")]
#[command(about = "Velcross Chronicles - a romance fantasy character and lore guide")]
struct Args {
    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print the character and lore catalogue as JSON and exit
    #[arg(long)]
    dump_catalogue: bool,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    if args.dump_catalogue {
        let json = velcross_core::export_json(catalogue::characters(), catalogue::world_lore())?;
        println!("{json}");
        return Ok(());
    }

    // Malformed records only degrade the visuals, so report and carry on
    for issue in velcross_core::audit(catalogue::characters()) {
        tracing::warn!("catalogue: {}", issue);
    }

    tracing::info!(
        characters = catalogue::characters().len(),
        lore_entries = catalogue::world_lore().len(),
        "Starting Velcross Chronicles"
    );

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
