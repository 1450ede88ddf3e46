mod cli;
use cli::{Args, Subcommands};

mod preview;
use preview::Preview;

mod tables;
use tables::{DescriptorTable, SnapshotTable};

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use clap::Parser;
use cruise_countdown::{
    keys, Config, CountdownSnapshot, DefaultsSource, Provider, Renderer, SizeCategory, View,
    WidgetFamily, COUNTDOWN_WIDGET,
};
use path_macro::path;
use std::{env, io, thread};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config_dir = match args.config_dir {
        Some(dir) => dir,
        None => path![env::var("HOME")? / ".config" / "cruise-countdown"],
    };
    let config = Config::load(&config_dir)?;
    let shared = config.shared_defaults()?;
    let renderer = config.renderer();

    match args.subcommand {
        Subcommands::Snapshot => {
            let snapshot = Provider::new(shared).snapshot();
            println!("{}", SnapshotTable::new(&snapshot));
        }
        Subcommands::Placeholder => {
            let snapshot = CountdownSnapshot::placeholder(Utc::now());
            println!("{}", SnapshotTable::new(&snapshot));
        }
        Subcommands::Render {
            family,
            placeholder,
            json,
        } => {
            let provider = Provider::new(shared);
            let snapshot = if placeholder {
                provider.placeholder(Utc::now())
            } else {
                provider.snapshot()
            };
            print_view(&renderer.render(&snapshot, size_category(&family)), json)?;
        }
        Subcommands::Timeline => {
            let timeline = Provider::new(shared).timeline();
            println!("{}", SnapshotTable::from_timeline(&timeline));
            match timeline.next_reload() {
                Some(at) => println!("\nreload after {}", at.to_rfc3339()),
                None => println!("\nno reload scheduled"),
            }
        }
        Subcommands::Watch { family, iterations } => {
            watch(
                &Provider::new(shared),
                &renderer,
                size_category(&family),
                config.refresh_interval(),
                iterations,
            );
        }
        Subcommands::Info => {
            println!("{}", DescriptorTable::new(&COUNTDOWN_WIDGET));
        }
        Subcommands::Publish {
            cruise_name,
            ship_name,
            destination,
            departure,
            days_remaining,
        } => {
            DateTime::parse_from_rfc3339(&departure)
                .with_context(|| format!("invalid departure date: {departure}"))?;
            shared.update(|defaults| {
                defaults.set(keys::HAS_DATA, true);
                defaults.set(keys::CRUISE_NAME, cruise_name.as_str());
                defaults.set(keys::SHIP_NAME, ship_name.as_str());
                defaults.set(keys::DESTINATION, destination.as_str());
                defaults.set(keys::DEPARTURE_DATE, departure.as_str());
                defaults.set(keys::DAYS_REMAINING, i64::from(days_remaining));
            })?;
            info!(suite = %shared.path().display(), "published {cruise_name}");
        }
        Subcommands::Clear => {
            shared.update(|defaults| {
                for key in [
                    keys::CRUISE_NAME,
                    keys::SHIP_NAME,
                    keys::DESTINATION,
                    keys::DEPARTURE_DATE,
                    keys::DAYS_REMAINING,
                ] {
                    defaults.remove(key);
                }
                defaults.set(keys::HAS_DATA, false);
            })?;
            info!(suite = %shared.path().display(), "cleared published cruise");
        }
    };

    Ok(())
}

/// Unknown and unsupported families get the compact layout.
fn size_category(family: &str) -> SizeCategory {
    match WidgetFamily::lookup(family) {
        Some(family) => {
            if !COUNTDOWN_WIDGET.supports(family) {
                warn!(%family, "unsupported widget family, rendering compact layout");
            }
            SizeCategory::from(family)
        }
        None => {
            warn!(family, "unknown widget family, rendering compact layout");
            SizeCategory::Compact
        }
    }
}

fn print_view(view: &View, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(view)?);
    } else {
        println!("{}", Preview::new(view));
    }
    Ok(())
}

/// Stands in for the widget host: renders the timeline's entry, then sleeps
/// until the timeline asks to be reloaded.
fn watch<S: DefaultsSource>(
    provider: &Provider<S>,
    renderer: &Renderer,
    size: SizeCategory,
    min_interval: Duration,
    iterations: Option<usize>,
) {
    let mut rendered = 0;
    loop {
        let polled = Utc::now();
        let timeline = provider.timeline_at(polled);
        if let Some(entry) = timeline.current() {
            println!("{}", Preview::new(&renderer.render(entry, size)));
        }

        rendered += 1;
        if iterations.is_some_and(|limit| rendered >= limit) {
            return;
        }

        let Some(next) = timeline.next_poll(polled, min_interval) else {
            info!("timeline does not reload, stopping");
            return;
        };
        info!(next = %next.to_rfc3339(), "waiting for next poll");
        thread::sleep((next - Utc::now()).to_std().unwrap_or_default());
    }
}
