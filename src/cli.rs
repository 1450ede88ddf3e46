use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Configuration directory (default: $HOME/.config/cruise-countdown)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    #[clap(subcommand)]
    pub subcommand: Subcommands,
}

#[derive(Subcommand)]
pub enum Subcommands {
    /// Print the current countdown snapshot
    Snapshot,
    /// Print the placeholder snapshot
    Placeholder,
    /// Render the widget
    Render {
        /// Widget family to render for (small, medium, ...)
        #[arg(short, long, default_value = "small")]
        family: String,

        /// Render the placeholder instead of the published cruise
        #[arg(short, long, default_value_t = false)]
        placeholder: bool,

        /// Print the view description as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print the current timeline and when it should be reloaded
    Timeline,
    /// Keep rendering the widget, polling for new data
    Watch {
        /// Widget family to render for (small, medium, ...)
        #[arg(short, long, default_value = "small")]
        family: String,

        /// Stop after this many renders
        #[arg(short = 'n', long)]
        iterations: Option<usize>,
    },
    /// Print information about the widget
    Info,
    /// Publish a cruise, as the host application would
    Publish {
        /// Name of the cruise
        #[arg(long)]
        cruise_name: String,

        /// Name of the ship
        #[arg(long)]
        ship_name: String,

        /// Destination
        #[arg(long, default_value = "")]
        destination: String,

        /// Departure date and time (RFC 3339)
        #[arg(long)]
        departure: String,

        /// Days left until departure
        #[arg(long)]
        days_remaining: u32,
    },
    /// Clear the published cruise, as the host application would
    Clear,
}
