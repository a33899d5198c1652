use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "propz")]
#[command(about = "Browse a local property dataset and keep a favourites list", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the property dataset (JSON)
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search properties with filters
    #[command(alias = "s")]
    Search {
        /// Property type, e.g. house or flat ("all" for no constraint)
        #[arg(short = 't', long = "type")]
        kind: Option<String>,

        /// Minimum price
        #[arg(long)]
        min_price: Option<f64>,

        /// Maximum price
        #[arg(long)]
        max_price: Option<f64>,

        /// Minimum number of bedrooms
        #[arg(long)]
        min_beds: Option<f64>,

        /// Maximum number of bedrooms
        #[arg(long)]
        max_beds: Option<f64>,

        /// Only properties added on or after this date (YYYY-MM-DD)
        #[arg(long)]
        since: Option<NaiveDate>,

        /// Postcode area (exact) or location fragment, e.g. NW1
        #[arg(short, long)]
        postcode: Option<String>,
    },

    /// List every property
    #[command(alias = "ls")]
    List,

    /// Show full details for one property
    #[command(alias = "v")]
    View {
        /// Property id, e.g. prop1
        id: String,
    },

    /// Manage the favourites list
    #[command(alias = "f")]
    Fav {
        #[command(subcommand)]
        action: Option<FavAction>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., data-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum FavAction {
    /// Add a property to favourites
    Add {
        /// Property id
        id: String,
    },

    /// Remove a property from favourites
    #[command(alias = "remove")]
    Rm {
        /// Property id
        id: String,
    },

    /// Add if absent, remove if present
    Toggle {
        /// Property id
        id: String,
    },

    /// Remove every favourite
    Clear,
}
