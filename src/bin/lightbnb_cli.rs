// ABOUTME: LightBnB CLI - command-line access to property, user, and reservation lookups
// ABOUTME: Runs repository queries against the configured database and prints JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LightBnB
//!
//! Usage:
//! ```bash
//! # Cheapest properties in Vancouver rated 4 or better
//! lightbnb-cli properties --city Vancouver --minimum-rating 4
//!
//! # Properties between $100 and $250 a night, with room counts
//! lightbnb-cli properties --min-price 100 --max-price 250 --detailed --limit 20
//!
//! # Look up a user
//! lightbnb-cli user --email tristanjacobs@gmail.com
//!
//! # A guest's reservations
//! lightbnb-cli reservations --guest-id 1 --limit 5
//! ```

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use lightbnb_store::config::DatabaseConfig;
use lightbnb_store::database::repositories::{
    PropertyRepository, PropertyRepositoryImpl, ReservationRepository, ReservationRepositoryImpl,
    UserRepository, UserRepositoryImpl,
};
use lightbnb_store::database_plugins::factory::Database;
use lightbnb_store::logging::LoggingConfig;
use lightbnb_store::models::FilterOptions;
use serde::Serialize;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "lightbnb-cli",
    about = "LightBnB data-access CLI",
    long_about = "Search properties and look up users and reservations in a LightBnB database."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Search properties, cheapest first
    Properties {
        /// Substring of the city name
        #[arg(long)]
        city: Option<String>,

        /// Only properties owned by this user id
        #[arg(long)]
        owner_id: Option<i64>,

        /// Minimum nightly price in dollars
        #[arg(long)]
        min_price: Option<String>,

        /// Maximum nightly price in dollars
        #[arg(long)]
        max_price: Option<String>,

        /// Minimum average review rating
        #[arg(long)]
        minimum_rating: Option<String>,

        /// Maximum number of rows (default: `LISTING_DEFAULT_LIMIT`)
        #[arg(long)]
        limit: Option<u32>,

        /// Include bedroom, bathroom, and parking counts
        #[arg(long, short = 'd')]
        detailed: bool,
    },

    /// Look up one user by email or id
    User {
        /// User email
        #[arg(long, conflicts_with = "id")]
        email: Option<String>,

        /// User id
        #[arg(long)]
        id: Option<i64>,
    },

    /// List a guest's reservations
    Reservations {
        /// Guest user id
        #[arg(long)]
        guest_id: i64,

        /// Maximum number of rows (default: 10)
        #[arg(long)]
        limit: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        "debug".clone_into(&mut logging.level);
    }
    logging.init()?;

    let config = match cli.database_url.as_deref() {
        Some(url) => DatabaseConfig::for_url(url)?,
        None => DatabaseConfig::from_env()?,
    };

    info!("Connecting to database: {}", config.url);
    let database = Database::connect(&config).await?;
    info!("Using {}", database.backend_info());

    match cli.command {
        Command::Properties {
            city,
            owner_id,
            min_price,
            max_price,
            minimum_rating,
            limit,
            detailed,
        } => {
            let options = FilterOptions {
                city,
                owner_id,
                minimum_price_per_night: min_price,
                maximum_price_per_night: max_price,
                minimum_rating,
            };
            let limit = Some(limit.unwrap_or(config.default_listing_limit));
            let properties = PropertyRepositoryImpl::new(database);
            let listings = if detailed {
                properties.get_all_properties_detailed(&options, limit).await?
            } else {
                properties.get_all_properties(&options, limit).await?
            };
            print_json(&listings)?;
        }
        Command::User { email, id } => {
            let users = UserRepositoryImpl::new(database);
            let user = match (email, id) {
                (Some(email), _) => users.get_user_with_email(&email).await?,
                (None, Some(id)) => users.get_user_with_id(id).await?,
                (None, None) => bail!("Pass either --email or --id"),
            };
            print_json(&user)?;
        }
        Command::Reservations { guest_id, limit } => {
            let reservations = ReservationRepositoryImpl::new(database)
                .get_all_reservations(guest_id, limit)
                .await?;
            print_json(&reservations)?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
