//! # couchgraph
//!
//! couchgraph is a small social network demo: users with friends, searchable by name,
//! viewed from the perspective of an impersonated user.
#![warn(missing_docs)]
#![cfg_attr(
    feature = "rorm-main",
    allow(dead_code, unused_variables, unused_imports)
)]

use std::fs::read_to_string;
use std::path::Path;

use actix_toolbox::logging::setup_logging;
use clap::{Parser, Subcommand};
use log::{error, info};
use rorm::{Database, DatabaseConfiguration, DatabaseDriver};

use crate::config::Config;
use crate::graph::SeedOptions;
use crate::server::start_server;

pub mod config;
pub mod graph;
pub mod models;
pub mod server;

/// The possible commands for couchgraph
#[derive(Subcommand)]
pub enum Command {
    /// Start the server
    Start,
    /// Fill an empty database with random users and friendships
    Seed {
        /// The number of users to create, overrides the config file
        #[clap(long)]
        users: Option<usize>,
        /// The number of friends to draw for every user, overrides the config file
        #[clap(long)]
        friends: Option<usize>,
    },
    /// Delete all users and friendships
    Reset,
}

/// The cli parser for couchgraph
#[derive(Parser)]
#[clap(version, about = "A social graph demo server")]
pub struct Cli {
    #[clap(long = "config-path")]
    #[clap(help = "Specify an alternative path to the config file")]
    #[clap(default_value_t = String::from("/etc/couchgraph/config.toml"))]
    config_path: String,

    #[clap(subcommand)]
    command: Command,
}

#[rorm::rorm_main]
#[tokio::main]
async fn main() -> Result<(), String> {
    let cli = Cli::parse();

    let conf = get_conf(&cli.config_path)?;

    setup_logging(&conf.logging)?;

    let db = get_db(&conf).await?;
    info!("Connected to database");

    match cli.command {
        Command::Start => {
            if let Err(err) = start_server(&conf, db).await {
                error!("Error while starting server: {err}");
                return Err(err.to_string());
            }
        }
        Command::Seed { users, friends } => {
            let options = SeedOptions {
                user_count: users.unwrap_or(conf.seed.user_count),
                friends_per_user: friends.unwrap_or(conf.seed.friends_per_user),
            };

            let summary = graph::seed(&db, options)
                .await
                .map_err(|err| err.to_string())?;

            info!(
                "Created {} users with {} friendships",
                summary.users, summary.friendships
            );
        }
        Command::Reset => {
            let summary = graph::reset(&db)
                .await
                .map_err(|err| format!("Could not reset database: {err}"))?;

            info!(
                "Deleted {} users with {} friendships",
                summary.users, summary.friendships
            );
        }
    }

    Ok(())
}

/// Retrieve a [Config] by Path
///
/// **Parameter**:
/// - `config_path`: [&str]
fn get_conf(config_path: &str) -> Result<Config, String> {
    let path = Path::new(config_path);

    if !path.exists() {
        return Err(format!("File {config_path} does not exist"));
    }

    if !path.is_file() {
        return Err(format!("{config_path} is a directory"));
    }

    let config_str =
        read_to_string(path).map_err(|err| format!("Could not read config file: {err}"))?;

    let config: Config =
        toml::from_str(&config_str).map_err(|err| format!("Could not parse config file: {err}"))?;

    Ok(config)
}

/// Retrieves the database using the provided config.
///
/// If the connection fails, an error is returned
async fn get_db(config: &Config) -> Result<Database, String> {
    let c = DatabaseConfiguration {
        driver: DatabaseDriver::Postgres {
            host: config.database.host.clone(),
            port: config.database.port,
            name: config.database.name.clone(),
            user: config.database.user.clone(),
            password: config.database.password.clone(),
        },
        min_connections: 2,
        max_connections: 20,
        disable_logging: Some(true),
        statement_log_level: None,
        slow_statement_log_level: None,
    };

    Database::connect(c)
        .await
        .map_err(|e| format!("Error connecting to database: {e}"))
}
