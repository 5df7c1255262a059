//! This module holds the configuration for the server

use std::net::IpAddr;

use actix_toolbox::logging::LoggingConfig;
use serde::Deserialize;

use crate::graph::SeedOptions;

/// Configuration regarding the server
#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct ServerConfig {
    /// The address the server should bind to
    pub listen_address: IpAddr,
    /// The port the server should bind to
    pub listen_port: u16,
}

/// Configuration regarding the database
#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct DatabaseConfig {
    /// Host of the postgres server
    pub host: String,
    /// Port of the postgres server
    pub port: u16,
    /// Name of the database
    pub name: String,
    /// User to connect as
    pub user: String,
    /// Password of the user
    pub password: String,
}

/// This struct can be parsed from the configuration file
#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct Config {
    /// Configuration regarding the server
    pub server: ServerConfig,
    /// Configuration regarding the database
    pub database: DatabaseConfig,
    /// The size of the generated demo data
    #[serde(default)]
    pub seed: SeedOptions,
    /// The logging configuration
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATABASE: &str = r#"
[Server]
ListenAddress = "127.0.0.1"
ListenPort = 8080

[Database]
Host = "localhost"
Port = 5432
Name = "couchgraph"
User = "couchgraph"
Password = "change-me"
"#;

    #[derive(Deserialize)]
    #[serde(rename_all = "PascalCase")]
    struct Partial {
        server: ServerConfig,
        database: DatabaseConfig,
        #[serde(default)]
        seed: SeedOptions,
    }

    #[test]
    fn parse_server_and_database() {
        let conf: Partial = toml::from_str(DATABASE).unwrap();

        assert_eq!(conf.server.listen_port, 8080);
        assert_eq!(conf.server.listen_address, IpAddr::from([127, 0, 0, 1]));
        assert_eq!(conf.database.port, 5432);
        assert_eq!(conf.database.name, "couchgraph");
        assert_eq!(conf.seed, SeedOptions::default());
    }

    #[test]
    fn parse_seed_section() {
        let raw = format!("{DATABASE}\n[Seed]\nUserCount = 20\nFriendsPerUser = 3\n");
        let conf: Partial = toml::from_str(&raw).unwrap();

        assert_eq!(conf.seed.user_count, 20);
        assert_eq!(conf.seed.friends_per_user, 3);
    }

    #[test]
    fn partial_seed_section_uses_defaults() {
        let raw = format!("{DATABASE}\n[Seed]\nUserCount = 20\n");
        let conf: Partial = toml::from_str(&raw).unwrap();

        assert_eq!(conf.seed.user_count, 20);
        assert_eq!(conf.seed.friends_per_user, 10);

        let raw = format!("{DATABASE}\n[Seed]\nFriendsPerUser = 4\n");
        let conf: Partial = toml::from_str(&raw).unwrap();

        assert_eq!(conf.seed.user_count, 100);
        assert_eq!(conf.seed.friends_per_user, 4);
    }
}
