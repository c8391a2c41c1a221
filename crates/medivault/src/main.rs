// SPDX-FileCopyrightText: 2026 Medivault Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Medivault - a health portal engine with an emergency dispatch flow.
//!
//! This is the binary entry point for the Medivault CLI.

mod doctor;
mod emergency;
mod profile;
mod records;
mod register;

use clap::{Parser, Subcommand};

/// Medivault - a health portal engine with an emergency dispatch flow.
#[derive(Parser, Debug)]
#[command(name = "medivault", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Trigger an emergency dispatch.
    Emergency {
        /// Device latitude, if known.
        #[arg(long, requires = "longitude")]
        latitude: Option<f64>,
        /// Device longitude, if known.
        #[arg(long, requires = "latitude")]
        longitude: Option<f64>,
        /// Position accuracy in meters.
        #[arg(long, default_value_t = 50.0)]
        accuracy: f64,
        /// Also run voice analysis for this session id.
        #[arg(long)]
        voice_session: Option<String>,
    },
    /// Validate registration input and store the profile.
    Register(register::RegisterArgs),
    /// Manage medical records.
    Records {
        #[command(subcommand)]
        command: records::RecordsCommand,
    },
    /// Show or clear the stored user profile.
    Profile {
        #[command(subcommand)]
        command: profile::ProfileCommand,
    },
    /// Run environment diagnostic checks.
    Doctor {
        /// Disable colored output.
        #[arg(long)]
        plain: bool,
    },
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("medivault={log_level},warn")));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup
    let config = match medivault_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            medivault_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.portal.log_level);

    let result = match cli.command {
        Some(Commands::Emergency {
            latitude,
            longitude,
            accuracy,
            voice_session,
        }) => {
            emergency::run_emergency(&config, latitude, longitude, accuracy, voice_session).await
        }
        Some(Commands::Register(args)) => register::run_register(&config, args).await,
        Some(Commands::Records { command }) => records::run_records(&config, command).await,
        Some(Commands::Profile { command }) => profile::run_profile(&config, command).await,
        Some(Commands::Doctor { plain }) => doctor::run_doctor(&config, plain).await,
        None => {
            println!("medivault: use --help for available commands");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("medivault: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn binary_loads_config_defaults() {
        // Loads from an empty string so a medivault.toml on the host or
        // MEDIVAULT_* env vars cannot leak into the test.
        let config = medivault_config::load_and_validate_str("")
            .expect("default config should be valid");
        assert_eq!(config.portal.name, "medivault");
        assert_eq!(config.portal.log_level, "info");
    }
}
