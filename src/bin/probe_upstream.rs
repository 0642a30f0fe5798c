//! One-shot lookup against the upstream with the gateway's own config, printing
//! the JSON the gateway would return. Handy for checking credentials.
//!
//! ```bash
//! cargo run --bin probe_upstream -- --config config.toml vehicle AB12345
//! cargo run --bin probe_upstream -- person "+47 123 45 678"
//! ```

use anyhow::Context;
use bisnode_gateway::core::classify::recover_no_results;
use bisnode_gateway::domain::model::MotorVehicleSearchRequest;
use bisnode_gateway::utils::{logger, validation::Validate};
use bisnode_gateway::{AppState, BisnodeClient, GatewayConfig};
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "probe_upstream")]
#[command(about = "Run a single Bisnode search from the command line")]
struct ProbeArgs {
    #[arg(long, short, default_value = "config.toml")]
    config: String,

    #[arg(long, help = "Enable verbose output")]
    verbose: bool,

    #[command(subcommand)]
    lookup: Lookup,
}

#[derive(Debug, Subcommand)]
enum Lookup {
    /// Directory search by mobile number
    Person { mobile_number: String },
    /// Directory search by organization number
    Organization { org_no: String },
    /// Motor vehicle search by license number or VIN
    Vehicle { search_term: String },
    /// Older single-record person lookup
    LegacyPerson { mobile_number: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = ProbeArgs::parse();

    let config = GatewayConfig::from_file(&args.config)
        .with_context(|| format!("Failed to load configuration from {}", args.config))?;
    logger::init_logger(&config.logging.level, args.verbose, false);
    config.bisnode.validate().context("Invalid [bisnode] section")?;

    let state = AppState::from_client(BisnodeClient::new(&config.bisnode)?);

    let output = match args.lookup {
        Lookup::Person { mobile_number } => serde_json::to_string_pretty(&recover_no_results(
            state.directory.search_by_mobile_number(&mobile_number).await,
        )?)?,
        Lookup::Organization { org_no } => serde_json::to_string_pretty(&recover_no_results(
            state.directory.search_by_organization_number(&org_no).await,
        )?)?,
        Lookup::Vehicle { search_term } => {
            let request = MotorVehicleSearchRequest {
                license_number: search_term,
                vin: String::new(),
            };
            serde_json::to_string_pretty(&recover_no_results(
                state.motor_vehicles.search(&request).await,
            )?)?
        }
        Lookup::LegacyPerson { mobile_number } => serde_json::to_string_pretty(
            &state.persons.search_by_mobile_number(&mobile_number).await?,
        )?,
    };

    println!("{}", output);
    Ok(())
}
