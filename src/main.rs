// Barbershop Simulator - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/barbershop-simulator
// ```
//
// Or with custom configuration:
//
// ```console
// $ ./target/release/barbershop-simulator --barbers 3 --chairs 5 --customers 50 --verbose
// ```

use anyhow::Context;
use barbershop_simulator::simulation::{LoggingConfig, ShopSimulation, SimulationReport};
use barbershop_simulator::types::config::CliArgs;
use barbershop_simulator::types::SimulationConfig;
use clap::Parser;
use std::process;
use tracing::{error, info};

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        let default_config = SimulationConfig::default();
        match default_config.print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    // Initialize logging based on CLI flags
    let logging_result = if args.debug {
        LoggingConfig::init_debug()
    } else if args.verbose {
        LoggingConfig::init_verbose()
    } else {
        // Default: minimal logging for normal users
        LoggingConfig::new().with_level(tracing::Level::WARN).init()
    };

    if let Err(e) = logging_result {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Starting Barbershop Simulator");

    // Load configuration from CLI arguments and optional config file
    let config = match SimulationConfig::from_cli_args(args.clone()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        process::exit(1);
    }

    info!("Configuration loaded and validated successfully");

    // Handle dry run mode
    if args.dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - simulation will not be executed.");
        print_configuration_summary(&config);
        return;
    }

    print_startup_banner(&config);

    // Run the simulation
    info!("Starting simulation");
    match run_simulation(config) {
        Ok(report) => {
            eprintln!("{}", report.summary());
            info!("Barbershop Simulator completed successfully");
        }
        Err(e) => {
            error!("Simulation failed: {:#}", e);
            process::exit(1);
        }
    }
}

/// Open the shop and drive all agents to completion.
fn run_simulation(config: SimulationConfig) -> anyhow::Result<SimulationReport> {
    let simulation = ShopSimulation::new(config).context("failed to open the shop")?;
    let report = simulation.run().context("simulation run failed")?;

    if !report.is_conserved() {
        anyhow::bail!(
            "visit accounting broken: {} served + {} rejected != {} submitted",
            report.customers_served,
            report.customers_rejected,
            report.customers_submitted
        );
    }

    Ok(report)
}

/// Print startup banner and configuration summary
fn print_startup_banner(config: &SimulationConfig) {
    eprintln!("Barbershop Simulator");
    eprintln!("====================");
    eprintln!("Customer and barber threads coordinated through one shop monitor");
    eprintln!();

    print_configuration_summary(config);
}

/// Print configuration summary
fn print_configuration_summary(config: &SimulationConfig) {
    eprintln!("Configuration:");
    eprintln!("  Barbers: {}", config.barbers);
    eprintln!("  Waiting Chairs: {}", config.chairs);
    eprintln!("  Customers: {}", config.customers);
    eprintln!(
        "  Hair-cut Duration: {} - {} ms",
        config.min_service_ms, config.max_service_ms
    );
    eprintln!(
        "  Arrival Gap: {} - {} ms",
        config.min_arrival_gap_ms, config.max_arrival_gap_ms
    );
    if let Some(seed) = config.seed {
        eprintln!("  Random Seed: {}", seed);
    }
    eprintln!();
}
