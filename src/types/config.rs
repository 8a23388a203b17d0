//! Configuration structures for the barbershop simulator
//!
//! This module contains the immutable shop configuration consumed by the
//! monitor, the wider simulation configuration consumed by the driver, and
//! the CLI/config-file loading and validation logic.

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Immutable construction input of the shop monitor.
///
/// Fixed for the lifetime of the [`Shop`](crate::shop::Shop) it configures.
/// `chair_capacity` may be zero: such a shop has no waiting room and every
/// visit is a direct hand-off to an idle barber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Number of barbers working the shop (1-based indices 1..=barber_count)
    pub barber_count: usize,

    /// Number of waiting chairs in the shop
    pub chair_capacity: usize,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self { barber_count: 1, chair_capacity: 3 }
    }
}

impl ShopConfig {
    /// Create a validated shop configuration.
    pub fn new(barber_count: usize, chair_capacity: usize) -> Result<Self, ConfigValidationError> {
        let config = Self { barber_count, chair_capacity };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration parameters.
    ///
    /// `chair_capacity` has no lower bound; zero is a legal shop with no
    /// waiting room.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.barber_count == 0 {
            return Err(ConfigValidationError::InvalidBarberCount(self.barber_count));
        }
        Ok(())
    }
}

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "barbershop-simulator",
    version = "0.1.0",
    about = "Barbershop Simulator - runs customer and barber threads against one shop monitor",
    long_about = "Simulates a barbershop with a fixed number of barbers and a bounded waiting \
area. Each customer and each barber runs on its own thread; all coordination goes through one \
monitor guarding the waiting chairs, the service chairs, and the payment handshake.

EXAMPLES:
    # Run with default settings (1 barber, 3 chairs, 20 customers)
    barbershop-simulator

    # Use a configuration file
    barbershop-simulator --config config.json

    # Override specific settings
    barbershop-simulator --barbers 3 --chairs 5 --customers 50

    # Generate configuration template
    barbershop-simulator --print-config > my-config.json

    # Validate configuration without running
    barbershop-simulator --config my-config.json --dry-run

    # Enable verbose logging
    barbershop-simulator --verbose

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file format: JSON (.json)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Number of barbers working the shop
    #[arg(
        long,
        help = "Number of barbers",
        long_help = "Number of barbers working the shop. Must be at least 1. Default: 1"
    )]
    pub barbers: Option<usize>,

    /// Number of waiting chairs
    #[arg(
        long,
        help = "Number of waiting chairs",
        long_help = "Number of waiting chairs. Zero means customers are handed straight to an \
idle barber or turned away. Default: 3"
    )]
    pub chairs: Option<usize>,

    /// Number of customers to send through the shop
    #[arg(
        long,
        help = "Number of customers to simulate",
        long_help = "Total number of customer visits in the simulation. Must be at least 1. \
Default: 20"
    )]
    pub customers: Option<usize>,

    /// Minimum hair-cut duration in milliseconds
    #[arg(long, help = "Minimum hair-cut duration (ms)")]
    pub min_service_ms: Option<u64>,

    /// Maximum hair-cut duration in milliseconds
    #[arg(long, help = "Maximum hair-cut duration (ms)")]
    pub max_service_ms: Option<u64>,

    /// Minimum gap between customer arrivals in milliseconds
    #[arg(long, help = "Minimum gap between arrivals (ms)")]
    pub min_arrival_gap_ms: Option<u64>,

    /// Maximum gap between customer arrivals in milliseconds
    #[arg(long, help = "Maximum gap between arrivals (ms)")]
    pub max_arrival_gap_ms: Option<u64>,

    /// Random seed for reproducible results
    #[arg(long, help = "Random seed for reproducible timing")]
    pub seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration without running the simulation
    #[arg(long, help = "Validate configuration without running the simulation")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Number of barbers working the shop
    pub barbers: Option<usize>,

    /// Number of waiting chairs
    pub chairs: Option<usize>,

    /// Number of customers to send through the shop
    pub customers: Option<usize>,

    /// Minimum hair-cut duration in milliseconds
    pub min_service_ms: Option<u64>,

    /// Maximum hair-cut duration in milliseconds
    pub max_service_ms: Option<u64>,

    /// Minimum gap between customer arrivals in milliseconds
    pub min_arrival_gap_ms: Option<u64>,

    /// Maximum gap between customer arrivals in milliseconds
    pub max_arrival_gap_ms: Option<u64>,

    /// Random seed for reproducible results
    pub seed: Option<u64>,
}

/// Configuration for a full simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of barbers working the shop
    pub barbers: usize,

    /// Number of waiting chairs
    pub chairs: usize,

    /// Number of customers to send through the shop
    pub customers: usize,

    /// Minimum hair-cut duration in milliseconds
    pub min_service_ms: u64,

    /// Maximum hair-cut duration in milliseconds
    pub max_service_ms: u64,

    /// Minimum gap between customer arrivals in milliseconds
    pub min_arrival_gap_ms: u64,

    /// Maximum gap between customer arrivals in milliseconds
    pub max_arrival_gap_ms: u64,

    /// Random seed for reproducible timing
    pub seed: Option<u64>,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for shop and simulation configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// Barber count is invalid
    #[error("Barber count must be at least 1, got {0}")]
    InvalidBarberCount(usize),

    /// Customer count is invalid
    #[error("Customer count must be at least 1, got {0}")]
    InvalidCustomerCount(usize),

    /// Service duration range is invalid
    #[error("Invalid service duration range: min ({0}ms) must be <= max ({1}ms)")]
    InvalidServiceRange(u64, u64),

    /// Arrival gap range is invalid
    #[error("Invalid arrival gap range: min ({0}ms) must be <= max ({1}ms)")]
    InvalidArrivalGapRange(u64, u64),
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            barbers: 1,
            chairs: 3,
            customers: 20,
            min_service_ms: 20,
            max_service_ms: 80,
            min_arrival_gap_ms: 0,
            max_arrival_gap_ms: 15,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Create a new configuration from command line arguments and optional config file
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::from_cli_args(args)
    }

    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        // Start with default configuration
        let mut config = Self::default();

        // Load from config file if specified
        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // Override with command line arguments (CLI takes precedence)
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            barbers: config_file.barbers.unwrap_or(defaults.barbers),
            chairs: config_file.chairs.unwrap_or(defaults.chairs),
            customers: config_file.customers.unwrap_or(defaults.customers),
            min_service_ms: config_file.min_service_ms.unwrap_or(defaults.min_service_ms),
            max_service_ms: config_file.max_service_ms.unwrap_or(defaults.max_service_ms),
            min_arrival_gap_ms: config_file
                .min_arrival_gap_ms
                .unwrap_or(defaults.min_arrival_gap_ms),
            max_arrival_gap_ms: config_file
                .max_arrival_gap_ms
                .unwrap_or(defaults.max_arrival_gap_ms),
            seed: config_file.seed.or(defaults.seed),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.barbers {
            config.barbers = value;
        }
        if let Some(value) = args.chairs {
            config.chairs = value;
        }
        if let Some(value) = args.customers {
            config.customers = value;
        }
        if let Some(value) = args.min_service_ms {
            config.min_service_ms = value;
        }
        if let Some(value) = args.max_service_ms {
            config.max_service_ms = value;
        }
        if let Some(value) = args.min_arrival_gap_ms {
            config.min_arrival_gap_ms = value;
        }
        if let Some(value) = args.max_arrival_gap_ms {
            config.max_arrival_gap_ms = value;
        }
        if let Some(value) = args.seed {
            config.seed = Some(value);
        }
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.shop_config().validate()?;

        if self.customers == 0 {
            return Err(ConfigValidationError::InvalidCustomerCount(self.customers));
        }

        if self.min_service_ms > self.max_service_ms {
            return Err(ConfigValidationError::InvalidServiceRange(
                self.min_service_ms,
                self.max_service_ms,
            ));
        }

        if self.min_arrival_gap_ms > self.max_arrival_gap_ms {
            return Err(ConfigValidationError::InvalidArrivalGapRange(
                self.min_arrival_gap_ms,
                self.max_arrival_gap_ms,
            ));
        }

        Ok(())
    }

    /// The shop-monitor slice of this configuration.
    pub fn shop_config(&self) -> ShopConfig {
        ShopConfig { barber_count: self.barbers, chair_capacity: self.chairs }
    }

    /// Get the service duration range as a tuple
    pub fn service_ms(&self) -> (u64, u64) {
        (self.min_service_ms, self.max_service_ms)
    }

    /// Get the arrival gap range as a tuple
    pub fn arrival_gap_ms(&self) -> (u64, u64) {
        (self.min_arrival_gap_ms, self.max_arrival_gap_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_args() -> CliArgs {
        CliArgs {
            config: None,
            barbers: None,
            chairs: None,
            customers: None,
            min_service_ms: None,
            max_service_ms: None,
            min_arrival_gap_ms: None,
            max_arrival_gap_ms: None,
            seed: None,
            verbose: false,
            debug: false,
            dry_run: false,
            print_config: false,
        }
    }

    #[test]
    fn test_shop_config_default() {
        let config = ShopConfig::default();
        assert_eq!(config.barber_count, 1);
        assert_eq!(config.chair_capacity, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_shop_config_rejects_zero_barbers() {
        match ShopConfig::new(0, 3) {
            Err(ConfigValidationError::InvalidBarberCount(0)) => {}
            other => panic!("expected InvalidBarberCount, got {:?}", other),
        }
    }

    #[test]
    fn test_shop_config_allows_zero_chairs() {
        let config = ShopConfig::new(2, 0).unwrap();
        assert_eq!(config.chair_capacity, 0);
    }

    #[test]
    fn test_simulation_config_default() {
        let config = SimulationConfig::default();

        assert_eq!(config.barbers, 1);
        assert_eq!(config.chairs, 3);
        assert_eq!(config.customers, 20);
        assert_eq!(config.service_ms(), (20, 80));
        assert_eq!(config.arrival_gap_ms(), (0, 15));
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_parsing() {
        let args = CliArgs::try_parse_from(["test", "--barbers", "3", "--customers", "50"]).unwrap();
        assert_eq!(args.barbers, Some(3));
        assert_eq!(args.customers, Some(50));
        assert_eq!(args.chairs, None);
    }

    #[test]
    fn test_cli_overrides() {
        let mut args = empty_args();
        args.barbers = Some(4);
        args.chairs = Some(0);
        args.seed = Some(54321);

        let config = SimulationConfig::from_cli_args(args).unwrap();

        assert_eq!(config.barbers, 4);
        assert_eq!(config.chairs, 0);
        assert_eq!(config.seed, Some(54321));
        // Default values should remain for non-overridden fields
        assert_eq!(config.customers, 20);
        assert_eq!(config.min_service_ms, 20);
    }

    #[test]
    fn test_config_file_loading() {
        use std::io::Write;
        use tempfile::Builder;

        let mut temp_file = Builder::new().suffix(".json").tempfile().unwrap();
        let config_json = r#"{
            "barbers": 2,
            "chairs": 5,
            "customers": 100,
            "min_service_ms": 10,
            "max_service_ms": 30,
            "seed": 12345
        }"#;

        temp_file.write_all(config_json.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = SimulationConfig::from_file(temp_file.path()).unwrap();

        assert_eq!(config.barbers, 2);
        assert_eq!(config.chairs, 5);
        assert_eq!(config.customers, 100);
        assert_eq!(config.service_ms(), (10, 30));
        assert_eq!(config.seed, Some(12345));
        // Untouched fields keep their defaults
        assert_eq!(config.arrival_gap_ms(), (0, 15));
    }

    #[test]
    fn test_config_file_unsupported_format() {
        use std::io::Write;
        use tempfile::Builder;

        let mut temp_file = Builder::new().suffix(".yaml").tempfile().unwrap();
        temp_file.write_all(b"barbers: 2").unwrap();
        temp_file.flush().unwrap();

        match SimulationConfig::from_file(temp_file.path()) {
            Err(ConfigError::UnsupportedFormat(ext)) => assert_eq!(ext, "yaml"),
            other => panic!("expected UnsupportedFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_config_file_not_found() {
        match SimulationConfig::from_file("/definitely/not/here.json") {
            Err(ConfigError::FileNotFound(_)) => {}
            other => panic!("expected FileNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_validation_customer_count() {
        let mut config = SimulationConfig::default();
        config.customers = 0;

        match config.validate() {
            Err(ConfigValidationError::InvalidCustomerCount(0)) => {}
            other => panic!("expected InvalidCustomerCount, got {:?}", other),
        }
    }

    #[test]
    fn test_validation_barber_count() {
        let mut config = SimulationConfig::default();
        config.barbers = 0;

        match config.validate() {
            Err(ConfigValidationError::InvalidBarberCount(0)) => {}
            other => panic!("expected InvalidBarberCount, got {:?}", other),
        }
    }

    #[test]
    fn test_validation_service_range() {
        let mut config = SimulationConfig::default();
        config.min_service_ms = 50;
        config.max_service_ms = 10;

        match config.validate() {
            Err(ConfigValidationError::InvalidServiceRange(50, 10)) => {}
            other => panic!("expected InvalidServiceRange, got {:?}", other),
        }
    }

    #[test]
    fn test_validation_arrival_gap_range() {
        let mut config = SimulationConfig::default();
        config.min_arrival_gap_ms = 20;
        config.max_arrival_gap_ms = 5;

        match config.validate() {
            Err(ConfigValidationError::InvalidArrivalGapRange(20, 5)) => {}
            other => panic!("expected InvalidArrivalGapRange, got {:?}", other),
        }
    }

    #[test]
    fn test_print_json_round_trips() {
        let config = SimulationConfig::default();
        let json = config.print_json().unwrap();
        let back: SimulationConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(back.barbers, config.barbers);
        assert_eq!(back.chairs, config.chairs);
        assert_eq!(back.customers, config.customers);
    }

    #[test]
    fn test_shop_config_slice() {
        let mut config = SimulationConfig::default();
        config.barbers = 3;
        config.chairs = 7;

        let shop = config.shop_config();
        assert_eq!(shop.barber_count, 3);
        assert_eq!(shop.chair_capacity, 7);
    }
}
