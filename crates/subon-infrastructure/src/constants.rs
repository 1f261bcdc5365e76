//! Infrastructure layer constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "subon.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "subon";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "SUBON";

/// Separator between nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_ENV_VAR: &str = "SUBON_LOG";

// ============================================================================
// SCHEDULER CONSTANTS
// ============================================================================

/// Worker threads of a thread-pool scheduler when none are configured
pub const DEFAULT_WORKER_THREADS: usize = 4;

/// Buffer between multi-value tasks and their consumers
pub const DEFAULT_CHANNEL_CAPACITY: usize = subon_application::domain_services::DEFAULT_CHANNEL_CAPACITY;
