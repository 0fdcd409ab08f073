//! Centralized constants for configuration resolution.
//!
//! File names, environment variable names and reserved profile names live
//! here so the locator, overlay and resolver agree on them.

// =============================================================================
// File Discovery
// =============================================================================

/// Name of the project configuration file searched for by default.
pub const DEFAULT_CONFIG_FILE: &str = "foundry.toml";

/// Directory under the user's home holding the global configuration file.
pub const GLOBAL_CONFIG_DIR: &str = ".foundry";

// =============================================================================
// Profiles
// =============================================================================

/// The profile every other profile inherits from.
pub const DEFAULT_PROFILE: &str = "default";

/// Top-level table holding `[profile.<name>]` sections.
pub const PROFILE_SECTION: &str = "profile";

// =============================================================================
// Environment
// =============================================================================

/// Selects the active profile.
pub const PROFILE_ENV: &str = "FOUNDRY_PROFILE";

/// Overrides the config file name or path.
pub const CONFIG_PATH_ENV: &str = "FOUNDRY_CONFIG";

/// Primary prefix for configuration overrides.
pub const FOUNDRY_ENV_PREFIX: &str = "FOUNDRY_";

/// Prefix kept for compatibility with dapptools-era environments.
pub const DAPP_ENV_PREFIX: &str = "DAPP_";

/// Keys derived from prefixed variables that steer resolution itself and are
/// therefore never merged into the configuration table.
pub const RESERVED_ENV_KEYS: &[&str] = &["profile", "config"];

// =============================================================================
// Special Keys
// =============================================================================

/// Alias → URL table of RPC endpoints.
pub const RPC_ENDPOINTS_KEY: &str = "rpc_endpoints";

/// Alias → `{ key, url, chain }` table of Etherscan credentials.
pub const ETHERSCAN_KEY: &str = "etherscan";

/// Tables merged alias-by-alias instead of recursively.
pub const ALIAS_TABLES: &[&str] = &[RPC_ENDPOINTS_KEY, ETHERSCAN_KEY];

/// Keys whose `${VAR}` placeholders are resolved on access rather than
/// during resolution.
pub const LAZY_INTERPOLATION_KEYS: &[&str] = &[
    RPC_ENDPOINTS_KEY,
    ETHERSCAN_KEY,
    "eth_rpc_url",
    "etherscan_api_key",
];

// =============================================================================
// Built-in Defaults
// =============================================================================

/// Default `sender` and `tx_origin` for test execution.
pub const DEFAULT_SENDER: &str = "0x00a329c0648769a73afac7f9381e08fb43dbea72";

/// Key holding the project root.
pub const ROOT_KEY: &str = "root";
