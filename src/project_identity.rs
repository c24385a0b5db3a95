//! Central project identity contract.
//!
//! Single source of truth for names that end up on disk or in the terminal.

pub const BINARY_NAME: &str = "shacnify";
pub const TOOL_DIR_NAME: &str = ".shacnify";
pub const ENV_PREFIX: &str = "SHACNIFY";
pub const CONFIG_FILE_BASENAME: &str = "config.json";
pub const LOG_DIR_NAME: &str = "logs";

pub fn env_key(suffix: &str) -> String {
    format!("{}_{}", ENV_PREFIX, suffix)
}

pub fn cli_with(args: &str) -> String {
    format!("{} {}", BINARY_NAME, args)
}
