// src/consts.rs
//! Shared constants — alphabet geometry and defaults

/// Letters in each case-specific alphabet
pub const ALPHABET_LEN: i64 = 26;

/// Smallest shift accepted at the application boundary
pub const MIN_SHIFT: i64 = 1;

/// Largest shift accepted at the application boundary
pub const MAX_SHIFT: i64 = 25;

/// Shift a fresh or reset session starts with
pub const DEFAULT_SHIFT: u8 = 3;

/// Extension picked up by batch runs
pub const DEFAULT_INPUT_EXTENSION: &str = "txt";

/// Extension written next to each processed file
pub const DEFAULT_OUTPUT_EXTENSION: &str = "caesar";

/// Manifest file name written into the batch root
pub const DEFAULT_MANIFEST_NAME: &str = "caesar-manifest.json";

/// Format tag stamped into every manifest
pub const MANIFEST_FORMAT: &str = "caesar-tool-manifest-v1";

/// Env var pointing at an explicit config file
pub const CONFIG_ENV_VAR: &str = "CAESAR_TOOL_CONFIG";

/// Config file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "caesar-tool.toml";

/// Directory under the platform config dir holding the user config
pub const USER_CONFIG_DIR: &str = "caesar-tool";

/// File name of the user config inside `USER_CONFIG_DIR`
pub const USER_CONFIG_FILE: &str = "config.toml";
