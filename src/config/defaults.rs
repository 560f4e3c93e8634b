//! Default configuration values
//!
//! Named constants for all tunable parameters

/// Default token type selected from record dumps
pub const DEFAULT_TOKEN_TYPE: &str = "session_nonce";

/// Default token input file
pub const DEFAULT_INPUT: &str = "tokens.txt";

/// Default output format
pub const DEFAULT_FORMAT: &str = "text";

/// Default significance level for reporting low positions
pub const DEFAULT_SIGNIFICANCE: f64 = 0.01;

/// Default maximum histogram bar width (0 = unscaled)
pub const DEFAULT_MAX_BAR_WIDTH: usize = 0;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "seq-analyzer";
