//! Default configuration constants for claimline.
//!
//! Shared between the config layer, the CLI, and the engine entry points so
//! the same defaults apply no matter which surface invokes the engine.

/// Default block duration in seconds.
///
/// 20-second windows keep a block small enough to be a precise jump target
/// for playback navigation while still holding a few sentences of speech.
pub const BLOCK_DURATION_SECS: u32 = 20;

/// Environment variable overriding the block duration (seconds).
pub const ENV_BLOCK_DURATION: &str = "CLAIMLINE_BLOCK_DURATION";

/// Environment variable overriding the color mode (auto, always, never).
pub const ENV_COLOR: &str = "CLAIMLINE_COLOR";

/// Directory name under the user config dir holding the config file.
pub const CONFIG_DIR: &str = "claimline";

/// Configuration file name.
pub const CONFIG_FILE: &str = "config.toml";
