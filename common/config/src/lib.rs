//! Configuration loading for the toolcall workspace.
//!
//! Resolves a [`RuntimeConfig`](toolcall_protocol::RuntimeConfig) from
//! `{toolcall_home}/config.json` and `TOOLCALL_*` environment variables.
//!
//! # Example
//!
//! ```no_run
//! use toolcall_config::ConfigLoader;
//! use toolcall_config::error::ConfigError;
//!
//! # fn example() -> Result<(), ConfigError> {
//! let config = ConfigLoader::new().load()?;
//! println!("truncation threshold: {}", config.tool.truncate_output_threshold);
//! # Ok(())
//! # }
//! ```

pub mod env_loader;
pub mod error;
pub mod loader;

pub use env_loader::EnvLoader;
pub use error::ConfigError;
pub use loader::CONFIG_FILE;
pub use loader::ConfigLoader;
pub use loader::find_toolcall_home;
