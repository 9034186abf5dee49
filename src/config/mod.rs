//! Configuration loading for the invoice engine service.
//!
//! This module loads the HTTP listener and logging settings from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use invoice_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/app.yaml").unwrap();
//! println!("Binding {}", config.server().bind_address());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, LoggingConfig, ServerConfig};
