//! Configuration loading for the Weekly Wage Engine service.
//!
//! The pay rule itself is fixed; configuration only covers how the service runs
//! (listen address, log filter, display name).
//!
//! # Example
//!
//! ```no_run
//! use weekly_wage_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/service.yaml").unwrap();
//! println!("Binding to {}", config.bind_address());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineSettings, LoggingSettings, ServerSettings, ServiceConfig};
