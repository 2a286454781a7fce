//! Client configuration.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ClientConfig (validated, immutable)
//!     → LoggingClient::from_config
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so a minimal file only names the service
//! - Validation separates syntactic (serde) from semantic checks
//! - `LoggingClient::new` never validates; only the file path goes through here

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::ClientConfig;
pub use validation::{validate_config, ValidationError};
