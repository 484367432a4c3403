//! # terrapress_config
//!
//! Configuration loading and resolution for terrapress.
//!
//! This crate turns a `.env`-style text file plus the built-in defaults
//! into a resolved [`ConfigSet`]: a flat, open map from lowercase setting
//! names to typed [`ConfigValue`]s. Resolution applies per-key coercion
//! rules (guarded secrets, booleans, integers) and two derivation rules
//! (admin password fallback, domain synthesis).
//!
//! ## Example
//!
//! ```rust,no_run
//! use terrapress_config::EnvParser;
//!
//! let config = EnvParser::new(".env").parse().unwrap();
//! assert!(config.get("aws_region").is_some());
//! ```

pub mod error;
pub mod parser;
pub mod settings;
pub mod value;

pub use error::{ConfigError, ConfigResult};
pub use parser::EnvParser;
pub use settings::ConfigSet;
pub use value::ConfigValue;
