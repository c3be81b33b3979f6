// ABOUTME: Shared types and configuration for the LoTUS-BF console.
// ABOUTME: Defines layout settings, config file handling, and the query string model.

pub mod config;
pub mod query;

pub use config::{Config, ConfigError, LayoutSettings};
pub use query::{QueryString, QueryToken, TokenKind};
