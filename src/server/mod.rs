//! Read-only HTTP API over the catalog.
//!
//! Every endpoint answers from the current collection snapshot. There is no
//! write path; the catalog only changes through its one-time load.

mod config;
mod error;
mod extract;
mod logging;
mod routes;
mod state;

pub use config::{CatalogConfig, Config, ConfigError, CorsConfig, LogFormat, LoggingConfig, ServerConfig};
pub use error::ApiError;
pub use extract::{ApiPath, ApiQuery};
pub use logging::{LoggingError, init as init_logging};
pub use routes::router;
pub use state::AppState;
