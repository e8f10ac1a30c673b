pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{InlineSource, RemoteSource};
pub use config::Settings;
pub use core::handler::JsonHandler;
pub use core::router::{dispatch, Endpoint};
pub use domain::model::{ApiRequest, ApiResponse, ErrorBody};
pub use utils::error::{ProxyError, Result};
