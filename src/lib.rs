pub mod config;
pub mod core;
pub mod domain;
#[cfg(feature = "server")]
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::ProxyConfig;

pub use core::{fetcher::HttpFetcher, lookup::LookupService};
pub use domain::model::{
    ContactSummary, DomainSummary, ErrorEnvelope, LookupData, LookupKind, LookupRequest,
    ResultEnvelope,
};
pub use utils::error::{FailureClass, FetchError, LookupError, Result};
