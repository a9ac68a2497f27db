pub mod fetcher;
pub mod lookup;
pub mod registry;
pub mod summary;

pub use crate::domain::model::{
    ContactSummary, DomainSummary, ErrorEnvelope, LookupData, LookupKind, LookupRequest,
    ResultEnvelope,
};
pub use crate::domain::ports::{ConfigProvider, Fetcher};
pub use crate::utils::error::Result;
