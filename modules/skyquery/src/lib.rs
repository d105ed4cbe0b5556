pub mod composer;
pub mod config;
pub mod error;
pub mod extractor;
pub mod pipeline;
pub mod search;
pub mod store;
pub mod temporal;
pub mod traits;
pub mod types;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use error::SkyQueryError;
pub use pipeline::QueryPipeline;
pub use store::FlightStore;
pub use types::{FlightRecord, QueryFilter};

/// System instruction for both gateway calls.
pub(crate) const SYSTEM_INSTRUCTION: &str =
    "You are an assistant that extracts flight details from user queries";
