mod client;
pub mod error;
pub mod util;
pub(crate) mod types;

pub use client::GeminiClient;
pub use error::GeminiError;
