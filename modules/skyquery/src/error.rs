use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkyQueryError {
    /// The model's completion could not be decoded into a query filter.
    /// Fatal to the current request; no retry, no partial filter.
    #[error("Failed to parse model response: {0}")]
    Parse(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
