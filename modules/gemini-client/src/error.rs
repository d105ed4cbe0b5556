use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Gemini API error ({status}): {body}")]
    Api { status: StatusCode, body: String },

    #[error("Response shape error: {0}")]
    ResponseShape(String),
}
