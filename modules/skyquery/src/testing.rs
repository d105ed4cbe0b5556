// Test mock for the CompletionModel boundary.
//
// ScriptedModel answers the extraction prompt with a canned completion and
// every other prompt with a canned final answer, recording each prompt it
// sees. An error script makes every call fail, for propagation tests.

use std::sync::Mutex;

use anyhow::{bail, Result};
use async_trait::async_trait;

use crate::traits::CompletionModel;

/// Marker present in every extraction prompt, used to route scripted replies.
pub const EXTRACTION_MARKER: &str = "Extract flight information";

pub struct ScriptedModel {
    extraction_reply: Option<String>,
    final_reply: String,
    error: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedModel {
    /// Reply to extraction prompts with `extraction` and to everything else
    /// with `final_reply`.
    pub fn new(extraction: impl Into<String>, final_reply: impl Into<String>) -> Self {
        Self {
            extraction_reply: Some(extraction.into()),
            final_reply: final_reply.into(),
            error: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Fail every call with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            extraction_reply: None,
            final_reply: String::new(),
            error: Some(message.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Every prompt seen so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().expect("prompts lock").clone()
    }
}

#[async_trait]
impl CompletionModel for ScriptedModel {
    async fn complete(&self, _system: &str, prompt: &str, _temperature: f32) -> Result<String> {
        self.prompts
            .lock()
            .expect("prompts lock")
            .push(prompt.to_string());

        if let Some(ref message) = self.error {
            bail!("{message}");
        }

        match self.extraction_reply {
            Some(ref reply) if prompt.contains(EXTRACTION_MARKER) => Ok(reply.clone()),
            _ => Ok(self.final_reply.clone()),
        }
    }
}
