//! Composition stage: the second gateway call phrases the final answer from
//! the matched records. The completion is returned verbatim.

use std::sync::Arc;

use crate::error::SkyQueryError;
use crate::traits::CompletionModel;
use crate::types::FlightRecord;
use crate::SYSTEM_INSTRUCTION;

pub struct ResponseComposer {
    model: Arc<dyn CompletionModel>,
}

impl ResponseComposer {
    pub fn new(model: Arc<dyn CompletionModel>) -> Self {
        Self { model }
    }

    /// Ask the model to answer `query` using `matches`. Gateway errors
    /// propagate unchanged; there is no local recovery.
    pub async fn compose(
        &self,
        query: &str,
        matches: &[&FlightRecord],
    ) -> Result<String, SkyQueryError> {
        let prompt = composition_prompt(query, matches);

        Ok(self.model.complete(SYSTEM_INSTRUCTION, &prompt, 0.0).await?)
    }
}

fn composition_prompt(query: &str, matches: &[&FlightRecord]) -> String {
    format!(
        r#"Here is the user's query: {query}

Here is the relevant flight information we found based on it:
{flights}

Now answer their question using the given flight information.

Remember you are speaking directly to the user."#,
        flights = render_flights(matches),
    )
}

fn render_flights(matches: &[&FlightRecord]) -> String {
    if matches.is_empty() {
        // Say so explicitly, or the model invents flights.
        return "No matching flights were found.".to_string();
    }

    matches
        .iter()
        .map(|flight| format!("- {flight}"))
        .collect::<Vec<_>>()
        .join("\n")
}
