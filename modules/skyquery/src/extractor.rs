//! Extraction stage: one gateway call turns the user's free-text query into
//! a strict nine-field [`QueryFilter`].

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde_json::Value;
use tracing::debug;

use gemini_client::util::strip_code_blocks;

use crate::error::SkyQueryError;
use crate::temporal::{normalize_date, normalize_time};
use crate::traits::CompletionModel;
use crate::types::QueryFilter;
use crate::SYSTEM_INSTRUCTION;

/// The nine keys the model must return, no more and no fewer.
const FILTER_KEYS: [&str; 9] = [
    "flight_number",
    "origin",
    "destination",
    "date",
    "time",
    "before_date",
    "after_date",
    "before_time",
    "after_time",
];

pub struct ParameterExtractor {
    model: Arc<dyn CompletionModel>,
}

impl ParameterExtractor {
    pub fn new(model: Arc<dyn CompletionModel>) -> Self {
        Self { model }
    }

    /// Extract a query filter, resolving relative dates against today.
    pub async fn extract(&self, query: &str) -> Result<QueryFilter, SkyQueryError> {
        self.extract_as_of(query, Utc::now().date_naive()).await
    }

    /// Extract with an explicit "today", so tests are deterministic.
    pub async fn extract_as_of(
        &self,
        query: &str,
        today: NaiveDate,
    ) -> Result<QueryFilter, SkyQueryError> {
        let prompt = extraction_prompt(query, today);

        let completion = self.model.complete(SYSTEM_INSTRUCTION, &prompt, 0.0).await?;

        let cleaned = strip_code_blocks(&completion);
        debug!(completion = cleaned, "extraction completion");

        decode_filter(cleaned)
    }
}

fn extraction_prompt(query: &str, today: NaiveDate) -> String {
    format!(
        r#"Today's date is {today}. If the user's query refers to a time (e.g., '10 am') or a location but does not mention a specific date, assume they are referring to today.
If the user's query is in another language, put the parameters in English.

Extract flight information from the following query:
"{query}"

Return a JSON object with these keys:
- flight_number: str or null
- origin: str or null
- destination: str or null
- date: str in YYYY-MM-DD format or null
- time: str in HH:MM format or null
- before_date: str in YYYY-MM-DD format or null
- after_date: str in YYYY-MM-DD format or null
- before_time: str in HH:MM format or null
- after_time: str in HH:MM format or null"#,
        today = today.format("%Y-%m-%d"),
    )
}

/// Strict shape check: a JSON object with exactly the nine expected keys,
/// each a string or null. Anything else is a fatal parse error — no partial
/// filters. The four temporal values then go through the normalizer, which
/// degrades malformed values to unconstrained.
fn decode_filter(text: &str) -> Result<QueryFilter, SkyQueryError> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| SkyQueryError::Parse(format!("invalid JSON: {e}")))?;

    let object = value
        .as_object()
        .ok_or_else(|| SkyQueryError::Parse("expected a JSON object".to_string()))?;

    if let Some(key) = object.keys().find(|k| !FILTER_KEYS.contains(&k.as_str())) {
        return Err(SkyQueryError::Parse(format!("unexpected key {key:?}")));
    }

    let field = |key: &str| -> Result<Option<String>, SkyQueryError> {
        match object.get(key) {
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(Value::Null) => Ok(None),
            Some(other) => Err(SkyQueryError::Parse(format!(
                "key {key:?} must be a string or null, got {other}"
            ))),
            None => Err(SkyQueryError::Parse(format!("missing key {key:?}"))),
        }
    };

    Ok(QueryFilter {
        flight_number: field("flight_number")?,
        origin: field("origin")?,
        destination: field("destination")?,
        date: normalize_date(field("date")?.as_deref()),
        time: normalize_time(field("time")?.as_deref()),
        before_date: normalize_date(field("before_date")?.as_deref()),
        after_date: normalize_date(field("after_date")?.as_deref()),
        before_time: normalize_time(field("before_time")?.as_deref()),
        after_time: normalize_time(field("after_time")?.as_deref()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedModel;

    const FULL_PARAMS: &str = r#"{
        "flight_number": null,
        "origin": "New York",
        "destination": "London",
        "date": "2025-03-05",
        "time": "10:00",
        "before_date": null,
        "after_date": null,
        "before_time": null,
        "after_time": null
    }"#;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 5).unwrap()
    }

    #[test]
    fn test_decode_filter_success() {
        let filter = decode_filter(FULL_PARAMS).unwrap();
        assert_eq!(filter.origin.as_deref(), Some("New York"));
        assert_eq!(filter.destination.as_deref(), Some("London"));
        assert_eq!(filter.date, NaiveDate::from_ymd_opt(2025, 3, 5));
        assert!(filter.flight_number.is_none());
        assert!(filter.before_date.is_none());
    }

    #[test]
    fn test_decode_filter_rejects_invalid_json() {
        let err = decode_filter("Not a valid JSON response").unwrap_err();
        assert!(err.to_string().contains("Failed to parse model response"));
    }

    #[test]
    fn test_decode_filter_rejects_non_object() {
        let err = decode_filter("[1, 2, 3]").unwrap_err();
        assert!(err.to_string().contains("expected a JSON object"));
    }

    #[test]
    fn test_decode_filter_rejects_missing_key() {
        let err = decode_filter(r#"{"flight_number": "AA101"}"#).unwrap_err();
        assert!(err.to_string().contains("missing key"));
    }

    #[test]
    fn test_decode_filter_rejects_unexpected_key() {
        let text = FULL_PARAMS.replace("\"flight_number\"", "\"airline\"");
        let err = decode_filter(&text).unwrap_err();
        assert!(err.to_string().contains("unexpected key"));
    }

    #[test]
    fn test_decode_filter_rejects_non_string_value() {
        let text = FULL_PARAMS.replace("\"10:00\"", "1000");
        let err = decode_filter(&text).unwrap_err();
        assert!(err.to_string().contains("must be a string or null"));
    }

    #[test]
    fn test_decode_filter_degrades_malformed_temporal_to_unconstrained() {
        let text = FULL_PARAMS.replace("2025-03-05", "2025-03-99");
        let filter = decode_filter(&text).unwrap();
        // Bad date stops constraining; the rest of the filter survives.
        assert!(filter.date.is_none());
        assert_eq!(filter.origin.as_deref(), Some("New York"));
    }

    #[tokio::test]
    async fn test_extract_embeds_today_and_query() {
        let model = Arc::new(ScriptedModel::new(FULL_PARAMS, ""));
        let extractor = ParameterExtractor::new(model.clone());

        let filter = extractor
            .extract_as_of("Show flights from New York to London at 10 am", today())
            .await
            .unwrap();
        assert_eq!(filter.origin.as_deref(), Some("New York"));

        let prompts = model.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Today's date is 2025-03-05"));
        assert!(prompts[0].contains("Show flights from New York to London at 10 am"));
    }

    #[tokio::test]
    async fn test_extract_fenced_and_unfenced_decode_identically() {
        let fenced = format!("```json\n{FULL_PARAMS}\n```");

        let plain_model = Arc::new(ScriptedModel::new(FULL_PARAMS, ""));
        let fenced_model = Arc::new(ScriptedModel::new(fenced, ""));

        let plain = ParameterExtractor::new(plain_model)
            .extract_as_of("Show flights from Paris to Dubai", today())
            .await
            .unwrap();
        let from_fence = ParameterExtractor::new(fenced_model)
            .extract_as_of("Show flights from Paris to Dubai", today())
            .await
            .unwrap();

        assert_eq!(plain, from_fence);
    }

    #[tokio::test]
    async fn test_extract_malformed_completion_is_parse_error() {
        let model = Arc::new(ScriptedModel::new("Not a valid JSON response", ""));
        let extractor = ParameterExtractor::new(model);

        let err = extractor
            .extract_as_of("Invalid query", today())
            .await
            .unwrap_err();
        assert!(matches!(err, SkyQueryError::Parse(_)));
        assert!(err.to_string().contains("Failed to parse model response"));
    }
}
