//! End-to-end wiring: extract → search → compose. One query processed
//! start to finish per call; the two gateway calls are sequential because
//! the second depends on the first's output.

use std::sync::Arc;

use tracing::info;

use crate::composer::ResponseComposer;
use crate::error::SkyQueryError;
use crate::extractor::ParameterExtractor;
use crate::search::search;
use crate::store::FlightStore;
use crate::traits::CompletionModel;

pub struct QueryPipeline {
    extractor: ParameterExtractor,
    composer: ResponseComposer,
    store: FlightStore,
}

impl QueryPipeline {
    pub fn new(model: Arc<dyn CompletionModel>, store: FlightStore) -> Self {
        Self {
            extractor: ParameterExtractor::new(model.clone()),
            composer: ResponseComposer::new(model),
            store,
        }
    }

    /// Answer one flight query. Any fatal error aborts this query only; the
    /// caller may submit another.
    pub async fn answer(&self, query: &str) -> Result<String, SkyQueryError> {
        let filter = self.extractor.extract(query).await?;
        info!(?filter, "extracted flight query filter");

        let matches = search(&filter, &self.store);
        info!(count = matches.len(), "flights matched");

        self.composer.compose(query, &matches).await
    }
}
