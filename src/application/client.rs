use crate::domain::criteria::FilterCriteria;
use crate::domain::errors::ApiError;
use crate::domain::ports::RecommendationSource;
use crate::domain::recommendation::RecommendationResult;
use anyhow::Result;
use crossbeam_channel::{Receiver, Sender};
use std::sync::Arc;
use tracing::{error, info};

/// Result of one fetch, delivered back to the UI thread.
pub type FetchOutcome = Result<RecommendationResult, ApiError>;

/// Client interface for the UI. Abstracts away channel management:
/// the UI submits criteria and polls for outcomes, nothing blocks.
pub struct RecommendationClient {
    request_tx: Sender<FilterCriteria>,
    outcome_rx: Receiver<FetchOutcome>,
}

impl RecommendationClient {
    /// Hand the criteria to the background worker. Fails if the worker is
    /// gone or a request is already queued (the UI disables the submit
    /// button while loading, so the latter should not happen).
    pub fn submit(&self, criteria: FilterCriteria) -> Result<()> {
        self.request_tx
            .try_send(criteria)
            .map_err(|e| anyhow::anyhow!("Failed to submit request: {}", e))
    }

    /// Non-blocking poll for a completed fetch.
    pub fn poll_outcome(&self) -> Option<FetchOutcome> {
        self.outcome_rx.try_recv().ok()
    }
}

/// Spawns the background fetch worker: a dedicated thread owning a tokio
/// runtime, serving one request at a time. The UI talks to it over
/// crossbeam channels and never touches the runtime directly.
pub fn spawn_worker(source: Arc<dyn RecommendationSource>) -> RecommendationClient {
    let (request_tx, request_rx) = crossbeam_channel::bounded::<FilterCriteria>(1);
    let (outcome_tx, outcome_rx) = crossbeam_channel::unbounded();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("Failed to build Tokio runtime");

        while let Ok(criteria) = request_rx.recv() {
            info!(
                "Fetching recommendations: price_range={}, time_horizon={}, risk_level={}",
                criteria.price_range, criteria.time_horizon, criteria.risk_level
            );

            let outcome = rt.block_on(source.fetch(&criteria));

            match &outcome {
                Ok(result) => info!(
                    "Received {} stock(s), {} message(s) (request_id: {})",
                    result.stocks.len(),
                    result.messages.len(),
                    result.request_id.as_deref().unwrap_or("-")
                ),
                Err(e) => error!("Fetch failed: {}", e),
            }

            if outcome_tx.send(outcome).is_err() {
                // UI side hung up, nothing left to serve.
                break;
            }
        }
    });

    RecommendationClient {
        request_tx,
        outcome_rx,
    }
}
