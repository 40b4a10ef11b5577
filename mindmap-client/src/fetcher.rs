use crate::error::{FetchError, Result};
use crate::result::FetchOutcome;
use mindmap_core::{EndpointTable, InputCategory, MapResult, classify, generate_mock};
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info, warn};

#[derive(Debug, Serialize)]
struct SubmitRequest<'a> {
    input_value: &'a str,
}

/// Submits user input to the workflow service and always hands back a map.
///
/// Holds no mutable state, so one fetcher can serve any number of concurrent
/// calls.
#[derive(Debug, Clone)]
pub struct MapFetcher {
    client: Client,
    endpoints: EndpointTable,
}

impl MapFetcher {
    pub fn new(endpoints: EndpointTable) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("Mindmap/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self::with_client(client, endpoints))
    }

    pub fn with_client(client: Client, endpoints: EndpointTable) -> Self {
        Self { client, endpoints }
    }

    pub fn endpoints(&self) -> &EndpointTable {
        &self.endpoints
    }

    /// Fetch a map for `input`, substituting the mock map on any failure.
    pub async fn fetch_map(&self, input: &str, category: InputCategory) -> FetchOutcome {
        match self.try_fetch(input, category).await {
            Ok(map) => FetchOutcome::Live(map),
            Err(reason) => {
                warn!("Falling back to mock map for {} input: {}", category, reason);
                FetchOutcome::Fallback {
                    map: generate_mock(input),
                    reason,
                }
            }
        }
    }

    /// Classify `input`, then fetch with the matching workflow
    pub async fn classify_and_fetch(&self, input: &str) -> (InputCategory, FetchOutcome) {
        let category = classify(input);
        debug!("Classified input as {}", category);
        let outcome = self.fetch_map(input, category).await;
        (category, outcome)
    }

    /// One submit request with no fallback. Non-2xx statuses and bodies that
    /// don't decode as a map are errors; missing map fields are not.
    pub async fn try_fetch(&self, input: &str, category: InputCategory) -> Result<MapResult> {
        let url = self.endpoints.resolve(category);
        info!("Submitting {} input to {}", category, url);

        let response = self
            .client
            .post(url.clone())
            .json(&SubmitRequest { input_value: input })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::StatusError(status.as_u16()));
        }

        let body = response.text().await?;
        let map: MapResult = serde_json::from_str(&body)?;
        debug!(
            "Decoded map with {} nodes from {}",
            map.nodes.len(),
            url
        );

        Ok(map)
    }
}
