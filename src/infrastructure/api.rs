use crate::domain::criteria::FilterCriteria;
use crate::domain::errors::ApiError;
use crate::domain::ports::RecommendationSource;
use crate::domain::recommendation::RecommendationResult;
use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

/// Wire format of the recommendation request body.
#[derive(Debug, Serialize)]
struct RecommendationRequest<'a> {
    csrf_token: &'a str,
    price_range: &'a str,
    time_horizon: &'a str,
    risk_level: &'a str,
}

/// HTTP client for the recommendation endpoint.
///
/// One POST per fetch, no retries, no explicit timeout (transport defaults
/// apply). The body is parsed regardless of HTTP status: the server reports
/// validation problems through the `messages` field, not status codes.
pub struct RecommendationApi {
    http: reqwest::Client,
    endpoint: String,
    csrf_token: String,
}

impl RecommendationApi {
    pub fn new(base_url: &str, csrf_token: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: format!("{}/", base_url.trim_end_matches('/')),
            csrf_token,
        }
    }
}

#[async_trait]
impl RecommendationSource for RecommendationApi {
    async fn fetch(&self, criteria: &FilterCriteria) -> Result<RecommendationResult, ApiError> {
        let body = RecommendationRequest {
            csrf_token: &self.csrf_token,
            price_range: criteria.price_range.as_str(),
            time_horizon: criteria.time_horizon.as_str(),
            risk_level: criteria.risk_level.as_str(),
        };

        let response = self
            .http
            .post(&self.endpoint)
            .header("X-Requested-With", "XMLHttpRequest")
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiError::Transport {
                reason: e.to_string(),
            })?;

        debug!("Recommendation endpoint answered: {}", response.status());

        let text = response.text().await.map_err(|e| ApiError::Transport {
            reason: e.to_string(),
        })?;

        serde_json::from_str(&text).map_err(|e| ApiError::InvalidBody {
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::criteria::{PriceRange, RiskLevel, TimeHorizon};

    #[test]
    fn test_request_body_field_names() {
        let body = RecommendationRequest {
            csrf_token: "tok",
            price_range: PriceRange::From100To200.as_str(),
            time_horizon: TimeHorizon::ShortTerm.as_str(),
            risk_level: RiskLevel::Low.as_str(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["csrf_token"], "tok");
        assert_eq!(json["price_range"], "100-200");
        assert_eq!(json["time_horizon"], "short-term");
        assert_eq!(json["risk_level"], "low");
    }

    #[test]
    fn test_endpoint_normalization() {
        let api = RecommendationApi::new("http://localhost:5003/", "tok".to_string());
        assert_eq!(api.endpoint, "http://localhost:5003/");

        let api = RecommendationApi::new("http://localhost:5003", "tok".to_string());
        assert_eq!(api.endpoint, "http://localhost:5003/");
    }
}
