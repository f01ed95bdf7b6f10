use crate::domain::criteria::FilterCriteria;
use crate::domain::errors::ApiError;
use crate::domain::recommendation::RecommendationResult;
use async_trait::async_trait;

/// Seam between the fetch worker and the HTTP layer. Implemented by the
/// reqwest client in infrastructure and by stubs in tests.
#[async_trait]
pub trait RecommendationSource: Send + Sync {
    async fn fetch(&self, criteria: &FilterCriteria) -> Result<RecommendationResult, ApiError>;
}
