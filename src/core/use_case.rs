use crate::core::CountProvider;
use crate::domain::model::{ArticleId, ProviderErrorPolicy, SuccessEnvelope};
use crate::utils::error::Result;

/// Looks up the good count for an article and renders the success body.
///
/// Input validation is the caller's job: an `ArticleId` is non-empty by
/// construction.
pub struct GoodCountUseCase<P: CountProvider> {
    provider: P,
    policy: ProviderErrorPolicy,
}

impl<P: CountProvider> GoodCountUseCase<P> {
    pub fn new(provider: P, policy: ProviderErrorPolicy) -> Self {
        Self { provider, policy }
    }

    pub fn policy(&self) -> ProviderErrorPolicy {
        self.policy
    }

    pub async fn execute(&self, article_id: &ArticleId) -> Result<String> {
        self.execute_with(article_id, |envelope| serde_json::to_string(envelope))
            .await
    }

    async fn execute_with<E>(&self, article_id: &ArticleId, encode: E) -> Result<String>
    where
        E: FnOnce(&SuccessEnvelope) -> serde_json::Result<String>,
    {
        tracing::debug!(article_id = %article_id, "looking up good count");

        let good_count = match self.provider.lookup_count(article_id).await {
            Ok(count) => count,
            Err(e) => match self.policy {
                ProviderErrorPolicy::Swallow => {
                    // Reported upstream as an empty success body.
                    tracing::warn!(
                        article_id = %article_id,
                        error = %e,
                        "count provider failed, returning empty body"
                    );
                    return Ok(String::new());
                }
                ProviderErrorPolicy::Propagate => return Err(e),
            },
        };

        let body = encode(&SuccessEnvelope { good_count })?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::provider::FnCountProvider;
    use crate::utils::error::GoodCountError;
    use serde::ser::Error as _;

    fn id(s: &str) -> ArticleId {
        ArticleId::new(s).unwrap()
    }

    #[test]
    fn test_success_body() {
        let use_case = GoodCountUseCase::new(
            FnCountProvider::new(|_: &str| Ok(12)),
            ProviderErrorPolicy::Swallow,
        );
        let body = tokio_test::block_on(use_case.execute(&id("a1"))).unwrap();
        assert_eq!(body, r#"{"goodCount":12}"#);
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let use_case = GoodCountUseCase::new(
            FnCountProvider::new(|_: &str| Ok(u64::MAX)),
            ProviderErrorPolicy::Swallow,
        );
        let first = tokio_test::block_on(use_case.execute(&id("a1"))).unwrap();
        let second = tokio_test::block_on(use_case.execute(&id("a1"))).unwrap();
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn test_provider_error_is_swallowed_by_default() {
        let use_case = GoodCountUseCase::new(
            FnCountProvider::new(|_: &str| Err(GoodCountError::provider("db down"))),
            ProviderErrorPolicy::default(),
        );
        let body = tokio_test::block_on(use_case.execute(&id("a1"))).unwrap();
        assert_eq!(body, "");
    }

    #[test]
    fn test_provider_error_propagates_when_configured() {
        let use_case = GoodCountUseCase::new(
            FnCountProvider::new(|_: &str| Err(GoodCountError::provider("db down"))),
            ProviderErrorPolicy::Propagate,
        );
        let err = tokio_test::block_on(use_case.execute(&id("a1"))).unwrap_err();
        assert!(matches!(err, GoodCountError::ProviderError { .. }));
    }

    #[test]
    fn test_encoding_failure_is_not_swallowed() {
        let use_case = GoodCountUseCase::new(
            FnCountProvider::new(|_: &str| Ok(1)),
            ProviderErrorPolicy::Swallow,
        );
        let result = tokio_test::block_on(
            use_case.execute_with(&id("a1"), |_| Err(serde_json::Error::custom("no encoder"))),
        );
        let err = result.unwrap_err();
        assert!(matches!(err, GoodCountError::SerializationError(_)));
        assert!(err.to_string().contains("no encoder"));
    }
}
