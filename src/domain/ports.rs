use crate::domain::model::{ArticleId, Count};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Source of good counts, supplied by the embedding application.
#[async_trait]
pub trait CountProvider: Send + Sync {
    async fn lookup_count(&self, article_id: &ArticleId) -> Result<Count>;
}

#[async_trait]
impl<P: CountProvider + ?Sized> CountProvider for std::sync::Arc<P> {
    async fn lookup_count(&self, article_id: &ArticleId) -> Result<Count> {
        (**self).lookup_count(article_id).await
    }
}
