use async_trait::async_trait;

use crate::content::domain::entities::SiteContent;

#[async_trait]
pub trait GetSiteContentUseCase: Send + Sync {
    async fn execute(&self) -> SiteContent;
}
