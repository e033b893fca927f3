use async_trait::async_trait;

use crate::content::domain::entities::SocialLink;

#[async_trait]
pub trait GetSocialLinksUseCase: Send + Sync {
    async fn execute(&self) -> Vec<SocialLink>;
}
