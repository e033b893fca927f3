use async_trait::async_trait;

use crate::content::domain::entities::Newsletter;

#[async_trait]
pub trait GetNewsletterUseCase: Send + Sync {
    async fn execute(&self) -> Newsletter;
}
