use async_trait::async_trait;

use crate::content::application::{
    ports::incoming::use_cases::GetNewsletterUseCase, ports::outgoing::ContentSource,
};
use crate::content::domain::entities::Newsletter;

#[derive(Debug, Clone)]
pub struct GetNewsletterService<S>
where
    S: ContentSource + Send + Sync,
{
    source: S,
}

impl<S> GetNewsletterService<S>
where
    S: ContentSource + Send + Sync,
{
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

#[async_trait]
impl<S> GetNewsletterUseCase for GetNewsletterService<S>
where
    S: ContentSource + Send + Sync,
{
    async fn execute(&self) -> Newsletter {
        self.source.newsletter()
    }
}
