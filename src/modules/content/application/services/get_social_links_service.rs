use async_trait::async_trait;

use crate::content::application::{
    ports::incoming::use_cases::GetSocialLinksUseCase, ports::outgoing::ContentSource,
};
use crate::content::domain::entities::SocialLink;

#[derive(Debug, Clone)]
pub struct GetSocialLinksService<S>
where
    S: ContentSource + Send + Sync,
{
    source: S,
}

impl<S> GetSocialLinksService<S>
where
    S: ContentSource + Send + Sync,
{
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

#[async_trait]
impl<S> GetSocialLinksUseCase for GetSocialLinksService<S>
where
    S: ContentSource + Send + Sync,
{
    async fn execute(&self) -> Vec<SocialLink> {
        self.source.social_links()
    }
}
