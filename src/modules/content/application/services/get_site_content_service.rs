use async_trait::async_trait;

use crate::content::application::{
    ports::incoming::use_cases::GetSiteContentUseCase, ports::outgoing::ContentSource,
};
use crate::content::domain::entities::SiteContent;

#[derive(Debug, Clone)]
pub struct GetSiteContentService<S>
where
    S: ContentSource + Send + Sync,
{
    source: S,
}

impl<S> GetSiteContentService<S>
where
    S: ContentSource + Send + Sync,
{
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

#[async_trait]
impl<S> GetSiteContentUseCase for GetSiteContentService<S>
where
    S: ContentSource + Send + Sync,
{
    async fn execute(&self) -> SiteContent {
        self.source.site()
    }
}
