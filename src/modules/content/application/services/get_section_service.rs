use async_trait::async_trait;

use crate::content::application::{
    ports::incoming::use_cases::{GetSectionError, GetSectionUseCase},
    ports::outgoing::ContentSource,
};
use crate::content::domain::entities::SectionContent;

#[derive(Debug, Clone)]
pub struct GetSectionService<S>
where
    S: ContentSource + Send + Sync,
{
    source: S,
}

impl<S> GetSectionService<S>
where
    S: ContentSource + Send + Sync,
{
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

#[async_trait]
impl<S> GetSectionUseCase for GetSectionService<S>
where
    S: ContentSource + Send + Sync,
{
    // Labels are the lowercase route names; the match is case-sensitive.
    async fn execute(&self, label: &str) -> Result<SectionContent, GetSectionError> {
        match label {
            "home" => Ok(SectionContent::Home(self.source.home())),
            "about" => Ok(SectionContent::About(self.source.about())),
            "blog" => Ok(SectionContent::Blog(self.source.blog())),
            "work" => Ok(SectionContent::Work(self.source.work())),
            "gallery" => Ok(SectionContent::Gallery(self.source.gallery())),
            unknown => Err(GetSectionError::NotFound(unknown.to_string())),
        }
    }
}
