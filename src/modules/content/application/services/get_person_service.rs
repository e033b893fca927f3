use async_trait::async_trait;

use crate::content::application::{
    ports::incoming::use_cases::GetPersonUseCase, ports::outgoing::ContentSource,
};
use crate::content::domain::entities::Person;

#[derive(Debug, Clone)]
pub struct GetPersonService<S>
where
    S: ContentSource + Send + Sync,
{
    source: S,
}

impl<S> GetPersonService<S>
where
    S: ContentSource + Send + Sync,
{
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

#[async_trait]
impl<S> GetPersonUseCase for GetPersonService<S>
where
    S: ContentSource + Send + Sync,
{
    async fn execute(&self) -> Person {
        self.source.person()
    }
}
