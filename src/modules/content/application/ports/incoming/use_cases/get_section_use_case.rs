use async_trait::async_trait;

use crate::content::domain::entities::SectionContent;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSectionError {
    #[error("Unknown section: {0}")]
    NotFound(String),
}

#[async_trait]
pub trait GetSectionUseCase: Send + Sync {
    async fn execute(&self, label: &str) -> Result<SectionContent, GetSectionError>;
}
