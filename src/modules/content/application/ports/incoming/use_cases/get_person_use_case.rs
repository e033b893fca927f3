use async_trait::async_trait;

use crate::content::domain::entities::Person;

#[async_trait]
pub trait GetPersonUseCase: Send + Sync {
    async fn execute(&self) -> Person;
}
