use async_trait::async_trait;

use crate::content::application::ports::incoming::use_cases::{
    GetNewsletterUseCase, GetPersonUseCase, GetSectionError, GetSectionUseCase,
    GetSiteContentUseCase, GetSocialLinksUseCase,
};
use crate::content::domain::entities::{
    Newsletter, Person, SectionContent, SiteContent, SocialLink,
};

#[derive(Default, Clone)]
pub struct StubGetSiteContentUseCase;

#[async_trait]
impl GetSiteContentUseCase for StubGetSiteContentUseCase {
    async fn execute(&self) -> SiteContent {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetPersonUseCase;

#[async_trait]
impl GetPersonUseCase for StubGetPersonUseCase {
    async fn execute(&self) -> Person {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetSocialLinksUseCase;

#[async_trait]
impl GetSocialLinksUseCase for StubGetSocialLinksUseCase {
    async fn execute(&self) -> Vec<SocialLink> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetNewsletterUseCase;

#[async_trait]
impl GetNewsletterUseCase for StubGetNewsletterUseCase {
    async fn execute(&self) -> Newsletter {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetSectionUseCase;

#[async_trait]
impl GetSectionUseCase for StubGetSectionUseCase {
    async fn execute(&self, _label: &str) -> Result<SectionContent, GetSectionError> {
        unimplemented!("Not used in this test")
    }
}
