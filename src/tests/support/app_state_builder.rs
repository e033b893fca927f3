use crate::content::application::content_use_cases::ContentUseCases;
use crate::content::application::ports::incoming::use_cases::{
    GetNewsletterUseCase, GetPersonUseCase, GetSectionUseCase, GetSiteContentUseCase,
    GetSocialLinksUseCase,
};
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    content: Option<ContentUseCases>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            content: Some(ContentUseCases {
                get_site: Arc::new(StubGetSiteContentUseCase),
                get_person: Arc::new(StubGetPersonUseCase),
                get_social_links: Arc::new(StubGetSocialLinksUseCase),
                get_newsletter: Arc::new(StubGetNewsletterUseCase),
                get_section: Arc::new(StubGetSectionUseCase),
            }),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_get_site(
        mut self,
        uc: impl GetSiteContentUseCase + Send + Sync + 'static,
    ) -> Self {
        // ContentUseCases is guaranteed to exist from Default
        let content = self
            .content
            .as_mut()
            .expect("Content use cases must be initialized");

        content.get_site = Arc::new(uc);
        self
    }

    pub fn with_get_person(mut self, uc: impl GetPersonUseCase + Send + Sync + 'static) -> Self {
        let content = self
            .content
            .as_mut()
            .expect("Content use cases must be initialized");

        content.get_person = Arc::new(uc);
        self
    }

    pub fn with_get_social_links(
        mut self,
        uc: impl GetSocialLinksUseCase + Send + Sync + 'static,
    ) -> Self {
        let content = self
            .content
            .as_mut()
            .expect("Content use cases must be initialized");

        content.get_social_links = Arc::new(uc);
        self
    }

    pub fn with_get_newsletter(
        mut self,
        uc: impl GetNewsletterUseCase + Send + Sync + 'static,
    ) -> Self {
        let content = self
            .content
            .as_mut()
            .expect("Content use cases must be initialized");

        content.get_newsletter = Arc::new(uc);
        self
    }

    pub fn with_get_section(mut self, uc: impl GetSectionUseCase + Send + Sync + 'static) -> Self {
        let content = self
            .content
            .as_mut()
            .expect("Content use cases must be initialized");

        content.get_section = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            content: self.content.unwrap(),
        })
    }
}
