use std::sync::Arc;

use crate::content::application::ports::incoming::use_cases::{
    GetNewsletterUseCase, GetPersonUseCase, GetSectionUseCase, GetSiteContentUseCase,
    GetSocialLinksUseCase,
};

#[derive(Clone)]
pub struct ContentUseCases {
    pub get_site: Arc<dyn GetSiteContentUseCase + Send + Sync>,
    pub get_person: Arc<dyn GetPersonUseCase + Send + Sync>,
    pub get_social_links: Arc<dyn GetSocialLinksUseCase + Send + Sync>,
    pub get_newsletter: Arc<dyn GetNewsletterUseCase + Send + Sync>,
    pub get_section: Arc<dyn GetSectionUseCase + Send + Sync>,
}
