mod get_newsletter_service;
mod get_person_service;
mod get_section_service;
mod get_site_content_service;
mod get_social_links_service;

pub use get_newsletter_service::GetNewsletterService;
pub use get_person_service::GetPersonService;
pub use get_section_service::GetSectionService;
pub use get_site_content_service::GetSiteContentService;
pub use get_social_links_service::GetSocialLinksService;
