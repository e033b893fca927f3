mod get_newsletter_use_case;
mod get_person_use_case;
mod get_section_use_case;
mod get_site_content_use_case;
mod get_social_links_use_case;

pub use get_newsletter_use_case::GetNewsletterUseCase;
pub use get_person_use_case::GetPersonUseCase;
pub use get_section_use_case::{GetSectionError, GetSectionUseCase};
pub use get_site_content_use_case::GetSiteContentUseCase;
pub use get_social_links_use_case::GetSocialLinksUseCase;
