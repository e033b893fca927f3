mod get_newsletter;
mod get_person;
mod get_section;
mod get_site_content;
mod get_social_links;

pub use get_newsletter::*;
pub use get_person::*;
pub use get_section::*;
pub use get_site_content::*;
pub use get_social_links::*;
