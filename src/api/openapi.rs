use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::OpenApi;

use crate::content::domain::entities::{
    AboutSection, AvatarDisplay, BlogSection, Calendar, ContentImage, Experience, Featured,
    GalleryImage, GallerySection, HomeSection, Institution, Intro, Newsletter, Orientation,
    Person, SectionContent, SiteContent, Skill, SocialLink, Studies, TableOfContent,
    TechnicalSkills, WorkHistory, WorkSection,
};
use crate::content::domain::text::{Inline, RichText};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Content API",
        version = "1.0.0",
        description = "Read-only API over the portfolio content records",
        contact(
            name = "Fairul Muhammad",
            email = "muhammadfairul13@gmail.com"
        )
    ),
    paths(
        // Content endpoints
        crate::content::adapter::incoming::web::routes::get_site_content_handler,
        crate::content::adapter::incoming::web::routes::get_person_handler,
        crate::content::adapter::incoming::web::routes::get_social_links_handler,
        crate::content::adapter::incoming::web::routes::get_newsletter_handler,
        crate::content::adapter::incoming::web::routes::get_section_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<SiteContent>,
            ErrorResponse,
            ErrorDetail,

            // Content records
            SiteContent,
            Person,
            SocialLink,
            Newsletter,
            HomeSection,
            Featured,
            AboutSection,
            TableOfContent,
            AvatarDisplay,
            Calendar,
            Intro,
            WorkHistory,
            Experience,
            Studies,
            Institution,
            TechnicalSkills,
            Skill,
            BlogSection,
            WorkSection,
            GallerySection,
            GalleryImage,
            Orientation,
            ContentImage,
            SectionContent,
            RichText,
            Inline
        )
    ),
    tags(
        (name = "content", description = "Portfolio content endpoints"),
    )
)]
pub struct ApiDoc;
