use crate::content::domain::entities::{
    AboutSection, BlogSection, GallerySection, HomeSection, Newsletter, Person, SiteContent,
    SocialLink, WorkSection,
};

/// Read access to the content records. Accessors are synchronous and
/// infallible: the data behind this port is compiled in, so there is no
/// connection to fail and nothing to await. Implementations hand out owned
/// clones; callers may mutate what they get without affecting the registry.
pub trait ContentSource {
    fn site(&self) -> SiteContent;
    fn person(&self) -> Person;
    fn social_links(&self) -> Vec<SocialLink>;
    fn newsletter(&self) -> Newsletter;
    fn home(&self) -> HomeSection;
    fn about(&self) -> AboutSection;
    fn blog(&self) -> BlogSection;
    fn work(&self) -> WorkSection;
    fn gallery(&self) -> GallerySection;
}
