use serde::Serialize;
use utoipa::ToSchema;

use super::text::RichText;

// Content records are serialize-only. They exist as compiled-in data, and
// keeping Deserialize off closes the one route around the constructors that
// fix derived fields like `Person::name`.

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    /// Always `{first_name} {last_name}`, fixed when the record is built.
    pub name: String,
    pub role: String,
    pub avatar: String,
    pub email: String,
    /// IANA timezone identifier, e.g. "Asia/Jakarta".
    pub location: String,
    pub languages: Vec<String>,
}

impl Person {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        role: impl Into<String>,
        avatar: impl Into<String>,
        email: impl Into<String>,
        location: impl Into<String>,
        languages: Vec<String>,
    ) -> Self {
        let first_name = first_name.into();
        let last_name = last_name.into();
        let name = format!("{first_name} {last_name}");

        Self {
            first_name,
            last_name,
            name,
            role: role.into(),
            avatar: avatar.into(),
            email: email.into(),
            location: location.into(),
            languages,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct SocialLink {
    pub name: String,
    /// Identifier into the front-end icon registry, not a file path.
    pub icon: String,
    pub link: String,
}

impl SocialLink {
    pub fn new(
        name: impl Into<String>,
        icon: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            link: link.into(),
        }
    }

    /// The Email entry. Its link is derived from the address, never stored.
    pub fn email(address: &str) -> Self {
        Self {
            name: "Email".to_string(),
            icon: "email".to_string(),
            link: format!("mailto:{address}"),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct Newsletter {
    pub display: bool,
    pub title: RichText,
    pub description: RichText,
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct Featured {
    pub display: bool,
    pub title: RichText,
    pub href: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct HomeSection {
    pub path: String,
    /// OpenGraph image for the route.
    pub image: String,
    pub label: String,
    pub title: String,
    pub description: String,
    pub headline: RichText,
    pub featured: Featured,
    pub subline: RichText,
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TableOfContent {
    pub display: bool,
    pub sub_items: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct AvatarDisplay {
    pub display: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct Calendar {
    pub display: bool,
    pub link: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct Intro {
    pub display: bool,
    pub title: String,
    pub description: RichText,
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct Experience {
    pub company: String,
    pub timeframe: String,
    pub role: String,
    pub achievements: Vec<RichText>,
    pub images: Vec<ContentImage>,
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct WorkHistory {
    pub display: bool,
    pub title: String,
    pub experiences: Vec<Experience>,
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct Institution {
    pub name: String,
    pub description: RichText,
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct Studies {
    pub display: bool,
    pub title: String,
    pub institutions: Vec<Institution>,
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct Skill {
    pub title: String,
    pub description: RichText,
    pub images: Vec<ContentImage>,
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct TechnicalSkills {
    pub display: bool,
    pub title: String,
    pub skills: Vec<Skill>,
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AboutSection {
    pub path: String,
    pub label: String,
    pub title: String,
    pub description: String,
    pub table_of_content: TableOfContent,
    pub avatar: AvatarDisplay,
    pub calendar: Calendar,
    pub intro: Intro,
    pub work: WorkHistory,
    pub studies: Studies,
    pub technical: TechnicalSkills,
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct BlogSection {
    pub path: String,
    pub label: String,
    pub title: String,
    pub description: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct WorkSection {
    pub path: String,
    pub label: String,
    pub title: String,
    pub description: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
    /// Declared by the author; not checked against the physical asset.
    pub orientation: Orientation,
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct GallerySection {
    pub path: String,
    pub label: String,
    pub title: String,
    pub description: String,
    pub images: Vec<GalleryImage>,
}

/// Display size hints for the renderer, in layout units.
#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ContentImage {
    pub src: String,
    pub alt: String,
    pub width: u32,
    pub height: u32,
}

/// The full set of named content records.
#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct SiteContent {
    pub person: Person,
    pub social: Vec<SocialLink>,
    pub newsletter: Newsletter,
    pub home: HomeSection,
    pub about: AboutSection,
    pub blog: BlogSection,
    pub work: WorkSection,
    pub gallery: GallerySection,
}

impl SiteContent {
    /// Route paths of the five page sections, in display order.
    pub fn section_paths(&self) -> [&str; 5] {
        [
            &self.home.path,
            &self.about.path,
            &self.blog.path,
            &self.work.path,
            &self.gallery.path,
        ]
    }
}

/// One page section, tagged so consumers can dispatch on `kind`.
#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SectionContent {
    Home(HomeSection),
    About(AboutSection),
    Blog(BlogSection),
    Work(WorkSection),
    Gallery(GallerySection),
}
