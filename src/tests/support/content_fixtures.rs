use crate::content::application::ports::outgoing::ContentSource;
use crate::content::domain::entities::{
    AboutSection, AvatarDisplay, BlogSection, Calendar, ContentImage, Experience, Featured,
    GalleryImage, GallerySection, HomeSection, Institution, Intro, Newsletter, Orientation, Person,
    SiteContent, Skill, SocialLink, Studies, TableOfContent, TechnicalSkills, WorkHistory,
    WorkSection,
};
use crate::content::domain::text::{Inline, RichText};

/// A compact registry with every record populated. The data is deliberately
/// different from the shipped content so equality asserts mean something.
pub fn sample_site() -> SiteContent {
    let person = Person::new(
        "ada",
        "lovelace",
        "Mathematician",
        "/images/avatar.jpg",
        "ada@example.com",
        "Europe/London",
        vec!["English".to_string(), "French".to_string()],
    );

    let social = vec![
        SocialLink::new("GitHub", "github", "https://github.com/ada"),
        SocialLink::email(&person.email),
    ];

    let newsletter = Newsletter {
        display: false,
        title: RichText(vec![
            Inline::text("Subscribe to "),
            Inline::strong("Ada's Notes"),
        ]),
        description: RichText::plain_text("Occasional letters on computation"),
    };

    let home = HomeSection {
        path: "/".to_string(),
        image: "/images/og/home.jpg".to_string(),
        label: "Home".to_string(),
        title: format!("{}'s Portfolio", person.name),
        description: "Portfolio of an analyst and metaphysician".to_string(),
        headline: RichText::plain_text("Poetical science, applied"),
        featured: Featured {
            display: true,
            title: RichText(vec![
                Inline::text("Latest: "),
                Inline::strong("Notes on the Analytical Engine"),
            ]),
            href: "/work/analytical-engine".to_string(),
        },
        subline: RichText(vec![
            Inline::text("I write programs for machines that do not yet exist."),
            Inline::Break,
            Inline::text("The engine weaves algebraic patterns."),
        ]),
    };

    let about = AboutSection {
        path: "/about".to_string(),
        label: "About".to_string(),
        title: format!("About – {}", person.name),
        description: format!(
            "Meet {}, {} from {}",
            person.name, person.role, person.location
        ),
        table_of_content: TableOfContent {
            display: true,
            sub_items: false,
        },
        avatar: AvatarDisplay { display: true },
        calendar: Calendar {
            display: false,
            link: "https://cal.com/ada".to_string(),
        },
        intro: Intro {
            display: true,
            title: "Introduction".to_string(),
            description: RichText::plain_text("Translator of Menabrea, annotator at length."),
        },
        work: WorkHistory {
            display: true,
            title: "Work".to_string(),
            experiences: vec![Experience {
                company: "Analytical Engine".to_string(),
                timeframe: "1842 - 1843".to_string(),
                role: "Programmer".to_string(),
                achievements: vec![RichText::plain_text(
                    "Published Note G, the first algorithm intended for a machine",
                )],
                images: vec![],
            }],
        },
        studies: Studies {
            display: true,
            title: "Studies".to_string(),
            institutions: vec![Institution {
                name: "Private tutelage".to_string(),
                description: RichText::plain_text("Mathematics under Augustus De Morgan"),
            }],
        },
        technical: TechnicalSkills {
            display: true,
            title: "Technical skills".to_string(),
            skills: vec![Skill {
                title: "Bernoulli numbers".to_string(),
                description: RichText::plain_text("Computed by punched-card program"),
                images: vec![ContentImage {
                    src: "/images/projects/engine/cover-01.jpg".to_string(),
                    alt: "Diagram of the engine".to_string(),
                    width: 16,
                    height: 9,
                }],
            }],
        },
    };

    let blog = BlogSection {
        path: "/blog".to_string(),
        label: "Blog".to_string(),
        title: format!("Writing – {}", person.name),
        description: "Letters on mathematics and machinery".to_string(),
    };

    let work = WorkSection {
        path: "/work".to_string(),
        label: "Work".to_string(),
        title: format!("Projects – {}", person.name),
        description: "Programs and translations".to_string(),
    };

    let gallery = GallerySection {
        path: "/gallery".to_string(),
        label: "Gallery".to_string(),
        title: format!("Photo gallery – {}", person.name),
        description: "Engravings and portraits".to_string(),
        images: vec![
            GalleryImage {
                src: "/images/gallery/horizontal-1.jpg".to_string(),
                alt: "image".to_string(),
                orientation: Orientation::Horizontal,
            },
            GalleryImage {
                src: "/images/gallery/vertical-1.jpg".to_string(),
                alt: "image".to_string(),
                orientation: Orientation::Vertical,
            },
        ],
    };

    SiteContent {
        person,
        social,
        newsletter,
        home,
        about,
        blog,
        work,
        gallery,
    }
}

/// [`ContentSource`] over a [`sample_site`] held in memory. Tests that need
/// to tweak a record can mutate `site` before handing the source to a
/// service.
#[derive(Debug, Clone)]
pub struct FixtureContentSource {
    pub site: SiteContent,
}

impl FixtureContentSource {
    pub fn sample() -> Self {
        Self {
            site: sample_site(),
        }
    }
}

impl ContentSource for FixtureContentSource {
    fn site(&self) -> SiteContent {
        self.site.clone()
    }

    fn person(&self) -> Person {
        self.site.person.clone()
    }

    fn social_links(&self) -> Vec<SocialLink> {
        self.site.social.clone()
    }

    fn newsletter(&self) -> Newsletter {
        self.site.newsletter.clone()
    }

    fn home(&self) -> HomeSection {
        self.site.home.clone()
    }

    fn about(&self) -> AboutSection {
        self.site.about.clone()
    }

    fn blog(&self) -> BlogSection {
        self.site.blog.clone()
    }

    fn work(&self) -> WorkSection {
        self.site.work.clone()
    }

    fn gallery(&self) -> GallerySection {
        self.site.gallery.clone()
    }
}
