use std::sync::LazyLock;

use crate::content::application::ports::outgoing::ContentSource;
use crate::content::domain::entities::{
    AboutSection, AvatarDisplay, BlogSection, Calendar, Experience, Featured, GalleryImage,
    GallerySection, HomeSection, Institution, Intro, Newsletter, Orientation, Person, SiteContent,
    Skill, SocialLink, Studies, TableOfContent, TechnicalSkills, WorkHistory, WorkSection,
};
use crate::content::domain::text::{Inline, RichText};

/// The content records, built once on first access and never mutated.
/// Derived strings (the display name, the mailto link, interpolated titles)
/// are fixed here.
pub static SITE_CONTENT: LazyLock<SiteContent> = LazyLock::new(build_site_content);

/// [`ContentSource`] over the compiled-in records. Every accessor clones out
/// of [`SITE_CONTENT`], so callers own what they get.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticContentSource;

impl ContentSource for StaticContentSource {
    fn site(&self) -> SiteContent {
        SITE_CONTENT.clone()
    }

    fn person(&self) -> Person {
        SITE_CONTENT.person.clone()
    }

    fn social_links(&self) -> Vec<SocialLink> {
        SITE_CONTENT.social.clone()
    }

    fn newsletter(&self) -> Newsletter {
        SITE_CONTENT.newsletter.clone()
    }

    fn home(&self) -> HomeSection {
        SITE_CONTENT.home.clone()
    }

    fn about(&self) -> AboutSection {
        SITE_CONTENT.about.clone()
    }

    fn blog(&self) -> BlogSection {
        SITE_CONTENT.blog.clone()
    }

    fn work(&self) -> WorkSection {
        SITE_CONTENT.work.clone()
    }

    fn gallery(&self) -> GallerySection {
        SITE_CONTENT.gallery.clone()
    }
}

fn gallery_image(src: &str, orientation: Orientation) -> GalleryImage {
    GalleryImage {
        src: src.to_string(),
        alt: "image".to_string(),
        orientation,
    }
}

fn build_site_content() -> SiteContent {
    let person = Person::new(
        "fairul",
        "muhammad",
        "Computer Science Student",
        "/images/avatar.jpg",
        "muhammadfairul13@gmail.com",
        "Asia/Jakarta",
        vec!["Indonesian".to_string(), "English".to_string()],
    );

    let social = vec![
        SocialLink::new("GitHub", "github", "https://github.com/fairulmuhammad"),
        SocialLink::new(
            "LinkedIn",
            "linkedin",
            "https://www.linkedin.com/in/muhammad-fairul-b5aa37312/",
        ),
        SocialLink::new("X", "x", "https://x.com/yourusername"),
        SocialLink::email(&person.email),
    ];

    let newsletter = Newsletter {
        display: false,
        title: RichText::plain_text(format!(
            "Subscribe to {}'s Learning Updates",
            person.first_name
        )),
        description: RichText::plain_text(
            "Follow my journey as I learn new technologies, work on projects, and share \
             insights about programming and software development.",
        ),
    };

    let home = HomeSection {
        path: "/".to_string(),
        image: "/images/og/home.jpg".to_string(),
        label: "Home".to_string(),
        title: format!("{}'s Portfolio", person.name),
        description: format!(
            "Portfolio website showcasing my learning journey as a {}",
            person.role
        ),
        headline: RichText::plain_text("Building digital solutions through code and curiosity"),
        featured: Featured {
            display: true,
            title: RichText(vec![
                Inline::text("Latest: "),
                Inline::strong("DevOps & Microservices Projects"),
            ]),
            href: "/work/my-learning-journey".to_string(),
        },
        subline: RichText(vec![
            Inline::text(format!(
                "I'm {}, a Computer Science student at Universitas Amikom Yogyakarta \
                 with hands-on experience in",
                person.first_name
            )),
            Inline::Break,
            Inline::text(
                "web development, Python programming, and modern DevOps practices.",
            ),
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
            link: "https://cal.com".to_string(),
        },
        intro: Intro {
            display: true,
            title: "Introduction".to_string(),
            description: RichText::plain_text(
                "I'm a Computer Science student at Universitas Amikom Yogyakarta with a deep \
                 passion for programming and technology. I enjoy exploring various aspects of \
                 software development including front-end, back-end, and DevOps. My curiosity \
                 drives me to continuously learn new technologies and apply them to solve \
                 real-world problems through academic projects and personal experiments.",
            ),
        },
        work: WorkHistory {
            display: true,
            title: "Learning & Projects".to_string(),
            experiences: vec![
                Experience {
                    company: "Front-End Development".to_string(),
                    timeframe: "2023 - Present".to_string(),
                    role: "Web Development Learning".to_string(),
                    achievements: vec![
                        RichText::plain_text(
                            "Mastered core web technologies including HTML5, CSS3, and modern \
                             JavaScript for building responsive and interactive user interfaces.",
                        ),
                        RichText::plain_text(
                            "Gained experience with PHP web development using CodeIgniter 3 \
                             framework for server-side programming and MVC architecture \
                             implementation.",
                        ),
                        RichText::plain_text(
                            "Built various web projects combining front-end and back-end \
                             technologies to create full-featured web applications.",
                        ),
                    ],
                    images: vec![],
                },
                Experience {
                    company: "DevOps & Infrastructure".to_string(),
                    timeframe: "2024 - Present".to_string(),
                    role: "DevOps Learning Journey".to_string(),
                    achievements: vec![
                        RichText::plain_text(
                            "Developed hands-on experience with microservices architecture, \
                             designing and implementing distributed systems using \
                             containerization technologies.",
                        ),
                        RichText::plain_text(
                            "Built CI/CD pipelines for automated testing and deployment, \
                             learning modern software delivery practices and workflow \
                             automation.",
                        ),
                        RichText::plain_text(
                            "Implemented monitoring and observability solutions using Grafana, \
                             Prometheus, and Loki for system performance tracking and log \
                             management.",
                        ),
                        RichText::plain_text(
                            "Containerized applications using Docker, gaining experience with \
                             container orchestration and deployment strategies.",
                        ),
                    ],
                    images: vec![],
                },
                Experience {
                    company: "Python & Database Development".to_string(),
                    timeframe: "2023 - Present".to_string(),
                    role: "Programming & Data Management".to_string(),
                    achievements: vec![
                        RichText::plain_text(
                            "Created Python applications including a simple calculator system, \
                             demonstrating proficiency in Python programming fundamentals and \
                             problem-solving.",
                        ),
                        RichText::plain_text(
                            "Learned database management with MySQL, understanding relational \
                             database design, queries, and data manipulation for web \
                             applications.",
                        ),
                        RichText::plain_text(
                            "Integrated Python scripts with database systems for data \
                             processing and automation tasks in various academic projects.",
                        ),
                    ],
                    images: vec![],
                },
            ],
        },
        studies: Studies {
            display: true,
            title: "Education".to_string(),
            institutions: vec![Institution {
                name: "Universitas Amikom Yogyakarta".to_string(),
                description: RichText::plain_text(
                    "Currently pursuing Bachelor's degree in Computer Science (Teknik \
                     Informatika), focusing on software engineering and modern web \
                     technologies.",
                ),
            }],
        },
        technical: TechnicalSkills {
            display: true,
            title: "Technical Skills & Experience".to_string(),
            skills: vec![
                Skill {
                    title: "Front-End Development".to_string(),
                    description: RichText::plain_text(
                        "Proficient in HTML5, CSS3, JavaScript, and PHP. Experience with \
                         CodeIgniter 3 framework for MVC-based web development and creating \
                         dynamic user interfaces.",
                    ),
                    images: vec![],
                },
                Skill {
                    title: "Database & Back-End".to_string(),
                    description: RichText::plain_text(
                        "Working knowledge of MySQL database management, including design, \
                         queries, and integration with web applications. Learning server-side \
                         development concepts.",
                    ),
                    images: vec![],
                },
                Skill {
                    title: "Python Programming".to_string(),
                    description: RichText::plain_text(
                        "Developed Python applications including calculator systems and \
                         automation scripts. Comfortable with Python fundamentals and \
                         problem-solving approaches.",
                    ),
                    images: vec![],
                },
                Skill {
                    title: "DevOps & Infrastructure".to_string(),
                    description: RichText::plain_text(
                        "Hands-on experience with Docker containerization, microservices \
                         architecture, CI/CD pipelines, and monitoring tools like Grafana, \
                         Prometheus, and Loki.",
                    ),
                    images: vec![],
                },
            ],
        },
    };

    let blog = BlogSection {
        path: "/blog".to_string(),
        label: "Blog".to_string(),
        title: "Writing about design and tech...".to_string(),
        description: format!("Read what {} has been up to recently", person.name),
    };

    let work = WorkSection {
        path: "/work".to_string(),
        label: "Work".to_string(),
        title: format!("Projects – {}", person.name),
        description: format!("Design and dev projects by {}", person.name),
    };

    let gallery = GallerySection {
        path: "/gallery".to_string(),
        label: "Gallery".to_string(),
        title: format!("Photo gallery – {}", person.name),
        description: format!("A photo collection by {}", person.name),
        images: vec![
            gallery_image("/images/gallery/horizontal-1.jpg", Orientation::Horizontal),
            gallery_image("/images/gallery/horizontal-2.jpg", Orientation::Horizontal),
            gallery_image("/images/gallery/horizontal-3.jpg", Orientation::Horizontal),
            gallery_image("/images/gallery/horizontal-4.jpg", Orientation::Horizontal),
            gallery_image("/images/gallery/vertical-1.jpg", Orientation::Vertical),
            gallery_image("/images/gallery/vertical-2.jpg", Orientation::Vertical),
            gallery_image("/images/gallery/vertical-3.jpg", Orientation::Vertical),
            gallery_image("/images/gallery/vertical-4.jpg", Orientation::Vertical),
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
