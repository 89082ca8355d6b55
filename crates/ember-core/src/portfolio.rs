//! Portfolio content displayed by the page.
//!
//! Every struct deserializes with defaults, so a config file only needs to
//! name the fields it overrides.

use serde::{Deserialize, Serialize};

/// The complete content of the portfolio page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Portfolio {
    pub profile: Profile,
    pub headings: Headings,
    pub about: About,
    pub skills: Vec<SkillCategory>,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub contact: Contact,
}

/// Hero section content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub tagline: String,
    pub badge: String,
    /// Small labels floating around the portrait.
    pub floating: Vec<String>,
}

impl Profile {
    /// Full name as shown in the navigation bar.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            first_name: "USAMA".into(),
            last_name: "TARIQ".into(),
            role: "Full-Stack Developer".into(),
            tagline: "I build accessible, pixel-perfect, and performant web experiences. \
                      Specializing in React, Node.js, and modern web technologies."
                .into(),
            badge: "Available for Work".into(),
            floating: vec!["React.js".into(), "Node.js".into()],
        }
    }
}

/// Label, two-tone title and blurb that open a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    pub label: String,
    pub title: String,
    /// Second part of the title, drawn in the accent color.
    pub accent: String,
    pub blurb: String,
}

impl Heading {
    fn new(label: &str, title: &str, accent: &str, blurb: &str) -> Self {
        Self {
            label: label.into(),
            title: title.into(),
            accent: accent.into(),
            blurb: blurb.into(),
        }
    }
}

/// Headings of the sections after About.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Headings {
    pub skills: Heading,
    pub experience: Heading,
    pub projects: Heading,
    pub contact: Heading,
}

impl Default for Headings {
    fn default() -> Self {
        Self {
            skills: Heading::new(
                "My Expertise",
                "Tech",
                "Stack",
                "Technologies and tools I use to bring ideas to life",
            ),
            experience: Heading::new(
                "Work History",
                "Work",
                "Experience",
                "My professional journey and the companies I have worked with",
            ),
            projects: Heading::new(
                "Portfolio",
                "Featured",
                "Projects",
                "A selection of my recent work and personal projects",
            ),
            contact: Heading::new(
                "Get in Touch",
                "Let's",
                "Connect",
                "Prefer direct communication? Reach out via email, WhatsApp, or LinkedIn.",
            ),
        }
    }
}

/// A headline number with its caption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

impl Stat {
    fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// About section content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct About {
    pub label: String,
    pub heading: String,
    pub heading_accent: String,
    pub paragraphs: Vec<String>,
    pub stats: Vec<Stat>,
    /// Highlighted stat shown over the portrait.
    pub badge: Stat,
}

impl Default for About {
    fn default() -> Self {
        Self {
            label: "About Me".into(),
            heading: "Crafting Digital".into(),
            heading_accent: "Experiences".into(),
            paragraphs: vec![
                "I am a Full-Stack Web Developer with hands-on experience building responsive \
                 web applications and Shopify e-commerce stores. I have worked on government \
                 projects, client stores, and personal web apps, focusing on clean user \
                 interfaces, performant backends, and SEO-friendly solutions."
                    .into(),
                "I enjoy turning real-world requirements into reliable, user-friendly products \
                 using JavaScript, React, Node.js, and modern web tools. My approach combines \
                 technical expertise with a keen eye for design, ensuring every project I work \
                 on is both functional and visually appealing."
                    .into(),
                "I am currently open to freelance opportunities, full-time positions, and \
                 collaborative projects where I can contribute my skills and continue growing \
                 as a developer."
                    .into(),
            ],
            stats: vec![
                Stat::new("6+", "Months Experience"),
                Stat::new("10+", "Projects Completed"),
                Stat::new("5+", "Happy Clients"),
                Stat::new("100%", "Commitment"),
            ],
            badge: Stat::new("6+", "Months Experience"),
        }
    }
}

/// A single skill with a proficiency percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

/// A titled group of skills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<Skill>,
}

impl SkillCategory {
    fn new(title: &str, skills: &[(&str, u8)]) -> Self {
        Self {
            title: title.into(),
            skills: skills
                .iter()
                .map(|(name, level)| Skill {
                    name: (*name).into(),
                    level: *level,
                })
                .collect(),
        }
    }

    /// The default skill matrix.
    pub fn defaults() -> Vec<SkillCategory> {
        vec![
            Self::new(
                "Frontend",
                &[
                    ("HTML5", 90),
                    ("CSS3", 85),
                    ("JavaScript", 85),
                    ("React.js", 80),
                    ("Responsive Design", 85),
                ],
            ),
            Self::new(
                "Backend",
                &[("Node.js", 80), ("Express.js", 75), ("RESTful APIs", 85)],
            ),
            Self::new("Database", &[("MongoDB", 75)]),
            Self::new("Tools & Others", &[("Git", 80), ("GitHub", 80), ("SEO", 75)]),
        ]
    }
}

/// One position on the experience timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub location: String,
    pub period: String,
    pub description: Vec<String>,
    pub highlights: Vec<String>,
}

impl Experience {
    /// The default work history.
    pub fn defaults() -> Vec<Experience> {
        vec![
            Experience {
                company: "NavTech".into(),
                role: "Full Stack Developer".into(),
                location: "Government Institute".into(),
                period: "March-2024 - June-2024".into(),
                description: vec![
                    "Developed and maintained responsive web applications using JavaScript, \
                     React, and Node.js, enhancing user engagement and functionality."
                        .into(),
                    "Collaborated with cross-functional teams to gather requirements and deliver \
                     innovative solutions, improving overall project efficiency."
                        .into(),
                    "Implemented RESTful APIs and integrated third-party services, ensuring \
                     seamless data flow and strong application performance."
                        .into(),
                ],
                highlights: vec![
                    "React".into(),
                    "Node.js".into(),
                    "REST APIs".into(),
                    "Team Collaboration".into(),
                ],
            },
            Experience {
                company: "Tab on Tech".into(),
                role: "Shopify Developer".into(),
                location: "Remote".into(),
                period: "2023 - 2024".into(),
                description: vec![
                    "Designed and customized Shopify themes to enhance user experience and align \
                     with each brand's visual identity."
                        .into(),
                    "Built and integrated custom features using Liquid, HTML, CSS, and \
                     JavaScript."
                        .into(),
                    "Optimized store performance and SEO, improving page load times and \
                     increasing organic traffic."
                        .into(),
                    "Worked directly with clients to understand their needs and provide tailored \
                     solutions and ongoing support."
                        .into(),
                    "Conducted thorough testing and debugging to ensure smooth performance across \
                     devices and browsers."
                        .into(),
                ],
                highlights: vec![
                    "Shopify".into(),
                    "Liquid".into(),
                    "SEO".into(),
                    "Performance Optimization".into(),
                ],
            },
        ]
    }
}

/// A showcased project.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub tech: Vec<String>,
    pub role: String,
    pub demo: Option<String>,
    pub github: Option<String>,
}

impl Project {
    /// The default project list.
    pub fn defaults() -> Vec<Project> {
        vec![
            Project {
                title: "Car Wash Management System".into(),
                subtitle: "Final Year Project".into(),
                description: "A full-stack web application with separate admin and customer \
                              modules for managing a car wash business. Features include booking \
                              management, invoicing, inventory tracking, authentication, and \
                              online payments via Stripe."
                    .into(),
                tech: ["React.js", "Node.js", "Express.js", "MongoDB", "Stripe"]
                    .map(String::from)
                    .to_vec(),
                role: "Full-stack development (React frontend, Node/Express backend, MongoDB, \
                       API design, Stripe integration)"
                    .into(),
                demo: None,
                github: None,
            },
            Project {
                title: "HifzLab.com".into(),
                subtitle: "React Web Application".into(),
                description: "A modern web application built with React featuring a \
                              dashboard-style interface with authentication, user profiles, and \
                              data-driven views, with progress tracking and personalized content."
                    .into(),
                tech: ["React.js", "Modern UI", "Responsive Design"]
                    .map(String::from)
                    .to_vec(),
                role: "Frontend development in React, UI implementation, state management, and \
                       responsive design"
                    .into(),
                demo: Some("https://hifzlab.com".into()),
                github: None,
            },
        ]
    }
}

/// A named external profile link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

/// Contact section content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub email: String,
    pub whatsapp: String,
    pub location: String,
    pub availability: String,
    pub social: Vec<SocialLink>,
}

impl Default for Contact {
    fn default() -> Self {
        let link = |name: &str, url: &str| SocialLink {
            name: name.into(),
            url: url.into(),
        };
        Self {
            email: "usama11tariqawan@gmail.com".into(),
            whatsapp: "+92 311 5663465".into(),
            location: "Pakistan".into(),
            availability: "Open to work".into(),
            social: vec![
                link(
                    "LinkedIn",
                    "https://www.linkedin.com/in/usama-tariq-396452279/",
                ),
                link("GitHub", "https://github.com/Umiiawan"),
                link("WhatsApp", "https://wa.me/923115663465"),
            ],
        }
    }
}

impl Default for Portfolio {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Portfolio {
    /// Portfolio with the built-in content.
    pub fn builtin() -> Self {
        Self {
            profile: Profile::default(),
            headings: Headings::default(),
            about: About::default(),
            skills: SkillCategory::defaults(),
            experience: Experience::defaults(),
            projects: Project::defaults(),
            contact: Contact::default(),
        }
    }
}
