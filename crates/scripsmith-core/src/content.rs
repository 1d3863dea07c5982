//! Static portfolio content: sections, projects, skills, and contact channels

/// One scrollable content block of the page, in fixed vertical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Projects,
    Skills,
    About,
    Contact,
}

impl Section {
    /// All sections in page order
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Projects,
        Section::Skills,
        Section::About,
        Section::Contact,
    ];

    /// Link label shown in the navigation bar
    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::About => "About",
            Section::Contact => "Contact",
        }
    }

    /// Anchor id used to look up the section's recorded scroll offset
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::About => "about",
            Section::Contact => "contact",
        }
    }
}

/// A portfolio project entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    /// Representative image path, relative to the site root
    pub image: &'static str,
    /// Ordered tech tags; the list summary shows at most the first three
    pub tech: &'static [&'static str],
    pub github: &'static str,
    pub live: &'static str,
    /// Accent color as a hex string, e.g. "#B026FF"
    pub color: &'static str,
}

impl Project {
    /// Tech tags shown in the list summary
    pub fn summary_tech(&self) -> &[&'static str] {
        &self.tech[..self.tech.len().min(3)]
    }

    /// Count of tags hidden behind the overflow chip
    pub fn extra_tech(&self) -> usize {
        self.tech.len().saturating_sub(3)
    }

    /// Overflow chip text, present iff more than three tags exist
    pub fn overflow_label(&self) -> Option<String> {
        (self.tech.len() > 3).then(|| format!("+{} more", self.tech.len() - 3))
    }
}

/// The four showcase projects, in display order
pub const PROJECTS: [Project; 4] = [
    Project {
        id: 1,
        title: "Twitter Clone",
        description: "A modern e-commerce platform built with Next.js, featuring real-time \
                      inventory management, secure payments, and an intuitive admin dashboard.",
        image: "/twitter.jpeg",
        tech: &["Next.js", "TypeScript", "Stripe", "Prisma", "PostgreSQL"],
        github: "https://github.com/whos-muturi/Twitter-Clone",
        live: "https://lovely-rabanadas-0ce4bd.netlify.app/",
        color: "#B026FF",
    },
    Project {
        id: 2,
        title: "3D Website",
        description: "An immersive 3D portfolio showcasing interactive WebGL experiences, \
                      built with Three.js and React Three Fiber.",
        image: "/3d.jpeg",
        tech: &["React", "Three.js", "WebGL", "Framer Motion", "TypeScript"],
        github: "https://github.com/whos-muturi/3Dweb",
        live: "#",
        color: "#00D4FF",
    },
    Project {
        id: 3,
        title: "AI-Powered Chat App",
        description: "Real-time chat application with AI integration, featuring smart \
                      responses, file sharing, and collaborative workspaces.",
        image: "/chat.jpeg",
        tech: &["React", "Node.js", "Socket.io", "OpenAI", "MongoDB"],
        github: "https://github.com/whos-muturi/AI-Chat",
        live: "https://vocal-churros-f13fa5.netlify.app/",
        color: "#00FF88",
    },
    Project {
        id: 4,
        title: "VR Data Visualization",
        description: "Immersive VR experience for visualizing complex datasets in 3D space, \
                      built with WebXR and custom shaders.",
        image: "/vr.jpeg",
        tech: &["WebXR", "Three.js", "D3.js", "GLSL", "React"],
        github: "#",
        live: "#",
        color: "#FF0080",
    },
];

/// External link listing every deployed project
pub const ALL_PROJECTS_URL: &str = "https://app.netlify.com/teams/whos-muturi/projects";

/// One skill with its proficiency percentage (0..=100), drives the bar fill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

/// A titled group of skills sharing an accent color
#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [Skill],
    pub color: &'static str,
}

pub const SKILL_CATEGORIES: [SkillCategory; 3] = [
    SkillCategory {
        title: "Frontend Development",
        skills: &[
            Skill { name: "React/Next.js", level: 95 },
            Skill { name: "TypeScript", level: 90 },
            Skill { name: "Three.js/WebGL", level: 85 },
            Skill { name: "Tailwind CSS", level: 92 },
            Skill { name: "Framer Motion", level: 88 },
        ],
        color: "#00D4FF",
    },
    SkillCategory {
        title: "Backend Development",
        skills: &[
            Skill { name: "Node.js", level: 88 },
            Skill { name: "Python", level: 85 },
            Skill { name: "PostgreSQL", level: 82 },
            Skill { name: "MongoDB", level: 80 },
            Skill { name: "GraphQL", level: 75 },
        ],
        color: "#00FF88",
    },
    SkillCategory {
        title: "3D & Creative",
        skills: &[
            Skill { name: "Blender", level: 90 },
            Skill { name: "GLSL Shaders", level: 75 },
            Skill { name: "WebXR/VR", level: 70 },
            Skill { name: "After Effects", level: 78 },
            Skill { name: "Figma/Design", level: 85 },
        ],
        color: "#B026FF",
    },
];

/// Chips in the additional-technologies grid below the skill bars
pub const EXTRA_TECHNOLOGIES: [&str; 12] = [
    "Docker", "AWS", "Git", "Jest", "Webpack", "Vite",
    "Prisma", "Redis", "Stripe", "Socket.io", "WebRTC", "Electron",
];

/// Pills under the hero heading
pub const HERO_TECH: [&str; 10] = [
    "React", "TypeScript", "Three.js", "Node.js", "Next.js",
    "Python", "WebGL", "Blender", "MongoDB", "PostgreSQL",
];

/// One floating logo in the hero orbit showcase
#[derive(Debug, Clone, Copy)]
pub struct OrbitLogo {
    pub label: &'static str,
    pub color: &'static str,
    /// Per-logo spin/float speed multiplier
    pub speed: f32,
    pub position: [f32; 3],
}

pub const ORBIT_LOGOS: [OrbitLogo; 5] = [
    OrbitLogo { label: "React", color: "#61DAFB", speed: 0.8, position: [-3.0, 1.0, 0.0] },
    OrbitLogo { label: "Three.js", color: "#00D4FF", speed: 1.2, position: [0.0, 0.0, 0.0] },
    OrbitLogo { label: "TypeScript", color: "#3178C6", speed: 0.6, position: [3.0, -0.5, 0.0] },
    OrbitLogo { label: "Node.js", color: "#00FF88", speed: 1.0, position: [-2.0, -1.5, 0.0] },
    OrbitLogo { label: "Next.js", color: "#ffffff", speed: 0.9, position: [2.0, 1.5, 0.0] },
];

/// One rotating panel in the skills showcase
#[derive(Debug, Clone, Copy)]
pub struct ShowcasePanel {
    pub label: &'static str,
    pub color: &'static str,
    pub position: [f32; 3],
}

pub const SHOWCASE_PANELS: [ShowcasePanel; 4] = [
    ShowcasePanel { label: "MongoDB", color: "#00FF88", position: [-2.0, 1.0, 0.0] },
    ShowcasePanel { label: "React", color: "#61DAFB", position: [2.0, 0.0, 0.0] },
    ShowcasePanel { label: "Blender", color: "#B026FF", position: [0.0, -1.5, 0.0] },
    ShowcasePanel { label: "Python", color: "#FF0080", position: [0.0, 2.0, 0.0] },
];

/// A milestone row in the about section
#[derive(Debug, Clone, Copy)]
pub struct Achievement {
    pub glyph: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const ACHIEVEMENTS: [Achievement; 3] = [
    Achievement {
        glyph: "🏆",
        title: "15+ Projects Completed",
        description: "Successfully delivered projects ranging from simple websites to complex \
                      3D applications",
    },
    Achievement {
        glyph: "📅",
        title: "3+ Years Experience",
        description: "Continuous learning and development in web technologies and 3D graphics",
    },
    Achievement {
        glyph: "📍",
        title: "Global Collaboration",
        description: "Worked with clients and teams across different continents and time zones",
    },
];

/// A card in the beyond-development row
#[derive(Debug, Clone, Copy)]
pub struct Interest {
    pub title: &'static str,
    pub description: &'static str,
}

pub const INTERESTS: [Interest; 3] = [
    Interest {
        title: "3D Art & Animation",
        description: "Creating stunning 3D models and animations using Blender and Cinema 4D",
    },
    Interest {
        title: "Open Source",
        description: "Contributing to open-source projects and sharing knowledge with the \
                      community",
    },
    Interest {
        title: "Teaching & Mentoring",
        description: "Helping aspiring developers learn modern web development techniques",
    },
];

/// External profile button in the contact section
#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
    pub color: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 2] = [
    SocialLink { name: "GitHub", url: "https://github.com/whos-muturi", color: "#00D4FF" },
    SocialLink {
        name: "LinkedIn",
        url: "https://www.linkedin.com/in/johnson-muturi/",
        color: "#00FF88",
    },
];

/// One row of the get-in-touch card
#[derive(Debug, Clone, Copy)]
pub struct ContactChannel {
    pub glyph: &'static str,
    pub value: &'static str,
    pub color: &'static str,
}

pub const CONTACT_CHANNELS: [ContactChannel; 3] = [
    ContactChannel { glyph: "✉", value: "johnsonmuturi3@gmail.com", color: "#FF0080" },
    ContactChannel { glyph: "⌥", value: "github.com/whos-muturi", color: "#00D4FF" },
    ContactChannel { glyph: "in", value: "linkedin.com/in/johnson-muturi/", color: "#00FF88" },
];

/// Hero and page-wide copy
pub mod profile {
    pub const WORDMARK: &str = "Scripsmith";
    pub const NAME: &str = "Johnson";
    /// Subtitle segments with their accent roles: (text, accent hex or empty for plain)
    pub const SUBTITLE: [(&str, &str); 4] = [
        ("Full Stack", "#00D4FF"),
        ("Developer", ""),
        ("&", "#B026FF"),
        ("3D Artist", "#00FF88"),
    ];
    pub const TAGLINE: &str =
        "Crafting immersive digital experiences with cutting-edge web technologies and \
         stunning 3D visuals. Passionate about creating interactive worlds that blend \
         creativity with functionality.";
    pub const RESUME_URL: &str = "/resume.pdf";
    pub const FOOTER: &str = "© 2024 Alex Chen. Built with Rust, Bevy, and lots of ☕";
    pub const LOADING_HEADLINE: &str = "Loading Portfolio";

    pub const BIO: [&str; 3] = [
        "Hello! I'm Johnson, a passionate full-stack developer and 3D artist. My journey \
         into programming started with a fascination for creating interactive experiences \
         that blend cutting-edge technology with stunning visual design.",
        "With over 3 years of experience in web development, I specialize in creating \
         fullstack apps and immersive digital experiences using modern frameworks like \
         React, Next.js, Flask, Express.js and Three.js. My unique background in both \
         development and 3D art allows me to approach projects from multiple perspectives, \
         resulting in truly innovative solutions.",
        "When I'm not coding, you'll find me exploring new 3D modeling techniques in \
         Blender, experimenting with WebGL shaders, or contributing to open-source \
         projects. I believe that the future of web development lies in creating more \
         immersive and interactive experiences.",
    ];

    pub const RESPONSE_NOTE: &str =
        "Response Time: I typically respond to messages within 24 hours. For urgent \
         projects, feel free to mention it in your message and I'll prioritize accordingly.";
}

/// Heading and subheading shown at the top of a section
#[derive(Debug, Clone, Copy)]
pub struct SectionHeading {
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Gradient endpoints for the title, as hex strings
    pub gradient: (&'static str, &'static str),
}

impl Section {
    /// Intro heading for the section, None for the hero (it has its own layout)
    pub fn heading(&self) -> Option<SectionHeading> {
        match self {
            Section::Home => None,
            Section::Projects => Some(SectionHeading {
                title: "Featured Projects",
                subtitle: "Discover my latest work combining cutting-edge technology with \
                           creative design",
                gradient: ("#00D4FF", "#B026FF"),
            }),
            Section::Skills => Some(SectionHeading {
                title: "Skills & Expertise",
                subtitle: "A comprehensive toolkit for building innovative digital experiences",
                gradient: ("#00FF88", "#00D4FF"),
            }),
            Section::About => Some(SectionHeading {
                title: "About Me",
                subtitle: "Passionate developer bridging the gap between design and technology",
                gradient: ("#B026FF", "#FF0080"),
            }),
            Section::Contact => Some(SectionHeading {
                title: "Let's Connect",
                subtitle: "Ready to bring your ideas to life? Let's create something amazing \
                           together",
                gradient: ("#FF0080", "#B026FF"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_in_page_order() {
        assert_eq!(Section::ALL.len(), 5);
        assert_eq!(Section::ALL[0], Section::Home);
        assert_eq!(Section::ALL[4], Section::Contact);
        let labels: Vec<_> = Section::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, ["Home", "Projects", "Skills", "About", "Contact"]);
    }

    #[test]
    fn test_anchors_are_unique() {
        let mut anchors: Vec<_> = Section::ALL.iter().map(|s| s.anchor()).collect();
        anchors.sort();
        anchors.dedup();
        assert_eq!(anchors.len(), Section::ALL.len());
    }

    #[test]
    fn test_project_ids_unique_and_ordered() {
        let ids: Vec<_> = PROJECTS.iter().map(|p| p.id).collect();
        assert_eq!(ids, [1, 2, 3, 4]);
    }

    #[test]
    fn test_summary_shows_first_three() {
        let project = &PROJECTS[0];
        assert_eq!(project.summary_tech(), &["Next.js", "TypeScript", "Stripe"]);
        assert_eq!(project.extra_tech(), 2);
        assert_eq!(project.overflow_label().as_deref(), Some("+2 more"));
    }

    #[test]
    fn test_no_overflow_for_short_tech_lists() {
        let project = Project {
            id: 99,
            title: "Short",
            description: "",
            image: "",
            tech: &["A", "B"],
            github: "#",
            live: "#",
            color: "#00D4FF",
        };
        assert_eq!(project.summary_tech(), &["A", "B"]);
        assert_eq!(project.extra_tech(), 0);
        assert_eq!(project.overflow_label(), None);
    }

    #[test]
    fn test_skill_levels_are_percentages() {
        for category in &SKILL_CATEGORIES {
            assert_eq!(category.skills.len(), 5);
            for skill in category.skills {
                assert!(skill.level <= 100, "{} out of range", skill.name);
            }
        }
    }

    #[test]
    fn test_every_non_hero_section_has_heading() {
        for section in Section::ALL {
            assert_eq!(section.heading().is_some(), section != Section::Home);
        }
    }
}
