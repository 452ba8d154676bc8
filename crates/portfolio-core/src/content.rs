//! Static portfolio content
//!
//! Everything here is fixed at compile time and rendered in declaration
//! order. Types derive `Serialize` so the page data can be handed to
//! JavaScript as JSON.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub initials: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub about: &'static [&'static str],
    /// Phrase in the last about paragraph that gets highlighted
    pub seeking: &'static str,
    pub copyright_year: u16,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

/// A labelled detail line on an education card, e.g. "Minor: Finance"
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Detail {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Education {
    pub school: &'static str,
    pub credential: &'static str,
    pub period: &'static str,
    pub details: &'static [Detail],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Project {
    pub name: &'static str,
    pub tech: &'static str,
    pub description: &'static str,
    pub highlights: &'static [&'static str],
    pub github: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Violet,
    Pink,
    Amber,
    Emerald,
}

impl Accent {
    /// Tailwind colour name used in class strings
    pub fn as_str(self) -> &'static str {
        match self {
            Accent::Violet => "violet",
            Accent::Pink => "pink",
            Accent::Amber => "amber",
            Accent::Emerald => "emerald",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SkillCategory {
    pub title: &'static str,
    pub accent: Accent,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct LeadershipRole {
    pub organization: &'static str,
    pub role: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CommunityService {
    pub organization: &'static str,
    pub role: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Email,
    LinkedIn,
    GitHub,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ContactLink {
    pub kind: ContactKind,
    pub label: &'static str,
    pub href: &'static str,
}

impl ContactLink {
    /// Links outside the page open in a new tab
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http")
    }
}

pub const PROFILE: Profile = Profile {
    name: "Nicole Lui-Leung",
    initials: "NL",
    headline: "Software Engineer & Full-Stack Developer",
    tagline: "Computer Science @ Stony Brook University | AI/Data Science Specialization",
    about: &[
        "Hi, I\u{2019}m Nicole! I\u{2019}m currently pursuing a Bachelor of Science in Computer Science with a minor in Finance at Stony Brook University, specializing in Artificial Intelligence and Data Science. I am a junior, with an expected graduation date of May 2027.",
        "I\u{2019}m an aspiring software engineer who enjoys building reliable, scalable software and solving complex problems through thoughtful design and clean code. Through hands-on projects, research, and internship experience, I\u{2019}ve developed a strong foundation in data structures, algorithms, full-stack development, and backend systems, while learning how to write maintainable, production-ready code.",
        "I bring a strong sense of ownership, persistence, and leadership to my work, whether that means driving a project forward, debugging difficult issues, or collaborating across teams. I\u{2019}m a fast learner with a growth mindset, comfortable working in Agile environments, communicating technical ideas clearly, and adapting quickly to new technologies.",
        "Outside of coding, I enjoy graphic design, digital art, and video editing, which sharpen my eye for detail and influence how I think about user experience, visual clarity, and product design.",
        "I\u{2019}m currently seeking Software Engineering Internship opportunities where I can contribute impactfully, learn from experienced engineers, and continue growing as a developer while building technology that matters.",
    ],
    seeking: "Software Engineering Internship",
    copyright_year: 2026,
};

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        title: "Digital Accessibility & Content Assistant",
        company: "Stony Brook University",
        location: "Stony Brook, NY",
        period: "Dec 2025 \u{2013} Current",
        highlights: &[
            "Enhanced availability, accessibility, and performance of university web platforms serving 27,000+ users by refactoring semantic HTML, ARIA attributes, DOM structure, and navigation flows in compliance with WCAG standards.",
            "Optimized frontend components within a CMS-driven production environment, improving maintainability, cross-browser compatibility, and long-term scalability.",
            "Collaborated with content owners and technical stakeholders to audit accessibility issues, deploy fixes, and validate improvements using automated and manual testing workflows.",
        ],
    },
    Experience {
        title: "PDAC Spatial Transcriptomics Computational Research Assistant",
        company: "Stony Brook University \u{2013} Department of Pathology",
        location: "Stony Brook, NY",
        period: "Nov 2025 \u{2013} Current",
        highlights: &[
            "Developed Python-based data pipelines using Scanpy, Squidpy, NumPy, and Pandas to ingest, preprocess, and analyze large-scale spatial transcriptomics datasets.",
            "Engineered reusable data transformation and visualization modules with Matplotlib to support multi-panel spatial analyses, including tumor vs. microenvironment comparisons and clustering overlays.",
            "Wrote modular, reproducible, and maintainable code to support scalable experimentation, rapid iteration across datasets, and reproducible research workflows.",
        ],
    },
    Experience {
        title: "Software Engineering Intern",
        company: "Cantor Fitzgerald / BGC Group",
        location: "New York, NY",
        period: "Jun 2025 \u{2013} Aug 2025",
        highlights: &[
            "Built Java backend services for a distributed trading client using QuickFIX/J, implementing FIX session management, message validation, sequencing, and fault-tolerant workflows.",
            "Designed and implemented backend components supporting live automated (CLI) and interactive (GUI) trading workflows, emphasizing low-latency performance and reliability at scale.",
            "Participated in Agile / Scrum SDLC, contributing to sprint planning, code reviews, debugging, QA validation, and production issue resolution.",
            "Applied software engineering best practices to deliver clean, testable, and production-ready code in a high-stakes financial systems environment.",
        ],
    },
    Experience {
        title: "Web Developer",
        company: "12 Pell",
        location: "New York, NY",
        period: "Jul 2024 \u{2013} Aug 2024",
        highlights: &[
            "Built responsive, full-stack web interfaces using HTML, CSS, and JavaScript, supporting high-traffic workloads (~2.5M requests/min).",
            "Optimized frontend performance and responsiveness to ensure consistent user experience under heavy load.",
            "Managed and optimized social media and digital content pipelines, contributing to engagement with 350,000+ users across platforms.",
        ],
    },
];

pub const EDUCATION: &[Education] = &[
    Education {
        school: "Stony Brook University",
        credential: "B.S. in Computer Science",
        period: "Aug 2023 \u{2013} May 2027",
        details: &[
            Detail {
                label: "Specialization",
                value: "AI / Data Science",
            },
            Detail {
                label: "Minor",
                value: "Finance",
            },
            Detail {
                label: "Relevant Coursework",
                value: "Algorithms Analysis, Data Structures, Object-Oriented Programming, Software Development, Programming Abstractions, Scripting Languages, Data Science, Probability & Statistics, Principles of Finance",
            },
        ],
    },
    Education {
        school: "Fiorello H. LaGuardia High School of Music and Art and Performing Arts",
        credential: "Advanced Regents Diploma",
        period: "Sep 2019 \u{2013} Jun 2023",
        details: &[Detail {
            label: "Major",
            value: "Visual Arts",
        }],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        name: "Playlister",
        tech: "JavaScript, React, Express, Node.js, MongoDB",
        description: "Full-stack web app for creating and managing YouTube-based playlists with authenticated user flows",
        highlights: &[
            "Handled 7,000+ songs and 400 playlists",
            "Implemented CRUD functions with undo/redo",
            "Cloud-native RESTful APIs",
        ],
        github: "https://github.com/Nicole-l1/316-FinalProject-Lui-Leung-Nicole",
    },
    Project {
        name: "Hotel Booking Prediction",
        tech: "Python, Pandas, scikit-learn",
        description: "ML models to identify booking cancellation patterns",
        highlights: &[
            "91% accuracy and 0.86 F1 score",
            "Logistic Regression, Random Forest, K-NN",
        ],
        github: "https://github.com/Nicole-l1/Hotel-Booking-Cancellation-Predictions",
    },
    Project {
        name: "NetTrack",
        tech: "JavaScript, React, Tailwind, Firebase",
        description: "Web app for synchronized Netflix activity with real-time communication",
        highlights: &["Real-time sync between users", "TMDb API integration"],
        github: "https://github.com/Nicole-l1/NetTrack",
    },
];

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Languages",
        accent: Accent::Violet,
        skills: &["Java", "Python", "JavaScript", "SQL", "C", "R", "HTML", "CSS"],
    },
    SkillCategory {
        title: "Frameworks",
        accent: Accent::Pink,
        skills: &[
            "React",
            "Node.js",
            "Express.js",
            "MongoDB",
            "NoSQL",
            "REST APIs",
            "AWS",
            "Tailwind",
            "CI/CD Pipelines",
            "QuickFIX/J",
            "FIX Protocol",
        ],
    },
    SkillCategory {
        title: "Tools",
        accent: Accent::Amber,
        skills: &[
            "Git",
            "GitHub",
            "GitLab",
            "Postman",
            "Jira",
            "Confluence",
            "Vitest",
            "Pytest",
            "VS Code",
            "IntelliJ",
            "PyCharm",
        ],
    },
    SkillCategory {
        title: "Soft Skills",
        accent: Accent::Emerald,
        skills: &[
            "Ownership",
            "Accountability",
            "Problem Solving",
            "Debugging",
            "Team Collaboration",
            "Clear Communication",
            "Leadership",
            "Adaptability",
            "Growth Mindset",
            "Agile / Scrum",
        ],
    },
];

pub const LEADERSHIP_ROLES: &[LeadershipRole] = &[
    LeadershipRole {
        organization: "Society of Asian Scientists and Engineers",
        role: "Public Relations",
        institution: "Stony Brook University",
        period: "Oct 2024 \u{2013} Present",
        description: "Drove outreach and stakeholder engagement initiatives to expand participation in STEM programming, leveraging content strategy and digital platforms to strengthen visibility and community impact.",
    },
    LeadershipRole {
        organization: "ChinaBlue",
        role: "President",
        institution: "Stony Brook University",
        period: "Jan 2023 \u{2013} Present",
        description: "Led and coordinated cross-functional teams to design and execute large-scale events for 100+ attendees, overseeing planning, logistics, and team collaboration while fostering an inclusive and engaging campus community.",
    },
    LeadershipRole {
        organization: "Women in Computer Science (WICS)",
        role: "Member",
        institution: "Stony Brook University",
        period: "Aug 2024 \u{2013} Present",
        description: "Participated in technical workshops and collaborative initiatives supporting diversity, mentorship, and professional development.",
    },
];

pub const COMMUNITY_SERVICE: &[CommunityService] = &[
    CommunityService {
        organization: "City Harvest",
        role: "Outreach & Marketing",
    },
    CommunityService {
        organization: "World Wildlife Fund",
        role: "Fundraiser",
    },
    CommunityService {
        organization: "Heart of Dinner (\u{611b}\u{5fc3}\u{9910})",
        role: "Volunteer",
    },
    CommunityService {
        organization: "Planned Parenthood Federation of America",
        role: "Fundraiser",
    },
    CommunityService {
        organization: "Lincoln Guild Housing Corp",
        role: "Intergenerational Activities Coordinator",
    },
];

pub const CONTACT_LINKS: &[ContactLink] = &[
    ContactLink {
        kind: ContactKind::Email,
        label: "Email Me",
        href: "mailto:lleung.nicole@gmail.com",
    },
    ContactLink {
        kind: ContactKind::LinkedIn,
        label: "LinkedIn",
        href: "https://linkedin.com/in/nicoleluileung",
    },
    ContactLink {
        kind: ContactKind::GitHub,
        label: "GitHub",
        href: "https://github.com/Nicole-l1",
    },
];

/// All content keyed by category
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PortfolioContent {
    pub profile: Profile,
    pub experiences: &'static [Experience],
    pub education: &'static [Education],
    pub projects: &'static [Project],
    pub skills: &'static [SkillCategory],
    pub leadership: &'static [LeadershipRole],
    pub community_service: &'static [CommunityService],
    pub contact: &'static [ContactLink],
}

pub const CONTENT: PortfolioContent = PortfolioContent {
    profile: PROFILE,
    experiences: EXPERIENCES,
    education: EDUCATION,
    projects: PROJECTS,
    skills: SKILL_CATEGORIES,
    leadership: LEADERSHIP_ROLES,
    community_service: COMMUNITY_SERVICE,
    contact: CONTACT_LINKS,
};

/// Serialize all content as JSON
pub fn to_json() -> Result<String, serde_json::Error> {
    serde_json::to_string(&CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_counts() {
        assert_eq!(EXPERIENCES.len(), 4);
        assert_eq!(EDUCATION.len(), 2);
        assert_eq!(PROJECTS.len(), 3);
        assert_eq!(SKILL_CATEGORIES.len(), 4);
        assert_eq!(LEADERSHIP_ROLES.len(), 3);
        assert_eq!(COMMUNITY_SERVICE.len(), 5);
        assert_eq!(CONTACT_LINKS.len(), 3);
    }

    #[test]
    fn test_entries_have_highlights() {
        assert!(EXPERIENCES.iter().all(|e| !e.highlights.is_empty()));
        assert!(PROJECTS.iter().all(|p| !p.highlights.is_empty()));
    }

    #[test]
    fn test_seeking_phrase_is_in_about() {
        let last = PROFILE.about.last().unwrap();
        assert!(last.contains(PROFILE.seeking));
    }

    #[test]
    fn test_external_links() {
        let email = &CONTACT_LINKS[0];
        assert!(!email.is_external());
        assert!(CONTACT_LINKS[1..].iter().all(|l| l.is_external()));
    }

    #[test]
    fn test_json_export() {
        let json = to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["profile"]["initials"], "NL");
        assert_eq!(value["projects"][2]["name"], "NetTrack");
        assert_eq!(value["skills"][3]["accent"], "emerald");
        assert_eq!(value["contact"][1]["kind"], "linkedin");
    }
}
