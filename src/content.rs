pub const BRAND: &str = "Larry.Dev";
pub const DISPLAY_NAME: &str = "Larry Dev";
pub const GREETING: &str = "Hello, I'm";
pub const COPYRIGHT: &str = "Copyright © 2024 Larry Roots. All Rights Reserved.";

pub const PROFILE_IMAGE: &str = "/profile-pic.png";
pub const ABOUT_IMAGE: &str = "/about-pic.JPG";
pub const CV_PATH: &str = "/CV.pdf";
pub const CV_DOWNLOAD_NAME: &str = "Larry-CV.pdf";
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/larry-hery-5b9b942a8/";
pub const GITHUB_URL: &str = "https://github.com/01larrydev";
pub const EMAIL: &str = "larryrasolohe@gmail.com";

/// `rel` for outbound anchors and the matching `window.open` feature string.
pub const OUTBOUND_REL: &str = "noopener noreferrer";
pub const OUTBOUND_WINDOW_FEATURES: &str = "noopener,noreferrer";

pub const HERO_SECTION_ID: &str = "profile";

pub const ABOUT_TEXT: &str = "I am a developer specialized in ReactJS and PHP. I have a passion for \
creating effective and innovative software solutions. My goal is to create applications that not \
only work well, but are also pleasant to use. I have a solid understanding of programming \
principles and the ability to quickly learn new technologies.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavSection {
    pub id: &'static str,
    pub label: &'static str,
}

pub const NAV_SECTIONS: [NavSection; 4] = [
    NavSection { id: "about", label: "About" },
    NavSection { id: "experience", label: "Experience" },
    NavSection { id: "projects", label: "Projects" },
    NavSection { id: "contact", label: "Contact" },
];

/// Heading pair shown above each section ("Get To Know More" / "About Me").
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionHeading {
    pub kicker: &'static str,
    pub title: &'static str,
}

pub const ABOUT_HEADING: SectionHeading = SectionHeading { kicker: "Get To Know More", title: "About Me" };
pub const EXPERIENCE_HEADING: SectionHeading = SectionHeading { kicker: "Explore My", title: "Experience" };
pub const PROJECTS_HEADING: SectionHeading = SectionHeading { kicker: "Browse My Recent", title: "Projects" };
pub const CONTACT_HEADING: SectionHeading = SectionHeading { kicker: "Get in Touch", title: "Contact Me" };

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub lines: [&'static str; 2],
}

pub const HIGHLIGHTS: [Highlight; 2] = [
    Highlight {
        icon: "🏆",
        title: "Experience",
        lines: ["2+ years", "Frontend/Backend Development"],
    },
    Highlight {
        icon: "🎓",
        title: "Education",
        lines: ["B.Sc. Bachelors Degree", "D.T.Superior Degree"],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub level: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillGroup {
    pub reveal_id: &'static str,
    pub title: &'static str,
    pub skills: &'static [Skill],
}

pub const SKILL_GROUPS: [SkillGroup; 2] = [
    SkillGroup {
        reveal_id: "experience-frontend",
        title: "Frontend Development",
        skills: &[
            Skill { name: "HTML", level: "Experienced" },
            Skill { name: "CSS", level: "Experienced" },
            Skill { name: "SASS", level: "Intermediate" },
            Skill { name: "JavaScript", level: "Intermediate" },
            Skill { name: "React JS", level: "Experienced" },
            Skill { name: "PHP", level: "Intermediate" },
        ],
    },
    SkillGroup {
        reveal_id: "experience-backend",
        title: "Backend Development",
        skills: &[
            Skill { name: "PostgreSQL", level: "Intermediate" },
            Skill { name: "Node JS", level: "Basic" },
            Skill { name: "Laravel", level: "Intermediate" },
            Skill { name: "Git", level: "Intermediate" },
            Skill { name: "Wordpress", level: "Outil CMS" },
            Skill { name: "Prestashop", level: "Outil CMS" },
        ],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub reveal_id: &'static str,
    pub title: &'static str,
    pub image: Option<&'static str>,
    pub repository_url: &'static str,
    pub demo_url: &'static str,
}

impl Project {
    pub fn image_or_placeholder(&self) -> &'static str {
        self.image.unwrap_or(PLACEHOLDER_IMAGE)
    }
}

pub const PROJECTS: [Project; 3] = [
    Project {
        reveal_id: "project-0",
        title: "Web Site Restaurant",
        image: Some("/food_project.png"),
        repository_url: GITHUB_URL,
        demo_url: GITHUB_URL,
    },
    Project {
        reveal_id: "project-1",
        title: "Project Two",
        image: None,
        repository_url: GITHUB_URL,
        demo_url: GITHUB_URL,
    },
    Project {
        reveal_id: "project-2",
        title: "Project Three",
        image: None,
        repository_url: GITHUB_URL,
        demo_url: GITHUB_URL,
    },
];

pub fn mailto_href() -> String {
    format!("mailto:{EMAIL}")
}

/// Every id the page-level reveal observer latches, in document order.
pub fn reveal_ids() -> Vec<&'static str> {
    let mut ids = vec!["about-heading", "about-portrait", "about-summary", "experience-heading"];
    ids.extend(SKILL_GROUPS.iter().map(|group| group.reveal_id));
    ids.push("projects-heading");
    ids.extend(PROJECTS.iter().map(|project| project.reveal_id));
    ids.extend(["contact-heading", "contact-email", "contact-linkedin"]);
    ids
}
