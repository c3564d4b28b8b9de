//! Static page copy. Everything here is read-only presentation data.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionId {
    Hero,
    About,
    Skills,
    Projects,
    Resume,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Resume,
        SectionId::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Resume => "resume",
            Self::Contact => "contact",
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Resume => "Resume",
            Self::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.as_str())
    }
}

pub const OWNER: &str = "Salman Ahmad";
pub const ROLE: &str = "Software Engineer & Web Developer";
pub const HERO_BLURB: &str = "I build exceptional digital experiences with modern technologies, focusing on creating elegant solutions to complex problems.";
pub const RESUME_URL: &str = "/cv.pdf";
pub const PORTRAIT_URL: &str = "https://images.pexels.com/photos/3861958/pexels-photo-3861958.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2";
pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d105627.89709794684!2d73.15353737374174!3d34.17519563970254!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x38de3111557ac517%3A0x6e59a635b12e952c!2sAbbottabad%2C%20Pakistan!5e0!3m2!1sen!2s!4v1746817274952!5m2!1sen!2s";

#[derive(Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub glyph: &'static str,
}

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        href: "https://github.com/salmanAhmad-code",
        glyph: "GH",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://linkedin.com/in/salman-ahmad-398274290",
        glyph: "in",
    },
    SocialLink {
        label: "X",
        href: "https://x.com/SalmanXDev",
        glyph: "X",
    },
    SocialLink {
        label: "Facebook",
        href: "https://www.facebook.com/SalmanAhmadyt",
        glyph: "f",
    },
    SocialLink {
        label: "Instagram",
        href: "https://www.instagram.com/beingsalman_ahmad/",
        glyph: "IG",
    },
];

/// The hero only shows the first three profiles.
pub const HERO_SOCIAL_COUNT: usize = 3;

pub const ABOUT_HEADLINE: &str =
    "Software Engineer with a Passion for Building Real-World Web Solutions";

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "Hello! I'm Salman Ahmad, a software engineering student at COMSATS University Islamabad (Abbottabad Campus) and a Software Engineering Fellow at Headstarter AI. I specialize in crafting modern, user-centric web applications with a strong focus on UI/UX, scalability, and functionality.",
    "Through hands-on experience across 6+ real-world projects, including SaaS platforms, AI-powered apps, and full-stack websites for companies, I've developed a deep passion for solving real-world problems through code. My work combines clean, maintainable code with practical design thinking to deliver software that is not only functional but impactful.",
];

pub const ABOUT_CHIPS: &[&str] = &[
    "JavaScript",
    "TypeScript",
    "React",
    "Next.js",
    "Tailwind CSS",
    "Node.js",
    "Supabase",
    "OpenAI API",
    "Gemini API",
    "Stripe",
];

pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub static FEATURES: &[Feature] = &[
    Feature {
        title: "Frontend Development",
        description: "Crafting sleek, responsive, and user-friendly interfaces using Next.js, Tailwind CSS, and JavaScript.",
    },
    Feature {
        title: "Backend Integration",
        description: "Implementing authentication, databases, and serverless functions using Firebase, Clerk, and Stripe.",
    },
    Feature {
        title: "AI Integration",
        description: "Building smart features with OpenAI, Gemini API, and Pinecone for personalized, intelligent user experiences.",
    },
    Feature {
        title: "Real-World Project Delivery",
        description: "Delivering production-ready applications for real companies with high-quality code and modern design.",
    },
];

pub struct Skill {
    pub name: &'static str,
    pub proficiency: u8,
}

pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

const fn skill(name: &'static str, proficiency: u8) -> Skill {
    Skill { name, proficiency }
}

pub static SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Frontend",
        skills: &[
            skill("JavaScript", 95),
            skill("TypeScript", 85),
            skill("React.js", 90),
            skill("Next.js", 95),
            skill("HTML/CSS", 90),
            skill("Tailwind CSS", 95),
        ],
    },
    SkillCategory {
        title: "Backend & APIs",
        skills: &[
            skill("Java", 85),
            skill("C", 80),
            skill("Firebase (Auth + Firestore)", 90),
            skill("Supabase (Auth + Database)", 85),
            skill("Node.js", 80),
            skill("Clerk (Auth)", 85),
            skill("Stripe (Payments)", 85),
        ],
    },
    SkillCategory {
        title: "AI & Advanced Tools",
        skills: &[skill("OpenAI API", 85), skill("Gemini API", 85)],
    },
    SkillCategory {
        title: "Tools & Workflow",
        skills: &[
            skill("Git / GitHub", 90),
            skill("Vercel", 90),
            skill("Agile / Team Projects", 85),
            skill("Graphic Design (Photoshop)", 80),
        ],
    },
];

pub static EXPERTISE: &[Feature] = &[
    Feature {
        title: "Full-Stack Web Development",
        description: "Building complete apps using Next.js, Firebase, Supabase and Tailwind CSS",
    },
    Feature {
        title: "AI Integration",
        description: "Integrating OpenAI and Gemini API to power intelligent features",
    },
    Feature {
        title: "Authentication & Payments",
        description: "Securing apps using Clerk, Firebase Auth, and Stripe integration",
    },
    Feature {
        title: "UI/UX Design",
        description: "Delivering clean and user-centric interfaces using Tailwind",
    },
    Feature {
        title: "Performance Optimization",
        description: "Improving load times, SEO, and responsiveness for better UX",
    },
    Feature {
        title: "Client Project Delivery",
        description: "Delivering production-ready web solutions for real-world clients like KWC",
    },
];

pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
}

pub static EXPERIENCE: &[Experience] = &[
    Experience {
        title: "Software Engineering Fellow",
        company: "Headstarter AI",
        duration: "Aug 2024 - Sep 2024",
        description: "Built and shipped 6 real-world projects including AI-powered apps and SaaS products. Led frontend development, authentication systems, Stripe integration, and waitlist features. Delivered a client site for KWC Construction.",
        technologies: &["Next.js", "Firebase", "Tailwind CSS", "OpenAI API", "Stripe", "Clerk"],
    },
    Experience {
        title: "Frontend Developer (Intern)",
        company: "Headstarter AI",
        duration: "2024",
        description: "Contributed to team-based product development, implemented responsive UI, and integrated AI APIs (Gemini, OpenAI). Key projects included Crayo AI and GameFlip.",
        technologies: &["React", "Next.js", "JavaScript", "Gemini API"],
    },
    Experience {
        title: "Freelance Web Developer",
        company: "Self-employed",
        duration: "2024 - Present",
        description: "Designed and deployed web apps for clients, focusing on performance, design, and usability. Delivered a full-scale website for a construction firm using modern tools.",
        technologies: &["Next.js", "Firebase", "Tailwind CSS", "Vercel"],
    },
];

pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
}

pub static EDUCATION: &[Education] = &[Education {
    degree: "Bachelor of Science in Software Engineering",
    institution: "COMSATS University Islamabad, Abbottabad Campus",
    duration: "2023 - Present",
    description: "Coursework includes Data Structures, Web Engineering, Software Project Management, and AI. Active participant in internships and project-based learning.",
}];

pub struct ContactDetail {
    pub title: &'static str,
    pub details: &'static str,
}

pub static CONTACT_DETAILS: &[ContactDetail] = &[
    ContactDetail {
        title: "Location",
        details: "Abbottabad, Pakistan",
    },
    ContactDetail {
        title: "Phone",
        details: "+92 319 1722875",
    },
    ContactDetail {
        title: "Email",
        details: "salmanahmadyt@gmail.com",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_ids_are_unique_anchors() {
        let mut ids: Vec<&str> = SectionId::ALL.iter().map(|id| id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), SectionId::ALL.len());
        assert_eq!(SectionId::Contact.href(), "#contact");
    }

    #[test]
    fn proficiencies_are_percentages() {
        assert!(SKILL_CATEGORIES
            .iter()
            .flat_map(|category| category.skills)
            .all(|skill| skill.proficiency <= 100));
    }

    #[test]
    fn hero_profiles_exist() {
        assert!(HERO_SOCIAL_COUNT <= SOCIAL_LINKS.len());
    }
}
