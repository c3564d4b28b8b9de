//! Project catalogue and the category filter applied to it.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Web,
    Mobile,
    Backend,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Mobile => "mobile",
            Self::Backend => "backend",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Only(Category),
}

impl Filter {
    pub const ALL: [Filter; 4] = [
        Filter::All,
        Filter::Only(Category::Web),
        Filter::Only(Category::Mobile),
        Filter::Only(Category::Backend),
    ];

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "all" => Some(Self::All),
            "web" => Some(Self::Only(Category::Web)),
            "mobile" => Some(Self::Only(Category::Mobile)),
            "backend" => Some(Self::Only(Category::Backend)),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.as_str(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Projects",
            Self::Only(Category::Web) => "Web",
            Self::Only(Category::Mobile) => "Mobile",
            Self::Only(Category::Backend) => "Backend",
        }
    }

    pub fn admits(self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => project.category == category,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub category: Category,
    pub live_url: Option<&'static str>,
    pub repo_url: Option<&'static str>,
}

/// Projects admitted by `filter`, in catalogue order.
pub fn filter_projects(projects: &[Project], filter: Filter) -> Vec<&Project> {
    projects
        .iter()
        .filter(|project| filter.admits(project))
        .collect()
}

pub const REPOSITORIES_URL: &str = "https://github.com/SalmanAhmad-code?tab=repositories";

pub static PROJECTS: &[Project] = &[
    Project {
        title: "StockSmart (Pantry Tracker)",
        description: "A pantry tracker app with item inventory, recipe creation, sharing, and full CRUD functionality.",
        image: "https://i.postimg.cc/13qHj6jV/download.png",
        technologies: &["Next.js", "Firebase", "Tailwind CSS"],
        category: Category::Web,
        live_url: Some("https://stocksmart-app.vercel.app"),
        repo_url: Some("https://github.com/SalmanAhmad-code/StockSmart-Pantry-Tracker-App"),
    },
    Project {
        title: "Crayo AI (Customer Support Bot)",
        description: "An AI-powered customer support site using Gemini API, with Firebase authentication and a clean UI.",
        image: "https://i.postimg.cc/9X6WyHZP/Crayo-AI-2.png",
        technologies: &["Next.js", "Firebase", "Gemini API", "Tailwind CSS"],
        category: Category::Web,
        live_url: None,
        repo_url: Some("https://github.com/SalmanAhmad-code/Crayo-AI-V2"),
    },
    Project {
        title: "GameFlip (Gaming Flashcard SaaS)",
        description: "A SaaS platform for gaming-related flashcards with AI flashcard generation, user auth, Stripe subscriptions, and leaderboard.",
        image: "https://i.postimg.cc/5t9Zdsdk/download.png",
        technologies: &["Next.js", "OpenAI API", "Clerk", "Firebase", "Stripe"],
        category: Category::Web,
        live_url: Some("https://game-flip.vercel.app/"),
        repo_url: Some("https://github.com/SalmanAhmad-code/GameFlip"),
    },
    Project {
        title: "Comsats Hub",
        description: "A community portal for COMSATS students featuring event updates, student resources, and announcements with responsive design and a clean UI.",
        image: "https://i.postimg.cc/kGnVxV2H/download.png",
        technologies: &["Typescript", "Vite", "Tailwind CSS", "Supabase"],
        category: Category::Web,
        live_url: Some("https://comsatshub.vercel.app/"),
        repo_url: Some("https://github.com/SalmanAhmad-code/ComsatsHub"),
    },
    Project {
        title: "KWC Construction Website",
        description: "A real-world company website featuring project info and AI-powered quotation generation using Gemini API.",
        image: "https://i.postimg.cc/jd8DVd1H/download.png",
        technologies: &["Next.js", "Tailwind CSS", "Gemini API"],
        category: Category::Web,
        live_url: Some("https://kwcconstruction.net"),
        repo_url: None,
    },
    Project {
        title: "Tunify (Spotify Clone)",
        description: "A frontend clone of Spotify with music playback, responsive UI, and styled using HTML, CSS, and JavaScript.",
        image: "https://i.postimg.cc/rpMGmHfM/download.png",
        technologies: &["HTML", "CSS", "JavaScript"],
        category: Category::Web,
        live_url: None,
        repo_url: Some("https://github.com/SalmanAhmad-code/Spotify-Clone----Tunify"),
    },
    Project {
        title: "Quiz System",
        description: "A console-based quiz system developed in C that allows users to attempt quizzes, view scores, and test their knowledge in a simple terminal interface.",
        image: "https://i.postimg.cc/Zq8LbzqS/Screenshot-2025-05-10-130207.png",
        technologies: &["C"],
        category: Category::Backend,
        live_url: None,
        repo_url: Some("https://github.com/SalmanAhmad-code/Quiz-Management-System"),
    },
    Project {
        title: "Rent a Car System",
        description: "A GUI-based car rental management application built in Java that handles car booking, returns, and user management with a simple interface.",
        image: "https://i.postimg.cc/tJhXZ8dj/Screenshot-2025-05-10-122725.png",
        technologies: &["Java", "JavaFX"],
        category: Category::Backend,
        live_url: None,
        repo_url: Some("https://github.com/SalmanAhmad-code/Rent-A-Car-Management-System"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(projects: &[&Project]) -> Vec<&'static str> {
        projects.iter().map(|project| project.title).collect()
    }

    #[test]
    fn all_returns_catalogue_unchanged() {
        let filtered = filter_projects(PROJECTS, Filter::All);

        assert_eq!(filtered.len(), PROJECTS.len());
        assert!(filtered.iter().zip(PROJECTS).all(|(a, b)| *a == b));
    }

    #[test]
    fn web_filter_keeps_order_and_only_web() {
        let filtered = filter_projects(PROJECTS, Filter::Only(Category::Web));

        assert_eq!(
            titles(&filtered),
            vec![
                "StockSmart (Pantry Tracker)",
                "Crayo AI (Customer Support Bot)",
                "GameFlip (Gaming Flashcard SaaS)",
                "Comsats Hub",
                "KWC Construction Website",
                "Tunify (Spotify Clone)",
            ]
        );
    }

    #[test]
    fn backend_filter_on_custom_list() {
        let sample = [
            Project {
                category: Category::Backend,
                title: "b1",
                ..PROJECTS[0].clone()
            },
            Project {
                category: Category::Mobile,
                title: "m1",
                ..PROJECTS[0].clone()
            },
            Project {
                category: Category::Backend,
                title: "b2",
                ..PROJECTS[0].clone()
            },
        ];

        let filtered = filter_projects(&sample, Filter::Only(Category::Backend));
        assert_eq!(titles(&filtered), vec!["b1", "b2"]);
    }

    #[test]
    fn mobile_filter_can_be_empty() {
        assert!(filter_projects(PROJECTS, Filter::Only(Category::Mobile)).is_empty());
    }

    #[test]
    fn filter_names_parse_back() {
        for filter in Filter::ALL {
            assert_eq!(Filter::from_str(filter.as_str()), Some(filter));
        }
        assert_eq!(Filter::from_str("desktop"), None);
    }
}
