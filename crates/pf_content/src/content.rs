use tracing::{error, info};

use crate::error::Result;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Service {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Skill {
    pub name: String,
    // Percentage, 0..=100
    pub level: u8,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Tool {
    pub name: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ContactLink {
    pub title: String,
    pub value: String,
    pub link: String,
}

/// Everything the page shows, in one serializable bundle.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Profile {
    pub brand: String,
    pub name: String,
    pub tagline: String,
    pub story: Vec<String>,
    pub services: Vec<Service>,
    pub skills: Vec<Skill>,
    pub tools: Vec<Tool>,
    pub projects: Vec<Project>,
    pub contact_links: Vec<ContactLink>,
    pub resume: String,
}

impl Profile {
    pub fn new() -> Self {
        Profile {
            brand: "VibePortfolio".to_string(),
            name: "Alex".to_string(),
            tagline: "Full Stack Developer & UI/UX Designer creating digital experiences \
                      that inspire and perform."
                .to_string(),
            story: vec![
                "With over 5 years of experience in web development, I've had the privilege \
                 of working with startups and established companies alike. My passion lies in \
                 creating seamless digital experiences that bridge the gap between design and \
                 functionality."
                    .to_string(),
                "I specialize in building responsive, accessible, and performant web \
                 applications using modern technologies. When I'm not coding, you can find me \
                 exploring new design trends or contributing to open-source projects."
                    .to_string(),
            ],
            services: vec![
                Service {
                    title: "Web Development".to_string(),
                    description: "Full stack applications with React, Node.js, and modern \
                                  frameworks"
                        .to_string(),
                },
                Service {
                    title: "UI/UX Design".to_string(),
                    description: "User-centered designs with Figma and design systems"
                        .to_string(),
                },
                Service {
                    title: "Database Design".to_string(),
                    description: "Optimized data structures and API integrations".to_string(),
                },
                Service {
                    title: "Mobile Apps".to_string(),
                    description: "Cross-platform solutions with React Native".to_string(),
                },
            ],
            skills: vec![
                Skill {
                    name: "JavaScript".to_string(),
                    level: 95,
                },
                Skill {
                    name: "React".to_string(),
                    level: 90,
                },
                Skill {
                    name: "Node.js".to_string(),
                    level: 85,
                },
                Skill {
                    name: "TypeScript".to_string(),
                    level: 80,
                },
                Skill {
                    name: "Python".to_string(),
                    level: 75,
                },
                Skill {
                    name: "UI/UX Design".to_string(),
                    level: 88,
                },
            ],
            tools: vec![
                Tool {
                    name: "GitHub".to_string(),
                },
                Tool {
                    name: "Figma".to_string(),
                },
                Tool {
                    name: "AWS".to_string(),
                },
                Tool {
                    name: "Vercel".to_string(),
                },
                Tool {
                    name: "Firebase".to_string(),
                },
                Tool {
                    name: "Docker".to_string(),
                },
            ],
            projects: vec![
                Project {
                    title: "E-Commerce Platform".to_string(),
                    description: "Full-featured online store with payment integration and \
                                  admin dashboard"
                        .to_string(),
                    technologies: vec![
                        "React".to_string(),
                        "Node.js".to_string(),
                        "MongoDB".to_string(),
                        "Stripe".to_string(),
                    ],
                },
                Project {
                    title: "Social Media App".to_string(),
                    description: "Real-time social platform with chat and content sharing \
                                  features"
                        .to_string(),
                    technologies: vec![
                        "React Native".to_string(),
                        "Firebase".to_string(),
                        "GraphQL".to_string(),
                    ],
                },
                Project {
                    title: "Data Analytics Dashboard".to_string(),
                    description: "Interactive dashboard for visualizing complex business data"
                        .to_string(),
                    technologies: vec![
                        "D3.js".to_string(),
                        "Express".to_string(),
                        "PostgreSQL".to_string(),
                    ],
                },
                Project {
                    title: "Fitness Tracker".to_string(),
                    description: "Mobile app for tracking workouts and nutrition with AI \
                                  recommendations"
                        .to_string(),
                    technologies: vec![
                        "React Native".to_string(),
                        "Python".to_string(),
                        "TensorFlow".to_string(),
                    ],
                },
            ],
            contact_links: vec![
                ContactLink {
                    title: "Email".to_string(),
                    value: "alex@example.com".to_string(),
                    link: "mailto:alex@example.com".to_string(),
                },
                ContactLink {
                    title: "GitHub".to_string(),
                    value: "@alexdev".to_string(),
                    link: "https://github.com/alexdev".to_string(),
                },
                ContactLink {
                    title: "LinkedIn".to_string(),
                    value: "Alex Developer".to_string(),
                    link: "https://linkedin.com/in/alexdev".to_string(),
                },
                ContactLink {
                    title: "Twitter".to_string(),
                    value: "@alexdev".to_string(),
                    link: "https://twitter.com/alexdev".to_string(),
                },
            ],
            resume: "Alex Developer\nFull Stack Developer & UI/UX Designer\n\n5+ years of \
                     experience building responsive, accessible and performant web \
                     applications.\n\nContact: alex@example.com"
                .to_string(),
        }
    }

    /// Tolerant load for the viewer: a missing or broken content file falls
    /// back to the built-in profile instead of failing.
    pub fn load(path: &std::path::Path) -> Self {
        if !path.exists() {
            info!("No content file found, using the built-in profile");
            return Profile::new();
        }

        match load_content_file(path) {
            Ok(profile) => profile,
            Err(e) => {
                info!("Could not load content file ({}), using the built-in profile", e);
                Profile::new()
            }
        }
    }

    pub fn save(&self, path: &std::path::Path) {
        let payload = serde_json::to_string_pretty(&self);

        match payload {
            Ok(p) => match std::fs::write(path, p) {
                Ok(()) => info!("Content saved"),
                Err(e) => error!("Failed to write file: {}", e),
            },
            Err(e) => error!("Failed to serialize content: {}", e),
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::new()
    }
}

/// Strict load for tooling that wants to surface the failure.
pub fn load_content_file(path: &std::path::Path) -> Result<Profile> {
    let content = std::fs::read(path)?;
    let profile = serde_json::from_slice(&content)?;

    Ok(profile)
}

#[cfg(test)]
mod tests {

    use crate::content as sut;
    use crate::content::Profile;

    #[test]
    fn missing_content_file_falls_back_to_the_builtin_profile() {
        let profile = Profile::load(std::path::Path::new("./does-not-exist.json"));

        assert_eq!(profile.brand, "VibePortfolio");
        assert_eq!(profile.skills.len(), 6);
    }

    #[test]
    fn malformed_content_file_falls_back_to_the_builtin_profile() {
        let dir = std::env::temp_dir();
        let path = dir.join("pf_content_malformed.json");
        std::fs::write(&path, "{ not json").unwrap();

        let profile = Profile::load(&path);

        assert_eq!(profile.name, "Alex");

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn saved_content_loads_back_strictly() {
        let dir = std::env::temp_dir();
        let path = dir.join("pf_content_roundtrip.json");

        let mut profile = Profile::new();
        profile.name = "Kim".to_string();
        profile.save(&path);

        let loaded = sut::load_content_file(&path).unwrap();

        assert_eq!(loaded.name, "Kim");
        assert_eq!(loaded.projects.len(), 4);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn load_content_file_neg() {
        let result = sut::load_content_file(std::path::Path::new("./does-not-exist.json"));

        assert!(result.is_err());
    }
}
