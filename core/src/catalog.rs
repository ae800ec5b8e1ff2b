use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::errors::CatalogError;
use crate::project::Project;

/// Site-owner content for the hero, about, and contact sections.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub about: String,
    pub email: String,
}

/// The full portfolio: profile plus the ordered project records.
///
/// Defined once at startup and never mutated afterwards; all filtering
/// happens over borrowed slices of `projects`.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Catalog {
    pub profile: Profile,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Catalog {
    /// Built-in catalog used when no file is supplied.
    pub fn builtin() -> Self {
        Self {
            profile: Profile {
                name: "Will".to_string(),
                tagline: "Software Developer building full-stack web apps.".to_string(),
                about: "I'm a software engineer who loves building web apps with modern \
                        stacks. I focus on React, Node.js, and REST APIs."
                    .to_string(),
                email: "you@example.com".to_string(),
            },
            projects: vec![
                Project {
                    title: "Weather Dashboard".to_string(),
                    description: "A responsive app that shows real-time weather using \
                                  OpenWeather API."
                        .to_string(),
                    tags: vec![
                        "React".to_string(),
                        "Tailwind".to_string(),
                        "API".to_string(),
                    ],
                    repo: Some("https://github.com/yourname/weather-dashboard".to_string()),
                    demo: Some("https://weather-yourname.vercel.app".to_string()),
                },
                Project {
                    title: "To-Do App".to_string(),
                    description: "Full-stack to-do list with auth and persistent storage."
                        .to_string(),
                    tags: vec![
                        "Next.js".to_string(),
                        "MongoDB".to_string(),
                        "Auth".to_string(),
                    ],
                    repo: Some("https://github.com/yourname/todo-app".to_string()),
                    demo: None,
                },
                Project {
                    title: "Portfolio Website".to_string(),
                    description: "My personal portfolio showcasing projects and skills."
                        .to_string(),
                    tags: vec![
                        "Next.js".to_string(),
                        "Tailwind".to_string(),
                        "React".to_string(),
                    ],
                    repo: None,
                    demo: None,
                },
            ],
        }
    }

    /// Load and validate a catalog from a TOML file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog: Self = toml::from_str(&raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Every tag used by any project, deduplicated by exact string and
    /// sorted lexicographically without regard to case.
    pub fn tag_vocabulary(&self) -> Vec<String> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut tags: Vec<String> = Vec::new();
        for project in &self.projects {
            for tag in &project.tags {
                if seen.insert(tag) {
                    tags.push(tag.clone());
                }
            }
        }
        tags.sort_by_key(|tag| tag.to_lowercase());
        tags
    }

    fn validate(&self) -> Result<(), CatalogError> {
        for (index, project) in self.projects.iter().enumerate() {
            if project.title.trim().is_empty() {
                return Err(CatalogError::Invalid {
                    index,
                    reason: "title must not be empty".to_string(),
                });
            }
            if project.description.trim().is_empty() {
                return Err(CatalogError::Invalid {
                    index,
                    reason: "description must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}
