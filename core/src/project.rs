use serde::Deserialize;
use serde::Serialize;

/// A single portfolio item. Immutable once the catalog is loaded; a
/// record's position in the catalog is a display key only, never an
/// identity.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Project {
    pub title: String,
    pub description: String,
    /// Technology tags in the project's own declaration order. The same
    /// tag may appear across projects; the catalog dedups when building
    /// the vocabulary.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Source repository link, when public.
    #[serde(default)]
    pub repo: Option<String>,
    /// Live demo link, when deployed.
    #[serde(default)]
    pub demo: Option<String>,
}

impl Project {
    /// True when the project carries the exact tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_tag_is_exact() {
        let project = Project {
            title: "Weather Dashboard".to_string(),
            tags: vec!["React".to_string(), "API".to_string()],
            ..Default::default()
        };
        assert!(project.has_tag("React"));
        assert!(!project.has_tag("react"));
        assert!(!project.has_tag("Rea"));
    }
}
