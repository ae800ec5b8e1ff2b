use std::collections::BTreeSet;

use crate::project::Project;

/// Ephemeral filter state: free-text query plus the selected tag set.
///
/// Held only for the duration of a session; never persisted. Each tag is
/// present at most once and insertion order is irrelevant, so the set is
/// compared by contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    query: String,
    selected: BTreeSet<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn selected_tags(&self) -> &BTreeSet<String> {
        &self.selected
    }

    pub fn is_selected(&self, tag: &str) -> bool {
        self.selected.contains(tag)
    }

    /// Deselect the tag if it is selected, select it otherwise. Toggling
    /// the same tag twice restores the previous set.
    pub fn toggle_tag(&mut self, tag: &str) {
        if !self.selected.remove(tag) {
            self.selected.insert(tag.to_string());
        }
    }

    /// Deselect every tag.
    pub fn clear_tags(&mut self) {
        self.selected.clear();
    }

    /// Reset both the query and the selected tags.
    pub fn clear(&mut self) {
        self.query.clear();
        self.selected.clear();
    }

    /// True when neither a query nor any selected tag narrows the catalog.
    pub fn is_neutral(&self) -> bool {
        self.query.trim().is_empty() && self.selected.is_empty()
    }

    pub fn matches(&self, project: &Project) -> bool {
        project_matches(project, &self.query, &self.selected)
    }

    /// Apply the filter, preserving catalog order.
    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }
}

/// The filter predicate: a pure function of the project, the query, and
/// the selected tags.
///
/// A project is visible iff both conditions hold:
/// - tag condition: no tags are selected, or every selected tag appears
///   exactly in the project's tag list;
/// - text condition: the trimmed, case-folded query is empty, or it is a
///   substring of the case-folded title or of at least one case-folded
///   tag.
pub fn project_matches(project: &Project, query: &str, selected: &BTreeSet<String>) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() && selected.is_empty() {
        return true;
    }

    let tags_match = selected.is_empty() || selected.iter().all(|tag| project.has_tag(tag));

    let text_match = needle.is_empty()
        || project.title.to_lowercase().contains(&needle)
        || project
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&needle));

    tags_match && text_match
}
