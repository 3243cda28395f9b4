use serde::Deserialize;

use crate::models::Project;

/// Gallery filters. Both are optional and compose with logical AND; an empty
/// or missing value passes everything.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ProjectFilter {
    pub search: Option<String>,
    pub category: Option<String>,
}

impl ProjectFilter {
    fn search_term(&self) -> Option<&str> {
        self.search.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    fn category_term(&self) -> Option<&str> {
        self.category.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.search_term().is_none() && self.category_term().is_none()
    }
}

/// Case-insensitive substring match on title, student name, or any
/// technology tag; exact match on category.
pub fn matches(project: &Project, filter: &ProjectFilter) -> bool {
    if let Some(term) = filter.search_term() {
        let term = term.to_lowercase();
        let hit = project.project_title.to_lowercase().contains(&term)
            || project.student_name.to_lowercase().contains(&term)
            || project
                .tools_technologies
                .iter()
                .any(|tech| tech.to_lowercase().contains(&term));
        if !hit {
            return false;
        }
    }

    if let Some(category) = filter.category_term() {
        if project.category.as_deref() != Some(category) {
            return false;
        }
    }

    true
}

/// Filter an already-fetched project list in memory, preserving order.
pub fn apply(projects: Vec<Project>, filter: &ProjectFilter) -> Vec<Project> {
    if filter.is_empty() {
        return projects;
    }
    projects
        .into_iter()
        .filter(|p| matches(p, filter))
        .collect()
}

/// Distinct categories present in the list, sorted, for the filter dropdown.
pub fn categories(projects: &[Project]) -> Vec<String> {
    let mut cats: Vec<String> = projects
        .iter()
        .filter_map(|p| p.category.clone())
        .collect();
    cats.sort();
    cats.dedup();
    cats
}
