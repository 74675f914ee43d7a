use serde::{Deserialize, Serialize};

use crate::multipart::FormBody;
use crate::serde_helpers::{blank_as_none, i64_or_string};

/// A portfolio entry shown on the public projects page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(deserialize_with = "i64_or_string")]
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub capacity: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Project {
    /// Distinct categories, in first-seen order, for the gallery filter.
    pub fn categories(projects: &[Project]) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for project in projects {
            let category = project.category.trim();
            if !category.is_empty() && !seen.iter().any(|c| c == category) {
                seen.push(category.to_string());
            }
        }
        seen
    }
}

/// Editable fields of a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectForm {
    pub title: String,
    pub category: String,
    pub capacity: String,
    pub location: String,
    pub date: String,
    pub description: String,
}

impl ProjectForm {
    pub fn from_project(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            category: project.category.clone(),
            capacity: project.capacity.clone(),
            location: project.location.clone(),
            date: project.date.clone(),
            description: project.description.clone(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.category.trim().is_empty()
    }

    /// Multipart body used when an image is attached. Blank fields are left out.
    pub fn multipart<'a, F>(&self, image: &'a F, update: bool) -> FormBody<'a, F> {
        let mut body = if update {
            FormBody::put_override()
        } else {
            FormBody::new()
        };
        body.text_if_present("title", &self.title)
            .text_if_present("category", &self.category)
            .text_if_present("capacity", &self.capacity)
            .text_if_present("location", &self.location)
            .text_if_present("date", &self.date)
            .text_if_present("description", &self.description)
            .file("image", image);
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multipart_update_carries_override_and_image() {
        let form = ProjectForm {
            title: "Centrale 50 kWc".into(),
            category: "Industriel".into(),
            ..ProjectForm::default()
        };
        let image = "centrale.jpg";
        let body = form.multipart(&image, true);

        assert!(body.is_update());
        assert_eq!(body.text_value("title"), Some("Centrale 50 kWc"));
        assert_eq!(body.text_value("location"), None);
        assert_eq!(body.files("image"), vec![&image]);
    }

    #[test]
    fn categories_are_distinct_in_first_seen_order() {
        let project = |id, category: &str| Project {
            id,
            title: format!("P{id}"),
            category: category.into(),
            image: None,
            capacity: String::new(),
            location: String::new(),
            date: String::new(),
            description: String::new(),
            created_at: None,
            updated_at: None,
        };
        let projects = [
            project(1, "Résidentiel"),
            project(2, "Industriel"),
            project(3, "Résidentiel"),
            project(4, ""),
        ];
        assert_eq!(Project::categories(&projects), ["Résidentiel", "Industriel"]);
    }
}
