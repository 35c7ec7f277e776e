//! # Project showcase data

use serde::{Deserialize, Serialize};

/// One project card in the showcase grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    /// Technology tags shown on the card
    pub technologies: Vec<String>,
}

impl Project {
    /// The showcased projects, in display order.
    pub fn showcase() -> Vec<Project> {
        vec![
            Project {
                title: "Portfolio Website".to_string(),
                description: "My personal portfolio website built with React, TypeScript and \
                              TailwindCSS featuring a clean, modern design."
                    .to_string(),
                technologies: vec![
                    "React".to_string(),
                    "TypeScript".to_string(),
                    "TailwindCSS".to_string(),
                ],
            },
            Project {
                title: "Emiliano Restaurant POS".to_string(),
                description: "Point of Sale system for Emiliano Restaurant with order \
                              management, inventory tracking, and sales reporting features."
                    .to_string(),
                technologies: vec![
                    "React".to_string(),
                    "Node.js".to_string(),
                    "MongoDB".to_string(),
                ],
            },
            Project {
                title: "BST Printing Inventory System".to_string(),
                description: "Comprehensive inventory management system for BST Printing with \
                              stock tracking, supplier management, and automated reordering."
                    .to_string(),
                technologies: vec![
                    "React".to_string(),
                    "Express".to_string(),
                    "PostgreSQL".to_string(),
                ],
            },
            Project {
                title: "Kapitan Cafe POS".to_string(),
                description: "Modern POS system for Kapitan Cafe with menu management, table \
                              service tracking, and customer loyalty features."
                    .to_string(),
                technologies: vec![
                    "React".to_string(),
                    "Firebase".to_string(),
                    "TailwindCSS".to_string(),
                ],
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_showcase_has_four_projects() {
        assert_eq!(Project::showcase().len(), 4);
    }

    #[test]
    fn test_every_project_is_complete() {
        for project in Project::showcase() {
            assert!(!project.title.is_empty());
            assert!(!project.description.is_empty());
            assert_eq!(project.technologies.len(), 3);
        }
    }

    #[test]
    fn test_titles_are_unique() {
        let projects = Project::showcase();
        let mut titles: Vec<_> = projects.iter().map(|p| p.title.as_str()).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), projects.len());
    }
}
