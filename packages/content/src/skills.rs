//! # Skill categories and focus areas
//!
//! Data behind the skills section: two [`SkillCategory`] cards (frontend and
//! backend, three technologies each) and three [`FocusArea`] cards describing
//! what the owner works on. The decorative `skills.js` code window in the UI
//! renders the same category data.

use serde::{Deserialize, Serialize};

/// Which side of the stack a category covers. The UI picks the card icon
/// from this.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillDomain {
    Frontend,
    Backend,
}

impl SkillDomain {
    pub fn label(&self) -> &'static str {
        match self {
            SkillDomain::Frontend => "Frontend",
            SkillDomain::Backend => "Backend",
        }
    }
}

/// A titled group of technologies.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub domain: SkillDomain,
    pub skills: Vec<String>,
}

impl SkillCategory {
    /// The two category cards, in display order.
    pub fn categories() -> Vec<SkillCategory> {
        vec![
            SkillCategory {
                domain: SkillDomain::Frontend,
                skills: vec![
                    "HTML".to_string(),
                    "CSS".to_string(),
                    "JavaScript".to_string(),
                ],
            },
            SkillCategory {
                domain: SkillDomain::Backend,
                skills: vec![
                    "PHP".to_string(),
                    "Python".to_string(),
                    "MySQL".to_string(),
                ],
            },
        ]
    }
}

/// One development-focus card: a name plus a one-sentence description.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FocusArea {
    pub name: String,
    pub description: String,
}

impl FocusArea {
    /// The three focus-area cards, in display order.
    pub fn all() -> Vec<FocusArea> {
        vec![
            FocusArea {
                name: "Frontend Development".to_string(),
                description: "Creating responsive and visually appealing user interfaces with \
                              HTML, CSS and JavaScript"
                    .to_string(),
            },
            FocusArea {
                name: "Backend Development".to_string(),
                description: "Building robust and scalable server-side applications with PHP \
                              and Python"
                    .to_string(),
            },
            FocusArea {
                name: "Database Design".to_string(),
                description: "Designing efficient database schemas and optimizing MySQL queries"
                    .to_string(),
            },
        ]
    }

    /// Single-letter monogram for the card avatar.
    pub fn monogram(&self) -> String {
        self.name.chars().take(1).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_categories_of_three() {
        let categories = SkillCategory::categories();
        assert_eq!(categories.len(), 2);
        for category in &categories {
            assert_eq!(category.skills.len(), 3);
        }
    }

    #[test]
    fn test_category_order_is_frontend_first() {
        let categories = SkillCategory::categories();
        assert_eq!(categories[0].domain, SkillDomain::Frontend);
        assert_eq!(categories[1].domain, SkillDomain::Backend);
    }

    #[test]
    fn test_three_focus_areas_with_descriptions() {
        let areas = FocusArea::all();
        assert_eq!(areas.len(), 3);
        for area in &areas {
            assert!(!area.description.is_empty());
        }
    }

    #[test]
    fn test_monogram_is_first_letter() {
        let areas = FocusArea::all();
        assert_eq!(areas[0].monogram(), "F");
        assert_eq!(areas[2].monogram(), "D");
    }
}
