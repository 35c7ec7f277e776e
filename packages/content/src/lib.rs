pub mod profile;
pub mod projects;
pub mod section;
pub mod skills;

pub use profile::{ContactChannel, ContactMethod, Profile};
pub use projects::Project;
pub use section::Section;
pub use skills::{FocusArea, SkillCategory, SkillDomain};
