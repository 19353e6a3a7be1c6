pub mod experience;
pub mod keywords;
pub mod sentiment;
pub mod skills;

pub use experience::experience_years;
pub use keywords::{action_verbs, compare_texts, top_keywords};
pub use sentiment::sentiment;
pub use skills::extract_skills;
