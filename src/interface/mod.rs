pub mod prompts;
pub mod render;

pub use prompts::{prompt_yes_no, suggest_names};
pub use render::{display_recipe_cost, display_sheet_cost};
