pub mod prompts;
pub mod render;

pub use prompts::{
    collect_body_inputs, collect_selections, collect_selections_walk, prompt_goal,
    prompt_quantity, prompt_yes_no,
};
pub use render::{display_food_list, display_results, display_selections};
