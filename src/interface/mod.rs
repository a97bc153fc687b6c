pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_food_choice, prompt_menu, prompt_profile, prompt_search_query, prompt_yes_no,
    MenuAction,
};
pub use render::{
    display_food_table, display_ledger, display_prediction, display_totals, format_food_table,
    format_totals, progress_bar,
};
