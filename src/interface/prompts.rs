use dialoguer::{Confirm, Input, Select};

use crate::error::Result;
use crate::models::{Gender, UserProfile, AGE_RANGE, HEIGHT_RANGE, WEIGHT_RANGE};

/// Actions offered by the session menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    SearchAndAdd,
    ShowLog,
    Predict,
    EditProfile,
    Quit,
}

impl MenuAction {
    pub fn label(self) -> &'static str {
        match self {
            MenuAction::SearchAndAdd => "Search and add a food or drink",
            MenuAction::ShowLog => "Show today's foods and totals",
            MenuAction::Predict => "Predict health score",
            MenuAction::EditProfile => "Edit personal data",
            MenuAction::Quit => "Quit",
        }
    }

    /// Menu entries; prediction only appears once something is logged.
    pub fn available(can_predict: bool) -> Vec<MenuAction> {
        let mut actions = vec![MenuAction::SearchAndAdd, MenuAction::ShowLog];
        if can_predict {
            actions.push(MenuAction::Predict);
        }
        actions.push(MenuAction::EditProfile);
        actions.push(MenuAction::Quit);
        actions
    }
}

/// Prompt for age, gender, weight and height, defaulting to `current`.
pub fn prompt_profile(current: &UserProfile) -> Result<UserProfile> {
    let age: u32 = Input::new()
        .with_prompt("Age")
        .default(current.age)
        .validate_with(|v: &u32| {
            if AGE_RANGE.contains(v) {
                Ok(())
            } else {
                Err(format!("Enter {} to {}", AGE_RANGE.start(), AGE_RANGE.end()))
            }
        })
        .interact_text()?;

    let labels: Vec<&str> = Gender::ALL.iter().map(|g| g.label()).collect();
    let default_gender = Gender::ALL
        .iter()
        .position(|g| *g == current.gender)
        .unwrap_or(0);
    let gender_idx = Select::new()
        .with_prompt("Gender")
        .items(&labels)
        .default(default_gender)
        .interact()?;

    let weight: f64 = Input::new()
        .with_prompt("Weight (kg)")
        .default(current.weight)
        .validate_with(|v: &f64| {
            if WEIGHT_RANGE.contains(v) {
                Ok(())
            } else {
                Err(format!("Enter {} to {}", WEIGHT_RANGE.start(), WEIGHT_RANGE.end()))
            }
        })
        .interact_text()?;

    let height: f64 = Input::new()
        .with_prompt("Height (cm)")
        .default(current.height)
        .validate_with(|v: &f64| {
            if HEIGHT_RANGE.contains(v) {
                Ok(())
            } else {
                Err(format!("Enter {} to {}", HEIGHT_RANGE.start(), HEIGHT_RANGE.end()))
            }
        })
        .interact_text()?;

    UserProfile::new(age, Gender::ALL[gender_idx], weight, height)
}

/// Prompt for the next menu action.
pub fn prompt_menu(can_predict: bool) -> Result<MenuAction> {
    let actions = MenuAction::available(can_predict);
    let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();

    let selection = Select::new()
        .with_prompt("What next?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(actions[selection])
}

/// Prompt for a search term. Empty means "everything".
pub fn prompt_search_query() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Search food or drink name (Enter for all)")
        .allow_empty(true)
        .interact_text()?;
    Ok(input)
}

/// Let the user pick one of `names`, or cancel.
pub fn prompt_food_choice(names: &[&str]) -> Result<Option<usize>> {
    let mut options: Vec<&str> = names.to_vec();
    options.push("Cancel");

    let selection = Select::new()
        .with_prompt("Pick a food to add")
        .items(&options)
        .default(0)
        .max_length(15)
        .interact()?;

    Ok((selection < names.len()).then_some(selection))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
