use clap::Parser;
use tracing::{debug, warn};

use nutri_score_rs::catalog::{distinct_names, first_named, load_catalog, Catalog};
use nutri_score_rs::cli::{Cli, Command, ProfileArgs};
use nutri_score_rs::error::{NutriError, Result};
use nutri_score_rs::interface::{
    display_food_table, display_ledger, display_prediction, display_totals, prompt_food_choice,
    prompt_menu, prompt_profile, prompt_search_query, prompt_yes_no, MenuAction,
};
use nutri_score_rs::logging::init_logging;
use nutri_score_rs::models::UserProfile;
use nutri_score_rs::predictor::{load_model, ForestModel};
use nutri_score_rs::session::Session;

/// How many close names to offer when a food is not found.
const MAX_SUGGESTIONS: usize = 5;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let command = cli.command.unwrap_or_default();
    debug!(?command, "Starting");

    // The catalog must load before anything else is offered.
    let catalog = load_catalog(&cli.catalog)?;

    match command {
        Command::Search { query, limit } => cmd_search(&catalog, query.as_deref(), limit),
        Command::Session { limit } => {
            let model = load_model(&cli.model)?;
            cmd_session(&catalog, &model, limit)
        }
        Command::Predict {
            foods,
            profile,
            json,
        } => {
            let model = load_model(&cli.model)?;
            cmd_predict(&catalog, &model, &foods, &profile, json)
        }
    }
}

/// Print catalog rows matching a name fragment.
fn cmd_search(catalog: &Catalog, query: Option<&str>, limit: usize) -> Result<()> {
    let results = catalog.search(query);
    if results.is_empty() {
        println!("No foods match '{}'.", query.unwrap_or_default());
        return Ok(());
    }

    display_food_table(&results, "Search results", Some(limit));
    Ok(())
}

/// Interactive loop: profile, then search/add/predict until quit.
fn cmd_session(catalog: &Catalog, model: &ForestModel, limit: usize) -> Result<()> {
    println!("Loaded {} foods", catalog.len());
    println!("Enter your personal data first.");
    println!();

    let profile = prompt_profile(&UserProfile::default())?;
    let mut session = Session::new(profile);

    loop {
        println!();
        match prompt_menu(session.can_predict())? {
            MenuAction::SearchAndAdd => search_and_add(catalog, &mut session, limit)?,
            MenuAction::ShowLog => display_ledger(session.ledger()),
            MenuAction::Predict => match session.predict(model) {
                Ok(result) => {
                    display_totals(&session.totals());
                    display_prediction(&result);
                }
                Err(e) => {
                    // Report and keep the session alive; no score is shown.
                    eprintln!("Prediction failed: {}", e);
                }
            },
            MenuAction::EditProfile => {
                session.profile = prompt_profile(&session.profile)?;
            }
            MenuAction::Quit => {
                if session.ledger().is_empty()
                    || prompt_yes_no("Quit? Today's log will be discarded.", false)?
                {
                    break;
                }
            }
        }
    }

    Ok(())
}

fn search_and_add(catalog: &Catalog, session: &mut Session, limit: usize) -> Result<()> {
    let query = prompt_search_query()?;
    let results = catalog.search(Some(query.as_str()));

    if results.is_empty() {
        println!("No foods match '{}'.", query);
        return Ok(());
    }

    display_food_table(&results, "Search results", Some(limit));

    let names = distinct_names(&results);
    let Some(choice) = prompt_food_choice(&names)? else {
        return Ok(());
    };

    if let Some(item) = first_named(&results, names[choice]) {
        session.add(item);
        println!("Added: {}", item.name);
    }

    Ok(())
}

/// Log the named foods, then predict once.
fn cmd_predict(
    catalog: &Catalog,
    model: &ForestModel,
    foods: &[String],
    profile: &ProfileArgs,
    json: bool,
) -> Result<()> {
    let mut session = Session::new(profile.to_profile()?);

    for name in foods {
        let item = catalog.find_by_name(name).ok_or_else(|| {
            let suggestions = catalog.suggest(name, MAX_SUGGESTIONS);
            warn!(food = %name, ?suggestions, "Unknown food");
            if suggestions.is_empty() {
                NutriError::FoodNotFound(name.clone())
            } else {
                NutriError::FoodNotFound(format!(
                    "{} (did you mean: {}?)",
                    name,
                    suggestions.join(", ")
                ))
            }
        })?;
        session.add(item);
    }

    let result = session.predict(model)?;

    if json {
        let output = serde_json::json!({
            "profile": session.profile,
            "foods": session.ledger().list(),
            "totals": session.totals(),
            "prediction": result,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        display_ledger(session.ledger());
        display_prediction(&result);
    }

    Ok(())
}
