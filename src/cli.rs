use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::error::Result;
use crate::models::{Gender, UserProfile, DEFAULT_AGE, DEFAULT_HEIGHT, DEFAULT_WEIGHT};

/// Rows shown per search by default.
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// NutriScore — log what you ate today and predict a 1-5 health score.
#[derive(Parser, Debug)]
#[command(name = "nutri_score")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the food catalog CSV.
    #[arg(short, long, global = true, default_value = "nutrition.csv")]
    pub catalog: PathBuf,

    /// Path to the health score model JSON.
    #[arg(short, long, global = true, default_value = "health_score_model.json")]
    pub model: PathBuf,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive session: enter your data, log foods, predict.
    Session {
        /// Maximum search results to display.
        #[arg(long, default_value_t = DEFAULT_SEARCH_LIMIT)]
        limit: usize,
    },

    /// Search the food catalog by name.
    Search {
        /// Case-insensitive name fragment; omit to list everything.
        query: Option<String>,

        /// Maximum results to display.
        #[arg(long, default_value_t = DEFAULT_SEARCH_LIMIT)]
        limit: usize,
    },

    /// Predict a health score from a list of foods in one shot.
    Predict {
        /// Food name to log (repeat for each item eaten).
        #[arg(short, long = "food", required = true)]
        foods: Vec<String>,

        #[command(flatten)]
        profile: ProfileArgs,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Session {
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

/// `--gender` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GenderArg {
    Male,
    Female,
}

impl From<GenderArg> for Gender {
    fn from(arg: GenderArg) -> Self {
        match arg {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
        }
    }
}

/// Personal data flags for non-interactive prediction.
#[derive(Args, Debug, Clone)]
pub struct ProfileArgs {
    /// Age in years (10-100).
    #[arg(long, default_value_t = DEFAULT_AGE)]
    pub age: u32,

    #[arg(long, value_enum, default_value_t = GenderArg::Male)]
    pub gender: GenderArg,

    /// Weight in kg (30-200).
    #[arg(long, default_value_t = DEFAULT_WEIGHT)]
    pub weight: f64,

    /// Height in cm (100-220).
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: f64,
}

impl ProfileArgs {
    pub fn to_profile(&self) -> Result<UserProfile> {
        UserProfile::new(self.age, self.gender.into(), self.weight, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_session() {
        let cli = Cli::try_parse_from(["nutri_score"]).unwrap();
        assert!(cli.command.is_none());
        assert!(matches!(
            cli.command.unwrap_or_default(),
            Command::Session { limit: DEFAULT_SEARCH_LIMIT }
        ));
        assert_eq!(cli.catalog, PathBuf::from("nutrition.csv"));
    }

    #[test]
    fn test_predict_args() {
        let cli = Cli::try_parse_from([
            "nutri_score",
            "predict",
            "--food",
            "Bakso",
            "-f",
            "Teh Manis",
            "--gender",
            "female",
            "--age",
            "31",
            "--json",
        ])
        .unwrap();

        match cli.command {
            Some(Command::Predict {
                foods,
                profile,
                json,
            }) => {
                assert_eq!(foods, vec!["Bakso", "Teh Manis"]);
                assert_eq!(profile.gender, GenderArg::Female);
                assert_eq!(profile.to_profile().unwrap().gender, Gender::Female);
                assert_eq!(profile.age, 31);
                assert_eq!(profile.weight, DEFAULT_WEIGHT);
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_gender_defaults_to_male() {
        let cli = Cli::try_parse_from(["nutri_score", "predict", "-f", "Bakso"]).unwrap();
        match cli.command {
            Some(Command::Predict { profile, .. }) => {
                assert_eq!(profile.gender, GenderArg::Male);
                assert_eq!(profile.to_profile().unwrap(), UserProfile::default());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_gender_rejected() {
        let args = ["nutri_score", "predict", "-f", "Bakso", "--gender", "other"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_predict_requires_food() {
        assert!(Cli::try_parse_from(["nutri_score", "predict"]).is_err());
    }
}
