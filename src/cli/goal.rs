//! Monthly goal CLI commands

use clap::Subcommand;

use crate::config::{DashboardPaths, Settings};
use crate::display::format_currency;
use crate::error::{DashboardError, DashboardResult};
use crate::parsing::{normalize, try_parse_amount_str};
use crate::storage::goals_store;

/// Goal subcommands
#[derive(Subcommand, Debug)]
pub enum GoalCommands {
    /// List the monthly goal of every configured category
    List,

    /// Set the monthly goal for a category
    Set {
        /// Category name (case and accents are ignored)
        category: String,
        /// Goal amount (e.g., "300", "300,50" or "1.250,00")
        #[arg(value_parser = parse_goal_amount)]
        amount: f64,
    },
}

/// Handle a goal command
pub fn handle_goal_command(
    paths: &DashboardPaths,
    settings: &Settings,
    cmd: GoalCommands,
) -> DashboardResult<()> {
    let store = goals_store(paths, settings);
    let mut goals = store.load();

    match cmd {
        GoalCommands::List => {
            if goals.is_empty() {
                println!("No goal categories configured.");
                return Ok(());
            }

            println!("Monthly goals");
            println!("{}", "-".repeat(40));
            for (category, goal) in goals.iter() {
                println!(
                    "{:<24} {:>15}",
                    category,
                    format_currency(goal, &settings.currency_symbol)
                );
            }
        }
        GoalCommands::Set { category, amount } => {
            let name = resolve_category(store.categories(), &category)
                .ok_or_else(|| DashboardError::category_not_found(&category))?
                .to_string();

            paths.ensure_directories()?;
            store.set_goal(&mut goals, &name, amount)?;
            println!(
                "Goal for '{}' set to {}",
                name,
                format_currency(amount, &settings.currency_symbol)
            );
        }
    }

    Ok(())
}

fn parse_goal_amount(raw: &str) -> Result<f64, String> {
    try_parse_amount_str(raw).ok_or_else(|| format!("invalid amount '{}'", raw))
}

/// Find a configured category by name, ignoring case and accents
fn resolve_category<'a>(categories: &'a [String], input: &str) -> Option<&'a str> {
    if let Some(exact) = categories.iter().find(|c| c.as_str() == input) {
        return Some(exact);
    }
    let wanted = normalize(input);
    categories
        .iter()
        .find(|c| normalize(c) == wanted)
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn categories() -> Vec<String> {
        vec!["Alimentação".into(), "Clash of Clans".into()]
    }

    #[test]
    fn test_resolve_category_ignores_case_and_accents() {
        let categories = categories();
        assert_eq!(resolve_category(&categories, "Alimentação"), Some("Alimentação"));
        assert_eq!(resolve_category(&categories, "alimentacao"), Some("Alimentação"));
        assert_eq!(resolve_category(&categories, " CLASH OF CLANS "), Some("Clash of Clans"));
        assert_eq!(resolve_category(&categories, "Lazer"), None);
    }

    #[test]
    fn test_goal_amount_accepts_decimal_comma() {
        assert_eq!(parse_goal_amount("300,50"), Ok(300.5));
        assert_eq!(parse_goal_amount("1.250,00"), Ok(1250.0));
        assert_eq!(parse_goal_amount("300.50"), Ok(300.5));
        assert!(parse_goal_amount("trezentos").is_err());
    }

    #[test]
    fn test_set_persists_goal() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DashboardPaths::with_base_dir(temp_dir.path().join("data"));
        let settings = Settings::default();

        handle_goal_command(
            &paths,
            &settings,
            GoalCommands::Set {
                category: "lazer".into(),
                amount: 150.0,
            },
        )
        .unwrap();

        let goals = goals_store(&paths, &settings).load();
        assert_eq!(goals.goal_for("Lazer"), 150.0);
    }

    #[test]
    fn test_set_unknown_category_fails() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DashboardPaths::with_base_dir(temp_dir.path().to_path_buf());

        let err = handle_goal_command(
            &paths,
            &Settings::default(),
            GoalCommands::Set {
                category: "Viagem".into(),
                amount: 10.0,
            },
        )
        .unwrap_err();
        assert!(err.is_not_found());
        assert!(!paths.goals_file().exists());
    }

    #[test]
    fn test_set_negative_amount_fails() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DashboardPaths::with_base_dir(temp_dir.path().to_path_buf());

        let err = handle_goal_command(
            &paths,
            &Settings::default(),
            GoalCommands::Set {
                category: "Lazer".into(),
                amount: -5.0,
            },
        )
        .unwrap_err();
        assert!(matches!(err, DashboardError::Validation(_)));
    }
}
