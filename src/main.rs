//! Nutrigap - nutrient-gap food recommendation engine
//!
//! A command-line tool that resolves per-user nutrient requirements, tracks
//! logged intake, and ranks a food catalog by cosine similarity to the
//! resulting shortfall.

mod cli;
mod commands;
mod config;
mod core;
mod engine;
mod error;
mod logger;
mod storage;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use cli::{Cli, Command};

fn main() -> Result<()> {
	let cli = Cli::parse();

	logger::set_verbose(cli.verbose);
	if let Some(dir) = cli.data_dir {
		config::set_data_dir(dir);
	}

	match cli.command {
		Command::Recommend { user_id, top_n } => {
			commands::recommend::run(&user_id, top_n)
		}
		Command::Summary { user_id, date } => {
			commands::summary::run(&user_id, date.as_deref())
		}
		Command::Wellness { score, meals, top_n } => {
			commands::wellness::run(score, &meals, top_n)
		}
		Command::Gaps { region, foods, top_n } => {
			commands::gaps::run(&region, &foods, top_n)
		}
		Command::LogMeal { user_id, food_id, grams, date } => {
			commands::log_meal::run(&user_id, food_id, grams, date)
		}
		Command::ListMeals { user_id, date } => {
			commands::list_meals::run(&user_id, date.as_deref())
		}
		Command::Help { subcommand } => {
			let mut cmd = Cli::command();
			if let Some(sub) = subcommand {
				if let Some(sub_cmd) = cmd.find_subcommand_mut(&sub) {
					sub_cmd.print_help()?;
				} else {
					eprintln!("Unknown subcommand: {}", sub);
					cmd.print_help()?;
				}
			} else {
				cmd.print_help()?;
			}
			Ok(())
		}
	}
}
