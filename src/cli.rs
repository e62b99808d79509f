use clap::{builder::Styles, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use crate::core::IntakeEntry;

/// Parses a `NAME:GRAMS` meal argument; grams default to 100 when omitted.
pub fn parse_meal(s: &str) -> Result<IntakeEntry, String> {
	match s.rsplit_once(':') {
		Some((name, grams)) => {
			if name.is_empty() {
				return Err(format!("'{}' has no food name", s));
			}
			let grams: f64 = grams
				.parse()
				.map_err(|_| format!("'{}' is not a valid gram amount", grams))?;
			if grams < 0.0 {
				return Err(format!("gram amount must be non-negative, got {}", grams));
			}
			Ok(IntakeEntry::by_name(name, grams))
		}
		None => {
			if s.is_empty() {
				return Err("meal name is empty".to_string());
			}
			Ok(IntakeEntry::by_name(s, crate::config::DEFAULT_PORTION_G))
		}
	}
}

fn styles() -> Styles {
	Styles::styled()
		.header(anstyle::Style::new().bold().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))))
		.usage(anstyle::Style::new().bold().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))))
		.literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))))
		.placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))))
		.valid(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))))
		.invalid(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))))
}

#[derive(Parser, Debug)]
#[command(
	name = "nutrigap",
	author,
	version,
	about = "Nutrient-gap food recommendation engine",
	styles = styles(),
	disable_help_subcommand = true,
	after_help = format!(
		"{title}
  {bin} {recommend} {recommend_args}       {recommend_desc}
  {bin} {summary} {summary_args}   {summary_desc}
  {bin} {wellness} {wellness_args}   {wellness_desc}
  {bin} {gaps} {gaps_args}   {gaps_desc}",
		title = "Examples:".bright_blue().bold(),
		bin = "nutrigap".bright_blue(),
		recommend = "recommend".yellow(),
		recommend_args = "user_001 -n 5",
		recommend_desc = "Rank foods for a stored profile".dimmed(),
		summary = "summary".yellow(),
		summary_args = "user_001 --date 2026-08-26",
		summary_desc = "Daily intake vs. requirement".dimmed(),
		wellness = "wellness".yellow(),
		wellness_args = "--score 72 -m Spinach:100",
		wellness_desc = "Gap ranking from a wellness score".dimmed(),
		gaps = "gaps".yellow(),
		gaps_args = "-g Terai -f Spinach -f Tomato",
		gaps_desc = "Region gap ranking from eaten foods".dimmed(),
	),
)]
pub struct Cli {
	/// Enable verbose debug output
	#[arg(short = 'v', long = "verbose", global = true)]
	pub verbose: bool,

	/// Directory holding the catalog, threshold, profile, and meal-log files
	#[arg(short = 'd', long = "data", global = true)]
	pub data_dir: Option<PathBuf>,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Rank foods against a stored profile's nutrient requirements
	Recommend {
		/// Profile id to recommend for
		#[arg(value_name = "USER_ID")]
		user_id: String,

		/// Number of results
		#[arg(short = 'n', long = "top", default_value_t = crate::config::DEFAULT_TOP_N)]
		top_n: usize,
	},

	/// Show one day's intake against the effective requirement
	Summary {
		/// Profile id to summarize
		#[arg(value_name = "USER_ID")]
		user_id: String,

		/// Date to summarize (YYYY-MM-DD, defaults to today)
		#[arg(long = "date")]
		date: Option<String>,
	},

	/// Gap-based ranking driven by an externally predicted wellness score
	Wellness {
		/// Predicted wellness score (below 80 boosts the daily targets)
		#[arg(short = 's', long = "score")]
		score: f64,

		/// Consumed meal as NAME:GRAMS (repeatable; grams default to 100)
		#[arg(short = 'm', long = "meal", value_parser = parse_meal)]
		meals: Vec<IntakeEntry>,

		/// Number of results
		#[arg(short = 'n', long = "top", default_value_t = crate::config::DEFAULT_TOP_N)]
		top_n: usize,
	},

	/// Gap-based ranking for a region against the default daily targets
	Gaps {
		/// Region to recommend within
		#[arg(short = 'g', long = "region")]
		region: String,

		/// Food eaten today, one whole reference portion (repeatable)
		#[arg(short = 'f', long = "food")]
		foods: Vec<String>,

		/// Number of results
		#[arg(short = 'n', long = "top", default_value_t = crate::config::DEFAULT_TOP_N)]
		top_n: usize,
	},

	/// Append a meal to the log
	LogMeal {
		/// Profile id the meal belongs to
		#[arg(value_name = "USER_ID")]
		user_id: String,

		/// Catalog id of the food eaten
		#[arg(short = 'i', long = "food-id")]
		food_id: u32,

		/// Amount eaten in grams
		#[arg(long = "grams", default_value_t = crate::config::DEFAULT_PORTION_G)]
		grams: f64,

		/// Date eaten (YYYY-MM-DD, defaults to today)
		#[arg(long = "date")]
		date: Option<String>,
	},

	/// List a user's logged meals
	ListMeals {
		/// Profile id to list meals for
		#[arg(value_name = "USER_ID")]
		user_id: String,

		/// Only meals logged on this date (YYYY-MM-DD)
		#[arg(long = "date")]
		date: Option<String>,
	},

	/// Show help for a subcommand
	Help {
		/// Subcommand name
		subcommand: Option<String>,
	},
}
