// Logger - Colored console output with timestamps

use chrono::Local;
use colored::*;
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

#[derive(Clone, Copy)]
pub enum Level {
	Info,
	Success,
	Warning,
	Error,
	Debug,
}

pub fn set_verbose(enabled: bool) {
	VERBOSE.store(enabled, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
	VERBOSE.load(Ordering::Relaxed)
}

/// Prints a timestamped, colored log message to stdout.
pub fn log(level: Level, message: &str) {
	if matches!(level, Level::Debug) && !is_verbose() {
		return;
	}
	let time = Local::now().format("%H:%M:%S").to_string().dimmed();
	let icon = match level {
		Level::Info =>    "ℹ".blue().bold(),
		Level::Success => "✔".bright_green().bold(),
		Level::Warning => "⚠".yellow().bold(),
		Level::Error =>   "✘".red().bold(),
		Level::Debug =>   "⚙".bright_blue().bold(),
	};
	println!("[{}] {} {}", time, icon, message);
}

/// Verbose-gated debug line.
pub fn debug(message: &str) {
	log(Level::Debug, message);
}

/// Prints a section header with visual separation.
pub fn header(title: &str) {
	println!();
	println!("{}", format!("─── {} ───", title).bright_blue().bold());
}

/// Prints a per-nutrient table row: name, value, optional percent column.
pub fn nutrient_row(name: &str, value: f64, percent: Option<f64>) {
	match percent {
		Some(pct) => {
			let pct_str = if pct >= 100.0 {
				format!("{:.2}%", pct).bright_green()
			} else if pct >= 50.0 {
				format!("{:.2}%", pct).yellow()
			} else {
				format!("{:.2}%", pct).red()
			};
			println!("  {:<12} {:>10.2}  {}", name.bright_blue(), value, pct_str);
		}
		None => {
			println!("  {:<12} {:>10.2}", name.bright_blue(), value);
		}
	}
}
