//! Unified logging system

use colored::*;
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

const LOGO: &str = r#"
     _          _  __
 ___| |__   ___| |/ _|
/ __| '_ \ / _ \ | |_
\__ \ | | |  __/ |  _|
|___/_| |_|\___|_|_|  "#;

const SLOGANS: &[&str] = &[
	"Judging books by their vectors",
	"Two reviews in, five books out",
	"Cosine of the angle between you and your next read",
	"Bag of words, shelf of books",
	"Half stars are still stars",
	"We counted every word. Twice.",
	"No IDF was harmed in the making of this ranking",
	"Because the bestseller list doesn't know you",
	"Shh... this is a library",
];

pub fn random_slogan() -> &'static str {
	let idx = rand::random_range(0..SLOGANS.len());
	SLOGANS[idx]
}

pub fn print_logo() {
	println!("{}", LOGO.bright_blue().bold());
	println!("{}", random_slogan().dimmed().italic());
}

pub struct Log;

impl Log {
	pub fn set_verbose(enabled: bool) {
		VERBOSE.store(enabled, Ordering::Relaxed);
	}

	pub fn is_verbose() -> bool {
		VERBOSE.load(Ordering::Relaxed)
	}
}

pub fn info(msg: &str) {
	println!("{} {}", "ℹ".bright_blue().bold(), msg.bright_white());
}

pub fn success(msg: &str) {
	println!("{} {}", "✓".bright_green().bold(), msg.bright_white());
}

pub fn warn(msg: &str) {
	println!("{} {}", "⚠".bright_yellow().bold(), msg.bright_white());
}

pub fn error(msg: &str) {
	println!("{} {}", "✗".bright_red().bold(), msg.bright_white());
}

pub fn debug(msg: &str) {
	if Log::is_verbose() {
		println!("{} {}", "⚙".bright_black().bold(), msg.dimmed());
	}
}

pub fn header(text: &str) {
	println!("\n{}", text.bright_blue().bold());
}

/// Clickable book title (OSC 8 terminal hyperlink)
pub fn book_link(title: &str, url: &str, max_len: usize) -> String {
	let display_name = truncate(title, max_len);
	format!("\x1b]8;;{}\x1b\\{}\x1b]8;;\x1b\\", url, display_name)
}

fn truncate(text: &str, max_len: usize) -> String {
	if text.chars().count() <= max_len {
		return text.to_string();
	}
	let kept: String = text.chars().take(max_len.saturating_sub(3)).collect();
	format!("{}...", kept.trim_end())
}

/// Star bar for a 0-5 rating in half steps
pub fn stars(rating: f32) -> String {
	let halves = (rating * 2.0).round() as usize;
	let mut bar = "★".repeat(halves / 2);
	if halves % 2 == 1 {
		bar.push('½');
	}
	bar
}
