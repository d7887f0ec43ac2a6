//! Shelf - book reviews and recommendations
//!
//! A command-line tool for searching a public book catalog, keeping
//! reviews locally and getting recommendations from your top-rated books.

use anyhow::{anyhow, Result};
use clap::{CommandFactory, Parser};

use shelf::catalog::GoogleBooks;
use shelf::cli::{Cli, Command};
use shelf::commands;
use shelf::config;
use shelf::storage::FileReviewStore;
use shelf::ui::{self, Log};

fn main() {
	let cli = Cli::parse();

	Log::set_verbose(cli.verbose);

	if let Some(dir) = cli.data_dir.clone() {
		config::set_data_dir(dir);
	}
	if let Some(url) = cli.catalog_url.clone() {
		config::set_catalog_url(url);
	}
	if let Some(user) = cli.user.clone() {
		config::set_user(user);
	}

	if let Err(e) = run(cli.command) {
		ui::error(&format!("{:#}", e));
		std::process::exit(1);
	}
}

fn run(command: Command) -> Result<()> {
	match command {
		Command::Search { query, limit } => {
			let catalog = GoogleBooks::from_config()?;
			commands::search::run(&catalog, &query, limit)
		}
		Command::Show { book_id, open } => {
			let catalog = GoogleBooks::from_config()?;
			let store = FileReviewStore::open(&config::reviews_path())?;
			let viewer = config::user();
			commands::show::run(&catalog, &store, &book_id, viewer.as_deref(), open)
		}
		Command::Review { book_id, rating, text } => {
			let user = require_user()?;
			let catalog = GoogleBooks::from_config()?;
			let mut store = FileReviewStore::open(&config::reviews_path())?;
			commands::review::add(&catalog, &mut store, &user, &book_id, rating, &text)
		}
		Command::Unreview { review_id } => {
			let user = require_user()?;
			let mut store = FileReviewStore::open(&config::reviews_path())?;
			commands::review::delete(&mut store, &user, &review_id)
		}
		Command::Reviews => {
			let user = require_user()?;
			let catalog = GoogleBooks::from_config()?;
			let store = FileReviewStore::open(&config::reviews_path())?;
			commands::review::list(&catalog, &store, &user)
		}
		Command::Recommend { favorite, limit, open } => {
			let user = require_user()?;
			ui::print_logo();
			let catalog = GoogleBooks::from_config()?;
			let store = FileReviewStore::open(&config::reviews_path())?;
			commands::recommend::run(&catalog, &store, &user, favorite.as_deref(), limit, open)
		}
		Command::Trending => {
			let catalog = GoogleBooks::from_config()?;
			commands::trending::run(&catalog)
		}
		Command::Help { subcommand } => {
			let mut cmd = Cli::command();
			match subcommand.as_deref().and_then(|s| cmd.find_subcommand_mut(s)) {
				Some(sub_cmd) => sub_cmd.print_help()?,
				None => {
					if let Some(sub) = &subcommand {
						ui::warn(&format!("Unknown subcommand: {}", sub));
					}
					Cli::command().print_help()?
				}
			}
			Ok(())
		}
	}
}

fn require_user() -> Result<String> {
	config::user().ok_or_else(|| anyhow!("No user given, pass --user or set SHELF_USER"))
}
