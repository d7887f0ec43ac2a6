use clap::builder::styling::{AnsiColor, Style, Styles};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::{RANKED_LIMIT, SEARCH_PAGE_SIZE};
use crate::core::Rating;

fn styles() -> Styles {
	Styles::styled()
		.header(Style::new().bold().fg_color(Some(AnsiColor::Blue.into())))
		.usage(Style::new().bold().fg_color(Some(AnsiColor::Blue.into())))
		.literal(Style::new().fg_color(Some(AnsiColor::Blue.into())))
		.placeholder(Style::new().fg_color(Some(AnsiColor::Yellow.into())))
		.valid(Style::new().fg_color(Some(AnsiColor::Blue.into())))
		.invalid(Style::new().fg_color(Some(AnsiColor::Red.into())))
}

#[derive(Parser, Debug)]
#[command(
	name = "shelf",
	author,
	version,
	about = "Book reviews and recommendations from the terminal",
	styles = styles(),
	disable_help_subcommand = true,
	after_help = format!(
		"{title}
  {shelf} {search}     {search_args}         {search_desc}
  {shelf} {review}     {review_args}  {review_desc}
  {shelf} {recommend}  {recommend_args}                {recommend_desc}
  {shelf} {recommend}  {favorite_args}    {favorite_desc}",
		title = "Examples:".bright_blue().bold(),
		shelf = "shelf".bright_blue(),
		search = "search".yellow(),
		search_args = "\"the bell jar\"",
		search_desc = "Search the catalog".dimmed(),
		review = "review".yellow(),
		review_args = "<BOOK_ID> -r 4.5 \"Loved it\"",
		review_desc = "Review a book".dimmed(),
		recommend = "recommend".yellow(),
		recommend_args = "-u me",
		recommend_desc = "Picks from your top-rated books".dimmed(),
		favorite_args = "-f \"intermezzo\"",
		favorite_desc = "One pick from a favorite title".dimmed(),
	),
)]
pub struct Cli {
	/// Enable verbose debug output
	#[arg(short = 'v', long = "verbose", global = true)]
	pub verbose: bool,

	/// Acting user (defaults to SHELF_USER)
	#[arg(short = 'u', long = "user", global = true)]
	pub user: Option<String>,

	/// Review store directory (defaults to SHELF_DATA_DIR or ./.shelf)
	#[arg(long = "data-dir", global = true, value_name = "DIR")]
	pub data_dir: Option<PathBuf>,

	/// Catalog endpoint (defaults to SHELF_CATALOG_URL or Google Books)
	#[arg(long = "catalog-url", global = true, value_name = "URL")]
	pub catalog_url: Option<String>,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Search the catalog
	Search {
		/// Free-text query
		#[arg(value_name = "QUERY")]
		query: String,

		/// Number of results
		#[arg(short = 'n', long = "limit", default_value_t = SEARCH_PAGE_SIZE)]
		limit: usize,
	},

	/// Show a book with its reviews
	Show {
		/// Catalog id of the book
		#[arg(value_name = "BOOK_ID")]
		book_id: String,

		/// Open the book page in the browser
		#[arg(short = 'o', long = "open")]
		open: bool,
	},

	/// Review a book (one review per book)
	Review {
		/// Catalog id of the book
		#[arg(value_name = "BOOK_ID")]
		book_id: String,

		/// Rating from 0 to 5 in steps of 0.5
		#[arg(short = 'r', long = "rating", default_value = "5")]
		rating: Rating,

		/// Review text
		#[arg(value_name = "TEXT")]
		text: String,
	},

	/// Delete one of your reviews
	Unreview {
		/// Review id (as shown by `shelf reviews`)
		#[arg(value_name = "REVIEW_ID")]
		review_id: String,
	},

	/// List your reviews
	Reviews,

	/// Recommend books based on your highest-rated reviews
	Recommend {
		/// Favorite book title, used when you have fewer than two reviews
		#[arg(short = 'f', long = "favorite", value_name = "TITLE")]
		favorite: Option<String>,

		/// Number of results
		#[arg(short = 'n', long = "limit", default_value_t = RANKED_LIMIT)]
		limit: usize,

		/// Open the best match in the browser
		#[arg(short = 'o', long = "open")]
		open: bool,
	},

	/// Featured books
	Trending,

	/// Show help for a subcommand
	Help {
		/// Subcommand name
		subcommand: Option<String>,
	},
}
