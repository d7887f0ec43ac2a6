// Integration tests for the shelf binary
//
// Only flows that stay off the network are exercised here.

use std::path::Path;
use std::process::{Command, Output};

fn shelf(data_dir: &Path, args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_shelf"))
		.args(args)
		.arg("--data-dir")
		.arg(data_dir)
		.env_remove("SHELF_USER")
		.env("SHELF_CATALOG_URL", "http://127.0.0.1:9/volumes")
		.output()
		.expect("Failed to run shelf")
}

#[test]
fn test_version_display() {
	let dir = tempfile::tempdir().unwrap();
	let output = shelf(dir.path(), &["--version"]);

	assert!(output.status.success(), "Version command failed");
	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("shelf"), "Expected 'shelf' in version output");
}

#[test]
fn test_help_display() {
	let dir = tempfile::tempdir().unwrap();
	let output = shelf(dir.path(), &["--help"]);

	assert!(output.status.success(), "Help command failed");
	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(
		stdout.contains("search") && stdout.contains("recommend") && stdout.contains("review"),
		"Expected subcommands in help output"
	);
}

#[test]
fn test_invalid_rating_is_rejected() {
	let dir = tempfile::tempdir().unwrap();
	let output = shelf(dir.path(), &["review", "abc", "-r", "4.2", "text", "-u", "ana"]);

	assert!(!output.status.success());
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("multiple of 0.5"), "Expected rating error, got: {}", stderr);
}

#[test]
fn test_recommend_requires_user() {
	let dir = tempfile::tempdir().unwrap();
	let output = shelf(dir.path(), &["recommend"]);

	assert!(!output.status.success());
	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("SHELF_USER"));
}

#[test]
fn test_recommend_without_history_asks_for_favorite() {
	let dir = tempfile::tempdir().unwrap();
	let output = shelf(dir.path(), &["recommend", "-u", "ana"]);

	assert!(output.status.success(), "Recommend failed: {}", String::from_utf8_lossy(&output.stdout));
	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("at least 2 reviews"));
	assert!(stdout.contains("--favorite"));
}

#[test]
fn test_empty_history_listing() {
	let dir = tempfile::tempdir().unwrap();
	let output = shelf(dir.path(), &["reviews", "-u", "ana"]);

	assert!(output.status.success());
	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("haven't reviewed"));
	assert!(!dir.path().join("reviews.msgpack").exists());
}
