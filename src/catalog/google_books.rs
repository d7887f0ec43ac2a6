//! Google Books volumes API client

use anyhow::{anyhow, bail, Context, Result};
use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use std::time::Duration;

use super::Catalog;
use crate::config;
use crate::core::Book;
use crate::ui;

#[derive(Debug, Deserialize)]
struct VolumeList {
	#[serde(default)]
	items: Vec<Volume>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Volume {
	id: String,
	#[serde(default)]
	volume_info: VolumeInfo,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct VolumeInfo {
	title: Option<String>,
	description: Option<String>,
	authors: Vec<String>,
	categories: Vec<String>,
	image_links: Option<ImageLinks>,
}

#[derive(Debug, Deserialize)]
struct ImageLinks {
	thumbnail: Option<String>,
}

impl Volume {
	fn into_book(self) -> Book {
		let info = self.volume_info;
		Book {
			id: self.id,
			title: info.title.unwrap_or_default(),
			description: info.description.unwrap_or_default(),
			authors: info.authors,
			categories: info.categories,
			thumbnail: info.image_links.and_then(|l| l.thumbnail),
		}
	}
}

pub struct GoogleBooks {
	base_url: Url,
	client: Client,
}

impl GoogleBooks {
	pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
		let client = Client::builder()
			.timeout(timeout)
			.user_agent(concat!("shelf/", env!("CARGO_PKG_VERSION")))
			.build()
			.context("Failed to build HTTP client")?;

		let base_url = Url::parse(base_url.trim_end_matches('/'))
			.with_context(|| format!("Invalid catalog URL: {}", base_url))?;

		Ok(Self { base_url, client })
	}

	/// `{base}/{id}`; ids are limited to `[A-Za-z0-9_-]`
	fn volume_url(&self, id: &str) -> Result<Url> {
		if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
			bail!("Invalid book id: {:?}", id);
		}

		let mut url = self.base_url.clone();
		url.path_segments_mut()
			.map_err(|_| anyhow!("Catalog URL cannot take a path: {}", self.base_url))?
			.pop_if_empty()
			.push(id);
		Ok(url)
	}

	/// Client for the configured catalog URL
	pub fn from_config() -> Result<Self> {
		Self::new(&config::catalog_url(), config::REQUEST_TIMEOUT)
	}
}

impl Catalog for GoogleBooks {
	fn search(&self, query: &str, max_results: usize) -> Result<Vec<Book>> {
		ui::debug(&format!("Catalog search: \"{}\" (max {})", query, max_results));

		let max = max_results.to_string();
		let list: VolumeList = self
			.client
			.get(self.base_url.clone())
			.query(&[("q", query), ("maxResults", max.as_str())])
			.send()
			.with_context(|| format!("Catalog search failed for \"{}\"", query))?
			.error_for_status()
			.context("Catalog returned an error status")?
			.json()
			.context("Failed to decode catalog search response")?;

		Ok(list.items.into_iter().map(Volume::into_book).collect())
	}

	fn lookup(&self, id: &str) -> Result<Option<Book>> {
		ui::debug(&format!("Catalog lookup: {}", id));

		let url = self.volume_url(id)?;
		let response = self
			.client
			.get(url)
			.send()
			.with_context(|| format!("Catalog lookup failed for {}", id))?;

		if response.status() == StatusCode::NOT_FOUND {
			return Ok(None);
		}

		let volume: Volume = response
			.error_for_status()
			.context("Catalog returned an error status")?
			.json()
			.with_context(|| format!("Failed to decode catalog volume {}", id))?;

		Ok(Some(volume.into_book()))
	}
}
