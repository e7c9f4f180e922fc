// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use lexis_common_i18n::{language_code, FALLBACK_LANGUAGE};
use lexis_server_config::{CategoriesConfig, InvalidDataPolicy};

/// Location of the category data file relative to the content root.
pub use lexis_server_config::CATEGORIES_DATA_PATH as DATA_PATH;

use crate::error::{CategoryError, Result};
use crate::model::{CategoryTranslationItem, CategoryTranslationTable};

/// Immutable, in-memory category translation table.
///
/// Loaded once at startup; every lookup afterwards is a read of the same
/// snapshot, so the store can be shared behind an `Arc` without locking.
/// Cloning is cheap.
#[derive(Clone)]
pub struct CategoryTranslationStore {
	categories: Arc<[CategoryTranslationItem]>,
	data_path: Option<PathBuf>,
}

impl std::fmt::Debug for CategoryTranslationStore {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("CategoryTranslationStore")
			.field("data_path", &self.data_path)
			.field("categories", &self.categories.len())
			.finish()
	}
}

impl CategoryTranslationStore {
	/// Load `Data/categories.json` under `content_root`.
	///
	/// A missing file yields an empty store. An unreadable or malformed file
	/// is an error.
	pub fn new<P: AsRef<Path>>(content_root: P) -> Result<Self> {
		Self::load(content_root.as_ref().join(DATA_PATH), InvalidDataPolicy::Fail)
	}

	/// Load `Data/categories.json` under the configured content root, applying
	/// the configured policy for unreadable or malformed data.
	pub fn from_config(config: &CategoriesConfig) -> Result<Self> {
		Self::load(config.resolved_path(), config.on_invalid)
	}

	#[tracing::instrument(level = "info", skip(path), fields(path))]
	pub fn load<P: AsRef<Path>>(path: P, on_invalid: InvalidDataPolicy) -> Result<Self> {
		let path = path.as_ref();
		let path_str = path.display().to_string();
		tracing::Span::current().record("path", &path_str);

		if !path.exists() {
			tracing::debug!("category data file not found, serving an empty table");
			return Ok(Self::empty_at(path));
		}

		match read_table(path) {
			Ok(table) => {
				tracing::info!(categories = table.categories.len(), "category translations loaded");
				Ok(Self {
					categories: table.categories.into(),
					data_path: Some(path.to_path_buf()),
				})
			}
			Err(e) => match on_invalid {
				InvalidDataPolicy::Fail => Err(e),
				InvalidDataPolicy::Empty => {
					tracing::warn!(error = %e, "category data unusable, serving an empty table");
					Ok(Self::empty_at(path))
				}
			},
		}
	}

	/// Build a store from an in-memory JSON document.
	pub fn from_json(json: &str) -> Result<Self> {
		let table = CategoryTranslationTable::from_json(json)
			.map_err(|source| CategoryError::Parse { path: None, source })?;
		Ok(Self::from_items(table.categories))
	}

	pub fn from_items(categories: Vec<CategoryTranslationItem>) -> Self {
		Self {
			categories: categories.into(),
			data_path: None,
		}
	}

	fn empty_at(path: &Path) -> Self {
		Self {
			categories: Arc::from(Vec::new()),
			data_path: Some(path.to_path_buf()),
		}
	}

	/// File the table was loaded from, if it came from disk.
	pub fn data_path(&self) -> Option<&Path> {
		self.data_path.as_deref()
	}

	pub fn len(&self) -> usize {
		self.categories.len()
	}

	pub fn is_empty(&self) -> bool {
		self.categories.is_empty()
	}

	pub fn items(&self) -> &[CategoryTranslationItem] {
		&self.categories
	}

	fn find(&self, category_id: &str) -> Option<&CategoryTranslationItem> {
		self.categories.iter().find(|c| c.matches_id(category_id))
	}

	/// Translated label for `category_id` in `language`.
	///
	/// `language` is reduced to its lowercased primary subtag (`fr-FR` -> `fr`).
	/// Falls back to English, then to `category_id` as given. Never fails.
	#[tracing::instrument(level = "trace", skip(self))]
	pub fn category_translation(&self, category_id: &str, language: &str) -> String {
		let Some(category) = self.find(category_id) else {
			tracing::trace!("category not found");
			return category_id.to_string();
		};

		let code = language_code(language);
		if let Some(label) = category.translations.get(&code) {
			tracing::trace!(%code, "translation found");
			return label.clone();
		}

		tracing::trace!(%code, "no translation, falling back to {FALLBACK_LANGUAGE}");
		category
			.translations
			.get(FALLBACK_LANGUAGE)
			.cloned()
			.unwrap_or_else(|| category_id.to_string())
	}

	/// Ids of every category, in file order.
	pub fn category_ids(&self) -> impl Iterator<Item = &str> + '_ {
		self.categories.iter().map(|c| c.id.as_str())
	}

	pub fn all_category_ids(&self) -> Vec<String> {
		self.category_ids().map(str::to_string).collect()
	}

	/// Label for every category keyed by id.
	///
	/// Unlike [`category_translation`](Self::category_translation), `language`
	/// is matched exactly as given: `fr-FR` does not find an `fr` entry. Falls
	/// back to English, then to the category id. With duplicate ids the last
	/// one in file order wins.
	#[tracing::instrument(level = "trace", skip(self), fields(categories = self.categories.len()))]
	pub fn category_translations(&self, language: &str) -> HashMap<String, String> {
		self.categories
			.iter()
			.map(|c| {
				let label = c
					.translations
					.get(language)
					.or_else(|| c.translations.get(FALLBACK_LANGUAGE))
					.cloned()
					.unwrap_or_else(|| c.id.clone());
				(c.id.clone(), label)
			})
			.collect()
	}
}

fn read_table(path: &Path) -> Result<CategoryTranslationTable> {
	let json = std::fs::read_to_string(path).map_err(|source| CategoryError::Read {
		path: path.to_path_buf(),
		source,
	})?;

	CategoryTranslationTable::from_json(&json).map_err(|source| CategoryError::Parse {
		path: Some(path.to_path_buf()),
		source,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use tempfile::TempDir;

	const FRUIT_JSON: &str = r#"{
		"categories": [
			{ "id": "fruit", "translations": { "en": "Fruit", "fr": "Fruits" } },
			{ "id": "dairy", "translations": { "de": "Milchprodukte" } },
			{ "id": "bakery", "translations": { "en": "Bakery", "fr-FR": "Boulangerie" } }
		]
	}"#;

	fn fruit_store() -> CategoryTranslationStore {
		CategoryTranslationStore::from_json(FRUIT_JSON).unwrap()
	}

	fn write_data(root: &Path, contents: &str) {
		let dir = root.join("Data");
		std::fs::create_dir_all(&dir).unwrap();
		std::fs::write(dir.join("categories.json"), contents).unwrap();
	}

	#[test]
	fn test_translation_uses_primary_subtag() {
		let store = fruit_store();
		assert_eq!(store.category_translation("FRUIT", "fr-FR"), "Fruits");
		assert_eq!(store.category_translation("fruit", "FR"), "Fruits");
		assert_eq!(store.category_translation("fruit", "en-US"), "Fruit");
	}

	#[test]
	fn test_translation_falls_back_to_english() {
		let store = fruit_store();
		assert_eq!(store.category_translation("fruit", "de-DE"), "Fruit");
	}

	#[test]
	fn test_translation_falls_back_to_requested_id() {
		let store = fruit_store();
		assert_eq!(store.category_translation("Dairy", "xx-YY"), "Dairy");
		assert_eq!(store.category_translation("dairy", "de-AT"), "Milchprodukte");
	}

	#[test]
	fn test_unknown_category_returns_id() {
		let store = fruit_store();
		assert_eq!(store.category_translation("veg", "fr"), "veg");
		assert_eq!(store.category_translation("", "fr"), "");
	}

	#[test]
	fn test_region_keyed_translation_unreachable_by_primary_lookup() {
		let store = fruit_store();
		assert_eq!(store.category_translation("bakery", "fr-FR"), "Bakery");
	}

	#[test]
	fn test_first_match_wins_for_lookup() {
		let store = CategoryTranslationStore::from_items(vec![
			CategoryTranslationItem::new("Fruit").with_translation("en", "first"),
			CategoryTranslationItem::new("fruit").with_translation("en", "second"),
		]);
		assert_eq!(store.category_translation("FRUIT", "en"), "first");
	}

	#[test]
	fn test_category_ids_in_file_order() {
		let store = fruit_store();
		assert_eq!(store.all_category_ids(), vec!["fruit", "dairy", "bakery"]);
		assert_eq!(
			store.category_ids().collect::<Vec<_>>(),
			store.category_ids().collect::<Vec<_>>()
		);
	}

	#[test]
	fn test_category_translations_match_language_exactly() {
		let store = fruit_store();

		let fr = store.category_translations("fr");
		assert_eq!(fr.len(), 3);
		assert_eq!(fr["fruit"], "Fruits");
		assert_eq!(fr["dairy"], "dairy");
		assert_eq!(fr["bakery"], "Bakery");

		let fr_fr = store.category_translations("fr-FR");
		assert_eq!(fr_fr["fruit"], "Fruit");
		assert_eq!(fr_fr["bakery"], "Boulangerie");
	}

	#[test]
	fn test_category_translations_last_duplicate_wins() {
		let store = CategoryTranslationStore::from_items(vec![
			CategoryTranslationItem::new("fruit").with_translation("en", "first"),
			CategoryTranslationItem::new("fruit").with_translation("en", "second"),
		]);
		let all = store.category_translations("en");
		assert_eq!(all.len(), 1);
		assert_eq!(all["fruit"], "second");
	}

	#[test]
	fn test_new_reads_data_under_content_root() {
		let dir = TempDir::new().unwrap();
		write_data(dir.path(), FRUIT_JSON);

		let store = CategoryTranslationStore::new(dir.path()).unwrap();
		assert_eq!(store.len(), 3);
		assert_eq!(
			store.data_path(),
			Some(dir.path().join("Data").join("categories.json").as_path())
		);
		assert_eq!(store.category_translation("fruit", "fr"), "Fruits");
	}

	#[test]
	fn test_missing_file_is_empty_store() {
		let dir = TempDir::new().unwrap();
		let store = CategoryTranslationStore::new(dir.path()).unwrap();
		assert!(store.is_empty());
		assert!(store.all_category_ids().is_empty());
		assert!(store.category_translations("en").is_empty());
		assert_eq!(store.category_translation("fruit", "fr"), "fruit");
	}

	#[test]
	fn test_malformed_file_fails_by_default() {
		let dir = TempDir::new().unwrap();
		write_data(dir.path(), "{ not json");

		let err = CategoryTranslationStore::new(dir.path()).unwrap_err();
		assert!(matches!(err, CategoryError::Parse { path: Some(_), .. }));
		assert!(err.to_string().contains("categories.json"));
	}

	#[test]
	fn test_malformed_file_with_empty_policy() {
		let dir = TempDir::new().unwrap();
		write_data(dir.path(), r#"{"categories":[{"translations":{}}]}"#);

		let store = CategoryTranslationStore::load(
			dir.path().join(DATA_PATH),
			InvalidDataPolicy::Empty,
		)
		.unwrap();
		assert!(store.is_empty());
	}

	#[test]
	fn test_unreadable_file_is_read_error() {
		let dir = TempDir::new().unwrap();
		std::fs::create_dir_all(dir.path().join(DATA_PATH)).unwrap();

		let err = CategoryTranslationStore::new(dir.path()).unwrap_err();
		assert!(matches!(err, CategoryError::Read { .. }));
	}

	#[test]
	fn test_from_config_reads_fixed_path_under_content_root() {
		let dir = TempDir::new().unwrap();
		write_data(dir.path(), FRUIT_JSON);
		std::fs::create_dir_all(dir.path().join("i18n")).unwrap();
		std::fs::write(dir.path().join("i18n/cats.json"), "{ not json").unwrap();

		let config = CategoriesConfig {
			content_root: dir.path().to_path_buf(),
			on_invalid: InvalidDataPolicy::Fail,
		};
		let store = CategoryTranslationStore::from_config(&config).unwrap();
		assert_eq!(store.len(), 3);
		assert_eq!(store.data_path(), Some(dir.path().join(DATA_PATH).as_path()));
	}

	#[test]
	fn test_from_config_empty_policy() {
		let dir = TempDir::new().unwrap();
		write_data(dir.path(), "{\"categories\": [");

		let config = CategoriesConfig {
			content_root: dir.path().to_path_buf(),
			on_invalid: InvalidDataPolicy::Empty,
		};
		let store = CategoryTranslationStore::from_config(&config).unwrap();
		assert!(store.is_empty());
	}

	#[test]
	fn test_items_keep_file_order_and_contents() {
		let store = fruit_store();
		let items = store.items();
		assert_eq!(items.len(), store.len());
		assert_eq!(items[0].id, "fruit");
		assert_eq!(items[0].translations["fr"], "Fruits");
		assert_eq!(items[2].translations["fr-FR"], "Boulangerie");
		assert!(CategoryTranslationStore::from_items(Vec::new()).items().is_empty());
	}

	#[test]
	fn test_from_json_parse_error_has_no_path() {
		let err = CategoryTranslationStore::from_json("[").unwrap_err();
		assert!(matches!(err, CategoryError::Parse { path: None, .. }));
	}

	#[test]
	fn test_debug_shows_count_not_contents() {
		let debug = format!("{:?}", fruit_store());
		assert!(debug.contains("categories: 3"));
		assert!(!debug.contains("Fruits"));
	}

	#[test]
	fn test_store_is_send_sync() {
		fn assert_send_sync<T: Send + Sync>() {}
		assert_send_sync::<CategoryTranslationStore>();
	}
}
