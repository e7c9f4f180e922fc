// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Service interface consumed by the API layer.

use std::collections::HashMap;

use crate::store::CategoryTranslationStore;

/// Read-only category label lookups.
///
/// Handlers hold an `Arc<dyn CategoryService>` so tests can substitute a
/// fixed table.
pub trait CategoryService: Send + Sync {
	/// Label for one category; see [`CategoryTranslationStore::category_translation`].
	fn category_translation(&self, category_id: &str, language: &str) -> String;

	fn all_category_ids(&self) -> Vec<String>;

	/// Labels for every category; see [`CategoryTranslationStore::category_translations`].
	fn all_category_translations(&self, language: &str) -> HashMap<String, String>;
}

impl CategoryService for CategoryTranslationStore {
	fn category_translation(&self, category_id: &str, language: &str) -> String {
		CategoryTranslationStore::category_translation(self, category_id, language)
	}

	fn all_category_ids(&self) -> Vec<String> {
		CategoryTranslationStore::all_category_ids(self)
	}

	fn all_category_translations(&self, language: &str) -> HashMap<String, String> {
		self.category_translations(language)
	}
}
