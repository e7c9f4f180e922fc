// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Category translation data model and JSON decoding.
//!
//! The data file looks like:
//!
//! ```json
//! { "categories": [ { "id": "fruit", "translations": { "en": "Fruit", "fr": "Fruits" } } ] }
//! ```
//!
//! Property names (`categories`, `id`, `translations`) match regardless of
//! ASCII case. Language codes inside `translations` are kept exactly as
//! written.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

const TABLE_FIELDS: &[&str] = &["categories"];
const ITEM_FIELDS: &[&str] = &["id", "translations"];

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryTranslationItem {
	pub id: String,
	/// Language code -> translated label.
	#[serde(default, deserialize_with = "null_as_default")]
	pub translations: HashMap<String, String>,
}

impl CategoryTranslationItem {
	pub fn new(id: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			translations: HashMap::new(),
		}
	}

	pub fn with_translation(mut self, language: impl Into<String>, label: impl Into<String>) -> Self {
		self.translations.insert(language.into(), label.into());
		self
	}

	/// Case-insensitive id comparison.
	///
	/// Characters are folded one-to-one: a character whose uppercase form is
	/// more than one character (`ß` -> `SS`) only matches itself.
	pub fn matches_id(&self, category_id: &str) -> bool {
		if self.id.is_ascii() && category_id.is_ascii() {
			return self.id.eq_ignore_ascii_case(category_id);
		}
		self
			.id
			.chars()
			.map(simple_uppercase)
			.eq(category_id.chars().map(simple_uppercase))
	}
}

fn simple_uppercase(c: char) -> char {
	let mut upper = c.to_uppercase();
	match (upper.next(), upper.next()) {
		(Some(u), None) => u,
		_ => c,
	}
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryTranslationTable {
	#[serde(default, deserialize_with = "null_as_default")]
	pub categories: Vec<CategoryTranslationItem>,
}

impl CategoryTranslationTable {
	/// Decode a table, matching property names case-insensitively.
	///
	/// A document that is the literal `null` decodes to an empty table.
	pub fn from_json(json: &str) -> serde_json::Result<Self> {
		let mut value: Value = serde_json::from_str(json)?;
		if value.is_null() {
			return Ok(Self::default());
		}

		canonicalize_keys(&mut value, TABLE_FIELDS);
		if let Some(Value::Array(items)) = value.get_mut("categories") {
			for item in items.iter_mut() {
				canonicalize_keys(item, ITEM_FIELDS);
			}
		}

		serde_json::from_value(value)
	}
}

/// Rename object keys that match one of `fields` ignoring ASCII case to the
/// canonical spelling. Other keys are left alone. When several spellings of
/// one field are present, the last one in document order wins.
fn canonicalize_keys(value: &mut Value, fields: &[&str]) {
	let Value::Object(map) = value else {
		return;
	};

	for (key, v) in std::mem::take(map) {
		let key = fields
			.iter()
			.find(|field| key.eq_ignore_ascii_case(field))
			.map_or(key, |field| field.to_string());
		map.insert(key, v);
	}
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: serde::Deserializer<'de>,
	T: Default + Deserialize<'de>,
{
	Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
