// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Category translation data configuration section.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_CONTENT_ROOT: &str = ".";

/// Location of the category data file relative to the content root. Fixed.
pub const CATEGORIES_DATA_PATH: &str = "Data/categories.json";

/// What to do when the category data file exists but cannot be read or parsed.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "String", into = "String")]
pub enum InvalidDataPolicy {
	/// Refuse to start.
	#[default]
	Fail,
	/// Log a warning and serve an empty table.
	Empty,
}

impl fmt::Display for InvalidDataPolicy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			InvalidDataPolicy::Fail => write!(f, "fail"),
			InvalidDataPolicy::Empty => write!(f, "empty"),
		}
	}
}

impl FromStr for InvalidDataPolicy {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_lowercase().as_str() {
			"fail" | "error" | "strict" => Ok(InvalidDataPolicy::Fail),
			"empty" | "ignore" | "lenient" => Ok(InvalidDataPolicy::Empty),
			other => Err(format!(
				"unknown policy '{other}' (expected 'fail' or 'empty')"
			)),
		}
	}
}

impl TryFrom<String> for InvalidDataPolicy {
	type Error = String;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}

impl From<InvalidDataPolicy> for String {
	fn from(policy: InvalidDataPolicy) -> Self {
		policy.to_string()
	}
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CategoriesConfigLayer {
	pub content_root: Option<String>,
	/// Config-file only; there is no environment override.
	pub on_invalid: Option<InvalidDataPolicy>,
}

impl CategoriesConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.content_root.is_some() {
			self.content_root = other.content_root;
		}
		if other.on_invalid.is_some() {
			self.on_invalid = other.on_invalid;
		}
	}

	pub fn finalize(self) -> Result<CategoriesConfig, ConfigError> {
		let content_root = self
			.content_root
			.unwrap_or_else(|| DEFAULT_CONTENT_ROOT.to_string());

		if content_root.trim().is_empty() {
			return Err(ConfigError::validation(
				"categories content_root must not be empty",
			));
		}

		Ok(CategoriesConfig {
			content_root: PathBuf::from(content_root),
			on_invalid: self.on_invalid.unwrap_or_default(),
		})
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoriesConfig {
	/// Deployment root supplied by the hosting environment.
	pub content_root: PathBuf,
	pub on_invalid: InvalidDataPolicy,
}

impl Default for CategoriesConfig {
	fn default() -> Self {
		Self {
			content_root: PathBuf::from(DEFAULT_CONTENT_ROOT),
			on_invalid: InvalidDataPolicy::default(),
		}
	}
}

impl CategoriesConfig {
	/// `<content_root>/Data/categories.json`.
	pub fn resolved_path(&self) -> PathBuf {
		self.content_root.join(CATEGORIES_DATA_PATH)
	}
}
