// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CategoryError {
	#[error("Failed to read category data at {path}: {source}")]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse category data{}: {source}", display_path(.path))]
	Parse {
		path: Option<PathBuf>,
		#[source]
		source: serde_json::Error,
	},
}

fn display_path(path: &Option<PathBuf>) -> String {
	match path {
		Some(path) => format!(" at {}", path.display()),
		None => String::new(),
	}
}

pub type Result<T> = std::result::Result<T, CategoryError>;
