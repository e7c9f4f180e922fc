// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections.

mod categories;

pub use categories::{
	CategoriesConfig, CategoriesConfigLayer, InvalidDataPolicy, CATEGORIES_DATA_PATH,
	DEFAULT_CONTENT_ROOT,
};
