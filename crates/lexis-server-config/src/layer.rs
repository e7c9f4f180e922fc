// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Partial configuration produced by a single source.

use serde::{Deserialize, Serialize};

use crate::sections::CategoriesConfigLayer;

/// One layer of server configuration. Every field is optional so layers from
/// different sources can be merged in precedence order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ServerConfigLayer {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub categories: Option<CategoriesConfigLayer>,
}

impl ServerConfigLayer {
	/// Merge `other` on top of `self`; values set in `other` win.
	pub fn merge(&mut self, other: Self) {
		if let Some(categories) = other.categories {
			match &mut self.categories {
				Some(existing) => existing.merge(categories),
				None => self.categories = Some(categories),
			}
		}
	}
}
