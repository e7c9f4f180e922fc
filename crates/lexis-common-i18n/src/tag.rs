// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Language tag reduction.

/// Language used when a translation for the requested language is missing.
pub const FALLBACK_LANGUAGE: &str = "en";

/// Separator between subtags of a language tag.
pub const SUBTAG_SEPARATOR: char = '-';

/// Return the primary subtag of a language tag.
///
/// This is the text before the first `-`, or the whole tag when it has no
/// separator. Case is left untouched.
///
/// # Example
///
/// ```
/// use lexis_common_i18n::primary_subtag;
///
/// assert_eq!(primary_subtag("en-US"), "en");
/// assert_eq!(primary_subtag("zh-Hant-TW"), "zh");
/// assert_eq!(primary_subtag("de"), "de");
/// ```
pub fn primary_subtag(tag: &str) -> &str {
	match tag.split_once(SUBTAG_SEPARATOR) {
		Some((primary, _)) => primary,
		None => tag,
	}
}

/// Resolve the lookup code for a language tag: its primary subtag, lowercased.
///
/// # Example
///
/// ```
/// use lexis_common_i18n::language_code;
///
/// assert_eq!(language_code("FR-ca"), "fr");
/// assert_eq!(language_code("en"), "en");
/// ```
pub fn language_code(tag: &str) -> String {
	primary_subtag(tag).to_lowercase()
}
