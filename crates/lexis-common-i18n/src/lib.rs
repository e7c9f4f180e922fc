// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Internationalization helpers for Lexis.
//!
//! Translation tables in Lexis are keyed by short language codes (`en`,
//! `fr`, `de`), while callers usually hand us full language tags taken from
//! an `Accept-Language` header or a user profile (`fr-FR`, `en-GB`). This
//! crate reduces a tag to the code used for lookups.
//!
//! # Example
//!
//! ```
//! use lexis_common_i18n::{language_code, primary_subtag, FALLBACK_LANGUAGE};
//!
//! assert_eq!(primary_subtag("fr-FR"), "fr");
//! assert_eq!(language_code("PT-br"), "pt");
//! assert_eq!(FALLBACK_LANGUAGE, "en");
//! ```

mod tag;

pub use tag::{language_code, primary_subtag, FALLBACK_LANGUAGE, SUBTAG_SEPARATOR};
