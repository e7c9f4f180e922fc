// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Category label translations for Lexis server.
//!
//! Category labels live in a JSON file under the deployment's content root
//! (`Data/categories.json` by default). The file is read once at startup into
//! a [`CategoryTranslationStore`]; lookups after that never touch the disk.
//!
//! # Usage
//!
//! ```ignore
//! use lexis_server_categories::CategoryTranslationStore;
//!
//! let config = lexis_server_config::load_config()?;
//! let store = CategoryTranslationStore::from_config(&config.categories)?;
//! let label = store.category_translation("fruit", "fr-FR");
//! ```

mod error;
mod model;
mod service;
mod store;

pub use error::{CategoryError, Result};
pub use model::{CategoryTranslationItem, CategoryTranslationTable};
pub use service::CategoryService;
pub use store::{CategoryTranslationStore, DATA_PATH};
