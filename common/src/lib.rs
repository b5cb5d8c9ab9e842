//! Spell Catalog Common Library
//!
//! ファイル名の正規化・分類・属性導出（I/Oなし）

pub mod types;
pub mod rules;
pub mod error;
pub mod normalizer;
pub mod categorizer;
pub mod attributes;

pub use types::{Category, Difficulty, SpellRecord, sort_records};
pub use rules::{CatalogRules, CategoryRule};
pub use error::{Error, Result};
pub use normalizer::normalize_name;
pub use categorizer::categorize;
pub use attributes::{DerivedAttributes, derive_attributes};
