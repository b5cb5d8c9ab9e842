//! 法术文档カタログ生成
//!
//! 文書ファイルのツリーを走査し、ファイル名から分類・価格・効果を導出して
//! 1つのJSON配列として書き出す。

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod rules;
pub mod scanner;

pub use spell_catalog_common as common;
