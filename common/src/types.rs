//! カタログの型定義
//!
//! - Category: 法術の分類（閉じた9種）
//! - Difficulty: 難易度
//! - SpellRecord: 1ファイル分の出力レコード

use serde::{Deserialize, Serialize};
use std::fmt;

/// 法術の分類
///
/// シリアライズ時は元の中国語ラベルをそのまま出力する。
/// 並び順は宣言順ではなく `label()` の文字列順で扱うこと。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "财运")]
    FinancialLuck,
    #[serde(rename = "雷法")]
    ThunderRite,
    #[serde(rename = "祈福")]
    Blessing,
    #[serde(rename = "驱邪")]
    Exorcism,
    #[serde(rename = "护身")]
    Protection,
    #[serde(rename = "五行")]
    FiveElements,
    #[serde(rename = "星斗")]
    Stars,
    #[serde(rename = "巫术")]
    Sorcery,
    #[serde(rename = "综合")]
    General,
}

impl Category {
    /// 全分類（判定優先順）
    pub const ALL: [Category; 9] = [
        Category::FinancialLuck,
        Category::ThunderRite,
        Category::Blessing,
        Category::Exorcism,
        Category::Protection,
        Category::FiveElements,
        Category::Stars,
        Category::Sorcery,
        Category::General,
    ];

    /// 出力ラベル
    pub fn label(&self) -> &'static str {
        match self {
            Category::FinancialLuck => "财运",
            Category::ThunderRite => "雷法",
            Category::Blessing => "祈福",
            Category::Exorcism => "驱邪",
            Category::Protection => "护身",
            Category::FiveElements => "五行",
            Category::Stars => "星斗",
            Category::Sorcery => "巫术",
            Category::General => "综合",
        }
    }

    /// ラベルから分類を引く
    pub fn from_label(label: &str) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 難易度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(rename = "中级")]
    Intermediate,
    #[serde(rename = "初级")]
    Beginner,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Intermediate => "中级",
            Difficulty::Beginner => "初级",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 出力レコード
///
/// フィールドの宣言順がそのままJSONのキー順になる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellRecord {
    /// 発見順の連番（最終ソート順とは無関係）
    pub id: u32,
    /// 正規化済みの表示名
    pub name: String,
    pub category: Category,
    /// スキャンルート直下のディレクトリ名
    pub course: String,
    pub price: u32,
    /// 元ファイルの絶対パス（再読込はしない）
    pub file_path: String,
    pub description: String,
    pub effects: Vec<String>,
    pub difficulty: Difficulty,
}

impl SpellRecord {
    /// 出力順のソートキー `(分類ラベル, 名前)`
    pub fn sort_key(&self) -> (&str, &str) {
        (self.category.label(), self.name.as_str())
    }
}

/// `(分類, 名前)` の昇順に並べ替える
pub fn sort_records(records: &mut [SpellRecord]) {
    records.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
}
