//! 件数集計

use spell_catalog_common::SpellRecord;
use std::collections::BTreeMap;

/// 総数と分類別件数（分類ラベル昇順）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogSummary {
    pub total: usize,
    pub by_category: BTreeMap<String, usize>,
}

impl CatalogSummary {
    pub fn from_records(records: &[SpellRecord]) -> Self {
        let mut by_category = BTreeMap::new();
        for record in records {
            *by_category.entry(record.category.label().to_string()).or_insert(0) += 1;
        }

        Self {
            total: records.len(),
            by_category,
        }
    }

    /// 出力用の行
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("共提取 {} 个法术", self.total),
            String::new(),
            "分类统计:".to_string(),
        ];
        lines.extend(
            self.by_category
                .iter()
                .map(|(category, count)| format!("  {}: {}个", category, count)),
        );
        lines
    }

    pub fn print(&self) {
        for line in self.lines() {
            println!("{}", line);
        }
    }
}
