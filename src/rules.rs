//! 組み込みルールの共有インスタンスと表示

use spell_catalog_common::attributes::{difficulty_for, price_for};
use spell_catalog_common::CatalogRules;

lazy_static::lazy_static! {
    /// 組み込みの分類ルール
    pub static ref DEFAULT_RULES: CatalogRules = CatalogRules::default();
}

/// `rules` サブコマンドの表示行
pub fn describe_rules(rules: &CatalogRules) -> Vec<String> {
    let mut lines = vec![
        format!("対象拡張子: {}", rules.extension),
        format!("除外パターン: {}", rules.exclude_patterns.join(", ")),
        String::new(),
        "分類ルール（上から順に判定）:".to_string(),
    ];

    for (i, rule) in rules.category_rules.iter().enumerate() {
        lines.push(format!(
            "  {}. {} ({}元, {}) ← {}",
            i + 1,
            rule.category,
            price_for(rule.category, rules),
            difficulty_for(rule.category, rules),
            rule.keywords.join(" ")
        ));
    }

    let fallback = rules.fallback_category;
    lines.push(format!(
        "  -. {} ({}元, {}) ← 該当なし",
        fallback,
        price_for(fallback, rules),
        difficulty_for(fallback, rules)
    ));
    lines
}
