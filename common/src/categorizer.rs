//! キーワードによる分類判定

use crate::rules::CatalogRules;
use crate::types::Category;

/// 正規化済みの名前を分類する
///
/// ルールは優先順に評価され、最初に一致したものが採用される。
/// どれにも一致しなければ `fallback_category` を返す。
pub fn categorize(name: &str, rules: &CatalogRules) -> Category {
    rules
        .category_rules
        .iter()
        .find(|rule| rule.matches(name))
        .map(|rule| rule.category)
        .unwrap_or(rules.fallback_category)
}
