//! 分類 → 価格・効果・難易度の導出

use crate::rules::CatalogRules;
use crate::types::{Category, Difficulty};

/// 分類から導出される属性
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedAttributes {
    pub price: u32,
    pub effects: Vec<String>,
    pub difficulty: Difficulty,
}

/// 価格（表にない分類は既定価格）
pub fn price_for(category: Category, rules: &CatalogRules) -> u32 {
    rules
        .prices
        .get(&category)
        .copied()
        .unwrap_or(rules.default_price)
}

/// 効果一覧（表にない分類は「综合」の一覧、それも無ければ空）
pub fn effects_for(category: Category, rules: &CatalogRules) -> Vec<String> {
    rules
        .effects
        .get(&category)
        .or_else(|| rules.effects.get(&Category::General))
        .cloned()
        .unwrap_or_default()
}

/// 難易度
pub fn difficulty_for(category: Category, rules: &CatalogRules) -> Difficulty {
    if is_intermediate_label(category.label(), rules) {
        Difficulty::Intermediate
    } else {
        Difficulty::Beginner
    }
}

/// ラベルが中級扱いか
pub fn is_intermediate_label(label: &str, rules: &CatalogRules) -> bool {
    rules.intermediate_labels.iter().any(|l| l == label)
}

pub fn derive_attributes(category: Category, rules: &CatalogRules) -> DerivedAttributes {
    DerivedAttributes {
        price: price_for(category, rules),
        effects: effects_for(category, rules),
        difficulty: difficulty_for(category, rules),
    }
}
