//! 分類ルール定義
//!
//! 名前正規化・分類・属性導出に使う固定テーブルを1つの設定オブジェクトにまとめる。
//! 既定値は `CatalogRules::default()` で、外部からの読み込みは行わない。

use crate::error::{Error, Result};
use crate::types::Category;
use std::collections::HashMap;

/// 分類ルール（キーワードのいずれかを部分文字列として含めば一致）
#[derive(Debug, Clone)]
pub struct CategoryRule {
    pub category: Category,
    pub keywords: Vec<String>,
}

impl CategoryRule {
    pub fn new(category: Category, keywords: &[&str]) -> Self {
        Self {
            category,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    /// 名前がいずれかのキーワードを含むか（大文字小文字は区別する）
    pub fn matches(&self, name: &str) -> bool {
        self.keywords.iter().any(|k| name.contains(k.as_str()))
    }
}

/// カタログ生成ルール一式
#[derive(Debug, Clone)]
pub struct CatalogRules {
    /// 対象ファイルの拡張子（ドット付き）
    pub extension: String,
    /// 除去する接頭辞（先頭から順に照合し、最初の一致のみ除去）
    pub prefixes: Vec<String>,
    /// 分類ルール（優先順）
    pub category_rules: Vec<CategoryRule>,
    /// どのルールにも一致しない場合の分類
    pub fallback_category: Category,
    pub prices: HashMap<Category, u32>,
    /// 価格表にない分類の価格
    pub default_price: u32,
    pub effects: HashMap<Category, Vec<String>>,
    /// 中級とみなす分類ラベル
    pub intermediate_labels: Vec<String>,
    /// ファイル名にこれらを含むファイルはスキップ
    pub exclude_patterns: Vec<String>,
    /// ルート直下のファイルのコース名
    pub fallback_course: String,
}

const PREFIXES: &[&str] = &[
    "福利一：", "福利二：", "福利三：", "福利四：", "福利五：", "福利六：", "福利七：",
    "福利：", "小福利：", "特别福利", "端午福利：",
    "01、", "02、", "03、", "04、", "05、", "06、",
];

impl Default for CatalogRules {
    fn default() -> Self {
        let category_rules = vec![
            CategoryRule::new(
                Category::FinancialLuck,
                &["财", "金", "银", "运", "富", "进库", "地库", "招财"],
            ),
            CategoryRule::new(Category::ThunderRite, &["雷", "电", "霆", "震"]),
            CategoryRule::new(
                Category::Blessing,
                &["福", "祈", "祝", "祭", "愿", "祷", "福旺", "新春"],
            ),
            CategoryRule::new(
                Category::Exorcism,
                &["禁", "驱", "除", "破", "收", "煞", "鬼", "邪", "退", "镇"],
            ),
            CategoryRule::new(
                Category::Protection,
                &["护", "身", "挡", "封", "解", "赦", "压"],
            ),
            // "金" は財運ルールが先に拾うため、ここでは実質到達しない
            CategoryRule::new(
                Category::FiveElements,
                &["五行", "八卦", "阴阳", "水", "火", "木", "金", "土"],
            ),
            CategoryRule::new(Category::Stars, &["斗", "星", "北斗", "南斗"]),
            CategoryRule::new(Category::Sorcery, &["巫"]),
        ];

        let prices = HashMap::from([
            (Category::FinancialLuck, 888),
            (Category::ThunderRite, 1288),
            (Category::Blessing, 666),
            (Category::Exorcism, 999),
            (Category::Protection, 777),
            (Category::FiveElements, 888),
            (Category::Stars, 999),
            (Category::Sorcery, 666),
            (Category::General, 666),
        ]);

        let effects: HashMap<Category, Vec<String>> = [
            (Category::FinancialLuck, ["招财进宝", "开库纳财", "五鬼运财", "生意兴隆"]),
            (Category::ThunderRite, ["驱邪镇煞", "护身辟邪", "治病消灾", "斩妖除魔"]),
            (Category::Blessing, ["祈福纳祥", "增运旺宅", "平安顺遂", "心想事成"]),
            (Category::Exorcism, ["驱邪避凶", "镇宅安神", "化解煞气", "清除晦气"]),
            (Category::Protection, ["护身保命", "化解灾难", "逢凶化吉", "平安吉祥"]),
            (Category::FiveElements, ["调和五行", "平衡阴阳", "改善运势", "趋吉避凶"]),
            (Category::Stars, ["星宿护佑", "改运转运", "化解灾厄", "增福延寿"]),
            (Category::Sorcery, ["通灵问事", "化解疑难", "增强灵力", "通达天地"]),
            (Category::General, ["综合功效", "多效合一", "平衡调理", "趋福避祸"]),
        ]
        .into_iter()
        .map(|(c, list)| (c, list.iter().map(|s| s.to_string()).collect::<Vec<_>>()))
        .collect();

        Self {
            extension: ".docx".to_string(),
            prefixes: PREFIXES.iter().map(|p| p.to_string()).collect(),
            category_rules,
            fallback_category: Category::General,
            prices,
            default_price: 666,
            effects,
            // "禁法" は現行の分類ルールでは生成されないが、互換性のため残す
            intermediate_labels: vec!["雷法".to_string(), "禁法".to_string()],
            exclude_patterns: vec!["群聊记录".to_string(), "转写".to_string()],
            fallback_course: "其他".to_string(),
        }
    }
}

impl CatalogRules {
    /// ファイル名が除外対象か
    pub fn is_excluded(&self, file_name: &str) -> bool {
        self.exclude_patterns
            .iter()
            .any(|p| file_name.contains(p.as_str()))
    }

    /// ルール一式の整合性を確認する
    pub fn validate(&self) -> Result<()> {
        if !self.extension.starts_with('.') || self.extension.len() < 2 {
            return Err(Error::Rules(format!("拡張子が不正です: {:?}", self.extension)));
        }
        if let Some(rule) = self.category_rules.iter().find(|r| r.keywords.is_empty()) {
            return Err(Error::Rules(format!("キーワードが空のルールがあります: {}", rule.category)));
        }
        if self.fallback_course.is_empty() {
            return Err(Error::Rules("既定のコース名が空です".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rule_order() {
        let rules = CatalogRules::default();
        let order: Vec<Category> = rules.category_rules.iter().map(|r| r.category).collect();
        assert_eq!(
            order,
            vec![
                Category::FinancialLuck,
                Category::ThunderRite,
                Category::Blessing,
                Category::Exorcism,
                Category::Protection,
                Category::FiveElements,
                Category::Stars,
                Category::Sorcery,
            ]
        );
        assert_eq!(rules.fallback_category, Category::General);
    }

    #[test]
    fn test_every_category_has_attributes() {
        let rules = CatalogRules::default();
        for category in Category::ALL {
            assert!(rules.prices.contains_key(&category), "価格なし: {}", category);
            assert_eq!(rules.effects[&category].len(), 4);
        }
    }

    #[test]
    fn test_default_rules_are_valid() {
        assert!(CatalogRules::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_extension() {
        let rules = CatalogRules {
            extension: "docx".to_string(),
            ..Default::default()
        };
        assert!(matches!(rules.validate(), Err(Error::Rules(_))));
    }

    #[test]
    fn test_validate_rejects_empty_keywords() {
        let mut rules = CatalogRules::default();
        rules.category_rules.push(CategoryRule::new(Category::Sorcery, &[]));
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_is_excluded() {
        let rules = CatalogRules::default();
        assert!(rules.is_excluded("2023群聊记录.docx"));
        assert!(rules.is_excluded("第一课转写.docx"));
        assert!(!rules.is_excluded("五鬼运财法.docx"));
    }

    #[test]
    fn test_rule_matches_substring() {
        let rule = CategoryRule::new(Category::Stars, &["北斗"]);
        assert!(rule.matches("拜北斗法"));
        assert!(!rule.matches("北方斗"));
    }
}
