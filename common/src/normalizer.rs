//! ファイル名 → 表示名の正規化

use crate::rules::CatalogRules;

/// ファイル名から拡張子と既知の接頭辞を取り除く
///
/// - 拡張子文字列は出現箇所すべてを除去する
/// - 接頭辞はリスト順に照合し、最初に一致した1つだけを除去する
/// - 最後に前後の空白を除去する
pub fn normalize_name(file_name: &str, rules: &CatalogRules) -> String {
    let mut name = if rules.extension.is_empty() {
        file_name.to_string()
    } else {
        file_name.replace(rules.extension.as_str(), "")
    };

    if let Some(prefix) = rules.prefixes.iter().find(|p| name.starts_with(p.as_str())) {
        name = name[prefix.len()..].to_string();
    }

    name.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(file_name: &str) -> String {
        normalize_name(file_name, &CatalogRules::default())
    }

    #[test]
    fn test_strip_prefix_and_extension() {
        assert_eq!(normalize("福利一：黑煞令.docx"), "黑煞令");
        assert_eq!(normalize("03、太岁符.docx"), "太岁符");
    }

    #[test]
    fn test_no_prefix() {
        assert_eq!(normalize("五鬼运财法.docx"), "五鬼运财法");
    }

    #[test]
    fn test_only_first_prefix_removed() {
        // "福利：" を除去した後の "01、" はそのまま残る
        assert_eq!(normalize("福利：01、招财符.docx"), "01、招财符");
    }

    #[test]
    fn test_prefix_without_colon() {
        // コロンなしの接頭辞
        assert_eq!(normalize("特别福利 金光咒.docx"), "金光咒");
    }

    #[test]
    fn test_trim_whitespace() {
        assert_eq!(normalize("  平安符 .docx"), "平安符");
        assert_eq!(normalize("福利二： 镇宅法 .docx"), "镇宅法");
    }

    #[test]
    fn test_empty_after_normalization() {
        assert_eq!(normalize("福利：.docx"), "");
        assert_eq!(normalize(".docx"), "");
    }

    #[test]
    fn test_extension_never_remains() {
        for name in ["a.docx", "a.docx.docx", "福利三：x.docx", "b.docxc.docx"] {
            assert!(!normalize(name).contains(".docx"), "拡張子が残る: {}", name);
        }
    }
}
