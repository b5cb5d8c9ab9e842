//! 1ファイル分のレコード組み立て

use spell_catalog_common::{categorize, derive_attributes, normalize_name, CatalogRules, SpellRecord};
use std::path::{Component, Path, PathBuf};

/// スキャンルートからの相対パスの先頭ディレクトリをコース名とする
///
/// ルート直下のファイル（またはルート外のパス）は既定のコース名。
pub fn course_for(path: &Path, root: &Path, rules: &CatalogRules) -> String {
    let relative = match path.strip_prefix(root) {
        Ok(rel) => rel,
        Err(_) => return rules.fallback_course.clone(),
    };

    let components: Vec<Component> = relative.components().collect();
    match components.as_slice() {
        [Component::Normal(first), _, ..] => first.to_string_lossy().to_string(),
        _ => rules.fallback_course.clone(),
    }
}

/// 説明文
pub fn describe(name: &str, course: &str, category: &str) -> String {
    format!("{}，源自{}，属于{}类秘法。", name, course, category)
}

/// 連番を払い出しながらレコードを組み立てる
pub struct RecordAssembler<'a> {
    root: PathBuf,
    rules: &'a CatalogRules,
    next_id: u32,
}

impl<'a> RecordAssembler<'a> {
    pub fn new(root: impl Into<PathBuf>, rules: &'a CatalogRules) -> Self {
        Self {
            root: root.into(),
            rules,
            next_id: 1,
        }
    }

    /// 次に払い出す連番
    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    pub fn assemble(&mut self, path: &Path) -> SpellRecord {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let name = normalize_name(&file_name, self.rules);
        let category = categorize(&name, self.rules);
        let attrs = derive_attributes(category, self.rules);
        let course = course_for(path, &self.root, self.rules);

        let record = SpellRecord {
            id: self.next_id,
            description: describe(&name, &course, category.label()),
            name,
            category,
            course,
            price: attrs.price,
            file_path: path.to_string_lossy().to_string(),
            effects: attrs.effects,
            difficulty: attrs.difficulty,
        };

        self.next_id += 1;
        record
    }
}
