//! カタログ生成パイプライン
//!
//! スキャン → 除外 → レコード組み立て → ソート → 出力

pub mod assembler;
pub mod summary;

pub use assembler::{course_for, RecordAssembler};
pub use summary::CatalogSummary;

use crate::error::{CatalogError, Result};
use crate::export;
use crate::scanner::{self, DocumentInfo};
use indicatif::{ProgressBar, ProgressStyle};
use spell_catalog_common::{sort_records, CatalogRules, SpellRecord};
use std::path::{Path, PathBuf};

/// パイプラインの実行オプション
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub root: PathBuf,
    /// 出力ファイルまたはディレクトリ（ドライラン時は不要）
    pub output: Option<PathBuf>,
    /// 連番付与前にパス順へ並べる（実行間で連番を再現する）
    pub sort_paths: bool,
    /// 書き出しを行わない
    pub dry_run: bool,
    pub verbose: bool,
    pub show_progress: bool,
}

/// 実行結果
#[derive(Debug)]
pub struct CatalogRun {
    pub records: Vec<SpellRecord>,
    /// 除外したファイル数
    pub skipped: usize,
    /// 書き出し先（ドライラン時は None）
    pub written_to: Option<PathBuf>,
}

impl CatalogRun {
    pub fn summary(&self) -> CatalogSummary {
        CatalogSummary::from_records(&self.records)
    }
}

/// 除外対象を飛ばしてレコードを組み立て、`(分類, 名前)` 順に並べる
///
/// 除外ファイルは連番を消費しない。戻り値は (レコード, 除外数)。
pub fn build_catalog(
    documents: &[DocumentInfo],
    root: &Path,
    rules: &CatalogRules,
    progress: &ProgressBar,
    verbose: bool,
) -> (Vec<SpellRecord>, usize) {
    let mut assembler = RecordAssembler::new(root, rules);
    let mut records = Vec::with_capacity(documents.len());
    let mut skipped = 0;

    for doc in documents {
        progress.inc(1);

        if rules.is_excluded(&doc.file_name) {
            skipped += 1;
            if verbose {
                eprintln!("  スキップ: {}", doc.path.display());
            }
            continue;
        }

        let record = assembler.assemble(&doc.path);
        if verbose {
            eprintln!(
                "  #{} {} [{}] ← {}",
                record.id,
                record.name,
                record.category,
                doc.file_name
            );
        }
        records.push(record);
    }

    sort_records(&mut records);
    (records, skipped)
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::with_template("  {bar:40} {pos}/{len} {wide_msg}") {
        bar.set_style(style);
    }
    bar
}

/// スキャンから書き出しまで一括実行する
pub fn run_pipeline(options: &PipelineOptions, rules: &CatalogRules) -> Result<CatalogRun> {
    rules.validate()?;
    let output = match (&options.output, options.dry_run) {
        (_, true) => None,
        (Some(output), false) => Some(export::output_path(output)),
        (None, false) => return Err(CatalogError::Config("出力先が未指定です".into())),
    };

    let root = scanner::resolve_root(&options.root)?;
    let documents = scanner::scan_documents(&root, &rules.extension, options.sort_paths, options.verbose)?;
    if options.verbose {
        eprintln!("  {}件の{}ファイルを検出", documents.len(), rules.extension);
    }

    let progress = progress_bar(documents.len(), options.show_progress && !options.verbose);
    let (records, skipped) = build_catalog(&documents, &root, rules, &progress, options.verbose);
    progress.finish_and_clear();

    if let Some(path) = &output {
        export::write_catalog(&records, path)?;
    }

    Ok(CatalogRun {
        records,
        skipped,
        written_to: output,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use spell_catalog_common::Category;

    fn doc(path: &str) -> DocumentInfo {
        let path = PathBuf::from(path);
        DocumentInfo {
            file_name: path.file_name().unwrap().to_string_lossy().to_string(),
            path,
        }
    }

    #[test]
    fn test_build_catalog_skips_excluded_without_consuming_ids() {
        let rules = CatalogRules::default();
        let documents = vec![
            doc("/r/群聊记录2023.docx"),
            doc("/r/课程/五鬼运财法.docx"),
            doc("/r/第一课转写.docx"),
            doc("/r/平安符.docx"),
        ];

        let (records, skipped) =
            build_catalog(&documents, Path::new("/r"), &rules, &ProgressBar::hidden(), false);

        assert_eq!(skipped, 2);
        assert_eq!(records.len(), 2);
        let mut ids: Vec<u32> = records.iter().map(|r| r.id).collect();
        ids.sort();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_build_catalog_sorted_and_ids_in_discovery_order() {
        let rules = CatalogRules::default();
        let documents = vec![
            doc("/r/平安符.docx"),
            doc("/r/雷法课程/闪电咒.docx"),
            doc("/r/五鬼运财法.docx"),
        ];

        let (records, _) =
            build_catalog(&documents, Path::new("/r"), &rules, &ProgressBar::hidden(), false);

        let order: Vec<(&str, u32)> = records.iter().map(|r| (r.name.as_str(), r.id)).collect();
        let mut expected = vec![
            (Category::General.label(), "平安符", 1),
            (Category::ThunderRite.label(), "闪电咒", 2),
            (Category::FinancialLuck.label(), "五鬼运财法", 3),
        ];
        expected.sort();
        let expected: Vec<(&str, u32)> = expected.into_iter().map(|(_, n, id)| (n, id)).collect();
        assert_eq!(order, expected);
    }
}
