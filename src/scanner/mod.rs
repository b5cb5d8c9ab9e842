//! 文書ファイルの再帰スキャン

use crate::error::{CatalogError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentInfo {
    /// 絶対パス
    pub path: PathBuf,
    pub file_name: String,
}

/// ルートを検証して絶対パスに解決する
///
/// シンボリックリンクは解決しない。ルート自体が読めなければエラー。
pub fn resolve_root(folder: &Path) -> Result<PathBuf> {
    if !folder.exists() {
        return Err(CatalogError::FolderNotFound(folder.display().to_string()));
    }
    if !folder.is_dir() {
        return Err(CatalogError::NotADirectory(folder.display().to_string()));
    }
    std::fs::read_dir(folder)?;
    Ok(std::path::absolute(folder)?)
}

/// `extension` で終わるファイルを再帰的に列挙する
///
/// 順序はファイルシステム依存。`sort_paths` が真ならパス順に並べ替える。
/// ルート配下で読めないディレクトリはその部分だけ飛ばす。
pub fn scan_documents(
    folder: &Path,
    extension: &str,
    sort_paths: bool,
    verbose: bool,
) -> Result<Vec<DocumentInfo>> {
    let root = resolve_root(folder)?;
    let mut documents = Vec::new();

    for entry in WalkDir::new(&root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(e.into()),
            Err(e) => {
                if verbose {
                    eprintln!("  読み込み不可のため除外: {}", e);
                }
                continue;
            }
        };
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let file_name = match path.file_name() {
            Some(name) => name.to_string_lossy().to_string(),
            None => continue,
        };

        if file_name.ends_with(extension) {
            documents.push(DocumentInfo {
                path: path.to_path_buf(),
                file_name,
            });
        }
    }

    if sort_paths {
        documents.sort_by(|a, b| a.path.cmp(&b.path));
    }

    Ok(documents)
}
