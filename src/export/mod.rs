pub mod json;

pub use json::{load_catalog, write_catalog};

use std::path::{Path, PathBuf};

/// ディレクトリ指定時の出力ファイル名
pub const DEFAULT_FILE_NAME: &str = "spells_data.json";

/// 出力先が既存のディレクトリなら既定のファイル名を付ける
pub fn output_path(output: &Path) -> PathBuf {
    if output.is_dir() {
        output.join(DEFAULT_FILE_NAME)
    } else {
        output.to_path_buf()
    }
}
