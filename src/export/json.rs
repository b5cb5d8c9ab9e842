//! カタログJSONの読み書き
//!
//! 書き込みは同じディレクトリの一時ファイルに出力してから置き換える。
//! 途中で失敗しても出力先は作成も上書きもされない。

use crate::error::{CatalogError, Result};
use spell_catalog_common::SpellRecord;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// レコード一覧を整形済みJSON配列として書き出す
pub fn write_catalog(records: &[SpellRecord], output: &Path) -> Result<()> {
    let parent = match output.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let mut temp = NamedTempFile::new_in(parent)?;
    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        serde_json::to_writer_pretty(&mut writer, records)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
    }
    temp.as_file().sync_all()?;

    temp.persist(output).map_err(|e| {
        CatalogError::Export(format!("{} への書き込みに失敗: {}", output.display(), e.error))
    })?;
    Ok(())
}

/// 書き出し済みのカタログを読み込む
pub fn load_catalog(input: &Path) -> Result<Vec<SpellRecord>> {
    let file = File::open(input)?;
    let reader = BufReader::new(file);
    let records = serde_json::from_reader(reader)?;
    Ok(records)
}
