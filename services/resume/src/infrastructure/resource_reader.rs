// ローカルリソース読み込み
//
// 作業ディレクトリ相対のテキストファイルを呼び出しごとに読み込む。
// キャッシュはしない。

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// リソース読み込みエラー
#[derive(Debug, Error)]
#[error("failed to read resource '{path}': {source}")]
pub struct ResourceReadError {
    /// 読み込もうとしたパス
    pub path: String,
    #[source]
    pub source: io::Error,
}

/// リソース読み込みトレイト
///
/// テスト時にファイルシステムを差し替えるための抽象化。
pub trait ResourceReader {
    /// リソース全体をUTF-8文字列として読み込む
    fn read_to_string(&self) -> Result<String, ResourceReadError>;
}

/// ファイルシステム上のリソース
#[derive(Debug, Clone)]
pub struct FileResourceReader {
    path: PathBuf,
}

impl FileResourceReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ResourceReader for FileResourceReader {
    fn read_to_string(&self) -> Result<String, ResourceReadError> {
        std::fs::read_to_string(&self.path).map_err(|source| ResourceReadError {
            path: self.path.display().to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_existing_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "line1\nline2\n").unwrap();

        let reader = FileResourceReader::new(file.path());

        assert_eq!(reader.read_to_string().unwrap(), "line1\nline2\n");
    }

    /// 呼び出しごとに読み直す
    #[test]
    fn test_read_reflects_file_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test");
        std::fs::write(&path, "first").unwrap();

        let reader = FileResourceReader::new(&path);
        assert_eq!(reader.read_to_string().unwrap(), "first");

        std::fs::write(&path, "second").unwrap();
        assert_eq!(reader.read_to_string().unwrap(), "second");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing");

        let err = FileResourceReader::new(&path).read_to_string().unwrap_err();

        assert_eq!(err.source.kind(), io::ErrorKind::NotFound);
        assert!(err.to_string().contains("failed to read resource"));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_read_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let err = FileResourceReader::new(&path).read_to_string().unwrap_err();

        assert_eq!(err.source.kind(), io::ErrorKind::InvalidData);
    }
}
