// エラー型定義
//
// アプリケーション全体で使用されるカスタムエラー型を提供します。
// thiserrorを使用して、DefinitionError, WarehouseError, IoError を定義します。

use thiserror::Error;

/// カラム定義エラー
///
/// カラム定義ファイルの解析・検証時に発生するエラーを表現します。
/// 最初の違反で即座に処理を打ち切ります（fail-fast）。
#[derive(Debug, Clone, Error)]
pub enum DefinitionError {
    /// Malformed definition line
    #[error("Malformed definition at line {line}: expected at least `name,type`, got '{content}'")]
    Parse {
        /// 行番号（1始まり）
        line: usize,
        /// 対象行の内容
        content: String,
    },

    /// Duplicate column name
    #[error("Duplicate column name: {name}")]
    DuplicateColumn {
        /// 重複したカラム名
        name: String,
    },

    /// Unknown declared type
    #[error("Invalid data type '{declared}' for column '{column}'")]
    InvalidType {
        /// カラム名
        column: String,
        /// 宣言された型
        declared: String,
    },

    /// Malformed RANGE constraint
    #[error("Invalid RANGE constraint on column '{column}': '{token}' (expected `RANGE <min> <max>` with integer bounds)")]
    InvalidRange {
        /// カラム名
        column: String,
        /// 対象の制約トークン
        token: String,
    },
}

impl DefinitionError {
    /// 行解析エラーかどうか
    pub fn is_parse(&self) -> bool {
        matches!(self, DefinitionError::Parse { .. })
    }

    /// カラム名重複エラーかどうか
    pub fn is_duplicate_column(&self) -> bool {
        matches!(self, DefinitionError::DuplicateColumn { .. })
    }

    /// 型不正エラーかどうか
    pub fn is_invalid_type(&self) -> bool {
        matches!(self, DefinitionError::InvalidType { .. })
    }

    /// RANGE制約不正エラーかどうか
    pub fn is_invalid_range(&self) -> bool {
        matches!(self, DefinitionError::InvalidRange { .. })
    }
}

/// ウェアハウスエラー
///
/// BigQueryとの通信時に発生するエラーを表現します。
/// 比較結果の不一致はエラーではなく判定として扱うため、ここには含まれません。
#[derive(Debug, Error)]
pub enum WarehouseError {
    /// Table schema fetch error
    #[error("Failed to fetch table schema for {table}: {cause}")]
    SchemaFetch {
        /// 対象テーブル（project.dataset.table）
        table: String,
        /// エラー原因
        cause: String,
    },

    /// Query execution error
    #[error("Query execution error: {message}")]
    Query {
        /// エラーメッセージ
        message: String,
        /// 失敗したSQL
        sql: Option<String>,
    },

    /// Authentication error
    #[error("Authentication error: {message}")]
    Auth {
        /// エラーメッセージ
        message: String,
    },
}

impl WarehouseError {
    /// スキーマ取得エラーかどうか
    pub fn is_schema_fetch(&self) -> bool {
        matches!(self, WarehouseError::SchemaFetch { .. })
    }

    /// クエリエラーかどうか
    pub fn is_query(&self) -> bool {
        matches!(self, WarehouseError::Query { .. })
    }

    /// 認証エラーかどうか
    pub fn is_auth(&self) -> bool {
        matches!(self, WarehouseError::Auth { .. })
    }
}

/// I/Oエラー
///
/// ファイル操作時に発生するエラーを表現します。
#[derive(Debug, Error)]
pub enum IoError {
    /// File not found
    #[error("File not found: {path}")]
    FileNotFound {
        /// ファイルパス
        path: String,
    },

    /// File read error
    #[error("Failed to read file: {path} (cause: {cause})")]
    FileRead {
        /// ファイルパス
        path: String,
        /// エラー原因
        cause: String,
    },

    /// File write error
    #[error("Failed to write file: {path} (cause: {cause})")]
    FileWrite {
        /// ファイルパス
        path: String,
        /// エラー原因
        cause: String,
    },

    /// Directory creation error
    #[error("Failed to create directory: {path} (cause: {cause})")]
    DirectoryCreate {
        /// ディレクトリパス
        path: String,
        /// エラー原因
        cause: String,
    },
}

impl IoError {
    /// ファイルが見つからないエラーかどうか
    pub fn is_file_not_found(&self) -> bool {
        matches!(self, IoError::FileNotFound { .. })
    }

    /// ファイル読み込みエラーかどうか
    pub fn is_file_read(&self) -> bool {
        matches!(self, IoError::FileRead { .. })
    }

    /// ファイル書き込みエラーかどうか
    pub fn is_file_write(&self) -> bool {
        matches!(self, IoError::FileWrite { .. })
    }

    /// ディレクトリ作成エラーかどうか
    pub fn is_directory_create(&self) -> bool {
        matches!(self, IoError::DirectoryCreate { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_error_variants() {
        let parse_error = DefinitionError::Parse {
            line: 3,
            content: "id".to_string(),
        };
        assert!(parse_error.is_parse());
        assert!(!parse_error.is_duplicate_column());

        let duplicate_error = DefinitionError::DuplicateColumn {
            name: "id".to_string(),
        };
        assert!(duplicate_error.is_duplicate_column());

        let type_error = DefinitionError::InvalidType {
            column: "payload".to_string(),
            declared: "blob".to_string(),
        };
        assert!(type_error.is_invalid_type());

        let range_error = DefinitionError::InvalidRange {
            column: "age".to_string(),
            token: "RANGE x y".to_string(),
        };
        assert!(range_error.is_invalid_range());
    }

    #[test]
    fn test_definition_error_messages() {
        let parse_error = DefinitionError::Parse {
            line: 3,
            content: "id".to_string(),
        };
        assert_eq!(
            parse_error.to_string(),
            "Malformed definition at line 3: expected at least `name,type`, got 'id'"
        );

        let duplicate_error = DefinitionError::DuplicateColumn {
            name: "created_at".to_string(),
        };
        assert_eq!(
            duplicate_error.to_string(),
            "Duplicate column name: created_at"
        );
    }

    #[test]
    fn test_warehouse_error_variants() {
        let fetch_error = WarehouseError::SchemaFetch {
            table: "p.d.t".to_string(),
            cause: "HTTP 404".to_string(),
        };
        assert!(fetch_error.is_schema_fetch());
        assert!(fetch_error.to_string().contains("p.d.t"));

        let query_error = WarehouseError::Query {
            message: "Query failed".to_string(),
            sql: Some("SELECT 1".to_string()),
        };
        assert!(query_error.is_query());

        let auth_error = WarehouseError::Auth {
            message: "Token missing".to_string(),
        };
        assert!(auth_error.is_auth());
    }

    #[test]
    fn test_io_error_variants() {
        let not_found = IoError::FileNotFound {
            path: "/path/to/file".to_string(),
        };
        assert!(not_found.is_file_not_found());

        let read_error = IoError::FileRead {
            path: "/path/to/file".to_string(),
            cause: "Permission denied".to_string(),
        };
        assert!(read_error.is_file_read());

        let write_error = IoError::FileWrite {
            path: "/path/to/file".to_string(),
            cause: "Disk full".to_string(),
        };
        assert!(write_error.is_file_write());

        let dir_error = IoError::DirectoryCreate {
            path: "/path/to/dir".to_string(),
            cause: "Permission denied".to_string(),
        };
        assert!(dir_error.is_directory_create());
    }
}
