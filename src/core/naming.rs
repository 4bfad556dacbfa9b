// 命名定義
//
// アプリケーション名と関連パスの単一ソースを提供します。

/// 現行アプリケーション名
pub const APP_NAME: &str = "bqcheck";

/// バイナリ名
pub const BINARY_NAME: &str = "bqcheck";

/// 既定の設定ファイル名
pub const CONFIG_FILE: &str = ".bqcheck.yaml";

/// 既定のカラム定義ファイル
pub const DEFAULT_DEFINITIONS_FILE: &str = "schema/columns.def";

/// アクセストークンを保持する既定の環境変数名
pub const DEFAULT_TOKEN_ENV: &str = "BIGQUERY_ACCESS_TOKEN";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naming_constants() {
        assert_eq!(APP_NAME, "bqcheck");
        assert_eq!(BINARY_NAME, "bqcheck");
        assert_eq!(CONFIG_FILE, ".bqcheck.yaml");
        assert_eq!(DEFAULT_DEFINITIONS_FILE, "schema/columns.def");
        assert_eq!(DEFAULT_TOKEN_ENV, "BIGQUERY_ACCESS_TOKEN");
    }
}
