// 型マッピングサービス
//
// 定義ファイルの宣言型をBigQueryネイティブ型名へ変換するサービス。
// マッピング表は固定で、実行時に変更されることはありません。

/// 宣言型からネイティブ型への変換表
static TYPE_MAP: &[(&str, &str)] = &[
    ("datetime", "DATETIME"),
    ("str", "STRING"),
    ("int", "INTEGER"),
    ("list", "RECORD"),
];

/// BigQueryの既知ネイティブ型名
///
/// 検証ゲートはこの集合に含まれない型を拒否します。
static NATIVE_TYPE_NAMES: &[&str] = &[
    "STRING",
    "BYTES",
    "INTEGER",
    "INT64",
    "FLOAT",
    "FLOAT64",
    "NUMERIC",
    "DECIMAL",
    "BIGNUMERIC",
    "BIGDECIMAL",
    "BOOLEAN",
    "BOOL",
    "GEOGRAPHY",
    "RECORD",
    "STRUCT",
    "TIMESTAMP",
    "DATE",
    "TIME",
    "DATETIME",
    "INTERVAL",
    "JSON",
];

/// 型マッピングサービス
///
/// 状態を持たない純粋な変換のみを行います。
#[derive(Debug, Clone)]
pub struct TypeMapperService {
    // 将来的な拡張のためのフィールドを予約
}

impl TypeMapperService {
    /// 新しいTypeMapperServiceを作成
    pub fn new() -> Self {
        Self {}
    }

    /// 宣言型をネイティブ型名に変換する
    ///
    /// 変換表に無い型はそのまま大文字化して通します。
    /// ネイティブ型名を直接書いた定義も同じ名前に解決されます。
    pub fn map(&self, declared: &str) -> String {
        for (from, to) in TYPE_MAP {
            if *from == declared {
                return to.to_string();
            }
        }

        declared.to_uppercase()
    }

    /// 既知のネイティブ型名かどうか
    pub fn is_known_native_type(&self, native: &str) -> bool {
        NATIVE_TYPE_NAMES.contains(&native)
    }
}

impl Default for TypeMapperService {
    fn default() -> Self {
        Self::new()
    }
}
