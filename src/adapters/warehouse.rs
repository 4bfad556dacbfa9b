// ウェアハウスインターフェース
//
// スキーマ取得とクエリ実行のための抽象化レイヤー。
// BigQuery REST APIの実装は bigquery モジュールが提供します。

use async_trait::async_trait;

use crate::core::config::TableRef;
use crate::core::error::WarehouseError;
use crate::core::live_schema::LiveColumn;

/// クエリ実行結果
///
/// クエリが返した行を文字列セルとして保持します。
/// BigQueryのREST APIはスカラー値を文字列で返すため、型付けは呼び出し側で行います。
#[derive(Debug, Clone, Default)]
pub struct QueryRows {
    /// 返された行数
    pub total_rows: u64,
    /// 行データ（セルはNULLの場合None）
    pub rows: Vec<Vec<Option<String>>>,
}

impl QueryRows {
    /// 新しいクエリ結果を作成
    pub fn new(total_rows: u64, rows: Vec<Vec<Option<String>>>) -> Self {
        Self { total_rows, rows }
    }

    /// 空のクエリ結果を作成
    pub fn empty() -> Self {
        Self::default()
    }

    /// 行が1つも無いかどうか
    pub fn is_empty(&self) -> bool {
        self.total_rows == 0
    }

    /// 指定位置のセルを取得
    pub fn scalar(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col)?.as_deref()
    }

    /// 指定位置のセルを真偽値として取得
    ///
    /// `true` / `false` 以外の値はNoneになります。
    pub fn scalar_bool(&self, row: usize, col: usize) -> Option<bool> {
        match self.scalar(row, col)? {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }
}

/// ウェアハウスアクセスインターフェース
///
/// スキーマ検証が必要とする2つの操作を抽象化します。
/// テストではモック実装を注入します。
#[async_trait]
pub trait Warehouse: Send + Sync {
    /// テーブルスキーマを取得
    async fn fetch_table_schema(&self, table: &TableRef)
        -> Result<Vec<LiveColumn>, WarehouseError>;

    /// クエリを実行して結果行を取得
    async fn run_query(&self, sql: &str) -> Result<QueryRows, WarehouseError>;
}
