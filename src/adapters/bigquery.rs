// BigQuery REST APIクライアント
//
// tables.get によるスキーマ取得と jobs.query による同期クエリ実行を提供します。
// 認証はBearerトークンのみを扱い、トークンの取得・更新は行いません。

use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::adapters::warehouse::{QueryRows, Warehouse};
use crate::core::config::{Config, TableRef};
use crate::core::error::WarehouseError;
use crate::core::live_schema::{ColumnMode, LiveColumn};

/// 既定のBigQuery REST APIエンドポイント
pub const DEFAULT_ENDPOINT: &str = "https://bigquery.googleapis.com/bigquery/v2";

/// BigQueryクライアント
///
/// 1つのGCPプロジェクトに対するクエリ実行と、
/// 任意のテーブルのスキーマ取得を行います。
pub struct BigQueryClient {
    http: reqwest::Client,
    endpoint: String,
    project: String,
    token: String,
    location: Option<String>,
}

impl std::fmt::Debug for BigQueryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // トークンは出力しない
        f.debug_struct("BigQueryClient")
            .field("endpoint", &self.endpoint)
            .field("project", &self.project)
            .field("location", &self.location)
            .finish()
    }
}

impl BigQueryClient {
    /// 新しいクライアントを作成
    pub fn new(project: String, token: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            project,
            token,
            location: None,
        }
    }

    /// エンドポイントを上書き（テストやプロキシ経由の接続用）
    pub fn with_endpoint(mut self, endpoint: String) -> Self {
        self.endpoint = endpoint.trim_end_matches('/').to_string();
        self
    }

    /// データセットのロケーションを指定
    pub fn with_location(mut self, location: String) -> Self {
        self.location = Some(location);
        self
    }

    /// 設定からクライアントを構築
    ///
    /// アクセストークンは設定で指定された環境変数から読み取ります。
    ///
    /// # Errors
    /// 環境変数が未設定または空の場合は `WarehouseError::Auth`
    pub fn from_config(config: &Config) -> Result<Self, WarehouseError> {
        let token = std::env::var(&config.token_env).unwrap_or_default();
        if token.is_empty() {
            return Err(WarehouseError::Auth {
                message: format!(
                    "access token not found: set the {} environment variable",
                    config.token_env
                ),
            });
        }

        let mut client = Self::new(config.project.clone(), token);
        if let Some(location) = &config.location {
            client = client.with_location(location.clone());
        }
        if let Some(endpoint) = &config.endpoint {
            client = client.with_endpoint(endpoint.clone());
        }

        Ok(client)
    }

    /// tables.get のURLを組み立てる
    fn table_url(&self, table: &TableRef) -> String {
        format!(
            "{}/projects/{}/datasets/{}/tables/{}",
            self.endpoint, table.project, table.dataset, table.table
        )
    }

    /// jobs.query のURLを組み立てる
    fn query_url(&self) -> String {
        format!("{}/projects/{}/queries", self.endpoint, self.project)
    }
}

// --- REST APIリソース型 ---

#[derive(Debug, Deserialize)]
struct TableResource {
    schema: Option<TableSchemaResource>,
}

#[derive(Debug, Deserialize)]
struct TableSchemaResource {
    #[serde(default)]
    fields: Vec<TableFieldResource>,
}

#[derive(Debug, Deserialize)]
struct TableFieldResource {
    name: String,
    #[serde(rename = "type")]
    field_type: String,
    /// modeが省略された場合はNULLABLE扱い
    mode: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryRequestBody<'a> {
    query: &'a str,
    use_legacy_sql: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QueryResponseBody {
    job_complete: Option<bool>,
    /// REST APIは行数を文字列で返す
    total_rows: Option<String>,
    #[serde(default)]
    rows: Vec<RowResource>,
    #[serde(default)]
    errors: Vec<QueryErrorProto>,
}

#[derive(Debug, Deserialize)]
struct RowResource {
    #[serde(default)]
    f: Vec<CellResource>,
}

#[derive(Debug, Deserialize)]
struct CellResource {
    #[serde(default)]
    v: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct QueryErrorProto {
    #[serde(default)]
    message: String,
}

/// セル値を文字列に変換
///
/// BigQueryは通常すべてのセルを文字列で返しますが、念のため他のJSON型も受け付けます。
fn cell_value_to_string(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

/// エラー本文をログ向けに切り詰める
fn truncate_body(body: &str) -> String {
    body.chars().take(200).collect()
}

/// tables.get のレスポンスをライブカラムの一覧へ変換
///
/// modeが省略されたフィールドはNULLABLE列として扱います。
///
/// # Arguments
/// * `table` - 取得対象のテーブル参照（エラーメッセージに使用）
/// * `resource` - デシリアライズ済みのテーブルリソース
///
/// # Errors
/// 未知のmode値が含まれる場合は `WarehouseError::SchemaFetch`
fn columns_from_resource(
    table: &TableRef,
    resource: TableResource,
) -> Result<Vec<LiveColumn>, WarehouseError> {
    let fields = resource
        .schema
        .map(|schema| schema.fields)
        .unwrap_or_default();

    let mut columns = Vec::with_capacity(fields.len());
    for field in fields {
        let mode_token = field.mode.unwrap_or_else(|| "NULLABLE".to_string());
        let mode =
            ColumnMode::from_str(&mode_token).map_err(|cause| WarehouseError::SchemaFetch {
                table: table.to_string(),
                cause,
            })?;
        columns.push(LiveColumn::new(field.name, field.field_type, mode));
    }

    Ok(columns)
}

/// jobs.query のレスポンスをクエリ結果へ変換
///
/// # Arguments
/// * `sql` - 実行したクエリ（エラーに添付）
/// * `parsed` - デシリアライズ済みのレスポンスボディ
///
/// # Errors
/// レスポンスがエラーを含む、ジョブがAPIウィンドウ内で完了していない、
/// またはtotalRowsが数値として解釈できない場合は `WarehouseError::Query`
fn rows_from_response(sql: &str, parsed: QueryResponseBody) -> Result<QueryRows, WarehouseError> {
    if let Some(error) = parsed.errors.first() {
        return Err(WarehouseError::Query {
            message: error.message.clone(),
            sql: Some(sql.to_string()),
        });
    }
    if parsed.job_complete == Some(false) {
        return Err(WarehouseError::Query {
            message: "query did not complete within the API response window".to_string(),
            sql: Some(sql.to_string()),
        });
    }

    let rows: Vec<Vec<Option<String>>> = parsed
        .rows
        .into_iter()
        .map(|row| {
            row.f
                .into_iter()
                .map(|cell| cell_value_to_string(cell.v))
                .collect()
        })
        .collect();

    let total_rows = match parsed.total_rows {
        Some(raw) => raw.parse::<u64>().map_err(|_| WarehouseError::Query {
            message: format!("invalid totalRows value: {}", raw),
            sql: Some(sql.to_string()),
        })?,
        None => rows.len() as u64,
    };

    Ok(QueryRows::new(total_rows, rows))
}

#[async_trait]
impl Warehouse for BigQueryClient {
    /// テーブルスキーマを取得
    ///
    /// # Errors
    /// テーブルが存在しない、またはAPIがエラーを返した場合は
    /// `WarehouseError::SchemaFetch`。認証拒否は `WarehouseError::Auth`。
    async fn fetch_table_schema(
        &self,
        table: &TableRef,
    ) -> Result<Vec<LiveColumn>, WarehouseError> {
        let url = self.table_url(table);
        debug!(table = %table, "fetching table schema");

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| WarehouseError::SchemaFetch {
                table: table.to_string(),
                cause: e.to_string(),
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(WarehouseError::Auth {
                message: format!("schema fetch rejected with HTTP {}", status.as_u16()),
            });
        }
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(WarehouseError::SchemaFetch {
                table: table.to_string(),
                cause: "table not found".to_string(),
            });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WarehouseError::SchemaFetch {
                table: table.to_string(),
                cause: format!("HTTP {}: {}", status.as_u16(), truncate_body(&body)),
            });
        }

        let resource: TableResource =
            response
                .json()
                .await
                .map_err(|e| WarehouseError::SchemaFetch {
                    table: table.to_string(),
                    cause: format!("invalid response body: {}", e),
                })?;

        let columns = columns_from_resource(table, resource)?;

        debug!(table = %table, columns = columns.len(), "table schema fetched");
        Ok(columns)
    }

    /// 同期クエリを実行
    ///
    /// # Errors
    /// API呼び出しの失敗、クエリエラー、APIウィンドウ内で完了しなかった
    /// ジョブはすべて `WarehouseError::Query`。認証拒否は `WarehouseError::Auth`。
    async fn run_query(&self, sql: &str) -> Result<QueryRows, WarehouseError> {
        let url = self.query_url();
        let body = QueryRequestBody {
            query: sql,
            use_legacy_sql: false,
            location: self.location.as_deref(),
        };
        debug!(sql, "running warehouse query");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
            .map_err(|e| WarehouseError::Query {
                message: e.to_string(),
                sql: Some(sql.to_string()),
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(WarehouseError::Auth {
                message: format!("query rejected with HTTP {}", status.as_u16()),
            });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WarehouseError::Query {
                message: format!("HTTP {}: {}", status.as_u16(), truncate_body(&body)),
                sql: Some(sql.to_string()),
            });
        }

        let parsed: QueryResponseBody =
            response.json().await.map_err(|e| WarehouseError::Query {
                message: format!("invalid response body: {}", e),
                sql: Some(sql.to_string()),
            })?;

        rows_from_response(sql, parsed)
    }
}
